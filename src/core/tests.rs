#[cfg(test)]
mod tests {
    use crate::core::{
        CredentialInput, CredentialSchema, Field, PasswordPolicy, ValidationError,
        ValidationResult,
    };

    fn strict() -> CredentialSchema {
        CredentialSchema::new(PasswordPolicy::Strict).unwrap()
    }

    fn simple() -> CredentialSchema {
        CredentialSchema::new(PasswordPolicy::Simple).unwrap()
    }

    fn both() -> [CredentialSchema; 2] {
        [simple(), strict()]
    }

    #[test]
    fn test_scenario_valid_strict_input() {
        let input = CredentialInput::new("a@b.com", "Abcdef1!", "Abcdef1!");
        let result = strict().validate(&input);

        assert!(result.is_valid());
        assert_eq!(result, ValidationResult::new());
    }

    #[test]
    fn test_scenario_bad_email_and_short_password() {
        let input = CredentialInput::new("not-an-email", "short", "short");

        for schema in both() {
            let result = schema.validate(&input);

            assert_eq!(result.errors_for(Field::Email), &[ValidationError::InvalidEmail]);
            assert!(
                result
                    .errors_for(Field::Password)
                    .contains(&ValidationError::Length { min: 8, max: 32 })
            );
            assert!(
                !result
                    .errors_for(Field::PasswordConfirmation)
                    .contains(&ValidationError::Mismatch)
            );
        }

        let result = simple().validate(&input);
        assert_eq!(
            result.errors_for(Field::Password),
            &[ValidationError::Length { min: 8, max: 32 }]
        );
    }

    #[test]
    fn test_scenario_confirmation_mismatch_only() {
        let input = CredentialInput::new("a@b.com", "Abcdef1!", "Abcdef2!");
        let result = strict().validate(&input);

        assert_eq!(result.fields().collect::<Vec<_>>(), vec![Field::PasswordConfirmation]);
        assert_eq!(
            result.messages_for(Field::PasswordConfirmation),
            vec!["Passwords do not match".to_string()]
        );
    }

    #[test]
    fn test_scenario_strict_pattern_failure() {
        let input = CredentialInput::new("a@b.com", "alllowercase1", "alllowercase1");
        let result = strict().validate(&input);

        assert_eq!(result.fields().collect::<Vec<_>>(), vec![Field::Password]);
        assert_eq!(
            result.errors_for(Field::Password),
            &[ValidationError::WeakPassword]
        );
    }

    #[test]
    fn test_email_without_at_or_domain_always_fails() {
        for email in ["", "plain", "user@", "user@domain", "user.example.com"] {
            let input = CredentialInput::new(email, "Abcdef1!", "Abcdef1!");
            for schema in both() {
                assert!(
                    schema.validate(&input).has_errors(Field::Email),
                    "expected email error for {:?}",
                    email
                );
            }
        }
    }

    #[test]
    fn test_password_length_outside_bounds_always_fails() {
        let too_short = "Ab1!xyz";
        let too_long = format!("Ab1!{}", "x".repeat(29));

        for password in [too_short.to_string(), too_long] {
            let input = CredentialInput::new("a@b.com", password.clone(), password);
            for schema in both() {
                assert!(
                    schema
                        .validate(&input)
                        .errors_for(Field::Password)
                        .contains(&ValidationError::Length { min: 8, max: 32 })
                );
            }
        }
    }

    #[test]
    fn test_each_missing_class_fails_strict() {
        for password in ["abcdefg1!", "ABCDEFG1!", "Abcdefgh!", "Abcdefgh1"] {
            let input = CredentialInput::new("a@b.com", password, password);
            let result = strict().validate(&input);

            assert_eq!(
                result.errors_for(Field::Password),
                &[ValidationError::WeakPassword],
                "password {:?}",
                password
            );
            assert!(simple().validate(&input).is_valid());
        }
    }

    #[test]
    fn test_mismatch_always_reported() {
        let cases = [
            ("a@b.com", "Abcdef1!", "Abcdef2!"),
            ("bad", "x", "yy"),
            ("a@b.com", "Abcdef1!", ""),
            ("a@b.com", "", "Abcdef1!"),
        ];

        for (email, password, confirmation) in cases {
            let input = CredentialInput::new(email, password, confirmation);
            for schema in both() {
                assert!(
                    schema
                        .validate(&input)
                        .errors_for(Field::PasswordConfirmation)
                        .contains(&ValidationError::Mismatch)
                );
            }
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let inputs = [
            CredentialInput::new("a@b.com", "Abcdef1!", "Abcdef1!"),
            CredentialInput::new("not-an-email", "short", "short"),
            CredentialInput::new("a@b.com", "alllowercase1", "Abcdef2!"),
        ];

        for input in &inputs {
            for schema in both() {
                assert_eq!(schema.validate(input), schema.validate(input));
            }
        }
    }
}
