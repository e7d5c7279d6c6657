//! Validation of credential input
//!
//! A [`CredentialSchema`] is an ordered list of independent field rules plus a
//! list of cross-field rules. Validation runs every rule and collects the
//! failures per field; it never stops at the first error.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::core::credentials::{CredentialInput, Field};

/// Minimum password length (inclusive)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (inclusive)
pub const MAX_PASSWORD_LENGTH: usize = 32;

/// Email grammar without the lookahead parts, which are checked separately
/// by [`EmailGrammar::is_match`].
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

/// A single validation failure, rendered to the user through `Display`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is not a syntactically valid email address
    InvalidEmail,
    /// Value length is outside `min..=max`
    Length { min: usize, max: usize },
    /// Password is missing one of the required character classes
    WeakPassword,
    /// Password and confirmation differ
    Mismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail => write!(f, "Invalid email"),
            ValidationError::Length { min, max } => {
                write!(f, "Password must be {}-{} characters", min, max)
            }
            ValidationError::WeakPassword => {
                write!(f, "Password does not meet strength requirements")
            }
            ValidationError::Mismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors raised while building a schema.
///
/// These point at a programming or integration defect, never at bad user input.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("email grammar failed to compile: {0}")]
    EmailPattern(#[from] regex::Error),
}

/// Outcome of validating a [`CredentialInput`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<Field, Vec<ValidationError>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: Field, error: ValidationError) {
        self.errors.entry(field).or_default().push(error);
    }

    pub fn errors_for(&self, field: Field) -> &[ValidationError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_errors(&self, field: Field) -> bool {
        !self.errors_for(field).is_empty()
    }

    /// Messages for one field, in rule order
    pub fn messages_for(&self, field: Field) -> Vec<String> {
        self.errors_for(field).iter().map(ToString::to_string).collect()
    }

    pub fn first_message(&self, field: Field) -> Option<String> {
        self.errors_for(field).first().map(ToString::to_string)
    }

    /// Fields that have at least one error
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Every message keyed by field
    pub fn messages(&self) -> BTreeMap<Field, Vec<String>> {
        self.errors
            .iter()
            .map(|(field, errors)| (*field, errors.iter().map(ToString::to_string).collect()))
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

/// Password rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordPolicy {
    /// Length bounds only
    Simple,
    /// Length bounds plus the character class pattern
    #[default]
    Strict,
}

impl fmt::Display for PasswordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordPolicy::Simple => write!(f, "simple"),
            PasswordPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// One requirement of the strict password pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Digit,
    Uppercase,
    Lowercase,
    Symbol,
    Length,
}

impl Requirement {
    pub const ALL: [Requirement; 5] = [
        Requirement::Digit,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Symbol,
        Requirement::Length,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Requirement::Digit => "1 number (0-9)",
            Requirement::Uppercase => "1 uppercase letter",
            Requirement::Lowercase => "1 lowercase letter",
            Requirement::Symbol => "1 non-alphanumeric character",
            Requirement::Length => "8-32 characters",
        }
    }
}

/// Character class scan of a password.
///
/// Each class is an independent presence check over the whole string. The
/// span check requires the full string to be 8-32 characters with no line
/// terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrengthReport {
    pub digit: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub symbol: bool,
    pub fits_span: bool,
}

impl StrengthReport {
    pub fn scan(password: &str) -> Self {
        let length = password.chars().count();
        Self {
            digit: password.chars().any(|c| c.is_ascii_digit()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
            fits_span: (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length)
                && !password.chars().any(is_line_terminator),
        }
    }

    pub fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Digit => self.digit,
            Requirement::Uppercase => self.uppercase,
            Requirement::Lowercase => self.lowercase,
            Requirement::Symbol => self.symbol,
            Requirement::Length => self.fits_span,
        }
    }

    pub fn is_strong(&self) -> bool {
        Requirement::ALL.iter().all(|r| self.is_met(*r))
    }

    /// Every requirement with whether it is met, in display order
    pub fn requirements(&self) -> Vec<(Requirement, bool)> {
        Requirement::ALL
            .iter()
            .map(|r| (*r, self.is_met(*r)))
            .collect()
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Compiled email grammar
#[derive(Clone)]
pub struct EmailGrammar {
    pattern: Regex,
}

impl EmailGrammar {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            pattern: Regex::new(EMAIL_PATTERN)?,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        !value.starts_with('.') && !value.contains("..") && self.pattern.is_match(value)
    }
}

impl fmt::Debug for EmailGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailGrammar").finish_non_exhaustive()
    }
}

/// Predicate over a single field value
#[derive(Debug, Clone)]
pub enum FieldRule {
    Email(EmailGrammar),
    Length { min: usize, max: usize },
    Strength,
}

impl FieldRule {
    pub fn check(&self, value: &str) -> Option<ValidationError> {
        match self {
            FieldRule::Email(grammar) => {
                (!grammar.is_match(value)).then_some(ValidationError::InvalidEmail)
            }
            FieldRule::Length { min, max } => {
                let length = value.chars().count();
                (length < *min || length > *max).then_some(ValidationError::Length {
                    min: *min,
                    max: *max,
                })
            }
            FieldRule::Strength => {
                (!StrengthReport::scan(value).is_strong()).then_some(ValidationError::WeakPassword)
            }
        }
    }
}

/// Predicate over the relationship between fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// `other` must equal `field` byte for byte; the error is reported on `other`
    Matches { field: Field, other: Field },
}

impl CrossFieldRule {
    pub fn check(&self, input: &CredentialInput) -> Option<(Field, ValidationError)> {
        match self {
            CrossFieldRule::Matches { field, other } => (input.get(*field) != input.get(*other))
                .then_some((*other, ValidationError::Mismatch)),
        }
    }
}

/// Immutable rule set for the credential form
#[derive(Debug, Clone)]
pub struct CredentialSchema {
    policy: PasswordPolicy,
    field_rules: Vec<(Field, FieldRule)>,
    cross_rules: Vec<CrossFieldRule>,
}

impl CredentialSchema {
    /// Build the rule set for a password policy
    pub fn new(policy: PasswordPolicy) -> Result<Self, SchemaError> {
        let length = FieldRule::Length {
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        };

        let mut field_rules = vec![
            (Field::Email, FieldRule::Email(EmailGrammar::new()?)),
            (Field::Password, length.clone()),
        ];
        if policy == PasswordPolicy::Strict {
            field_rules.push((Field::Password, FieldRule::Strength));
        }
        field_rules.push((Field::PasswordConfirmation, length));

        Ok(Self {
            policy,
            field_rules,
            cross_rules: vec![CrossFieldRule::Matches {
                field: Field::Password,
                other: Field::PasswordConfirmation,
            }],
        })
    }

    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }

    pub fn field_rules(&self) -> &[(Field, FieldRule)] {
        &self.field_rules
    }

    pub fn cross_rules(&self) -> &[CrossFieldRule] {
        &self.cross_rules
    }

    /// Run every field rule, then every cross-field rule
    pub fn validate(&self, input: &CredentialInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        for (field, rule) in &self.field_rules {
            if let Some(error) = rule.check(input.get(*field)) {
                result.add_error(*field, error);
            }
        }

        // Runs even when the fields failed their own rules
        for rule in &self.cross_rules {
            if let Some((field, error)) = rule.check(input) {
                result.add_error(field, error);
            }
        }

        tracing::debug!(
            policy = %self.policy,
            errors = result.error_count(),
            "validated credential input"
        );

        result
    }
}
