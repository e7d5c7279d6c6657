//! Credential form state
//!
//! Holds the current field values and the errors on display, and sequences
//! a submission: validate, raise the loading flag, hand the input to a
//! [`CredentialSink`], clear the loading flag.

use crate::core::credentials::{CredentialInput, Field};
use crate::core::profile::{FormEvent, FormProfile, ValidationTrigger};
use crate::core::submit::{CredentialSink, SubmitError};
use crate::core::validation::{CredentialSchema, SchemaError, ValidationResult};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was handed to the sink
    Invalid(ValidationResult),
    /// The sink accepted the input
    Accepted,
    /// The sink reported a failure
    Failed(SubmitError),
    /// A submission was already in flight; nothing was handed to the sink
    Ignored,
}

#[derive(Debug, Clone)]
pub struct CredentialForm {
    schema: CredentialSchema,
    trigger: ValidationTrigger,
    input: CredentialInput,
    errors: ValidationResult,
    submitted: bool,
    loading: bool,
}

impl CredentialForm {
    pub fn new(schema: CredentialSchema, trigger: ValidationTrigger) -> Self {
        Self {
            schema,
            trigger,
            input: CredentialInput::default(),
            errors: ValidationResult::new(),
            submitted: false,
            loading: false,
        }
    }

    pub fn for_profile(profile: FormProfile) -> Result<Self, SchemaError> {
        Ok(Self::new(profile.schema()?, profile.trigger()))
    }

    pub fn input(&self) -> &CredentialInput {
        &self.input
    }

    /// Errors currently on display
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn trigger(&self) -> ValidationTrigger {
        self.trigger
    }

    /// Whether the "check your input" summary should be shown
    pub fn show_summary(&self) -> bool {
        self.submitted && !self.errors.is_valid()
    }

    /// Store a new field value, re-validating when the trigger asks for it.
    ///
    /// Before the first submit only the edited field and fields already
    /// showing errors are refreshed, so untouched fields stay clean.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);

        if !self.trigger.should_validate(FormEvent::Change, self.submitted) {
            return;
        }

        let fresh = self.schema.validate(&self.input);
        let mut shown = ValidationResult::new();
        for candidate in Field::ALL {
            if self.submitted || candidate == field || self.errors.has_errors(candidate) {
                for error in fresh.errors_for(candidate) {
                    shown.add_error(candidate, error.clone());
                }
            }
        }
        self.errors = shown;
    }

    /// Validate the whole form and display every error
    pub fn validate(&mut self) -> &ValidationResult {
        self.errors = self.schema.validate(&self.input);
        &self.errors
    }

    /// First half of a submit: validate, and on success raise the loading
    /// flag and return the input to hand to a sink.
    ///
    /// Returns `Err` with the validation result when the input is invalid.
    /// A submit while already loading is ignored.
    pub fn begin_submit(&mut self) -> Result<Option<CredentialInput>, ValidationResult> {
        if self.loading {
            return Ok(None);
        }

        self.submitted = true;
        let errors = self.validate().clone();
        if !errors.is_valid() {
            tracing::debug!(fields = errors.fields().count(), "submit blocked by validation");
            return Err(errors);
        }

        self.loading = true;
        Ok(Some(self.input.clone()))
    }

    /// Second half of a submit: clear the loading flag and report the outcome
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.loading = false;
        match result {
            Ok(()) => SubmitOutcome::Accepted,
            Err(error) => {
                tracing::warn!(%error, "credential submission failed");
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Validate and, when valid, hand the input to `sink`
    pub fn submit(&mut self, sink: &dyn CredentialSink) -> SubmitOutcome {
        match self.begin_submit() {
            Err(errors) => SubmitOutcome::Invalid(errors),
            Ok(None) => SubmitOutcome::Ignored,
            Ok(Some(input)) => {
                let result = sink.submit(&input);
                self.finish_submit(result)
            }
        }
    }

    /// Restore the default (empty) state
    pub fn reset(&mut self) {
        self.input = CredentialInput::default();
        self.errors = ValidationResult::new();
        self.submitted = false;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::validation::ValidationError;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<CredentialInput>>,
        fail_with: Option<SubmitError>,
    }

    impl CredentialSink for RecordingSink {
        fn submit(&self, input: &CredentialInput) -> Result<(), SubmitError> {
            self.received.borrow_mut().push(input.clone());
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    fn fill(form: &mut CredentialForm, email: &str, password: &str, confirmation: &str) {
        form.set_field(Field::Email, email);
        form.set_field(Field::Password, password);
        form.set_field(Field::PasswordConfirmation, confirmation);
    }

    #[test]
    fn test_on_submit_form_stays_clean_while_typing() {
        let mut form = CredentialForm::for_profile(FormProfile::Strict).unwrap();
        fill(&mut form, "bad", "x", "y");

        assert!(form.errors().is_valid());
        assert!(!form.show_summary());
    }

    #[test]
    fn test_invalid_submit_does_not_reach_sink() {
        let mut form = CredentialForm::for_profile(FormProfile::Strict).unwrap();
        fill(&mut form, "bad", "x", "y");
        let sink = RecordingSink::default();

        let outcome = form.submit(&sink);

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(sink.received.borrow().is_empty());
        assert!(form.is_submitted());
        assert!(!form.is_loading());
        assert!(form.show_summary());
        assert!(form.errors().has_errors(Field::Email));
    }

    #[test]
    fn test_valid_submit_hands_input_to_sink() {
        let mut form = CredentialForm::for_profile(FormProfile::Strict).unwrap();
        fill(&mut form, "a@b.com", "Abcdef1!", "Abcdef1!");
        let sink = RecordingSink::default();

        assert_eq!(form.submit(&sink), SubmitOutcome::Accepted);
        assert_eq!(
            sink.received.borrow().as_slice(),
            &[CredentialInput::new("a@b.com", "Abcdef1!", "Abcdef1!")]
        );
        assert!(!form.is_loading());
        assert!(!form.show_summary());
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut form = CredentialForm::for_profile(FormProfile::Simple).unwrap();
        fill(&mut form, "a@b.com", "password", "password");
        let sink = RecordingSink {
            fail_with: Some(SubmitError::Unavailable("offline".to_string())),
            ..Default::default()
        };

        assert_eq!(
            form.submit(&sink),
            SubmitOutcome::Failed(SubmitError::Unavailable("offline".to_string()))
        );
        assert!(!form.is_loading());
    }

    #[test]
    fn test_loading_flag_spans_submission() {
        let mut form = CredentialForm::for_profile(FormProfile::Simple).unwrap();
        fill(&mut form, "a@b.com", "password", "password");

        let input = form.begin_submit().unwrap();
        assert!(input.is_some());
        assert!(form.is_loading());

        // A second submit while loading is ignored
        assert_eq!(form.begin_submit(), Ok(None));

        assert_eq!(form.finish_submit(Ok(())), SubmitOutcome::Accepted);
        assert!(!form.is_loading());
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut form = CredentialForm::for_profile(FormProfile::Simple).unwrap();
        fill(&mut form, "a@b.com", "password", "password");
        let sink = RecordingSink::default();

        assert!(form.begin_submit().unwrap().is_some());
        assert_eq!(form.submit(&sink), SubmitOutcome::Ignored);
        assert!(sink.received.borrow().is_empty());
        assert!(form.is_loading());
    }

    #[test]
    fn test_errors_clear_on_change_after_submit() {
        let mut form = CredentialForm::for_profile(FormProfile::Strict).unwrap();
        fill(&mut form, "bad", "Abcdef1!", "Abcdef1!");
        form.submit(&RecordingSink::default());
        assert!(form.errors().has_errors(Field::Email));

        form.set_field(Field::Email, "a@b.com");
        assert!(form.errors().is_valid());
        assert!(!form.show_summary());
    }

    #[test]
    fn test_live_form_validates_only_edited_fields() {
        let mut form = CredentialForm::for_profile(FormProfile::Live).unwrap();

        form.set_field(Field::Email, "bad");
        assert_eq!(
            form.errors().errors_for(Field::Email),
            &[ValidationError::InvalidEmail]
        );
        assert!(!form.errors().has_errors(Field::Password));
        assert!(!form.errors().has_errors(Field::PasswordConfirmation));

        form.set_field(Field::Password, "Abcdef1!");
        assert!(!form.errors().has_errors(Field::Password));
        // Email error is still refreshed and stays
        assert!(form.errors().has_errors(Field::Email));

        form.set_field(Field::PasswordConfirmation, "Abcdef2!");
        assert_eq!(
            form.errors().errors_for(Field::PasswordConfirmation),
            &[ValidationError::Mismatch]
        );

        form.set_field(Field::Email, "a@b.com");
        assert!(!form.errors().has_errors(Field::Email));
    }

    #[test]
    fn test_reset() {
        let mut form = CredentialForm::for_profile(FormProfile::Live).unwrap();
        fill(&mut form, "bad", "x", "y");
        form.submit(&RecordingSink::default());

        form.reset();

        assert_eq!(form.input(), &CredentialInput::default());
        assert!(form.errors().is_valid());
        assert!(!form.is_submitted());
        assert!(!form.is_loading());
    }
}
