//! Named form configurations
//!
//! Each profile pairs a password policy with a validation trigger. Profiles
//! are static; the rule set of a rendered form never changes while it is
//! on screen.

use std::fmt;
use std::str::FromStr;

use crate::core::validation::{CredentialSchema, PasswordPolicy, SchemaError};

/// When the form validates its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationTrigger {
    /// Validate on submit; after the first submit, also on every change
    #[default]
    OnSubmit,
    /// Validate on every change and on submit
    OnChange,
}

/// User interaction that may cause validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Change,
    Submit,
}

impl ValidationTrigger {
    pub fn should_validate(&self, event: FormEvent, submitted: bool) -> bool {
        match (self, event) {
            (_, FormEvent::Submit) => true,
            (ValidationTrigger::OnChange, FormEvent::Change) => true,
            (ValidationTrigger::OnSubmit, FormEvent::Change) => submitted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("unknown form profile '{0}' (expected simple, strict or live)")]
    Unknown(String),
}

/// A named form configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormProfile {
    /// Length-only password rule, validated on submit
    Simple,
    /// Character class password rule, validated on submit
    #[default]
    Strict,
    /// Character class password rule, validated on every change
    Live,
}

impl FormProfile {
    pub const ALL: [FormProfile; 3] = [FormProfile::Simple, FormProfile::Strict, FormProfile::Live];

    pub fn slug(&self) -> &'static str {
        match self {
            FormProfile::Simple => "simple",
            FormProfile::Strict => "strict",
            FormProfile::Live => "live",
        }
    }

    pub fn policy(&self) -> PasswordPolicy {
        match self {
            FormProfile::Simple => PasswordPolicy::Simple,
            FormProfile::Strict | FormProfile::Live => PasswordPolicy::Strict,
        }
    }

    pub fn trigger(&self) -> ValidationTrigger {
        match self {
            FormProfile::Simple | FormProfile::Strict => ValidationTrigger::OnSubmit,
            FormProfile::Live => ValidationTrigger::OnChange,
        }
    }

    pub fn schema(&self) -> Result<CredentialSchema, SchemaError> {
        CredentialSchema::new(self.policy())
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            FormProfile::Simple => "Login",
            FormProfile::Strict | FormProfile::Live => "Create an account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormProfile::Simple => "Login",
            FormProfile::Strict | FormProfile::Live => "Sign In with Email",
        }
    }

    /// Route path for this profile
    pub fn path(&self) -> String {
        format!("/form/{}", self.slug())
    }
}

impl fmt::Display for FormProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FormProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase();
        FormProfile::ALL
            .into_iter()
            .find(|profile| profile.slug() == slug)
            .ok_or_else(|| ProfileError::Unknown(s.to_string()))
    }
}
