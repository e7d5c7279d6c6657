//! Credential input model
//!
//! The raw values of the sign-up form at the moment they are validated.
//! Nothing here enforces the validation rules; see [`crate::core::validation`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// All fields in the order they appear on the form
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::PasswordConfirmation];

    /// Name used for the field on the wire and in HTML `name` attributes
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "passwordConfirmation",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::PasswordConfirmation => "Password Confirmation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw credential values taken from the form controls
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialInput {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl CredentialInput {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::PasswordConfirmation => self.password_confirmation = value,
        }
    }
}

// Passwords never reach the logs, only their length.
impl fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInput")
            .field("email", &self.email)
            .field(
                "password",
                &format_args!("<{} chars>", self.password.chars().count()),
            )
            .field(
                "password_confirmation",
                &format_args!("<{} chars>", self.password_confirmation.chars().count()),
            )
            .finish()
    }
}
