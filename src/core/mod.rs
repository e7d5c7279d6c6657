//! Credential validation core, independent of the UI layer

#[cfg(feature = "ssr")]
pub mod config;
pub mod credentials;
pub mod form;
pub mod profile;
pub mod submit;
#[cfg(test)]
mod tests;
pub mod validation;

pub use credentials::{CredentialInput, Field};
pub use form::{CredentialForm, SubmitOutcome};
pub use profile::{FormEvent, FormProfile, ProfileError, ValidationTrigger};
pub use submit::{CredentialSink, LogSink, SubmitError};
pub use validation::{
    CredentialSchema, PasswordPolicy, Requirement, SchemaError, StrengthReport, ValidationError,
    ValidationResult,
};
