//! Submission collaborator
//!
//! The form hands validated input to a [`CredentialSink`]. No backend is
//! wired up; [`LogSink`] only records what was submitted.

use crate::core::credentials::CredentialInput;

/// Submission failure reported by a sink
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission service unavailable: {0}")]
    Unavailable(String),
}

/// Receives credential input that passed validation
pub trait CredentialSink {
    fn submit(&self, input: &CredentialInput) -> Result<(), SubmitError>;
}

/// Sink that records the submitted input and accepts it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl CredentialSink for LogSink {
    fn submit(&self, input: &CredentialInput) -> Result<(), SubmitError> {
        leptos::logging::log!("{:?}", input);
        tracing::info!(email = %input.email, "credentials submitted");
        Ok(())
    }
}
