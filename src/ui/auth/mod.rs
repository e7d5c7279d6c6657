//! Authentication UI module
//!
//! The credential form and its supporting pieces.

mod credential_form;

pub use credential_form::CredentialFormView;
