//! Common reusable UI components
//!
//! Building blocks shared by the credential form: input fields, message
//! banners, spinners and tooltips.

pub mod form;
pub mod message;
pub mod spinner;
pub mod tooltip;

pub use form::{PasswordField, TextField};
pub use message::{ErrorMessage, ErrorMessageStatic};
pub use spinner::{InlineSpinner, Spinner};
pub use tooltip::ChecklistTooltip;
