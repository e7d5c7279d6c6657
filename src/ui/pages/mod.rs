//! Application pages module
//!
//! - Form page (one per form profile)
//! - Not found page

mod form_page;
mod not_found;

pub use form_page::FormPage;
pub use not_found::NotFoundPage;
