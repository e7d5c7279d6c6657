//! Credential form
//!
//! A sign-up form built with Leptos: email, password and password
//! confirmation validated against a declarative schema, with a loading
//! indicator around submission.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
