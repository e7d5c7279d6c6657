use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = "spinner spinner-circle spinner-sm".to_string();

    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <span class=full_classes role="status" aria-live="polite">
            <span class="spinner-circle-inner"></span>
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <Spinner class=format!("spinner-inline {}", class)/>
    }
}
