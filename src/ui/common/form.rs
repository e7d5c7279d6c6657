use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error list shown under a field
#[component]
fn FieldErrors(errors: Signal<Vec<String>>) -> impl IntoView {
    move || {
        errors
            .get()
            .into_iter()
            .map(|err| {
                view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                }
            })
            .collect_view()
    }
}

/// Generic form field component with label and input
#[component]
pub fn TextField(
    /// Field label text
    label: &'static str,
    /// Input `name` and `id`
    name: &'static str,
    /// Whether the label is only exposed to screen readers
    #[prop(default = false)]
    hide_label: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Error messages to display
    errors: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" class:sr-only=hide_label for=name>
                {label}
            </label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                class="input-base"
                class:border-red-500=move || !errors.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldErrors errors=errors/>
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    /// Field label text
    label: &'static str,
    /// Input `name` and `id`
    name: &'static str,
    /// Whether the label is only exposed to screen readers
    #[prop(default = false)]
    hide_label: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Whether the value is shown in clear text
    visible: RwSignal<bool>,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Error messages to display
    errors: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" class:sr-only=hide_label for=name>
                {label}
            </label>
            <div class="relative">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    id=name
                    name=name
                    autocomplete="new-password"
                    class="input-base pr-10"
                    class:border-red-500=move || !errors.get().is_empty()
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }
                        } else {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }
                        }
                    }}
                </button>
            </div>
            <FieldErrors errors=errors/>
        </div>
    }
}
