//! Credential form component
//!
//! Email, password and password confirmation inputs bound to a
//! [`CredentialForm`]. The profile decides the password rule and when the
//! fields are validated.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    CredentialForm, CredentialSink, Field, FormProfile, LogSink, PasswordPolicy, StrengthReport,
    SubmitOutcome,
};
use crate::ui::common::{
    ChecklistTooltip, ErrorMessage, ErrorMessageStatic, InlineSpinner, PasswordField, TextField,
};
use crate::ui::icon::{Icon, icons};

/// Credential form for a profile.
///
/// A schema that cannot be built is an integration defect; it is logged and
/// shown in place of the form.
#[component]
pub fn CredentialFormView(profile: FormProfile) -> impl IntoView {
    match CredentialForm::for_profile(profile) {
        Ok(form) => view! { <CredentialFields profile=profile form=form/> }.into_any(),
        Err(error) => {
            leptos::logging::error!("credential schema for {profile} unavailable: {error}");
            view! {
                <ErrorMessageStatic message={"The form is unavailable right now.".to_string()}/>
            }
            .into_any()
        }
    }
}

#[component]
fn CredentialFields(profile: FormProfile, form: CredentialForm) -> impl IntoView {
    let form = RwSignal::new(form);
    let show_password = RwSignal::new(false);
    let submit_error = RwSignal::new(None::<String>);

    let loading = Signal::derive(move || form.with(|f| f.is_loading()));
    let show_summary = Memo::new(move |_| form.with(|f| f.show_summary()));
    let value = move |field: Field| {
        Signal::derive(move || form.with(|f| f.input().get(field).to_string()))
    };
    let errors = move |field: Field| {
        Signal::derive(move || form.with(|f| f.errors().messages_for(field)))
    };
    let on_input = move |field: Field| {
        Callback::new(move |text: String| form.update(|f| f.set_field(field, text)))
    };

    let requirements = Signal::derive(move || {
        form.with(|f| {
            StrengthReport::scan(&f.input().password)
                .requirements()
                .into_iter()
                .map(|(requirement, met)| (requirement.description().to_string(), met))
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_error.set(None);

        let Some(Ok(Some(input))) = form.try_update(|f| f.begin_submit()) else {
            return;
        };

        // Loading stays set until the sink returns; further submits are ignored
        spawn_local(async move {
            let result = LogSink.submit(&input);
            let outcome = form.try_update(|f| f.finish_submit(result));
            if let Some(SubmitOutcome::Failed(error)) = outcome {
                submit_error.set(Some(error.to_string()));
            }
        });
    };

    let summary = move || {
        show_summary.get().then(|| {
            let hint = if profile.policy() == PasswordPolicy::Strict {
                view! {
                    <span>
                        "Check email and/or "
                        <ChecklistTooltip items=requirements>
                            <span class="font-bold">"strong password"</span>
                        </ChecklistTooltip>
                        " and try again."
                    </span>
                }
                .into_any()
            } else {
                view! { <span>"Check email and/or password and try again."</span> }.into_any()
            };
            view! { <p class="text-sm text-red-500">{hint}</p> }
        })
    };

    view! {
        <div class="grid gap-6">
            <form on:submit=on_submit class="grid gap-2" novalidate=true>
                <ErrorMessage error=submit_error/>

                <TextField
                    label=Field::Email.label()
                    name=Field::Email.name()
                    hide_label=true
                    input_type="email"
                    autocomplete="email"
                    placeholder="Email"
                    value=value(Field::Email)
                    on_input=on_input(Field::Email)
                    disabled=loading
                    errors=errors(Field::Email)
                />
                <PasswordField
                    label=Field::Password.label()
                    name=Field::Password.name()
                    hide_label=true
                    placeholder="Password"
                    visible=show_password
                    value=value(Field::Password)
                    on_input=on_input(Field::Password)
                    disabled=loading
                    errors=errors(Field::Password)
                />
                <PasswordField
                    label=Field::PasswordConfirmation.label()
                    name=Field::PasswordConfirmation.name()
                    hide_label=true
                    placeholder="Password Confirmation"
                    visible=show_password
                    value=value(Field::PasswordConfirmation)
                    on_input=on_input(Field::PasswordConfirmation)
                    disabled=loading
                    errors=errors(Field::PasswordConfirmation)
                />

                {summary}

                <button type="submit" class="btn-base btn-outline w-full" disabled=move || loading.get()>
                    <Show when=move || loading.get()>
                        <InlineSpinner class={"mr-2".to_string()}/>
                    </Show>
                    {profile.submit_label()}
                </button>
            </form>

            <div class="relative">
                <div class="absolute inset-0 flex items-center">
                    <span class="w-full border-t"></span>
                </div>
                <div class="relative flex justify-center text-xs uppercase">
                    <span class="bg-theme-primary px-2 text-theme-tertiary">"Or continue with"</span>
                </div>
            </div>

            <div class="grid gap-2">
                <ProviderButton name="Google" icon=icons::GOOGLE loading=loading/>
                <ProviderButton name="GitHub" icon=icons::GITHUB loading=loading/>
            </div>
        </div>
    }
}

/// Third-party sign-in button; not wired to a provider
#[component]
fn ProviderButton(name: &'static str, icon: &'static str, loading: Signal<bool>) -> impl IntoView {
    view! {
        <button type="button" class="btn-base btn-outline" disabled=move || loading.get()>
            <Show
                when=move || loading.get()
                fallback=move || view! { <Icon name=icon class="mr-2 h-4 w-4"/> }
            >
                <InlineSpinner class={"mr-2".to_string()}/>
            </Show>
            {name}
        </button>
    }
}
