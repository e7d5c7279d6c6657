//! Form page component
//!
//! Renders the credential form for the profile named in the route,
//! e.g. `/form/strict`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::FormProfile;
use crate::ui::auth::CredentialFormView;
use crate::ui::pages::NotFoundPage;

/// Form page for the `:profile` route parameter
#[component]
pub fn FormPage() -> impl IntoView {
    let params = use_params_map();

    let profile = move || {
        params
            .read()
            .get("profile")
            .and_then(|slug| slug.parse::<FormProfile>().ok())
    };

    move || match profile() {
        Some(profile) => view! { <ProfileLayout profile=profile/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn ProfileLayout(profile: FormProfile) -> impl IntoView {
    view! {
        <Title text=profile.title()/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md space-y-6">
                    <div class="text-center">
                        <h1 class="text-2xl font-semibold tracking-tight text-theme-primary">
                            {profile.title()}
                        </h1>
                        <p class="mt-2 text-sm text-theme-secondary">
                            "Enter your email and a password below"
                        </p>
                    </div>
                    <CredentialFormView profile=profile/>
                </div>
            </main>

            <footer class="py-4 border-t border-theme">
                <nav class="flex justify-center gap-4 text-sm text-theme-tertiary">
                    {FormProfile::ALL
                        .into_iter()
                        .map(|other| {
                            view! {
                                <A href=other.path() attr:class="hover:text-theme-secondary">
                                    {other.slug()}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </footer>
        </div>
    }
}
