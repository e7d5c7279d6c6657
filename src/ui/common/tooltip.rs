use leptos::prelude::*;

use crate::ui::{Icon, icons};

/// Tooltip listing items with a met/unmet mark, shown on hover or focus
#[component]
pub fn ChecklistTooltip(
    /// Items to list, each with whether it is satisfied
    #[prop(into)]
    items: Signal<Vec<(String, bool)>>,
    /// The element that triggers the tooltip
    children: Children,
    /// Delay before showing tooltip (ms)
    #[prop(default = 200)]
    delay: u32,
) -> impl IntoView {
    let (is_visible, set_is_visible) = signal(false);
    let (should_show, set_should_show) = signal(false);

    // Handle delayed show
    Effect::new(move |_| {
        if should_show.get() {
            set_timeout(
                move || {
                    if should_show.get_untracked() {
                        set_is_visible.set(true);
                    }
                },
                std::time::Duration::from_millis(delay as u64),
            );
        } else {
            set_is_visible.set(false);
        }
    });


    view! {
        <span
            class="tooltip-container"
            tabindex="0"
            on:mouseenter=move |_| set_should_show.set(true)
            on:mouseleave=move |_| set_should_show.set(false)
            on:focus=move |_| set_should_show.set(true)
            on:blur=move |_| set_should_show.set(false)
        >
            {children()}
            <Show when=move || is_visible.get()>
                <div class="tooltip tooltip-top" role="tooltip" aria-live="polite">
                    <ul class="tooltip-content">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|(text, met)| {
                                    let icon = if met { icons::CHECK } else { icons::X };
                                    view! {
                                        <li class="flex items-center gap-1" class:text-green-600=met>
                                            <Icon name=icon class="w-3 h-3"/>
                                            <span>{text}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <div class="tooltip-arrow"></div>
                </div>
            </Show>
        </span>
    }
}
