//! Collapsible section with a clickable header

use leptos::*;

#[component]
pub fn Accordion(
    /// Label shown in the always-visible header row.
    #[prop(into)] title: String,
    /// Open the body on first render instead of starting collapsed.
    #[prop(optional)] default_open: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let (is_open, set_is_open) = create_signal(default_open);

    view! {
        <div class="accordion" class:open=move || is_open.get()>
            <button
                class="accordion-header"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span class="accordion-title">{title}</span>
                <span class="accordion-chevron">
                    {move || if is_open.get() { "▼" } else { "▶" }}
                </span>
            </button>

            <Show
                when=move || is_open.get()
                fallback=|| view! { }
            >
                <div class="accordion-body">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
