//! Horizontal tab strip with overflow scroll buttons

use leptos::*;

#[component]
pub fn Tabs(
    #[prop(into)] labels: MaybeSignal<Vec<String>>,
    /// Index of the active tab, owned by the caller.
    #[prop(into)] selected: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let strip_ref = create_node_ref::<html::Div>();
    let (show_left, set_show_left) = create_signal(false);
    let (show_right, set_show_right) = create_signal(false);

    let check_scroll = move || {
        if let Some(strip) = strip_ref.get_untracked() {
            let position = strip.scroll_left();
            set_show_left.set(position > 0);
            set_show_right.set(position < strip.scroll_width() - strip.client_width());
        }
    };

    // Initial overflow check once the strip is mounted and whenever the labels change.
    create_effect({
        let labels = labels.clone();
        move |_| {
            labels.track();
            check_scroll();
        }
    });

    let scroll_by = move |amount: i32| {
        if let Some(strip) = strip_ref.get_untracked() {
            strip.set_scroll_left(strip.scroll_left() + amount);
        }
        check_scroll();
    };

    view! {
        <div class="tabs">
            <Show
                when=move || show_left.get()
                fallback=|| view! { }
            >
                <button class="tabs-scroll left" on:click=move |_| scroll_by(-200)>"‹"</button>
            </Show>

            <div class="tabs-strip" node_ref=strip_ref on:scroll=move |_| check_scroll()>
                <For
                    each=move || labels.get().into_iter().enumerate()
                    key=|(idx, label)| (*idx, label.clone())
                    children=move |(idx, label)| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || selected.get() == idx
                                on:click=move |_| on_select.call(idx)
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>

            <Show
                when=move || show_right.get()
                fallback=|| view! { }
            >
                <button class="tabs-scroll right" on:click=move |_| scroll_by(200)>"›"</button>
            </Show>
        </div>
    }
}
