//! Grid of labeled stat values used on the dashboard and landing sections

use leptos::*;

/// One cell of a [`StatsCard`] grid.
#[derive(Clone, Debug, PartialEq)]
pub struct StatItem {
    pub value: String,
    pub label: &'static str,
    /// One of the `stat-*` accent classes from the stylesheet.
    pub color: &'static str,
}

impl StatItem {
    pub fn new(value: impl Into<String>, label: &'static str, color: &'static str) -> Self {
        Self {
            value: value.into(),
            label,
            color,
        }
    }
}

#[component]
pub fn StatsCard(#[prop(into)] stats: MaybeSignal<Vec<StatItem>>) -> impl IntoView {
    let grid_stats = stats.clone();
    view! {
        <div class=move || format!("stats-grid cols-{}", grid_stats.get().len())>
            <For
                each=move || stats.get().into_iter().enumerate()
                key=|(idx, item)| (*idx, item.value.clone())
                children=move |(_, item)| {
                    view! {
                        <div class="stat-card">
                            <div class=format!("stat-value {}", item.color)>{item.value.clone()}</div>
                            <div class="stat-label">{item.label}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
