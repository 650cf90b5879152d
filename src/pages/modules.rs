//! Module governance page

use leptos::*;
use leptos_meta::Title;

use crate::components::ModulesSection;

#[component]
pub fn ModulesPage() -> impl IntoView {
    view! {
        <Title text="Modules - USDU Finance"/>
        <div class="page">
            <ModulesSection/>
        </div>
    }
}
