//! Landing page

use leptos::*;
use leptos_meta::Title;

use crate::components::{About, Contact, Hero, ProtocolOverview};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="USDU Finance"/>
        <Hero/>
        <ProtocolOverview/>
        <About/>
        <Contact/>
    }
}
