//! Landing page hero section

use leptos::*;
use leptos_router::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">
                    "The Next Generation "
                    <span class="accent">"Stablecoin Protocol"</span>
                </h1>
                <p class="hero-description">
                    "Access advanced DeFi strategies and yield optimization with USDU, \
                     the next generation stablecoin protocol."
                </p>
                <div class="hero-actions">
                    <A href="/dashboard" class="btn btn-primary">"Launch App ↗"</A>
                    <A href="/maturities" class="btn btn-secondary">"View Maturities"</A>
                </div>
            </div>
        </section>
    }
}
