//! "About" landing section

use leptos::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🪙",
        "USDU Protocol",
        "Access the next generation stablecoin with advanced stability mechanisms and yield optimization.",
    ),
    (
        "🛡️",
        "Secure & Audited",
        "Built with security-first principles and audited smart contracts for maximum protection.",
    ),
    (
        "📈",
        "Yield Optimization",
        "Maximize your returns with automated yield farming and liquidity provision strategies.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <div class="section-intro">
                    <h2>"Built for the Future of Finance"</h2>
                    <p>
                        "USDU Finance provides a comprehensive platform for interacting with \
                         the USDU protocol, offering advanced DeFi features with \
                         institutional-grade security."
                    </p>
                </div>

                <div class="feature-grid cols-3">
                    {FEATURES
                        .iter()
                        .map(|(emoji, title, description)| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">{*emoji}</div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
