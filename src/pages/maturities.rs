//! Fixed-term funding marketing page

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

struct TermProduct {
    duration: &'static str,
    apy: &'static str,
    min_amount: &'static str,
    total_locked: &'static str,
    status: &'static str,
    description: &'static str,
}

const TERMS: [TermProduct; 4] = [
    TermProduct {
        duration: "30 Days",
        apy: "3.8%",
        min_amount: "$10,000",
        total_locked: "$2.1M",
        status: "Available",
        description: "Short-term funding for working capital and liquidity needs.",
    },
    TermProduct {
        duration: "90 Days",
        apy: "4.5%",
        min_amount: "$25,000",
        total_locked: "$5.8M",
        status: "Available",
        description: "Medium-term funding for seasonal operations and project financing.",
    },
    TermProduct {
        duration: "180 Days",
        apy: "5.2%",
        min_amount: "$50,000",
        total_locked: "$8.3M",
        status: "Available",
        description: "Extended-term funding for structured finance and asset development.",
    },
    TermProduct {
        duration: "1 Year",
        apy: "6.1%",
        min_amount: "$100,000",
        total_locked: "$12.5M",
        status: "Limited",
        description: "Long-term institutional funding for major credit facilities.",
    },
];

const UPCOMING: [(&str, &str, &str); 4] = [
    ("2024-02-15", "$850K", "4.2%"),
    ("2024-02-28", "$1.2M", "4.5%"),
    ("2024-03-15", "$2.1M", "5.0%"),
    ("2024-03-30", "$950K", "4.8%"),
];

const HOW_IT_WORKS: [(&str, &str, &str); 3] = [
    (
        "1",
        "Select Term",
        "Choose your preferred funding duration and review the fixed APY rate for your term.",
    ),
    (
        "2",
        "Lock Funds",
        "Deposit your collateral and receive USDU tokens at the agreed fixed rate.",
    ),
    (
        "3",
        "Earn & Redeem",
        "Earn fixed returns throughout the term and redeem your principal plus interest at maturity.",
    ),
];

#[component]
pub fn MaturitiesPage() -> impl IntoView {
    view! {
        <Title text="Maturities - USDU Finance"/>

        <section class="page-hero">
            <div class="container">
                <h1>"Fixed-Term Funding Maturities"</h1>
                <p class="page-hero-sub">
                    "Predictable, fixed-rate funding options designed for institutional \
                     borrowers with terms ranging from 30 days to 1 year."
                </p>
                <div class="hero-actions">
                    <A href="/dashboard" class="btn btn-primary">"Launch App"</A>
                    <A href="/transparency" class="btn btn-secondary">"View Risk Metrics"</A>
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="section-intro">
                    <h2>"Available Terms"</h2>
                    <p>
                        "Choose from our range of fixed-term funding options with \
                         competitive rates and institutional-grade security."
                    </p>
                </div>

                <div class="term-grid">
                    {TERMS
                        .iter()
                        .map(|term| {
                            let chip = if term.status == "Available" {
                                "chip chip-green"
                            } else {
                                "chip chip-yellow"
                            };
                            view! {
                                <div class="term-card">
                                    <div class="term-card-head">
                                        <div>
                                            <h3>{term.duration}</h3>
                                            <span class=chip>{term.status}</span>
                                        </div>
                                        <div class="term-apy">
                                            <div class="term-apy-value">{term.apy}</div>
                                            <div class="detail-label">"Fixed APY"</div>
                                        </div>
                                    </div>
                                    <p class="term-description">{term.description}</p>
                                    <div class="detail-grid cols-2">
                                        <div>
                                            <p class="detail-label">"Minimum Amount"</p>
                                            <p class="detail-value">{term.min_amount}</p>
                                        </div>
                                        <div>
                                            <p class="detail-label">"Total Locked"</p>
                                            <p class="detail-value">{term.total_locked}</p>
                                        </div>
                                    </div>
                                    <A href="/dashboard" class="btn btn-primary full">"Get Funding →"</A>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <div class="section-intro">
                    <h2>"Upcoming Maturities"</h2>
                    <p>"Track upcoming maturity events and plan your liquidity accordingly."</p>
                </div>

                <div class="table-card">
                    <div class="table-row table-head">
                        <div>"Maturity Date"</div>
                        <div>"Amount"</div>
                        <div>"Rate"</div>
                        <div>"Status"</div>
                    </div>
                    {UPCOMING
                        .iter()
                        .map(|(date, amount, rate)| {
                            view! {
                                <div class="table-row">
                                    <div>"📅 " {*date}</div>
                                    <div class="detail-value">{*amount}</div>
                                    <div class="accent">{*rate}</div>
                                    <div><span class="chip chip-blue">"Active"</span></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="section-intro">
                    <h2>"How Fixed-Term Funding Works"</h2>
                    <p>
                        "Simple, transparent fixed-rate funding with institutional-grade \
                         security and compliance."
                    </p>
                </div>

                <div class="feature-grid cols-3">
                    {HOW_IT_WORKS
                        .iter()
                        .map(|(step, title, description)| {
                            view! {
                                <div class="step-card">
                                    <div class="step-number">{*step}</div>
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
