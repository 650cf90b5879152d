//! Transparency and risk marketing page

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::config::GOVERNANCE_URL;

const RISK_METRICS: [(&str, &str, &str, &str); 6] = [
    ("Total Value Locked", "$12.5M", "+2.1%", "stable"),
    ("Collateralization Ratio", "125%", "+0.8%", "healthy"),
    ("Reserve Coverage", "110%", "+1.2%", "adequate"),
    ("Liquidity Buffer", "15%", "-0.3%", "strong"),
    ("Active Borrowers", "47", "+5", "growing"),
    ("Average Loan Size", "$265K", "+12%", "stable"),
];

const AUDIT_REPORTS: [(&str, &str, &str); 3] = [
    ("Q4 2023 Security Audit", "Trail of Bits", "December 2023"),
    ("Reserve Verification Report", "Armanino LLP", "January 2024"),
    ("Smart Contract Assessment", "OpenZeppelin", "November 2023"),
];

const DAO_METRICS: [(&str, &str); 4] = [
    ("Total Proposals", "23"),
    ("Active Voters", "156"),
    ("Participation Rate", "67%"),
    ("Treasury Balance", "$2.1M"),
];

const RECENT_PROPOSALS: [(&str, &str); 3] = [
    ("Adjust Collateral Ratio", "Passed • 89% approval"),
    ("Treasury Reallocation", "Active • 67% approval"),
    ("Risk Parameter Update", "Draft • Under review"),
];

const RISK_CONTROLS: [(&str, &str, &str); 3] = [
    (
        "🛡️",
        "Multi-Signature Security",
        "Critical operations require multiple signatures with time-delay mechanisms for enhanced security.",
    ),
    (
        "👁️",
        "Continuous Monitoring",
        "Real-time monitoring of collateral ratios, liquidity levels, and market conditions.",
    ),
    (
        "🔒",
        "Emergency Controls",
        "Automated circuit breakers and emergency pause functions to protect against extreme events.",
    ),
];

#[component]
pub fn TransparencyPage() -> impl IntoView {
    view! {
        <Title text="Transparency - USDU Finance"/>

        <section class="page-hero">
            <div class="container">
                <h1>"Transparency & Risk Management"</h1>
                <p class="page-hero-sub">
                    "Real-time protocol metrics, comprehensive audit reports, and \
                     transparent governance ensure institutional-grade accountability \
                     and risk management."
                </p>
                <div class="hero-actions">
                    <A href="/dashboard" class="btn btn-primary">"Live Dashboard"</A>
                    <a
                        href=GOVERNANCE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-secondary"
                    >
                        "DAO Governance ↗"
                    </a>
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="section-intro">
                    <h2>"Real-Time Protocol Metrics"</h2>
                    <p>"Live monitoring of all critical protocol health indicators and risk metrics."</p>
                </div>

                <div class="metric-grid">
                    {RISK_METRICS
                        .iter()
                        .map(|(label, value, change, status)| {
                            let change_class = if change.starts_with('+') {
                                "metric-change up"
                            } else {
                                "metric-change down"
                            };
                            view! {
                                <div class="metric-card">
                                    <div class="metric-value">{*value}</div>
                                    <div class="metric-label">{*label}</div>
                                    <div class="metric-foot">
                                        <span class=change_class>{*change}</span>
                                        <span class="chip chip-green">{*status}</span>
                                    </div>
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
                    <h2>"Security & Audit Reports"</h2>
                    <p>
                        "Independent third-party audits ensure protocol security and \
                         reserve verification."
                    </p>
                </div>

                <div class="feature-grid cols-3">
                    {AUDIT_REPORTS
                        .iter()
                        .map(|(title, auditor, date)| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">"📄"</div>
                                    <h3>{*title}</h3>
                                    <p class="detail-label">"Auditor: " {*auditor}</p>
                                    <p class="detail-label">"Date: " {*date}</p>
                                    <span class="chip chip-green">"Completed"</span>
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
                    <h2>"Governance Transparency"</h2>
                    <p>
                        "Decentralized governance ensures transparent decision-making \
                         for all protocol parameters."
                    </p>
                </div>

                <div class="governance-grid">
                    <div class="governance-card">
                        <h3>"DAO Metrics"</h3>
                        <div class="detail-grid cols-2">
                            {DAO_METRICS
                                .iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="dao-metric">
                                            <div class="metric-value">{*value}</div>
                                            <div class="detail-label">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="governance-card">
                        <h3>"Recent Proposals"</h3>
                        <div class="proposal-list">
                            {RECENT_PROPOSALS
                                .iter()
                                .map(|(title, outcome)| {
                                    view! {
                                        <div class="proposal-row">
                                            <div class="detail-value">{*title}</div>
                                            <div class="detail-label">{*outcome}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="section-cta">
                    <a
                        href=GOVERNANCE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary"
                    >
                        "Participate in Governance ↗"
                    </a>
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <div class="section-intro">
                    <h2>"Risk Management Framework"</h2>
                    <p>
                        "Comprehensive risk controls and monitoring systems ensure \
                         protocol stability and safety."
                    </p>
                </div>

                <div class="feature-grid cols-3">
                    {RISK_CONTROLS
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
