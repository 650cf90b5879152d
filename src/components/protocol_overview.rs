//! Protocol overview landing section with a live key-stats strip

use leptos::*;

use crate::components::{StatItem, StatsCard};
use crate::config::MAINNET_CHAIN_ID;
use crate::hooks::{use_module_data_all, use_protocol_data};
use crate::utils::{format_price_with_state, format_value_with_state};

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🛡️",
        "Non-Algorithmic Design",
        "Protocol-issued stablecoin backed by real assets, not complex algorithms or speculation.",
    ),
    (
        "🔄",
        "USDC Convertibility",
        "Fully convertible to USDC on-chain, ensuring liquidity and maintaining peg stability.",
    ),
    (
        "📈",
        "Fixed-Term Funding",
        "Offers 4-6% fixed-term funding rates for structured finance and credit markets.",
    ),
    (
        "👥",
        "DAO Governance",
        "Governed by a decentralized autonomous organization ensuring transparent decision-making.",
    ),
];

#[component]
pub fn ProtocolOverview() -> impl IntoView {
    let protocol = use_protocol_data();
    let modules = use_module_data_all(MAINNET_CHAIN_ID);

    let stats = Signal::derive(move || {
        let snapshot = protocol.stats.get();
        let is_loading = protocol.is_loading.get();
        let error = protocol.error.get();
        vec![
            StatItem::new(
                format_value_with_state(
                    snapshot.usdu_supply.as_deref(),
                    is_loading,
                    error.as_deref(),
                    "$",
                ),
                "USDU Supply",
                "stat-accent",
            ),
            StatItem::new(
                format_value_with_state(
                    snapshot.dex_liquidity.as_deref(),
                    is_loading,
                    error.as_deref(),
                    "$",
                ),
                "DEX Liquidity",
                "stat-accent",
            ),
            StatItem::new(
                format_price_with_state(
                    snapshot.usdu_price.as_deref(),
                    is_loading,
                    error.as_deref(),
                    3,
                ),
                "USDU Price",
                "stat-accent",
            ),
            StatItem::new(
                modules.active_modules.get().len().to_string(),
                "Active Modules",
                "stat-accent",
            ),
        ]
    });

    view! {
        <section class="section section-alt">
            <div class="container">
                <div class="section-intro">
                    <h2>"Protocol Overview"</h2>
                    <p>
                        "USDU represents a new paradigm in decentralized stablecoins, \
                         designed specifically for institutional-grade credit and \
                         structured finance applications."
                    </p>
                </div>

                <div class="feature-grid cols-4">
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

                <div class="overview-stats">
                    <StatsCard stats=stats/>
                </div>
            </div>
        </section>
    }
}
