//! Dashboard landing page with headline stats and protocol status.

use leptos::*;
use leptos_meta::Title;

use crate::components::{StatItem, StatsCard};
use crate::hooks::use_protocol_data;
use crate::utils::{format_price_with_state, format_time, format_value_with_state, unix_now};

const QUICK_ACTIONS: [(&str, &str, &str); 3] = [
    ("🪙", "Mint USDU", "Generate USDU tokens with collateral"),
    ("📈", "Provide Liquidity", "Earn fees by providing liquidity"),
    ("🛡️", "Stake USDU", "Earn rewards by staking USDU"),
];

#[component]
pub fn OverviewPage() -> impl IntoView {
    let protocol = use_protocol_data();

    // Wall-clock stamp of the most recent successful refresh.
    let (last_update, set_last_update) = create_signal(None::<u64>);
    create_effect(move |_| {
        let snapshot = protocol.stats.get();
        let landed = snapshot.usdu_supply.is_some()
            || snapshot.dex_liquidity.is_some()
            || snapshot.usdu_price.is_some();
        if landed {
            set_last_update.set(Some(unix_now()));
        }
    });

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
                    "",
                ),
                "USDU Supply",
                "stat-default",
            ),
            StatItem::new(
                format_value_with_state(
                    snapshot.dex_liquidity.as_deref(),
                    is_loading,
                    error.as_deref(),
                    "$",
                ),
                "DEX Liquidity",
                "stat-default",
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
            StatItem::new("4.2%", "APY", "stat-green"),
        ]
    });

    view! {
        <Title text="Dashboard - USDU Finance"/>
        <div class="dashboard-page">
            <div class="page-head">
                <h1>"Dashboard"</h1>
                <p class="page-sub">"Welcome to USDU Finance."</p>
            </div>

            <StatsCard stats=stats/>

            <div class="panel">
                <h2>"Quick Actions"</h2>
                <div class="action-grid">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|(emoji, title, hint)| {
                            view! {
                                <button class="action-card">
                                    <div class="feature-icon">{*emoji}</div>
                                    <h3>{*title}</h3>
                                    <p>{*hint}</p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="panel">
                <h2>"Protocol Status"</h2>
                <div class="status-list">
                    <div class="status-row">
                        <span class="detail-label">"Network"</span>
                        <span class="detail-value">"Ethereum Mainnet"</span>
                    </div>
                    <div class="status-row">
                        <span class="detail-label">"Protocol Health"</span>
                        {move || {
                            if protocol.error.get().is_some() {
                                view! { <span class="health down">"● Degraded"</span> }
                            } else {
                                view! { <span class="health up">"● Healthy"</span> }
                            }
                        }}
                    </div>
                    <div class="status-row">
                        <span class="detail-label">"Last Update"</span>
                        <span class="detail-value">
                            {move || match last_update.get() {
                                Some(at) => format_time(at),
                                None => "...".to_string(),
                            }}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
