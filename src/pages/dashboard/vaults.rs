//! Vault listing page. Positions are static until vault contracts ship.

use leptos::*;
use leptos_meta::Title;

struct Vault {
    name: &'static str,
    symbol: &'static str,
    apy: &'static str,
    tvl: &'static str,
    description: &'static str,
}

const VAULTS: [Vault; 3] = [
    Vault {
        name: "USDU Core Vault",
        symbol: "USDU-CORE",
        apy: "4.2%",
        tvl: "$8.7M",
        description: "Core USDU staking vault with protocol rewards",
    },
    Vault {
        name: "USDU-ETH LP",
        symbol: "USDU-ETH",
        apy: "12.5%",
        tvl: "$2.8M",
        description: "Liquidity provision for USDU/ETH trading pair",
    },
    Vault {
        name: "USDU Savings",
        symbol: "sUSDU",
        apy: "3.8%",
        tvl: "$1.2M",
        description: "Low-risk savings vault for USDU holders",
    },
];

#[component]
pub fn VaultsPage() -> impl IntoView {
    view! {
        <Title text="Vaults - USDU Finance"/>
        <div class="dashboard-page">
            <div class="page-head">
                <h1>"Vaults"</h1>
                <p class="page-sub">"Discover yield opportunities and manage your USDU positions"</p>
            </div>

            <div class="vault-grid">
                {VAULTS
                    .iter()
                    .map(|vault| {
                        view! {
                            <div class="vault-card">
                                <div class="vault-head">
                                    <div class="feature-icon">"🪙"</div>
                                    <div>
                                        <h3>{vault.name}</h3>
                                        <p class="detail-label">{vault.symbol}</p>
                                    </div>
                                </div>
                                <p class="vault-description">{vault.description}</p>
                                <div class="status-list">
                                    <div class="status-row">
                                        <span class="detail-label">"APY"</span>
                                        <span class="stat-green">{vault.apy}</span>
                                    </div>
                                    <div class="status-row">
                                        <span class="detail-label">"TVL"</span>
                                        <span class="detail-value">{vault.tvl}</span>
                                    </div>
                                    <div class="status-row">
                                        <span class="detail-label">"Your Balance"</span>
                                        <span class="detail-value">{format!("0 {}", vault.symbol)}</span>
                                    </div>
                                </div>
                                <div class="vault-actions">
                                    <button class="btn btn-primary">"Deposit"</button>
                                    <button class="btn btn-secondary">"Withdraw"</button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel center">
                <h3>"More Vaults Coming Soon"</h3>
                <p class="page-sub">
                    "We're working on additional yield strategies and vault options. Stay tuned for updates!"
                </p>
            </div>
        </div>
    }
}
