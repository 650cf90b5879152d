//! Maturity page listing TermMax fixed-term borrow markets.

use leptos::*;
use leptos_meta::Title;

use crate::components::Tabs;
use crate::config::MAINNET_CHAIN_ID;
use crate::hooks::use_termmax_markets;
use crate::state::TermMaxMarket;
use crate::utils::{format_address, format_value};

const TAB_LABELS: [&str; 3] = ["All Markets", "USDU Markets", "Active Markets"];

#[component]
pub fn MaturityPage() -> impl IntoView {
    let data = use_termmax_markets(MAINNET_CHAIN_ID);
    let (selected_tab, set_selected_tab) = create_signal(0usize);

    let filtered = create_memo(move |_| {
        let markets = data.markets.get();
        match selected_tab.get() {
            1 => markets
                .into_iter()
                .filter(|market| market.is_usdu_market)
                .collect::<Vec<_>>(),
            2 => markets
                .into_iter()
                .filter(|market| !market.is_expired)
                .collect(),
            _ => markets,
        }
    });

    view! {
        <Title text="Maturity - USDU Finance"/>
        <div class="dashboard-page">
            <div class="page-head">
                <h1>"Maturity"</h1>
                <p class="page-sub">
                    "Manage repayment and rolling of existing positions. Monitor upcoming \
                     maturities and optimize your position strategies."
                </p>
            </div>

            <Tabs
                labels={TAB_LABELS
                    .iter()
                    .map(|label| label.to_string())
                    .collect::<Vec<_>>()}
                selected=selected_tab
                on_select=move |idx| set_selected_tab.set(idx)
            />

            {move || {
                if data.is_loading.get() {
                    view! {
                        <div class="panel center">
                            <p>"Loading markets..."</p>
                        </div>
                    }
                    .into_view()
                } else if let Some(error) = data.error.get() {
                    view! {
                        <div class="error-box">
                            <p>{format!("Error loading markets: {}", error)}</p>
                        </div>
                    }
                    .into_view()
                } else if filtered.get().is_empty() {
                    view! {
                        <div class="panel center">
                            <p>"No markets found"</p>
                        </div>
                    }
                    .into_view()
                } else {
                    view! { <MarketTable markets=filtered/> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn MarketTable(markets: Memo<Vec<TermMaxMarket>>) -> impl IntoView {
    view! {
        <div class="table-card">
            <div class="table-row market-row table-head">
                <div>"Market"</div>
                <div>"Collateral"</div>
                <div>"Maturity"</div>
                <div>"Borrow APY"</div>
                <div>"Capacity"</div>
                <div>"Status"</div>
            </div>
            <For
                each=move || markets.get()
                key=|market| market.market.contracts.market_addr.clone()
                children=move |market: TermMaxMarket| {
                    let underlying = asset_label(
                        market.underlying.as_ref().map(|a| a.symbol.as_str()),
                        &market.market.contracts.underlying_addr,
                    );
                    let collateral = asset_label(
                        market.collateral.as_ref().map(|a| a.symbol.as_str()),
                        &market.market.contracts.collateral_addr,
                    );
                    let days = match market.days_to_maturity {
                        Some(d) if d >= 0 => format!("{} days", d),
                        Some(_) => "Matured".to_string(),
                        None => "...".to_string(),
                    };
                    let date = market
                        .market
                        .maturity
                        .get(..10)
                        .unwrap_or(&market.market.maturity)
                        .to_string();
                    let apy = market
                        .borrow_apy()
                        .map(|apy| format!("{:.2}%", apy * 100.0))
                        .unwrap_or_else(|| "...".to_string());
                    let capacity = market.borrow_capacity_usd().map(|usd| usd.to_string());
                    let capacity = format_value(capacity.as_deref(), "$");
                    let (chip_class, chip_label) = if market.is_expired {
                        ("chip chip-gray", "Matured")
                    } else {
                        ("chip chip-green", "Active")
                    };
                    view! {
                        <div class="table-row market-row">
                            <div>
                                <p class="detail-value">{market.market.symbol.clone()}</p>
                                <p class="detail-label">
                                    {underlying}
                                    {market
                                        .is_usdu_market
                                        .then(|| view! { <span class="chip chip-blue">"USDU"</span> })}
                                </p>
                            </div>
                            <div class="detail-value">{collateral}</div>
                            <div>
                                <p class="detail-value">{days}</p>
                                <p class="detail-label">{date}</p>
                            </div>
                            <div class="accent">{apy}</div>
                            <div class="detail-value">{capacity}</div>
                            <div>
                                <span class=chip_class>{chip_label}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn asset_label(symbol: Option<&str>, address: &str) -> String {
    match symbol {
        Some(symbol) => symbol.to_string(),
        None => format_address(address),
    }
}
