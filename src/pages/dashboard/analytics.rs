//! Analytics page with live Curve pool composition.

use leptos::*;
use leptos_meta::Title;

use crate::hooks::use_pool_data;

fn percentage_text(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{:.2}%", pct),
        None => "...".to_string(),
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let pool = use_pool_data();

    view! {
        <Title text="Analytics - USDU Finance"/>
        <div class="dashboard-page">
            <div class="page-head">
                <h1>"Analytics"</h1>
                <p class="page-sub">"Track protocol metrics and performance insights"</p>
            </div>

            <div class="chart-grid">
                <div class="panel">
                    <h3>"USDU Price"</h3>
                    <div class="chart-placeholder">
                        <p>"Chart visualization coming soon"</p>
                    </div>
                </div>
                <div class="panel">
                    <h3>"Total Value Locked"</h3>
                    <div class="chart-placeholder">
                        <p>"TVL trends coming soon"</p>
                    </div>
                </div>
            </div>

            <div class="panel">
                <div class="panel-head">
                    <h3>"Curve Pool Composition"</h3>
                    {move || {
                        pool.stats
                            .get()
                            .filter(|stats| stats.pool_imbalance)
                            .map(|_| view! { <span class="chip chip-yellow">"Imbalanced"</span> })
                    }}
                </div>
                {move || {
                    pool.error.get().map(|error| {
                        view! {
                            <div class="error-box">
                                <p>{format!("Error loading pool data: {}", error)}</p>
                            </div>
                        }
                    })
                }}
                <div class="detail-grid cols-4">
                    <div>
                        <p class="detail-label">"USDU Share"</p>
                        <p class="metric-value">
                            {move || percentage_text(pool.stats.get().and_then(|s| s.usdu_percentage()))}
                        </p>
                    </div>
                    <div>
                        <p class="detail-label">"USDC Share"</p>
                        <p class="metric-value">
                            {move || percentage_text(pool.stats.get().and_then(|s| s.usdc_percentage()))}
                        </p>
                    </div>
                    <div>
                        <p class="detail-label">"Adapter LP Share"</p>
                        <p class="metric-value">
                            {move || percentage_text(pool.stats.get().and_then(|s| s.adapter_lp_percentage()))}
                        </p>
                    </div>
                    <div>
                        <p class="detail-label">"USDU Price"</p>
                        <p class="metric-value">
                            {move || {
                                pool.stats
                                    .get()
                                    .and_then(|s| s.usdu_price_text())
                                    .map(|price| format!("${}", price))
                                    .unwrap_or_else(|| "...".to_string())
                            }}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
