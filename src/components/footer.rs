//! Site footer shared by the marketing pages

use chrono::{Datelike, Local};
use leptos::*;
use leptos_router::A;

use crate::config;

fn footer_link(href: String, label: &'static str) -> impl IntoView {
    view! {
        <li>
            <a href=href target="_blank" rel="noopener noreferrer" class="footer-link">
                {label}
                <span class="external-mark">"↗"</span>
            </a>
        </li>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Local::now().year();
    let token_url = format!("{}/token/{}", config::ETHERSCAN_URL, config::USDU_TOKEN);

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <A href="/" class="brand">{config::APP_NAME}</A>
                        <p class="footer-tagline">"Decentralized Finance for the USDU Protocol"</p>
                        <p class="footer-note">"Available on Ethereum"</p>
                    </div>

                    <div>
                        <h3 class="footer-heading">"Protocol"</h3>
                        <ul class="footer-links">
                            {footer_link(token_url, "Etherscan")}
                            {footer_link(config::COINGECKO_URL.to_string(), "CoinGecko")}
                            {footer_link(config::DEFILLAMA_URL.to_string(), "DeFiLlama")}
                            {footer_link(config::GOVERNANCE_URL.to_string(), "Governance")}
                        </ul>
                    </div>

                    <div>
                        <h3 class="footer-heading">"Community"</h3>
                        <ul class="footer-links">
                            {footer_link(config::GITHUB_URL.to_string(), "GitHub")}
                            {footer_link(config::TWITTER_URL.to_string(), "Twitter")}
                            {footer_link(config::TELEGRAM_URL.to_string(), "Telegram")}
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div>{format!("© {} {}. All rights reserved.", year, config::APP_NAME)}</div>
                    <div class="footer-version">
                        {format!("Application Version {}", env!("CARGO_PKG_VERSION"))}
                    </div>
                </div>
            </div>
        </footer>
    }
}
