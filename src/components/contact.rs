//! "Join the Community" landing section

use leptos::*;

use crate::config;

#[component]
pub fn Contact() -> impl IntoView {
    let channels = [
        (config::GITHUB_URL, "GitHub"),
        (config::TWITTER_URL, "Twitter"),
        (config::TELEGRAM_URL, "Telegram"),
    ];

    view! {
        <section id="contact" class="section section-alt">
            <div class="container">
                <div class="section-intro">
                    <h2>"Join the Community"</h2>
                    <p>
                        "Connect with us and stay updated on the latest developments \
                         in the USDU ecosystem."
                    </p>
                </div>

                <div class="contact-links">
                    {channels
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=*href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="contact-tile"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
