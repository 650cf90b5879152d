//! Module governance view: live mappings, proposal history, countdowns

use gloo_timers::callback::Interval;
use leptos::*;

use crate::components::{Accordion, StatItem, StatsCard};
use crate::config::{COUNTDOWN_TICK_MS, ETHERSCAN_URL, MAINNET_CHAIN_ID};
use crate::hooks::use_module_data_all;
use crate::state::{build_overview, module_status, timelock_status, visible_modules};
use crate::types::{ModuleHistoryItem, ModuleStatus, StablecoinModule};
use crate::utils::{format_address, format_date, format_time, format_timestamp, unix_now};

/// One resolved row of the module list.
///
/// Rows are precomputed so the `For` key can cover everything a card
/// displays and stale cards get swapped out when their data changes.
#[derive(Clone, PartialEq)]
struct ModuleRow {
    module: StablecoinModule,
    status: ModuleStatus,
    history: Vec<ModuleHistoryItem>,
}

#[component]
pub fn ModulesSection() -> impl IntoView {
    let data = use_module_data_all(MAINNET_CHAIN_ID);
    let (show_expired, set_show_expired) = create_signal(false);

    // Second clock driving expiry stamps and timelock countdowns.
    let (now, set_now) = create_signal(unix_now());
    let tick = Interval::new(COUNTDOWN_TICK_MS, move || set_now.set(unix_now()));
    on_cleanup(move || drop(tick));

    let overview =
        create_memo(move |_| build_overview(&data.modules.get(), &data.history.get(), now.get()));

    let rows = create_memo(move |_| {
        let overview = overview.get();
        visible_modules(&overview.modules, show_expired.get())
            .into_iter()
            .map(|module| {
                let status = module_status(&module, &overview.history);
                let history = overview.history.get(&module.module).to_vec();
                ModuleRow {
                    module,
                    status,
                    history,
                }
            })
            .collect::<Vec<_>>()
    });

    let stats = Signal::derive(move || {
        let overview = overview.get();
        vec![
            StatItem::new(
                overview.modules.len().to_string(),
                "Total Modules",
                "stat-default",
            ),
            StatItem::new(
                overview.active_count.to_string(),
                "Active Modules",
                "stat-green",
            ),
            StatItem::new(
                overview.pending_count.to_string(),
                "Pending Proposals",
                "stat-yellow",
            ),
            StatItem::new(
                overview.expired_count.to_string(),
                "Expired Modules",
                "stat-gray",
            ),
        ]
    });

    view! {
        <div class="container modules-section">
            {move || {
                if data.is_loading.get() {
                    view! {
                        <div class="page-head">
                            <h1>"Modules"</h1>
                            <p class="page-sub">"Loading modules..."</p>
                            <div class="loading-indicator">"⏳"</div>
                        </div>
                    }
                    .into_view()
                } else if let Some(error) = data.error.get() {
                    view! {
                        <div class="page-head">
                            <h1>"Modules"</h1>
                            <p class="page-sub">"Manage protocol modules and governance"</p>
                            <div class="error-box">
                                <p>{format!("Error loading modules: {}", error)}</p>
                            </div>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="page-head">
                            <h1>"Modules"</h1>
                            <p class="page-sub">
                                "Manage protocol modules using expiration-based proposals, \
                                 review and revoke them during the timelock phase, or apply \
                                 the changes after the timelock."
                            </p>
                        </div>

                        <StatsCard stats=stats/>

                        <div class="module-list">
                            <Show
                                when=move || rows.get().is_empty()
                                fallback=|| view! { }
                            >
                                <div class="empty-box">
                                    <p>
                                        {move || {
                                            if show_expired.get() {
                                                "No modules found"
                                            } else {
                                                "No active modules found"
                                            }
                                        }}
                                    </p>
                                </div>
                            </Show>

                            <For
                                each=move || rows.get()
                                key=|row| {
                                    (
                                        row.module.module.clone(),
                                        row.module.updated_at,
                                        row.module.is_expired,
                                        row.status,
                                        row.history.len(),
                                    )
                                }
                                children=move |row: ModuleRow| {
                                    view! {
                                        <ModuleCard
                                            module=row.module
                                            status=row.status
                                            history=row.history
                                            now=now
                                        />
                                    }
                                }
                            />

                            <Show
                                when=move || { overview.get().expired_count > 0 }
                                fallback=|| view! { }
                            >
                                <div class="toggle-expired">
                                    <button
                                        class="btn btn-secondary"
                                        on:click=move |_| set_show_expired.update(|v| *v = !*v)
                                    >
                                        {move || {
                                            let count = overview.get().expired_count;
                                            if show_expired.get() {
                                                format!("Hide Expired Modules ({})", count)
                                            } else {
                                                format!("Show Expired Modules ({})", count)
                                            }
                                        }}
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ModuleCard(
    module: StablecoinModule,
    status: ModuleStatus,
    history: Vec<ModuleHistoryItem>,
    now: ReadSignal<u64>,
) -> impl IntoView {
    let title = if module.message.is_empty() {
        "Unnamed Module".to_string()
    } else {
        module.message.clone()
    };
    let address_url = format!("{}/address/{}", ETHERSCAN_URL, module.module);
    let tx_url = format!("{}/tx/{}", ETHERSCAN_URL, module.tx_hash);

    let update_note = module
        .message_updated
        .as_ref()
        .filter(|text| !text.is_empty())
        .map(|text| {
            view! {
                <p class="module-update">
                    <span class="label">"Update: "</span>
                    {text.clone()}
                </p>
            }
        });

    let history_count = history.len();
    let history = store_value(history);

    view! {
        <div class="module-card">
            <div class="module-card-body">
                <div class="module-title-row">
                    <h3>{title}</h3>
                    <span class=format!("status-badge {}", status.css_class())>
                        {status.emoji()}
                        " "
                        {status.label()}
                    </span>
                </div>

                <a href=address_url target="_blank" rel="noopener noreferrer" class="mono-link">
                    {format_address(&module.module)}
                    <span class="external-mark">"↗"</span>
                </a>

                {update_note}

                <div class="detail-grid cols-3">
                    <div>
                        <p class="detail-label">"Last Updated"</p>
                        <p class="detail-value">{format_timestamp(module.updated_at)}</p>
                    </div>
                    <div>
                        <p class="detail-label">"Expires"</p>
                        <p class="detail-value">{format_timestamp(module.expired_at)}</p>
                    </div>
                    <div>
                        <p class="detail-label">"Transaction"</p>
                        <a href=tx_url target="_blank" rel="noopener noreferrer" class="mono-link">
                            {format_address(&module.tx_hash)}
                            <span class="external-mark">"↗"</span>
                        </a>
                    </div>
                </div>
            </div>

            <Show
                when=move || { history_count > 0 }
                fallback=|| view! { }
            >
                <div class="module-history">
                    <Accordion title=format!("History ({} events)", history_count)>
                        {move || {
                            history.with_value(|items| {
                                items
                                    .iter()
                                    .map(|item| {
                                        view! { <HistoryEntry item=item.clone() now=now/> }
                                    })
                                    .collect_view()
                            })
                        }}
                    </Accordion>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn HistoryEntry(item: ModuleHistoryItem, now: ReadSignal<u64>) -> impl IntoView {
    let tx_url = format!("{}/tx/{}", ETHERSCAN_URL, item.tx_hash);
    let created_at = item.created_at;
    let timelock = item.timelock;

    // The expiry cell only renders for events that actually carry one.
    let expires = item.expired_at.filter(|expiry| *expiry != 0).map(|expiry| {
        view! {
            <div>
                <p class="detail-label">"Expires At"</p>
                <p class="detail-value">{format_timestamp(expiry)}</p>
            </div>
        }
    });

    view! {
        <div class="history-entry">
            <div class="history-entry-head">
                <div class="history-entry-title">
                    <span class=format!("kind-badge {}", item.kind.css_class())>
                        {item.kind.label()}
                    </span>
                    <span class="history-message">{item.message.clone()}</span>
                </div>
                <div class="history-entry-date">
                    <div>{format_date(created_at)}</div>
                    <div>{format_time(created_at)}</div>
                </div>
            </div>

            <div class="detail-grid cols-4">
                <div>
                    <p class="detail-label">"Transaction"</p>
                    <a href=tx_url target="_blank" rel="noopener noreferrer" class="mono-link">
                        {format_address(&item.tx_hash)}
                        <span class="external-mark">"↗"</span>
                    </a>
                </div>
                <div>
                    <p class="detail-label">"Caller"</p>
                    <p class="detail-value mono">{format_address(&item.caller)}</p>
                </div>
                {expires}
                {move || {
                    timelock_status(created_at, timelock, now.get()).map(|countdown| {
                        let label = if countdown.is_past() { "Timelock Ended" } else { "Timelock" };
                        view! {
                            <div>
                                <p class="detail-label">{label}</p>
                                <p class="detail-value" class:countdown={!countdown.is_past()}>
                                    {countdown.display().to_string()}
                                </p>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}
