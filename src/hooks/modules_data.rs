//! Indexer-backed module data with background refresh.

use crate::config::REFRESH_INTERVAL_MS;
use crate::services::indexer;
use crate::state::apply_expiry;
use crate::types::{ModuleHistoryItem, StablecoinModule};
use crate::utils::unix_now;
use gloo_timers::callback::Interval;
use leptos::*;

/// Read handles over the two indexer feeds.
#[derive(Clone, Copy)]
pub struct ModulesData {
    /// Mappings as fetched, expiry not yet stamped.
    pub modules: ReadSignal<Vec<StablecoinModule>>,
    /// Mappings that have not passed their expiry, stamped on read.
    pub active_modules: Signal<Vec<StablecoinModule>>,
    /// Event history across all modules, newest first.
    pub history: ReadSignal<Vec<ModuleHistoryItem>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    pub refetch: Callback<()>,
}

/// Fetch module mappings and the full event history for a chain,
/// refreshing in the background every 30 seconds.
///
/// `is_loading` covers the first fetch only; background refreshes
/// update the signals in place.
pub fn use_module_data_all(chain_id: u64) -> ModulesData {
    let (modules, set_modules) = create_signal(Vec::<StablecoinModule>::new());
    let (history, set_history) = create_signal(Vec::<ModuleHistoryItem>::new());
    let (is_loading, set_is_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let fetch = move || {
        spawn_local(async move {
            let mappings = indexer::module_mappings(chain_id).await;
            let events = indexer::module_history_all(chain_id).await;

            let mut failure = None;
            match mappings {
                Ok(items) => set_modules.set(items),
                Err(e) => {
                    log::error!("❌ Failed to fetch module mappings: {}", e);
                    failure = Some(e.to_string());
                }
            }
            match events {
                Ok(items) => set_history.set(items),
                Err(e) => {
                    log::error!("❌ Failed to fetch module history: {}", e);
                    // The mappings error wins when both feeds fail.
                    if failure.is_none() {
                        failure = Some(e.to_string());
                    }
                }
            }

            set_error.set(failure);
            set_is_loading.set(false);
        });
    };

    fetch();
    let interval = Interval::new(REFRESH_INTERVAL_MS, fetch);
    on_cleanup(move || drop(interval));

    let active_modules = Signal::derive(move || {
        let mut stamped = modules.get();
        apply_expiry(&mut stamped, unix_now());
        stamped.retain(|module| !module.is_expired);
        stamped
    });

    ModulesData {
        modules,
        active_modules,
        history,
        is_loading,
        error,
        refetch: Callback::new(move |_| fetch()),
    }
}
