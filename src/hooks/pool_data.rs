//! Curve pool contract reads with background refresh.

use crate::config::REFRESH_INTERVAL_MS;
use crate::services::chain;
use crate::state::{derive_pool_stats, PoolStats};
use gloo_timers::callback::Interval;
use leptos::*;

/// Read handles over the pool composition stats.
#[derive(Clone, Copy)]
pub struct PoolData {
    /// `None` until the first batch lands.
    pub stats: ReadSignal<Option<PoolStats>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

/// Fetch pool balances, LP supply and adapter holdings, refreshing in
/// the background every 30 seconds.
pub fn use_pool_data() -> PoolData {
    let (stats, set_stats) = create_signal(None::<PoolStats>);
    let (is_loading, set_is_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let fetch = move || {
        spawn_local(async move {
            match chain::fetch_pool_reads().await {
                Ok(reads) => {
                    set_stats.set(Some(derive_pool_stats(&reads)));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("❌ Failed to fetch pool data: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    fetch();
    let interval = Interval::new(REFRESH_INTERVAL_MS, fetch);
    on_cleanup(move || drop(interval));

    PoolData {
        stats,
        is_loading,
        error,
    }
}
