//! Protocol-level contract reads with background refresh.

use crate::config::REFRESH_INTERVAL_MS;
use crate::services::chain;
use crate::state::{derive_protocol_stats, ProtocolStats};
use gloo_timers::callback::Interval;
use leptos::*;

/// Read handles over the headline protocol stats.
#[derive(Clone, Copy)]
pub struct ProtocolData {
    pub stats: ReadSignal<ProtocolStats>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

/// Fetch supply, DEX liquidity and spot price, refreshing in the
/// background every 30 seconds.
pub fn use_protocol_data() -> ProtocolData {
    let (stats, set_stats) = create_signal(ProtocolStats::default());
    let (is_loading, set_is_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let fetch = move || {
        spawn_local(async move {
            let result = chain::fetch_protocol_reads()
                .await
                .and_then(|reads| derive_protocol_stats(&reads));
            match result {
                Ok(derived) => {
                    set_stats.set(derived);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("❌ Failed to fetch protocol data: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    fetch();
    let interval = Interval::new(REFRESH_INTERVAL_MS, fetch);
    on_cleanup(move || drop(interval));

    ProtocolData {
        stats,
        is_loading,
        error,
    }
}
