//! TermMax market listing, fetched once per page visit.

use crate::services::markets::list_markets;
use crate::state::{build_markets, TermMaxMarket};
use chrono::Utc;
use leptos::*;

/// Read handles over the joined market rows.
#[derive(Clone, Copy)]
pub struct MarketsData {
    pub markets: ReadSignal<Vec<TermMaxMarket>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

/// Fetch and join the TermMax borrow markets for a chain.
pub fn use_termmax_markets(chain_id: u64) -> MarketsData {
    let (markets, set_markets) = create_signal(Vec::<TermMaxMarket>::new());
    let (is_loading, set_is_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    spawn_local(async move {
        match list_markets(chain_id).await {
            Ok(data) => {
                set_markets.set(build_markets(&data, Utc::now()));
                set_error.set(None);
            }
            Err(e) => {
                log::error!("❌ Failed to fetch TermMax markets: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_is_loading.set(false);
    });

    MarketsData {
        markets,
        is_loading,
        error,
    }
}
