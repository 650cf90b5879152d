//! Module list assembly, status derivation and ordering.
//!
//! The indexer serves two feeds: current module mappings and the full
//! event history. The functions here merge them into the list the
//! modules page renders, including synthetic entries for proposals
//! that have no mapping yet.

use crate::types::{ModuleHistoryItem, ModuleKind, ModuleStatus, StablecoinModule};
use std::collections::HashSet;

// =============================================================================
// History grouping
// =============================================================================

/// History events grouped per module address.
///
/// Groups keep the order in which addresses first appear in the feed,
/// and events inside a group keep the feed order (newest first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryByModule {
    groups: Vec<(String, Vec<ModuleHistoryItem>)>,
}

impl HistoryByModule {
    /// Group a history feed by lowercased module address.
    pub fn group(events: &[ModuleHistoryItem]) -> Self {
        let mut groups: Vec<(String, Vec<ModuleHistoryItem>)> = Vec::new();
        for event in events {
            let address = event.module.to_lowercase();
            match groups.iter_mut().find(|(key, _)| *key == address) {
                Some((_, items)) => items.push(event.clone()),
                None => groups.push((address, vec![event.clone()])),
            }
        }
        Self { groups }
    }

    /// Events for one module, newest first. Lookup is case-insensitive.
    pub fn get(&self, module: &str) -> &[ModuleHistoryItem] {
        let key = module.to_lowercase();
        self.groups
            .iter()
            .find(|(address, _)| *address == key)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    /// Most recent event for one module.
    pub fn latest(&self, module: &str) -> Option<&ModuleHistoryItem> {
        self.get(module).first()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ModuleHistoryItem])> {
        self.groups
            .iter()
            .map(|(address, items)| (address.as_str(), items.as_slice()))
    }
}

// =============================================================================
// Module list assembly
// =============================================================================

/// Stamp the expiry flag on each mapping: `expired_at < now`.
pub fn apply_expiry(modules: &mut [StablecoinModule], now: u64) {
    for module in modules {
        module.is_expired = module.expired_at < now;
    }
}

/// Merge real mappings with synthetic entries for pending proposals.
///
/// A history group whose address has no mapping and whose latest event
/// is a proposal becomes a synthetic module built from that event.
/// Real mappings always win over synthetics for the same address.
pub fn build_all_modules(
    mappings: &[StablecoinModule],
    history: &HistoryByModule,
    now: u64,
) -> Vec<StablecoinModule> {
    let known: HashSet<String> = mappings.iter().map(|m| m.module.to_lowercase()).collect();

    let mut all = mappings.to_vec();
    apply_expiry(&mut all, now);

    for (address, items) in history.iter() {
        if known.contains(address) {
            continue;
        }
        let Some(latest) = items.first() else {
            continue;
        };
        if latest.kind != ModuleKind::Proposed {
            continue;
        }
        all.push(StablecoinModule {
            chain_id: latest.chain_id,
            module: latest.module.clone(),
            message: latest.message.clone(),
            message_updated: None,
            created_at: latest.created_at,
            updated_at: latest.created_at,
            expired_at: latest.expired_at.unwrap_or(0),
            tx_hash: latest.tx_hash.clone(),
            log_index: latest.log_index,
            blockheight: latest.blockheight,
            caller: latest.caller.clone(),
            // A proposal without an expiry set never counts as expired.
            is_expired: match latest.expired_at {
                Some(expiry) if expiry != 0 => expiry < now,
                _ => false,
            },
        });
    }

    all
}

// =============================================================================
// Status derivation
// =============================================================================

/// Derive a module's lifecycle status from its expiry flag and latest
/// history event.
///
/// Expiry always wins. A non-expired module whose latest event is a
/// revocation still reports Active: the mapping keeps serving until
/// its expiry passes.
pub fn module_status(module: &StablecoinModule, history: &HistoryByModule) -> ModuleStatus {
    let latest_kind = history.latest(&module.module).map(|event| event.kind);

    if module.is_expired {
        return ModuleStatus::Expired;
    }

    if (!module.is_expired && latest_kind == Some(ModuleKind::Revoked))
        || latest_kind == Some(ModuleKind::Set)
    {
        return ModuleStatus::Active;
    }

    if latest_kind == Some(ModuleKind::Proposed) {
        return ModuleStatus::Pending;
    }

    if latest_kind == Some(ModuleKind::Revoked) {
        return ModuleStatus::Revoked;
    }

    ModuleStatus::Unknown
}

/// Sort weight per status: pending first, then active, then revoked,
/// then expired, unknown last.
pub fn status_priority(status: ModuleStatus) -> u8 {
    match status {
        ModuleStatus::Pending => 0,
        ModuleStatus::Active => 1,
        ModuleStatus::Revoked => 3,
        ModuleStatus::Expired => 4,
        ModuleStatus::Unknown => 5,
    }
}

/// Order modules by status priority. Ties keep their current order.
pub fn sort_by_status(modules: &mut [StablecoinModule], history: &HistoryByModule) {
    modules.sort_by_key(|module| status_priority(module_status(module, history)));
}

/// Apply the expired-modules toggle to an already sorted list.
pub fn visible_modules(modules: &[StablecoinModule], show_expired: bool) -> Vec<StablecoinModule> {
    if show_expired {
        return modules.to_vec();
    }
    modules
        .iter()
        .filter(|module| !module.is_expired)
        .cloned()
        .collect()
}

// =============================================================================
// Page overview
// =============================================================================

/// Everything the modules page needs, derived in one pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModulesOverview {
    /// Real and synthetic modules, sorted by status priority.
    pub modules: Vec<StablecoinModule>,
    pub history: HistoryByModule,
    pub active_count: usize,
    pub pending_count: usize,
    pub expired_count: usize,
}

/// Assemble the module overview from the two indexer feeds.
pub fn build_overview(
    mappings: &[StablecoinModule],
    events: &[ModuleHistoryItem],
    now: u64,
) -> ModulesOverview {
    let history = HistoryByModule::group(events);
    let mut modules = build_all_modules(mappings, &history, now);

    // Active counts real mappings only. A pending proposal against an
    // already active module still counts toward the active total.
    let active_count = mappings.iter().filter(|m| m.expired_at >= now).count();
    let pending_count = modules
        .iter()
        .filter(|m| module_status(m, &history) == ModuleStatus::Pending)
        .count();
    let expired_count = modules.iter().filter(|m| m.is_expired).count();

    sort_by_status(&mut modules, &history);

    ModulesOverview {
        modules,
        history,
        active_count,
        pending_count,
        expired_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000;

    fn mapping(module: &str, expired_at: u64) -> StablecoinModule {
        StablecoinModule {
            chain_id: 1,
            module: module.to_string(),
            message: format!("mapping {}", module),
            message_updated: None,
            created_at: NOW - 10_000,
            updated_at: NOW - 5_000,
            expired_at,
            tx_hash: format!("0xtx-{}", module),
            log_index: 0,
            blockheight: 18_000_000,
            caller: "0xcaller".to_string(),
            is_expired: false,
        }
    }

    fn event(module: &str, kind: ModuleKind, created_at: u64) -> ModuleHistoryItem {
        ModuleHistoryItem {
            chain_id: 1,
            tx_hash: format!("0xtx-{}-{}", module, created_at),
            log_index: 0,
            created_at,
            blockheight: 18_000_000,
            caller: "0xcaller".to_string(),
            module: module.to_string(),
            kind,
            message: format!("event {}", module),
            expired_at: Some(NOW + 100_000),
            timelock: Some(86_400),
        }
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let events = vec![
            event("0xBBB", ModuleKind::Proposed, 300),
            event("0xAAA", ModuleKind::Set, 200),
            event("0xbbb", ModuleKind::Proposed, 100),
        ];
        let history = HistoryByModule::group(&events);

        let addresses: Vec<&str> = history.iter().map(|(address, _)| address).collect();
        assert_eq!(addresses, vec!["0xbbb", "0xaaa"]);
        // Mixed-case rows land in the same group, feed order kept.
        assert_eq!(history.get("0xBbB").len(), 2);
        assert_eq!(history.get("0xBbB")[0].created_at, 300);
    }

    #[test]
    fn test_group_lookup_is_case_insensitive() {
        let events = vec![event("0xAbC", ModuleKind::Proposed, 1)];
        let history = HistoryByModule::group(&events);
        assert_eq!(history.get("0xABC").len(), 1);
        assert!(history.get("0xmissing").is_empty());
        assert!(history.latest("0xmissing").is_none());
    }

    #[test]
    fn test_expiry_comparison_is_strict() {
        let mut modules = vec![mapping("0xa", NOW), mapping("0xb", NOW - 1)];
        apply_expiry(&mut modules, NOW);
        // expired_at == now is not yet expired.
        assert!(!modules[0].is_expired);
        assert!(modules[1].is_expired);
    }

    #[test]
    fn test_real_mapping_wins_over_synthetic() {
        let mappings = vec![mapping("0xAAA", NOW + 1_000)];
        let events = vec![event("0xaaa", ModuleKind::Proposed, 100)];
        let history = HistoryByModule::group(&events);

        let all = build_all_modules(&mappings, &history, NOW);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].message, "mapping 0xAAA");
    }

    #[test]
    fn test_synthetic_only_for_latest_proposal() {
        let events = vec![
            // Latest event first: a revoked proposal creates nothing.
            event("0xrevoked", ModuleKind::Revoked, 300),
            event("0xrevoked", ModuleKind::Proposed, 200),
            event("0xset", ModuleKind::Set, 300),
            event("0xpending", ModuleKind::Proposed, 250),
        ];
        let history = HistoryByModule::group(&events);

        let all = build_all_modules(&[], &history, NOW);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].module, "0xpending");
        assert_eq!(all[0].message_updated, None);
        // Synthetic rows reuse the proposal timestamp for both dates.
        assert_eq!(all[0].created_at, 250);
        assert_eq!(all[0].updated_at, 250);
    }

    #[test]
    fn test_synthetic_without_expiry_is_not_expired() {
        let mut proposal = event("0xaaa", ModuleKind::Proposed, 100);
        proposal.expired_at = None;
        let history = HistoryByModule::group(&[proposal]);

        let all = build_all_modules(&[], &history, NOW);
        assert_eq!(all[0].expired_at, 0);
        assert!(!all[0].is_expired);

        let mut zero = event("0xbbb", ModuleKind::Proposed, 100);
        zero.expired_at = Some(0);
        let history = HistoryByModule::group(&[zero]);
        assert!(!build_all_modules(&[], &history, NOW)[0].is_expired);
    }

    #[test]
    fn test_synthetic_with_past_expiry_is_expired() {
        let mut proposal = event("0xaaa", ModuleKind::Proposed, 100);
        proposal.expired_at = Some(NOW - 1);
        let history = HistoryByModule::group(&[proposal]);

        let all = build_all_modules(&[], &history, NOW);
        assert!(all[0].is_expired);
    }

    #[test]
    fn test_expired_status_wins_over_history() {
        let mut module = mapping("0xaaa", NOW - 1);
        module.is_expired = true;
        let history = HistoryByModule::group(&[event("0xaaa", ModuleKind::Proposed, 100)]);
        assert_eq!(module_status(&module, &history), ModuleStatus::Expired);
    }

    #[test]
    fn test_revoked_mapping_still_reports_active() {
        // The mapping keeps serving until its expiry passes, so a
        // revocation on a live module does not change its status.
        let module = mapping("0xaaa", NOW + 1_000);
        let history = HistoryByModule::group(&[event("0xaaa", ModuleKind::Revoked, 100)]);
        assert_eq!(module_status(&module, &history), ModuleStatus::Active);
    }

    #[test]
    fn test_status_from_latest_event() {
        let module = mapping("0xaaa", NOW + 1_000);

        let set = HistoryByModule::group(&[event("0xaaa", ModuleKind::Set, 100)]);
        assert_eq!(module_status(&module, &set), ModuleStatus::Active);

        let proposed = HistoryByModule::group(&[event("0xaaa", ModuleKind::Proposed, 100)]);
        assert_eq!(module_status(&module, &proposed), ModuleStatus::Pending);

        let none = HistoryByModule::default();
        assert_eq!(module_status(&module, &none), ModuleStatus::Unknown);
    }

    #[test]
    fn test_status_priorities() {
        assert_eq!(status_priority(ModuleStatus::Pending), 0);
        assert_eq!(status_priority(ModuleStatus::Active), 1);
        assert_eq!(status_priority(ModuleStatus::Revoked), 3);
        assert_eq!(status_priority(ModuleStatus::Expired), 4);
        assert_eq!(status_priority(ModuleStatus::Unknown), 5);
    }

    #[test]
    fn test_sort_orders_by_status_priority() {
        let events = vec![
            event("0xactive", ModuleKind::Set, 400),
            event("0xpending", ModuleKind::Proposed, 300),
        ];
        let history = HistoryByModule::group(&events);

        let mut modules = vec![
            mapping("0xunknown", NOW + 1_000),
            mapping("0xexpired", NOW - 1),
            mapping("0xactive", NOW + 1_000),
            mapping("0xpending", NOW + 1_000),
        ];
        apply_expiry(&mut modules, NOW);
        sort_by_status(&mut modules, &history);

        let order: Vec<&str> = modules.iter().map(|m| m.module.as_str()).collect();
        assert_eq!(order, vec!["0xpending", "0xactive", "0xexpired", "0xunknown"]);
    }

    #[test]
    fn test_sort_keeps_tie_order() {
        let events = vec![
            event("0xfirst", ModuleKind::Proposed, 300),
            event("0xsecond", ModuleKind::Proposed, 200),
        ];
        let history = HistoryByModule::group(&events);

        let mut modules = build_all_modules(&[], &history, NOW);
        sort_by_status(&mut modules, &history);

        // Both pending, so history feed order is kept.
        assert_eq!(modules[0].module, "0xfirst");
        assert_eq!(modules[1].module, "0xsecond");
    }

    #[test]
    fn test_visible_modules_toggle() {
        let mut modules = vec![mapping("0xa", NOW + 1_000), mapping("0xb", NOW - 1)];
        apply_expiry(&mut modules, NOW);

        let hidden = visible_modules(&modules, false);
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].module, "0xa");

        let shown = visible_modules(&modules, true);
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn test_overview_counts_and_order() {
        let mappings = vec![mapping("0xlive", NOW + 1_000), mapping("0xgone", NOW - 1)];
        let events = vec![
            event("0xnew", ModuleKind::Proposed, 500),
            event("0xlive", ModuleKind::Set, 400),
        ];

        let overview = build_overview(&mappings, &events, NOW);
        assert_eq!(overview.modules.len(), 3);
        assert_eq!(overview.active_count, 1);
        assert_eq!(overview.pending_count, 1);
        assert_eq!(overview.expired_count, 1);
        // Pending synthetic sorts ahead of the live mapping.
        assert_eq!(overview.modules[0].module, "0xnew");
        assert_eq!(overview.modules[1].module, "0xlive");
        assert_eq!(overview.modules[2].module, "0xgone");
    }

    #[test]
    fn test_overview_active_count_includes_boundary() {
        let mappings = vec![mapping("0xedge", NOW)];
        let overview = build_overview(&mappings, &[], NOW);
        assert_eq!(overview.active_count, 1);
        assert_eq!(overview.expired_count, 0);
    }
}
