//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Module Types** - Stablecoin module mappings from the indexer
//! - **History Types** - Module event history (Proposed / Set / Revoked)
//! - **Status Types** - Derived module lifecycle status
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Serde helpers
// =============================================================================

/// Deserializers for the indexer's `BigInt` scalar.
///
/// Ponder serializes `BigInt` values as JSON strings, but plain integer
/// fields arrive as numbers. Both forms are accepted here.
pub mod bigint {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    fn to_u64<E: serde::de::Error>(raw: Raw) -> Result<u64, E> {
        match raw {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.parse::<u64>().map_err(E::custom),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        to_u64(Raw::deserialize(deserializer)?)
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            Some(raw) => to_u64(raw).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Module Types
// =============================================================================

/// A stablecoin module mapping as served by the indexer.
///
/// One row per module address that currently has (or had) a mapping on
/// chain. `is_expired` is not part of the wire format; it is stamped
/// after fetching by comparing `expired_at` against the current time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StablecoinModule {
    pub chain_id: u64,
    /// Module contract address.
    pub module: String,
    /// Human-readable description attached to the proposal.
    pub message: String,
    /// Description attached to a later update, if any.
    pub message_updated: Option<String>,
    #[serde(deserialize_with = "bigint::deserialize")]
    pub created_at: u64,
    #[serde(deserialize_with = "bigint::deserialize")]
    pub updated_at: u64,
    /// Unix timestamp after which the mapping no longer serves.
    #[serde(deserialize_with = "bigint::deserialize")]
    pub expired_at: u64,
    pub tx_hash: String,
    pub log_index: u64,
    #[serde(deserialize_with = "bigint::deserialize")]
    pub blockheight: u64,
    pub caller: String,
    /// Stamped locally: `expired_at < now`.
    #[serde(skip)]
    pub is_expired: bool,
}

// =============================================================================
// History Types
// =============================================================================

/// Kind of a module history event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    /// Module proposed, timelock running.
    Proposed,
    /// Proposal applied after the timelock.
    Set,
    /// Proposal or mapping revoked.
    Revoked,
}

impl ModuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::Proposed => "Proposed",
            ModuleKind::Set => "Set",
            ModuleKind::Revoked => "Revoked",
        }
    }

    /// Get CSS class for the event badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            ModuleKind::Proposed => "badge-proposed",
            ModuleKind::Set => "badge-set",
            ModuleKind::Revoked => "badge-revoked",
        }
    }
}

/// A single module lifecycle event from the indexer, newest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleHistoryItem {
    pub chain_id: u64,
    pub tx_hash: String,
    pub log_index: u64,
    #[serde(deserialize_with = "bigint::deserialize")]
    pub created_at: u64,
    #[serde(deserialize_with = "bigint::deserialize")]
    pub blockheight: u64,
    pub caller: String,
    pub module: String,
    pub kind: ModuleKind,
    pub message: String,
    #[serde(default, deserialize_with = "bigint::optional")]
    pub expired_at: Option<u64>,
    /// Timelock duration in seconds, set on proposals.
    #[serde(default, deserialize_with = "bigint::optional")]
    pub timelock: Option<u64>,
}

// =============================================================================
// Status Types
// =============================================================================

/// Lifecycle status of a module, derived from its mapping and latest
/// history event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleStatus {
    /// Proposed, waiting out the timelock.
    Pending,
    /// Mapping is live and serving.
    Active,
    /// Revoked.
    Revoked,
    /// Expiry timestamp has passed.
    Expired,
    /// No history to classify from.
    Unknown,
}

impl ModuleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleStatus::Pending => "Pending",
            ModuleStatus::Active => "Active",
            ModuleStatus::Revoked => "Revoked",
            ModuleStatus::Expired => "Expired",
            ModuleStatus::Unknown => "Unknown",
        }
    }

    /// Get CSS class for the status pill.
    pub fn css_class(&self) -> &'static str {
        match self {
            ModuleStatus::Pending => "status-pending",
            ModuleStatus::Active => "status-active",
            ModuleStatus::Revoked => "status-revoked",
            ModuleStatus::Expired => "status-expired",
            ModuleStatus::Unknown => "status-unknown",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ModuleStatus::Pending => "⏳",
            ModuleStatus::Active => "✅",
            ModuleStatus::Revoked => "❌",
            ModuleStatus::Expired => "❌",
            ModuleStatus::Unknown => "🕒",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// Indexer query failed or returned errors.
    Indexer(String),
    /// JSON-RPC call failed.
    Rpc(String),
    /// Response could not be decoded.
    Decode(String),
    /// External REST API error.
    Api(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Indexer(msg) => write!(f, "Indexer error: {}", msg),
            AppError::Rpc(msg) => write!(f, "RPC error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Api(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_deserializes_bigint_strings() {
        let json = r#"{
            "chainId": 1,
            "module": "0xAbC0000000000000000000000000000000000001",
            "message": "Savings module",
            "messageUpdated": null,
            "createdAt": "1700000000",
            "updatedAt": "1700000500",
            "expiredAt": "1800000000",
            "txHash": "0xdeadbeef",
            "logIndex": 3,
            "blockheight": "18000000",
            "caller": "0xCa110000000000000000000000000000000000001"
        }"#;

        let module: StablecoinModule = serde_json::from_str(json).unwrap();
        assert_eq!(module.chain_id, 1);
        assert_eq!(module.created_at, 1_700_000_000);
        assert_eq!(module.expired_at, 1_800_000_000);
        assert_eq!(module.blockheight, 18_000_000);
        assert_eq!(module.message_updated, None);
        // Not on the wire, defaults to false until stamped.
        assert!(!module.is_expired);
    }

    #[test]
    fn test_module_deserializes_bigint_numbers() {
        // The same fields are accepted as plain JSON numbers.
        let json = r#"{
            "chainId": 1,
            "module": "0xabc",
            "message": "m",
            "messageUpdated": "updated note",
            "createdAt": 10,
            "updatedAt": 20,
            "expiredAt": 30,
            "txHash": "0x1",
            "logIndex": 0,
            "blockheight": 40,
            "caller": "0x2"
        }"#;

        let module: StablecoinModule = serde_json::from_str(json).unwrap();
        assert_eq!(module.created_at, 10);
        assert_eq!(module.message_updated.as_deref(), Some("updated note"));
    }

    #[test]
    fn test_history_item_optional_fields() {
        let json = r#"{
            "chainId": 1,
            "txHash": "0xaa",
            "logIndex": 1,
            "createdAt": "1700000000",
            "blockheight": "18000001",
            "caller": "0xcc",
            "module": "0xdd",
            "kind": "Proposed",
            "message": "proposal",
            "expiredAt": null,
            "timelock": "86400"
        }"#;

        let item: ModuleHistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ModuleKind::Proposed);
        assert_eq!(item.expired_at, None);
        assert_eq!(item.timelock, Some(86_400));
    }

    #[test]
    fn test_history_item_missing_timelock() {
        // Set and Revoked events carry no timelock at all.
        let json = r#"{
            "chainId": 1,
            "txHash": "0xaa",
            "logIndex": 1,
            "createdAt": 5,
            "blockheight": 6,
            "caller": "0xcc",
            "module": "0xdd",
            "kind": "Set",
            "message": "applied"
        }"#;

        let item: ModuleHistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ModuleKind::Set);
        assert_eq!(item.timelock, None);
        assert_eq!(item.expired_at, None);
    }

    #[test]
    fn test_bigint_rejects_garbage() {
        let json = r#"{"chainId": 1, "module": "0x", "message": "", "messageUpdated": null,
            "createdAt": "not-a-number", "updatedAt": 0, "expiredAt": 0,
            "txHash": "0x", "logIndex": 0, "blockheight": 0, "caller": "0x"}"#;
        assert!(serde_json::from_str::<StablecoinModule>(json).is_err());
    }
}
