//! Data-fetching hooks.
//!
//! Each hook owns its signals and its polling interval, and hands the
//! component a small struct of copyable read handles:
//!
//! - [`modules_data`] - Indexer module mappings and event history
//! - [`protocol_data`] - Protocol-level contract reads
//! - [`pool_data`] - Curve pool contract reads
//! - [`markets_data`] - TermMax market listing

pub mod markets_data;
pub mod modules_data;
pub mod pool_data;
pub mod protocol_data;

pub use markets_data::*;
pub use modules_data::*;
pub use pool_data::*;
pub use protocol_data::*;
