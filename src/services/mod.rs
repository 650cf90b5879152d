//! External data services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`graphql`] - GraphQL transport to the Ponder indexer
//! - [`indexer`] - Stablecoin module queries against the indexer
//! - [`chain`] - Read-only Ethereum contract calls over JSON-RPC
//! - [`markets`] - TermMax fixed-rate market listings

pub mod chain;
pub mod graphql;
pub mod indexer;
pub mod markets;

pub use chain::*;
pub use indexer::*;
pub use markets::*;
