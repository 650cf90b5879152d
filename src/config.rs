//! Application configuration.
//!
//! Centralized configuration for the USDU Finance frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

use alloy_primitives::{address, Address};

/// Application name, used for page titles.
pub const APP_NAME: &str = "USDU Finance";

/// GraphQL endpoint of the Ponder indexer.
///
/// Serves the stablecoin module mappings and their event history.
pub const GRAPHQL_URL: &str = "https://indexer.usdu.finance/graphql";

/// Ethereum mainnet JSON-RPC endpoint.
///
/// All contract reads go through this node as batched `eth_call`s.
pub const RPC_URL: &str = "https://eth.llamarpc.com";

/// TermMax REST API base URL, for the fixed-rate borrow markets.
pub const TERMMAX_API_URL: &str = "https://api.termmax.ts.finance";

/// Etherscan base URL for address and transaction links.
pub const ETHERSCAN_URL: &str = "https://etherscan.io";

/// Chain id the app reads from.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// USDU stablecoin token (18 decimals).
pub const USDU_TOKEN: Address = address!("0x9f8e016ad0c21aa2ba16b1b4a9a2d573d8cc3b41");

/// USDC token (6 decimals).
pub const USDC_TOKEN: Address = address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

/// Curve StableSwap-NG USDU/USDC pool. The pool contract is also the
/// LP token.
pub const CURVE_POOL_USDU_USDC: Address = address!("0x3b2f78a4e8f1d0c9b5a6e7d8c9f0a1b2c3d4e5f6");

/// Protocol adapter holding LP tokens in the Curve pool.
pub const CURVE_ADAPTER_USDU_USDC: Address = address!("0x71c3f2a90b4d5e6f8a9b0c1d2e3f4a5b6c7d8e90");

/// How often the data hooks re-fetch, in milliseconds.
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Countdown tick for timelock displays, in milliseconds.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

// Social and protocol links shown in the footer and contact section.
pub const GITHUB_URL: &str = "https://github.com/USDU-Core";
pub const TWITTER_URL: &str = "https://x.com/USDUfinance";
pub const TELEGRAM_URL: &str = "https://t.me/usdu-finance";
pub const DEFILLAMA_URL: &str = "https://defillama.com/stablecoin/usdu-finance";
pub const COINGECKO_URL: &str = "https://www.coingecko.com/en/coins/usdu-finance";
pub const GOVERNANCE_URL: &str = "https://app.aragon.org/dao/ethereum-mainnet/usdu.dao.eth";
