//! Stat derivation from raw contract reads.

use crate::services::chain::{PoolReads, ProtocolReads};
use crate::types::{AppError, AppResult};
use alloy_primitives::{utils::format_units, U256};

// =============================================================================
// Protocol stats
// =============================================================================

/// Headline protocol figures for the overview sections.
///
/// Values are decimal strings ready for the display formatters, `None`
/// while a read has not reported anything yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProtocolStats {
    pub usdu_supply: Option<String>,
    pub dex_liquidity: Option<String>,
    pub usdu_price: Option<String>,
}

/// Derive the headline stats from the protocol batch.
pub fn derive_protocol_stats(reads: &ProtocolReads) -> AppResult<ProtocolStats> {
    let usdu_supply = if reads.usdu_supply.is_zero() {
        None
    } else {
        Some(units_text(reads.usdu_supply, 18)?)
    };

    // Total liquidity needs both sides of the pool reporting.
    let dex_liquidity = if reads.pool_usdu_balance.is_zero() || reads.pool_usdc_balance.is_zero() {
        None
    } else {
        let usdu = units_f64(reads.pool_usdu_balance, 18)?;
        let usdc = units_f64(reads.pool_usdc_balance, 6)?;
        Some((usdu + usdc).to_string())
    };

    let usdu_price = if reads.price_dy.is_zero() {
        None
    } else {
        Some(units_text(reads.price_dy, 18)?)
    };

    Ok(ProtocolStats {
        usdu_supply,
        dex_liquidity,
        usdu_price,
    })
}

fn units_text(amount: U256, decimals: u8) -> AppResult<String> {
    format_units(amount, decimals).map_err(|e| AppError::Decode(e.to_string()))
}

fn units_f64(amount: U256, decimals: u8) -> AppResult<f64> {
    units_text(amount, decimals)?
        .parse::<f64>()
        .map_err(|e| AppError::Decode(e.to_string()))
}

// =============================================================================
// Pool stats
// =============================================================================

/// Curve pool composition and adapter holdings.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolStats {
    /// Pool coin 0 balance (USDC), 6 decimals.
    pub usdc_balance: U256,
    /// Pool coin 1 balance (USDU), 18 decimals.
    pub usdu_balance: U256,
    /// LP token total supply, 18 decimals.
    pub total_supply: U256,
    /// LP tokens held by the protocol adapter, 18 decimals.
    pub adapter_lp_balance: U256,
    /// Adapter share of the LP supply, scaled by 1e18.
    pub adapter_lp_ratio: U256,
    /// True when USDU makes up more than half the pool.
    pub pool_imbalance: bool,
    /// USDC out for one USDU in, 6 decimals. `None` while unquoted.
    pub usdu_price: Option<U256>,
}

/// Derive pool composition stats from the pool batch.
pub fn derive_pool_stats(reads: &PoolReads) -> PoolStats {
    let one_ether = U256::from(1_000_000_000_000_000_000u64);

    let adapter_lp_ratio = if reads.lp_total_supply.is_zero() {
        U256::ZERO
    } else {
        reads.adapter_lp_balance * one_ether / reads.lp_total_supply
    };

    // Bring USDC up to 18 decimals so both sides compare 1:1.
    let total_value = reads.usdc_balance * U256::from(1_000_000_000_000u64) + reads.usdu_balance;
    let usdu_percentage = if total_value > U256::ZERO {
        reads.usdu_balance * U256::from(100u64) / total_value
    } else {
        U256::ZERO
    };
    let pool_imbalance = usdu_percentage > U256::from(50u64);

    let usdu_price = if reads.price_dy.is_zero() {
        None
    } else {
        Some(reads.price_dy)
    };

    PoolStats {
        usdc_balance: reads.usdc_balance,
        usdu_balance: reads.usdu_balance,
        total_supply: reads.lp_total_supply,
        adapter_lp_balance: reads.adapter_lp_balance,
        adapter_lp_ratio,
        pool_imbalance,
        usdu_price,
    }
}

impl PoolStats {
    /// USDU share of the raw pool balances, 2-decimal precision.
    pub fn usdu_percentage(&self) -> Option<f64> {
        if self.usdc_balance.is_zero() || self.usdu_balance.is_zero() {
            return None;
        }
        let total = self.usdc_balance + self.usdu_balance;
        let basis_points = self.usdu_balance * U256::from(10_000u64) / total;
        Some(basis_points.saturating_to::<u64>() as f64 / 100.0)
    }

    /// USDC share, the complement of [`Self::usdu_percentage`].
    pub fn usdc_percentage(&self) -> Option<f64> {
        self.usdu_percentage().map(|usdu| 100.0 - usdu)
    }

    /// Adapter share of the LP supply, 2-decimal precision.
    pub fn adapter_lp_percentage(&self) -> Option<f64> {
        if self.total_supply.is_zero() || self.adapter_lp_balance.is_zero() {
            return None;
        }
        let basis_points = self.adapter_lp_balance * U256::from(10_000u64) / self.total_supply;
        Some(basis_points.saturating_to::<u64>() as f64 / 100.0)
    }

    /// Spot price as a decimal string, USDC per USDU.
    pub fn usdu_price_text(&self) -> Option<String> {
        let price = self.usdu_price?;
        format_units(price, 6u8).ok()
    }
}
