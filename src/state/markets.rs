//! TermMax market joins and maturity math.
//!
//! The listing API returns markets, asset metadata, order books and
//! capacity stats as parallel arrays keyed by contract address. This
//! module joins them into one row per market.

use crate::config::USDU_TOKEN;
use crate::services::markets::{
    AssetConfig, Collection, GtConfig, Market, OrderConfig, TermMaxData,
};
use chrono::{DateTime, NaiveDate, Utc};

/// One market joined with its related metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct TermMaxMarket {
    pub market: Market,
    pub underlying: Option<AssetConfig>,
    pub collateral: Option<AssetConfig>,
    pub ft_token: Option<AssetConfig>,
    pub xt_token: Option<AssetConfig>,
    pub gt_config: Option<GtConfig>,
    pub order_configs: Vec<OrderConfig>,
    pub collection: Option<Collection>,
    /// Underlying or collateral is the USDU token.
    pub is_usdu_market: bool,
    /// Days until maturity, rounded up. `None` if the date is unparseable.
    pub days_to_maturity: Option<i64>,
    pub is_expired: bool,
}

impl TermMaxMarket {
    /// Borrow APY of the best order, if any capacity is posted.
    pub fn borrow_apy(&self) -> Option<f64> {
        self.collection
            .as_ref()?
            .sorted_order_stats
            .first()
            .map(|stats| stats.borrow_apy)
    }

    /// USD borrow capacity of the best order.
    pub fn borrow_capacity_usd(&self) -> Option<f64> {
        self.collection
            .as_ref()?
            .sorted_order_stats
            .first()
            .map(|stats| stats.borrow_capacity_usd_value)
    }
}

fn find_asset_by_address<'a>(assets: &'a [AssetConfig], address: &str) -> Option<&'a AssetConfig> {
    assets
        .iter()
        .find(|asset| asset.contract_address.eq_ignore_ascii_case(address))
}

fn find_gt_by_address<'a>(configs: &'a [GtConfig], address: &str) -> Option<&'a GtConfig> {
    configs
        .iter()
        .find(|gt| gt.contract_address.eq_ignore_ascii_case(address))
}

fn find_orders_by_market(orders: &[OrderConfig], market_address: &str) -> Vec<OrderConfig> {
    orders
        .iter()
        .filter(|order| order.contracts.market_addr.eq_ignore_ascii_case(market_address))
        .cloned()
        .collect()
}

fn find_collection_by_market<'a>(
    collections: &'a [Collection],
    market_address: &str,
) -> Option<&'a Collection> {
    collections
        .iter()
        .find(|collection| collection.market_address.eq_ignore_ascii_case(market_address))
}

fn parse_maturity(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Date-only strings count as UTC midnight.
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Days until a maturity date, rounded up. Past dates go negative.
pub fn days_to_maturity(maturity: &str, now: DateTime<Utc>) -> Option<i64> {
    let maturity = parse_maturity(maturity)?;
    Some(ceil_days(maturity.timestamp_millis() - now.timestamp_millis()))
}

fn ceil_days(diff_ms: i64) -> i64 {
    const DAY_MS: i64 = 86_400_000;
    let quotient = diff_ms / DAY_MS;
    if diff_ms % DAY_MS > 0 {
        quotient + 1
    } else {
        quotient
    }
}

fn is_usdu_involved(underlying: Option<&AssetConfig>, collateral: Option<&AssetConfig>) -> bool {
    let usdu = USDU_TOKEN.to_string();
    underlying.is_some_and(|asset| asset.contract_address.eq_ignore_ascii_case(&usdu))
        || collateral.is_some_and(|asset| asset.contract_address.eq_ignore_ascii_case(&usdu))
}

/// Join every market with its assets, orders and capacity stats.
pub fn build_markets(data: &TermMaxData, now: DateTime<Utc>) -> Vec<TermMaxMarket> {
    data.markets
        .iter()
        .map(|market| {
            let contracts = &market.contracts;
            let underlying = find_asset_by_address(&data.asset_configs, &contracts.underlying_addr);
            let collateral = find_asset_by_address(&data.asset_configs, &contracts.collateral_addr);
            let ft_token = find_asset_by_address(&data.asset_configs, &contracts.ft_addr);
            let xt_token = find_asset_by_address(&data.asset_configs, &contracts.xt_addr);
            let gt_config = find_gt_by_address(&data.gt_configs, &contracts.gt_addr);
            let order_configs = find_orders_by_market(&data.order_configs, &contracts.market_addr);
            let collection = find_collection_by_market(&data.collections, &contracts.market_addr);

            let days = days_to_maturity(&market.maturity, now);
            let is_expired = matches!(days, Some(d) if d < 0);
            let is_usdu_market = is_usdu_involved(underlying, collateral);

            TermMaxMarket {
                market: market.clone(),
                underlying: underlying.cloned(),
                collateral: collateral.cloned(),
                ft_token: ft_token.cloned(),
                xt_token: xt_token.cloned(),
                gt_config: gt_config.cloned(),
                order_configs,
                collection: collection.cloned(),
                is_usdu_market,
                days_to_maturity: days,
                is_expired,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::markets::{
        Incentive, IncentiveRate, MarketContracts, OrderStats, TermMaxData,
    };
    use chrono::TimeZone;

    const USDU: &str = "0x9F8E016AD0C21AA2BA16B1B4A9A2D573D8CC3B41";
    const WETH: &str = "0x1000000000000000000000000000000000000001";
    const MARKET: &str = "0x4AbC000000000000000000000000000000000004";

    fn asset(address: &str, symbol: &str) -> AssetConfig {
        AssetConfig {
            asset_type: "erc20".to_string(),
            contract_address: address.to_string(),
            icon: String::new(),
            name: symbol.to_string(),
            display_name: symbol.to_string(),
            issuer: String::new(),
            symbol: symbol.to_string(),
            decimals: 18,
            maturity: None,
            version: None,
        }
    }

    fn market(maturity: &str) -> Market {
        Market {
            contracts: MarketContracts {
                router_addr: "0x3000000000000000000000000000000000000003".to_string(),
                market_addr: MARKET.to_string(),
                underlying_addr: USDU.to_lowercase(),
                collateral_addr: WETH.to_string(),
                ft_addr: "0x5000000000000000000000000000000000000005".to_string(),
                xt_addr: "0x6000000000000000000000000000000000000006".to_string(),
                gt_addr: "0x2000000000000000000000000000000000000002".to_string(),
            },
            symbol: "USDU/WETH".to_string(),
            is_fixed: true,
            open_time: "2025-09-01T00:00:00Z".to_string(),
            maturity: maturity.to_string(),
            max_ltv: "0.85".to_string(),
            liquidation_ltv: "0.9".to_string(),
            liquidatable: true,
            is_enabled: true,
            version: "v2".to_string(),
        }
    }

    fn listing(maturity: &str) -> TermMaxData {
        TermMaxData {
            network: "ethereum".to_string(),
            chain_id: 1,
            asset_configs: vec![asset(USDU, "USDU"), asset(WETH, "WETH")],
            gt_configs: vec![],
            markets: vec![market(maturity)],
            order_configs: vec![],
            collections: vec![Collection {
                market_address: MARKET.to_lowercase(),
                sorted_order_stats: vec![OrderStats {
                    order_address: "0x7000000000000000000000000000000000000007".to_string(),
                    borrow_capacity_amount: "1000".to_string(),
                    borrow_capacity_usd_value: 1_250_000.0,
                    lend_capacity_amount: "0".to_string(),
                    lend_capacity_usd_value: 0.0,
                    borrow_apy: 0.052,
                    leverage_apy: 0.0,
                    leverage_capacity_amount: "0".to_string(),
                    leverage_capacity_usd_value: 0.0,
                    leverage_ratio: 0.0,
                }],
                incentive: Incentive {
                    ft: IncentiveRate { apr: 0.0, apy: 0.0 },
                    xt: IncentiveRate { apr: 0.0, apy: 0.0 },
                },
            }],
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap()
    }

    #[test]
    fn test_ceil_days() {
        assert_eq!(ceil_days(0), 0);
        assert_eq!(ceil_days(1), 1);
        assert_eq!(ceil_days(86_400_000), 1);
        assert_eq!(ceil_days(86_400_001), 2);
        // Less than a day in the past still rounds to zero.
        assert_eq!(ceil_days(-1), 0);
        assert_eq!(ceil_days(-86_400_001), -1);
    }

    #[test]
    fn test_days_to_maturity_parses_both_forms() {
        let now = at(2026, 1, 1);
        assert_eq!(days_to_maturity("2026-01-08T00:00:00.000Z", now), Some(7));
        assert_eq!(days_to_maturity("2026-01-03", now), Some(2));
        assert_eq!(days_to_maturity("soon", now), None);
    }

    #[test]
    fn test_join_is_case_insensitive() {
        let markets = build_markets(&listing("2026-03-27T08:00:00Z"), at(2026, 1, 1));
        let row = &markets[0];
        // Lowercased underlying address still finds the mixed-case asset.
        assert_eq!(row.underlying.as_ref().map(|a| a.symbol.as_str()), Some("USDU"));
        assert_eq!(row.collateral.as_ref().map(|a| a.symbol.as_str()), Some("WETH"));
        assert!(row.collection.is_some());
        // Unlisted addresses stay unjoined.
        assert!(row.ft_token.is_none());
        assert!(row.gt_config.is_none());
    }

    #[test]
    fn test_usdu_involvement() {
        let markets = build_markets(&listing("2026-03-27T08:00:00Z"), at(2026, 1, 1));
        assert!(markets[0].is_usdu_market);

        let mut other = listing("2026-03-27T08:00:00Z");
        other.markets[0].contracts.underlying_addr = WETH.to_string();
        other.markets[0].contracts.collateral_addr = WETH.to_string();
        assert!(!build_markets(&other, at(2026, 1, 1))[0].is_usdu_market);
    }

    #[test]
    fn test_expiry_flags() {
        let live = build_markets(&listing("2026-03-27T08:00:00Z"), at(2026, 1, 1));
        assert!(!live[0].is_expired);
        assert_eq!(live[0].days_to_maturity, Some(86));

        let expired = build_markets(&listing("2025-12-30T00:00:00Z"), at(2026, 1, 1));
        assert!(expired[0].is_expired);

        // An unparseable maturity never counts as expired.
        let unknown = build_markets(&listing("soon"), at(2026, 1, 1));
        assert_eq!(unknown[0].days_to_maturity, None);
        assert!(!unknown[0].is_expired);
    }

    #[test]
    fn test_best_order_accessors() {
        let markets = build_markets(&listing("2026-03-27T08:00:00Z"), at(2026, 1, 1));
        assert_eq!(markets[0].borrow_apy(), Some(0.052));
        assert_eq!(markets[0].borrow_capacity_usd(), Some(1_250_000.0));

        let mut bare = listing("2026-03-27T08:00:00Z");
        bare.collections.clear();
        let markets = build_markets(&bare, at(2026, 1, 1));
        assert_eq!(markets[0].borrow_apy(), None);
    }
}
