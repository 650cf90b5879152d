//! TermMax fixed-rate market listings.
//!
//! One REST call returns markets, asset metadata, order books and
//! capacity stats side by side. The structs here mirror the slices of
//! that payload the dashboard renders.

use crate::config::TERMMAX_API_URL;
use crate::types::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketContracts {
    pub router_addr: String,
    pub market_addr: String,
    pub underlying_addr: String,
    pub collateral_addr: String,
    pub ft_addr: String,
    pub xt_addr: String,
    pub gt_addr: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub contracts: MarketContracts,
    pub symbol: String,
    pub is_fixed: bool,
    pub open_time: String,
    /// Maturity date string as served by the API.
    pub maturity: String,
    pub max_ltv: String,
    pub liquidation_ltv: String,
    pub liquidatable: bool,
    pub is_enabled: bool,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConfig {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub contract_address: String,
    pub icon: String,
    pub name: String,
    pub display_name: String,
    pub issuer: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default)]
    pub maturity: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtConfig {
    pub contract_address: String,
    pub icon: String,
    pub name: String,
    pub display_name: String,
    pub issuer: String,
    pub symbol: String,
    pub max_ltv: String,
    pub liquidation_ltv: String,
    pub liquidatable: bool,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderContracts {
    pub order_addr: String,
    pub router_addr: String,
    pub market_addr: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfig {
    pub contracts: OrderContracts,
    pub symbol: String,
    pub maker_address: String,
    pub maker_is_vault: bool,
    pub tags: Vec<String>,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub order_address: String,
    pub borrow_capacity_amount: String,
    pub borrow_capacity_usd_value: f64,
    pub lend_capacity_amount: String,
    pub lend_capacity_usd_value: f64,
    pub borrow_apy: f64,
    pub leverage_apy: f64,
    pub leverage_capacity_amount: String,
    pub leverage_capacity_usd_value: f64,
    pub leverage_ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncentiveRate {
    pub apr: f64,
    pub apy: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incentive {
    pub ft: IncentiveRate,
    pub xt: IncentiveRate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub market_address: String,
    /// Orders sorted by capacity, best first.
    pub sorted_order_stats: Vec<OrderStats>,
    pub incentive: Incentive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermMaxData {
    pub network: String,
    pub chain_id: u64,
    pub asset_configs: Vec<AssetConfig>,
    pub gt_configs: Vec<GtConfig>,
    pub markets: Vec<Market>,
    pub order_configs: Vec<OrderConfig>,
    #[serde(default)]
    pub collections: Vec<Collection>,
}

#[derive(Deserialize)]
struct TermMaxResponse {
    data: TermMaxData,
}

/// Fetch the borrow market listing for a chain, sorted by capacity.
pub async fn list_markets(chain_id: u64) -> AppResult<TermMaxData> {
    let url = format!(
        "{}/v2/market/list-with-collection?chainId={}&tags=borrow&includeInactive=false&sortBy=capacity&sortDirection=desc",
        TERMMAX_API_URL, chain_id
    );

    let response = gloo_net::http::Request::get(&url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Api(format!(
            "Failed to fetch TermMax data: {}",
            response.status_text()
        )));
    }

    let payload: TermMaxResponse = response
        .json()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))?;

    Ok(payload.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_payload_deserializes() {
        let json = r#"{
            "data": {
                "network": "ethereum",
                "chainId": 1,
                "assetConfigs": [
                    {
                        "type": "erc20",
                        "contractAddress": "0x9F8e016aD0c21aA2BA16b1b4A9a2D573d8cC3b41",
                        "icon": "https://example.org/usdu.svg",
                        "name": "USDU",
                        "displayName": "USDU Stablecoin",
                        "issuer": "USDU",
                        "symbol": "USDU",
                        "decimals": 18,
                        "maturity": null,
                        "version": "v1"
                    },
                    {
                        "type": "erc20",
                        "contractAddress": "0x1000000000000000000000000000000000000001",
                        "icon": "",
                        "name": "Wrapped Ether",
                        "displayName": "WETH",
                        "issuer": "",
                        "symbol": "WETH",
                        "decimals": 18
                    }
                ],
                "gtConfigs": [
                    {
                        "contractAddress": "0x2000000000000000000000000000000000000002",
                        "icon": "",
                        "name": "GT",
                        "displayName": "GT",
                        "issuer": "",
                        "symbol": "GT-USDU",
                        "maxLtv": "0.85",
                        "liquidationLtv": "0.9",
                        "liquidatable": true,
                        "version": "v2"
                    }
                ],
                "markets": [
                    {
                        "contracts": {
                            "routerAddr": "0x3000000000000000000000000000000000000003",
                            "marketAddr": "0x4000000000000000000000000000000000000004",
                            "underlyingAddr": "0x9f8e016ad0c21aa2ba16b1b4a9a2d573d8cc3b41",
                            "collateralAddr": "0x1000000000000000000000000000000000000001",
                            "ftAddr": "0x5000000000000000000000000000000000000005",
                            "xtAddr": "0x6000000000000000000000000000000000000006",
                            "gtAddr": "0x2000000000000000000000000000000000000002"
                        },
                        "symbol": "USDU/WETH@27MAR2026",
                        "isFixed": true,
                        "openTime": "2025-09-01T00:00:00.000Z",
                        "maturity": "2026-03-27T08:00:00.000Z",
                        "maxLtv": "0.85",
                        "liquidationLtv": "0.9",
                        "liquidatable": true,
                        "isEnabled": true,
                        "version": "v2"
                    }
                ],
                "orderConfigs": [
                    {
                        "contracts": {
                            "orderAddr": "0x7000000000000000000000000000000000000007",
                            "routerAddr": "0x3000000000000000000000000000000000000003",
                            "marketAddr": "0x4000000000000000000000000000000000000004"
                        },
                        "symbol": "USDU/WETH@27MAR2026",
                        "makerAddress": "0x8000000000000000000000000000000000000008",
                        "makerIsVault": true,
                        "tags": ["borrow"],
                        "version": "v2"
                    }
                ],
                "collections": [
                    {
                        "marketAddress": "0x4000000000000000000000000000000000000004",
                        "sortedOrderStats": [
                            {
                                "orderAddress": "0x7000000000000000000000000000000000000007",
                                "borrowCapacityAmount": "1250000000000000000000000",
                                "borrowCapacityUsdValue": 1250000.0,
                                "lendCapacityAmount": "0",
                                "lendCapacityUsdValue": 0.0,
                                "borrowApy": 0.052,
                                "leverageApy": 0.0,
                                "leverageCapacityAmount": "0",
                                "leverageCapacityUsdValue": 0.0,
                                "leverageRatio": 0.0
                            }
                        ],
                        "incentive": {
                            "ft": { "apr": 0.01, "apy": 0.0101 },
                            "xt": { "apr": 0.0, "apy": 0.0 }
                        }
                    }
                ]
            }
        }"#;

        let payload: TermMaxResponse = serde_json::from_str(json).unwrap();
        let data = payload.data;
        assert_eq!(data.chain_id, 1);
        assert_eq!(data.markets.len(), 1);
        assert_eq!(data.asset_configs[0].symbol, "USDU");
        // Optional maturity and version tolerate both null and absence.
        assert_eq!(data.asset_configs[0].maturity, None);
        assert_eq!(data.asset_configs[1].version, None);
        assert_eq!(data.collections[0].sorted_order_stats[0].borrow_apy, 0.052);
    }

    #[test]
    fn test_missing_collections_defaults_empty() {
        let json = r#"{
            "network": "ethereum",
            "chainId": 1,
            "assetConfigs": [],
            "gtConfigs": [],
            "markets": [],
            "orderConfigs": []
        }"#;
        let data: TermMaxData = serde_json::from_str(json).unwrap();
        assert!(data.collections.is_empty());
    }
}
