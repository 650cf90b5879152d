//! Stablecoin module queries against the Ponder indexer.

use crate::services::graphql;
use crate::types::{AppResult, ModuleHistoryItem, StablecoinModule};
use serde::Deserialize;
use serde_json::json;

const MODULES_QUERY: &str = r#"
query GetStablecoinModules($chainId: Int!) {
  stablecoinModuleMappings(
    where: { chainId: $chainId }
    orderBy: "updatedAt"
    orderDirection: "desc"
  ) {
    items {
      chainId
      module
      message
      messageUpdated
      createdAt
      updatedAt
      expiredAt
      txHash
      logIndex
      blockheight
      caller
    }
  }
}
"#;

const HISTORY_ALL_QUERY: &str = r#"
query GetStablecoinModuleHistoryAll($chainId: Int!) {
  stablecoinModuleHistorys(
    where: { chainId: $chainId }
    orderBy: "createdAt"
    orderDirection: "desc"
  ) {
    items {
      chainId
      txHash
      logIndex
      createdAt
      blockheight
      caller
      module
      kind
      message
      expiredAt
      timelock
    }
  }
}
"#;

#[derive(Deserialize)]
struct Items<T> {
    items: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModulesData {
    stablecoin_module_mappings: Items<StablecoinModule>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryData {
    stablecoin_module_historys: Items<ModuleHistoryItem>,
}

/// Fetch all module mappings for a chain, newest update first.
pub async fn module_mappings(chain_id: u64) -> AppResult<Vec<StablecoinModule>> {
    let data: ModulesData =
        graphql::query(MODULES_QUERY, json!({ "chainId": chain_id })).await?;
    Ok(data.stablecoin_module_mappings.items)
}

/// Fetch the full module event history for a chain, newest first.
pub async fn module_history_all(chain_id: u64) -> AppResult<Vec<ModuleHistoryItem>> {
    let data: HistoryData =
        graphql::query(HISTORY_ALL_QUERY, json!({ "chainId": chain_id })).await?;
    Ok(data.stablecoin_module_historys.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModuleKind;

    #[test]
    fn test_modules_payload_deserializes() {
        // Shape as served by Ponder: BigInt fields come back as strings.
        let json = r#"{
            "stablecoinModuleMappings": {
                "items": [{
                    "chainId": 1,
                    "module": "0x1111111111111111111111111111111111111111",
                    "message": "Savings rate module",
                    "messageUpdated": null,
                    "createdAt": "1700000000",
                    "updatedAt": "1700050000",
                    "expiredAt": "1731536000",
                    "txHash": "0xaaa",
                    "logIndex": 2,
                    "blockheight": "18000000",
                    "caller": "0xbbb"
                }]
            }
        }"#;

        let data: ModulesData = serde_json::from_str(json).unwrap();
        let items = data.stablecoin_module_mappings.items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].updated_at, 1_700_050_000);
        assert!(!items[0].is_expired);
    }

    #[test]
    fn test_history_payload_deserializes() {
        let json = r#"{
            "stablecoinModuleHistorys": {
                "items": [
                    {
                        "chainId": 1,
                        "txHash": "0xccc",
                        "logIndex": 0,
                        "createdAt": "1700000000",
                        "blockheight": "18000000",
                        "caller": "0xddd",
                        "module": "0x2222222222222222222222222222222222222222",
                        "kind": "Proposed",
                        "message": "Bridge module",
                        "expiredAt": "1731536000",
                        "timelock": "259200"
                    },
                    {
                        "chainId": 1,
                        "txHash": "0xeee",
                        "logIndex": 1,
                        "createdAt": "1699990000",
                        "blockheight": "17999900",
                        "caller": "0xfff",
                        "module": "0x2222222222222222222222222222222222222222",
                        "kind": "Revoked",
                        "message": "old proposal",
                        "expiredAt": null,
                        "timelock": null
                    }
                ]
            }
        }"#;

        let data: HistoryData = serde_json::from_str(json).unwrap();
        let items = data.stablecoin_module_historys.items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ModuleKind::Proposed);
        assert_eq!(items[0].timelock, Some(259_200));
        assert_eq!(items[1].kind, ModuleKind::Revoked);
        assert_eq!(items[1].timelock, None);
    }

    #[test]
    fn test_queries_name_expected_fields() {
        assert!(MODULES_QUERY.contains("stablecoinModuleMappings"));
        assert!(MODULES_QUERY.contains("messageUpdated"));
        assert!(HISTORY_ALL_QUERY.contains("stablecoinModuleHistorys"));
        assert!(HISTORY_ALL_QUERY.contains("timelock"));
    }
}
