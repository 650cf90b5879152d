//! Read-only Ethereum contract calls over JSON-RPC.
//!
//! Uses raw JSON batch requests so any standard HTTP endpoint works.
//! Every refresh sends one batch with all the calls a view needs and
//! decodes each result as a single 256-bit word.

use crate::config::{
    CURVE_ADAPTER_USDU_USDC, CURVE_POOL_USDU_USDC, RPC_URL, USDC_TOKEN, USDU_TOKEN,
};
use crate::types::{AppError, AppResult};
use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall, SolValue};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

sol! {
    interface IERC20 {
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
    }

    interface ICurveStableSwapNG {
        function balances(uint256 i) external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function get_dy(int128 i, int128 j, uint256 dx) external view returns (uint256);
    }
}

// =============================================================================
// JSON-RPC plumbing
// =============================================================================

/// One `eth_call` target with ABI-encoded calldata.
struct EthCall {
    to: Address,
    data: Vec<u8>,
}

impl EthCall {
    fn new(to: Address, call: impl SolCall) -> Self {
        Self {
            to,
            data: call.abi_encode(),
        }
    }
}

#[derive(Serialize)]
struct RpcRequest {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: Value,
}

impl RpcRequest {
    fn eth_call(id: u64, call: &EthCall) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: "eth_call",
            params: json!([
                {
                    "to": call.to.to_string(),
                    "data": format!("0x{}", hex::encode(&call.data)),
                },
                "latest",
            ]),
        }
    }
}

#[derive(Deserialize)]
struct RpcResponse {
    id: u64,
    result: Option<String>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Execute a batch of `eth_call`s and decode every result.
async fn batch_call(calls: &[EthCall]) -> AppResult<Vec<U256>> {
    let requests: Vec<RpcRequest> = calls
        .iter()
        .enumerate()
        .map(|(id, call)| RpcRequest::eth_call(id as u64, call))
        .collect();

    let response = gloo_net::http::Request::post(RPC_URL)
        .json(&requests)
        .map_err(|e| AppError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Rpc(format!("server error ({}): {}", status, text)));
    }

    let responses: Vec<RpcResponse> = response
        .json()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))?;

    collect_results(responses, calls.len())?
        .iter()
        .map(|word| decode_word(word))
        .collect()
}

/// Order batch responses by request id and surface per-call failures.
///
/// JSON-RPC batches may come back in any order.
fn collect_results(mut responses: Vec<RpcResponse>, expected: usize) -> AppResult<Vec<String>> {
    if responses.len() != expected {
        return Err(AppError::Rpc(format!(
            "expected {} results, got {}",
            expected,
            responses.len()
        )));
    }
    responses.sort_by_key(|r| r.id);

    let mut results = Vec::with_capacity(expected);
    for (id, response) in responses.into_iter().enumerate() {
        if response.id != id as u64 {
            return Err(AppError::Rpc(format!("missing result for call {}", id)));
        }
        if let Some(error) = response.error {
            return Err(AppError::Rpc(format!(
                "Some contract calls failed: {} (code {})",
                error.message, error.code
            )));
        }
        match response.result {
            Some(result) => results.push(result),
            None => return Err(AppError::Rpc(format!("missing result for call {}", id))),
        }
    }
    Ok(results)
}

/// Decode a `0x`-prefixed ABI word as a `U256`.
fn decode_word(result: &str) -> AppResult<U256> {
    let raw = result.strip_prefix("0x").unwrap_or(result);
    let bytes = hex::decode(raw).map_err(|e| AppError::Decode(e.to_string()))?;
    U256::abi_decode(&bytes).map_err(|e| AppError::Decode(e.to_string()))
}

// =============================================================================
// Protocol reads
// =============================================================================

/// Raw protocol-level reads backing the overview stats.
#[derive(Clone, Debug, PartialEq)]
pub struct ProtocolReads {
    /// USDU total supply, 18 decimals.
    pub usdu_supply: U256,
    /// USDU held by the Curve pool, 18 decimals.
    pub pool_usdu_balance: U256,
    /// USDC held by the Curve pool, 6 decimals.
    pub pool_usdc_balance: U256,
    /// USDU out for one USDC in, 18 decimals.
    pub price_dy: U256,
}

/// Fetch token supply, pool balances and the spot quote in one batch.
pub async fn fetch_protocol_reads() -> AppResult<ProtocolReads> {
    let calls = [
        EthCall::new(USDU_TOKEN, IERC20::totalSupplyCall {}),
        EthCall::new(
            USDU_TOKEN,
            IERC20::balanceOfCall {
                account: CURVE_POOL_USDU_USDC,
            },
        ),
        EthCall::new(
            USDC_TOKEN,
            IERC20::balanceOfCall {
                account: CURVE_POOL_USDU_USDC,
            },
        ),
        EthCall::new(
            CURVE_POOL_USDU_USDC,
            ICurveStableSwapNG::get_dyCall {
                i: 0,
                j: 1,
                dx: U256::from(1_000_000u64),
            },
        ),
    ];

    let [usdu_supply, pool_usdu_balance, pool_usdc_balance, price_dy] = batch_call(&calls)
        .await?
        .try_into()
        .map_err(|_| AppError::Rpc("unexpected result count".to_string()))?;

    Ok(ProtocolReads {
        usdu_supply,
        pool_usdu_balance,
        pool_usdc_balance,
        price_dy,
    })
}

// =============================================================================
// Pool reads
// =============================================================================

/// Raw Curve pool reads backing the liquidity stats.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolReads {
    /// Pool coin 0 balance (USDC), 6 decimals.
    pub usdc_balance: U256,
    /// Pool coin 1 balance (USDU), 18 decimals.
    pub usdu_balance: U256,
    /// LP token total supply, 18 decimals.
    pub lp_total_supply: U256,
    /// LP tokens held by the protocol adapter, 18 decimals.
    pub adapter_lp_balance: U256,
    /// USDC out for one USDU in, 6 decimals.
    pub price_dy: U256,
}

/// Fetch pool composition and adapter holdings in one batch.
pub async fn fetch_pool_reads() -> AppResult<PoolReads> {
    let calls = [
        // Coin order in the pool contract: 0 = USDC, 1 = USDU.
        EthCall::new(
            CURVE_POOL_USDU_USDC,
            ICurveStableSwapNG::balancesCall { i: U256::ZERO },
        ),
        EthCall::new(
            CURVE_POOL_USDU_USDC,
            ICurveStableSwapNG::balancesCall {
                i: U256::from(1u64),
            },
        ),
        // The pool contract doubles as its own LP token.
        EthCall::new(CURVE_POOL_USDU_USDC, ICurveStableSwapNG::totalSupplyCall {}),
        EthCall::new(
            CURVE_POOL_USDU_USDC,
            IERC20::balanceOfCall {
                account: CURVE_ADAPTER_USDU_USDC,
            },
        ),
        EthCall::new(
            CURVE_POOL_USDU_USDC,
            ICurveStableSwapNG::get_dyCall {
                i: 1,
                j: 0,
                dx: U256::from(1_000_000_000_000_000_000u64),
            },
        ),
    ];

    let [usdc_balance, usdu_balance, lp_total_supply, adapter_lp_balance, price_dy] =
        batch_call(&calls)
            .await?
            .try_into()
            .map_err(|_| AppError::Rpc("unexpected result count".to_string()))?;

    Ok(PoolReads {
        usdc_balance,
        usdu_balance,
        lp_total_supply,
        adapter_lp_balance,
        price_dy,
    })
}
