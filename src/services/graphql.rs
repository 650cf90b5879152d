//! GraphQL transport for the Ponder indexer.
//!
//! Small wrapper over `gloo-net` that posts a query document with its
//! variables and unwraps the standard GraphQL response envelope.

use crate::config::GRAPHQL_URL;
use crate::types::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// Execute a GraphQL query and deserialize the `data` payload.
pub async fn query<T: DeserializeOwned>(document: &str, variables: Value) -> AppResult<T> {
    let body = GraphQlRequest {
        query: document,
        variables,
    };

    let response = gloo_net::http::Request::post(GRAPHQL_URL)
        .json(&body)
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
        return Err(AppError::Indexer(format!(
            "server error ({}): {}",
            status, text
        )));
    }

    let envelope: GraphQlResponse<T> = response
        .json()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))?;

    if let Some(error) = envelope.errors.first() {
        return Err(AppError::Indexer(error.message.clone()));
    }

    envelope
        .data
        .ok_or_else(|| AppError::Indexer("Response contained no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{"data": {"value": 7}}"#;
        let envelope: GraphQlResponse<Payload> = serde_json::from_str(json).unwrap();
        assert!(envelope.errors.is_empty());
        assert_eq!(envelope.data.unwrap().value, 7);
    }

    #[test]
    fn test_envelope_with_errors() {
        let json = r#"{"data": null, "errors": [{"message": "field missing"}]}"#;
        let envelope: GraphQlResponse<Payload> = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors[0].message, "field missing");
    }

    #[test]
    fn test_request_serializes_query_and_variables() {
        let request = GraphQlRequest {
            query: "query Q($chainId: Int!) { items }",
            variables: serde_json::json!({ "chainId": 1 }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["variables"]["chainId"], 1);
        assert!(json["query"].as_str().unwrap().contains("$chainId"));
    }
}
