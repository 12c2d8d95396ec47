//! Shared helpers for integration tests.
#![allow(dead_code)]

use gamehost_api::types::{LeaderboardRecord, Metadata, Wallet};

/// A wallet holding only gems.
pub fn gems(amount: i64) -> Wallet {
    Wallet::from([("gems".to_string(), amount)])
}

/// Build a metadata map from a JSON object literal.
pub fn metadata(value: serde_json::Value) -> Metadata {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("metadata literals must be JSON objects, got {other}"),
    }
}

/// A minimal record for one owner with one score.
pub fn record(owner_id: &str, score: i64) -> LeaderboardRecord {
    LeaderboardRecord {
        owner_id: owner_id.to_string(),
        score,
        ..Default::default()
    }
}
