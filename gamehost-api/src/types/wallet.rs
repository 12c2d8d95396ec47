//! Wallet and ledger types.

use super::Metadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A wallet: currency name to amount.
pub type Wallet = HashMap<String, i64>;

/// One wallet change in a batched update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletUpdate {
    pub user_id: String,
    pub changeset: Wallet,
    pub metadata: Metadata,
}

/// The outcome of one wallet change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletUpdateResult {
    pub user_id: String,
    pub updated: Wallet,
    pub previous: Wallet,
}

/// One entry in a wallet's transaction ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletLedgerItem {
    pub id: String,
    pub user_id: String,
    pub changeset: Wallet,
    pub metadata: Metadata,
    pub create_time: i64,
    pub update_time: i64,
}
