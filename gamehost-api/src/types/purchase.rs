//! In-app purchase validation types.

use serde::{Deserialize, Serialize};

/// A purchase that passed provider-side validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatedPurchase {
    pub product_id: String,
    pub transaction_id: String,
    pub store: String,
    pub purchase_time: i64,
    pub create_time: i64,
    pub update_time: i64,
    pub provider_response: String,
    pub environment: String,
}

/// The outcome of validating one receipt, possibly covering several products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatePurchaseResponse {
    pub validated_purchases: Vec<ValidatedPurchase>,
}

/// A page of previously validated purchases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseList {
    pub validated_purchases: Vec<ValidatedPurchase>,
    pub cursor: Option<String>,
    pub prev_cursor: Option<String>,
}
