//! Authoritative match listings.

use serde::{Deserialize, Serialize};

/// A running match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: String,
    pub authoritative: bool,
    pub label: String,
    pub size: i32,
    pub tick_rate: i32,
    pub handler_name: String,
}
