//! Account and user records.

use super::{Metadata, Wallet};
use serde::{Deserialize, Serialize};

/// A user's public profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
    pub lang_tag: String,
    pub location: String,
    pub timezone: String,
    pub metadata: Metadata,
    pub apple_id: String,
    pub facebook_id: String,
    pub google_id: String,
    pub gamecenter_id: String,
    pub steam_id: String,
    pub online: bool,
    pub edge_count: i32,
    pub create_time: i64,
    pub update_time: i64,
}

/// A user's full account, including private fields only the owner sees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub user: User,
    pub wallet: Wallet,
    pub email: String,
    pub devices: Vec<String>,
    pub custom_id: String,
    pub verify_time: Option<i64>,
    pub disable_time: Option<i64>,
}

/// A single account change, as used in batched multi-domain updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub user_id: String,
    pub username: String,
    pub metadata: Metadata,
    pub display_name: String,
    pub timezone: String,
    pub location: String,
    pub lang_tag: String,
    pub avatar_url: String,
}
