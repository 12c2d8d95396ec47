//! Notification delivery types.

use super::Metadata;
use serde::{Deserialize, Serialize};

/// One notification in a batched send.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationSend {
    pub user_id: String,
    pub subject: String,
    pub content: Metadata,
    pub code: i32,
    pub sender: String,
    pub persistent: bool,
}
