//! Presence and real-time session types.

use serde::{Deserialize, Serialize};

/// A user's presence on a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    pub user_id: String,
    pub session_id: String,
    pub username: String,
    pub node: String,
    pub hidden: bool,
    pub persistence: bool,
    pub status: String,
    pub reason: PresenceReason,
}

/// Stream-scoped metadata for a single presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceMeta {
    pub hidden: bool,
    pub persistence: bool,
    pub username: String,
    pub status: String,
}

/// Why a presence event occurred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceReason {
    #[default]
    Unknown,
    Join,
    Update,
    Leave,
    Disconnect,
}

/// A raw real-time message, delivered to stream presences as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub cid: String,
    pub message: serde_json::Value,
}
