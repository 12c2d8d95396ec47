//! Storage engine types.

use serde::{Deserialize, Serialize};

/// A stored object, addressed by collection, key and owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageObject {
    pub collection: String,
    pub key: String,
    pub user_id: String,
    pub value: String,
    pub version: String,
    pub permission_read: i32,
    pub permission_write: i32,
    pub create_time: i64,
    pub update_time: i64,
}

/// Identifies one object to read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageRead {
    pub collection: String,
    pub key: String,
    pub user_id: String,
}

/// One object write, with optional optimistic-concurrency version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageWrite {
    pub collection: String,
    pub key: String,
    pub user_id: String,
    pub value: String,
    pub version: String,
    pub permission_read: i32,
    pub permission_write: i32,
}

/// Identifies one object to delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageDelete {
    pub collection: String,
    pub key: String,
    pub user_id: String,
    pub version: String,
}

/// Acknowledgement of a committed write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageObjectAck {
    pub collection: String,
    pub key: String,
    pub version: String,
    pub user_id: String,
}
