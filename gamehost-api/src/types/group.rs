//! Group and social-graph types.

use super::{Metadata, User};
use serde::{Deserialize, Serialize};

/// A group of users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub creator_id: String,
    pub name: String,
    pub description: String,
    pub lang_tag: String,
    pub metadata: Metadata,
    pub avatar_url: String,
    pub open: bool,
    pub edge_count: i32,
    pub max_count: i32,
    pub create_time: i64,
    pub update_time: i64,
}

/// A member of a group, with their membership state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupUser {
    pub user: User,
    pub state: i32,
}

/// A group a user belongs to, with their membership state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    pub group: Group,
    pub state: i32,
}

/// A friend edge in the social graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub user: User,
    pub state: i32,
    pub update_time: i64,
}
