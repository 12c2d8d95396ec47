//! Leaderboard and tournament types.

use super::Metadata;
use serde::{Deserialize, Serialize};

/// One owner's record on a leaderboard or tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRecord {
    pub leaderboard_id: String,
    pub owner_id: String,
    pub username: String,
    pub score: i64,
    pub subscore: i64,
    pub num_score: i32,
    pub max_num_score: i32,
    pub metadata: Metadata,
    pub rank: i64,
    pub create_time: i64,
    pub update_time: i64,
    pub expiry_time: Option<i64>,
}

/// A tournament definition and its current state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: i32,
    pub sort_order: String,
    pub operator: String,
    pub size: i32,
    pub max_size: i32,
    pub max_num_score: i32,
    pub can_enter: bool,
    pub metadata: Metadata,
    pub create_time: i64,
    pub start_time: i64,
    pub end_time: i64,
    pub duration: i64,
    pub start_active: i64,
    pub end_active: i64,
    pub next_reset: i64,
}

/// A page of tournaments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentList {
    pub tournaments: Vec<Tournament>,
    pub cursor: Option<String>,
}
