//! Payload types passed through host operations.
//!
//! These are plain value types: the host interface moves them in and out of
//! operations unchanged, and a test double never inspects them. They carry no
//! behavior beyond serde derives.

mod account;
mod event;
mod group;
mod leaderboard;
mod matches;
mod notification;
mod purchase;
mod session;
mod storage;
mod wallet;

pub use account::{Account, AccountUpdate, User};
pub use event::Event;
pub use group::{Friend, Group, GroupUser, UserGroup};
pub use leaderboard::{LeaderboardRecord, Tournament, TournamentList};
pub use matches::Match;
pub use notification::NotificationSend;
pub use purchase::{PurchaseList, ValidatePurchaseResponse, ValidatedPurchase};
pub use session::{Envelope, Presence, PresenceMeta, PresenceReason};
pub use storage::{StorageDelete, StorageObject, StorageObjectAck, StorageRead, StorageWrite};
pub use wallet::{Wallet, WalletLedgerItem, WalletUpdate, WalletUpdateResult};

/// Free-form JSON metadata attached to accounts, records, notifications and
/// similar objects.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// String key/value variables, e.g. session token claims.
pub type Vars = std::collections::HashMap<String, String>;
