//! Behavior slots: one optional, independently-bindable function value per
//! host operation.
//!
//! Each alias below pins the exact signature a bound behavior must have for
//! its operation; a mismatched binding is a compile error, not a runtime one.
//! Operations that share a wire signature share an alias.

use gamehost_api::types::{
    Account, AccountUpdate, Envelope, Event, Friend, Group, GroupUser, LeaderboardRecord, Match,
    Metadata, NotificationSend, Presence, PresenceMeta, PresenceReason, PurchaseList,
    StorageDelete, StorageObject, StorageObjectAck, StorageRead, StorageWrite, Tournament,
    TournamentList, User, UserGroup, ValidatePurchaseResponse, ValidatedPurchase, Vars, Wallet,
    WalletLedgerItem, WalletUpdate, WalletUpdateResult,
};
use gamehost_api::{HostError, RecordPage};
use std::fs::File;
use std::path::Path;

/// A slot: the optional holder of one operation's behavior. Empty until the
/// test binds a function; rebinding replaces the previous behavior.
pub type Slot<F> = Option<Box<F>>;

/// Resolve a slot to its bound behavior, or fail naming the operation.
///
/// This is the dispatcher's only independent logic: an unset slot is a
/// [`HostError::Unconfigured`] rather than a silent default, so missing test
/// setup fails the test instead of passing it.
pub(crate) fn bound<'a, F: ?Sized>(
    slot: &'a Slot<F>,
    operation: &'static str,
) -> Result<&'a F, HostError> {
    match slot {
        Some(behavior) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(operation, "dispatching to bound behavior");
            Ok(behavior)
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(operation, "operation invoked with no behavior bound");
            Err(HostError::Unconfigured(operation))
        }
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Token-style authentication: `(token-or-id, username, create)`.
pub type AuthenticateFn =
    dyn Fn(&str, &str, bool) -> Result<(String, String, bool), HostError> + Send + Sync;

/// Email authentication: `(email, password, username, create)`.
pub type AuthenticateEmailFn =
    dyn Fn(&str, &str, &str, bool) -> Result<(String, String, bool), HostError> + Send + Sync;

/// Facebook authentication: `(token, import_friends, username, create)`.
pub type AuthenticateFacebookFn =
    dyn Fn(&str, bool, &str, bool) -> Result<(String, String, bool), HostError> + Send + Sync;

/// Game Center authentication: `(player_id, bundle_id, timestamp, salt,
/// signature, public_key_url, username, create)`.
pub type AuthenticateGameCenterFn =
    dyn Fn(&str, &str, i64, &str, &str, &str, &str, bool) -> Result<(String, String, bool), HostError>
        + Send
        + Sync;

/// Session token generation: `(user_id, username, exp, vars)`.
pub type AuthenticateTokenGenerateFn =
    dyn Fn(&str, &str, i64, &Vars) -> Result<(String, i64), HostError> + Send + Sync;

// ============================================================================
// Accounts and users
// ============================================================================

/// Fetch one account by user id.
pub type AccountGetIdFn = dyn Fn(&str) -> Result<Account, HostError> + Send + Sync;
/// Fetch several accounts by user id.
pub type AccountsGetIdFn = dyn Fn(&[String]) -> Result<Vec<Account>, HostError> + Send + Sync;
/// Update one account's profile fields.
pub type AccountUpdateIdFn = dyn Fn(&str, &str, &Metadata, &str, &str, &str, &str, &str) -> Result<(), HostError>
    + Send
    + Sync;
/// Delete one account: `(user_id, recorded)`.
pub type AccountDeleteIdFn = dyn Fn(&str, bool) -> Result<(), HostError> + Send + Sync;
/// Export one account's data as JSON.
pub type AccountExportIdFn = dyn Fn(&str) -> Result<String, HostError> + Send + Sync;
/// Fetch users: `(user_ids, facebook_ids)`.
pub type UsersGetIdFn =
    dyn Fn(&[String], &[String]) -> Result<Vec<User>, HostError> + Send + Sync;
/// Fetch users by username.
pub type UsersGetUsernameFn = dyn Fn(&[String]) -> Result<Vec<User>, HostError> + Send + Sync;

/// Bulk user moderation by id (ban/unban).
pub type UserIdsFn = dyn Fn(&[String]) -> Result<(), HostError> + Send + Sync;

// ============================================================================
// Identity linking
// ============================================================================

/// Two-argument link/unlink: `(user_id, credential)`.
pub type LinkFn = dyn Fn(&str, &str) -> Result<(), HostError> + Send + Sync;

/// Email link: `(user_id, email, password)`.
pub type LinkEmailFn = dyn Fn(&str, &str, &str) -> Result<(), HostError> + Send + Sync;

/// Social link with friend import: `(user_id, username, token, import_friends)`.
pub type LinkSocialFn = dyn Fn(&str, &str, &str, bool) -> Result<(), HostError> + Send + Sync;

/// Game Center link/unlink: `(user_id, player_id, bundle_id, timestamp, salt,
/// signature, public_key_url)`.
pub type LinkGameCenterFn =
    dyn Fn(&str, &str, &str, i64, &str, &str, &str) -> Result<(), HostError> + Send + Sync;

/// Open a file from the runtime's data directory.
pub type ReadFileFn = dyn Fn(&Path) -> Result<File, HostError> + Send + Sync;

// ============================================================================
// Streams
// ============================================================================

/// List presences on a stream.
pub type StreamUserListFn =
    dyn Fn(u8, &str, &str, &str, bool, bool) -> Result<Vec<Presence>, HostError> + Send + Sync;
/// Fetch one presence's stream metadata.
pub type StreamUserGetFn =
    dyn Fn(u8, &str, &str, &str, &str, &str) -> Result<PresenceMeta, HostError> + Send + Sync;
/// Join a session to a stream, returning whether the join was new.
pub type StreamUserJoinFn = dyn Fn(u8, &str, &str, &str, &str, &str, bool, bool, &str) -> Result<bool, HostError>
    + Send
    + Sync;
/// Update a presence's stream metadata.
pub type StreamUserUpdateFn = dyn Fn(u8, &str, &str, &str, &str, &str, bool, bool, &str) -> Result<(), HostError>
    + Send
    + Sync;
/// Remove a session from a stream.
pub type StreamUserLeaveFn =
    dyn Fn(u8, &str, &str, &str, &str, &str) -> Result<(), HostError> + Send + Sync;
/// Kick a presence from a stream.
pub type StreamUserKickFn =
    dyn Fn(u8, &str, &str, &str, &Presence) -> Result<(), HostError> + Send + Sync;
/// Count presences on a stream.
pub type StreamCountFn = dyn Fn(u8, &str, &str, &str) -> Result<usize, HostError> + Send + Sync;
/// Close a stream.
pub type StreamCloseFn = dyn Fn(u8, &str, &str, &str) -> Result<(), HostError> + Send + Sync;
/// Send data to stream presences.
pub type StreamSendFn = dyn Fn(u8, &str, &str, &str, &str, &[Presence], bool) -> Result<(), HostError>
    + Send
    + Sync;
/// Send a raw envelope to stream presences.
pub type StreamSendRawFn = dyn Fn(u8, &str, &str, &str, &Envelope, &[Presence], bool) -> Result<(), HostError>
    + Send
    + Sync;

// ============================================================================
// Sessions
// ============================================================================

/// Session disconnect with trailing reasons, forwarded whole and in order.
pub type SessionDisconnectFn =
    dyn Fn(&str, &[PresenceReason]) -> Result<(), HostError> + Send + Sync;
/// Log a session out: `(user_id, token, refresh_token)`.
pub type SessionLogoutFn = dyn Fn(&str, &str, &str) -> Result<(), HostError> + Send + Sync;

// ============================================================================
// Matches
// ============================================================================

/// Create a match, returning its id.
pub type MatchCreateFn = dyn Fn(&str, &Metadata) -> Result<String, HostError> + Send + Sync;
/// Fetch one match by id.
pub type MatchGetFn = dyn Fn(&str) -> Result<Match, HostError> + Send + Sync;
/// List matches by filter.
pub type MatchListFn = dyn Fn(usize, bool, &str, Option<usize>, Option<usize>, &str) -> Result<Vec<Match>, HostError>
    + Send
    + Sync;

// ============================================================================
// Notifications
// ============================================================================

/// Send one notification.
pub type NotificationSendFn =
    dyn Fn(&str, &str, &Metadata, i32, &str, bool) -> Result<(), HostError> + Send + Sync;
/// Send a batch of notifications.
pub type NotificationsSendFn =
    dyn Fn(&[NotificationSend]) -> Result<(), HostError> + Send + Sync;

// ============================================================================
// Wallet
// ============================================================================

/// Single wallet update, returning `(updated, previous)`.
pub type WalletUpdateFn = dyn Fn(&str, &Wallet, &Metadata, bool) -> Result<(Wallet, Option<Wallet>), HostError>
    + Send
    + Sync;
/// Batched wallet update.
pub type WalletsUpdateFn =
    dyn Fn(&[WalletUpdate], bool) -> Result<Vec<WalletUpdateResult>, HostError> + Send + Sync;
/// Update one ledger entry's metadata.
pub type WalletLedgerUpdateFn =
    dyn Fn(&str, &Metadata) -> Result<WalletLedgerItem, HostError> + Send + Sync;
/// List ledger entries, returning the page and next cursor.
pub type WalletLedgerListFn = dyn Fn(&str, usize, &str) -> Result<(Vec<WalletLedgerItem>, Option<String>), HostError>
    + Send
    + Sync;

// ============================================================================
// Storage
// ============================================================================

/// List storage objects, returning the page and next cursor.
pub type StorageListFn = dyn Fn(&str, &str, usize, &str) -> Result<(Vec<StorageObject>, Option<String>), HostError>
    + Send
    + Sync;
/// Read a batch of storage objects.
pub type StorageReadFn =
    dyn Fn(&[StorageRead]) -> Result<Vec<StorageObject>, HostError> + Send + Sync;
/// Write a batch of storage objects.
pub type StorageWriteFn =
    dyn Fn(&[StorageWrite]) -> Result<Vec<StorageObjectAck>, HostError> + Send + Sync;
/// Delete a batch of storage objects.
pub type StorageDeleteFn = dyn Fn(&[StorageDelete]) -> Result<(), HostError> + Send + Sync;

/// Atomic multi-domain update, returning `(storage_acks, wallet_results)`.
pub type MultiUpdateFn = dyn Fn(
        &[AccountUpdate],
        &[StorageWrite],
        &[WalletUpdate],
        bool,
    ) -> Result<(Vec<StorageObjectAck>, Vec<WalletUpdateResult>), HostError>
    + Send
    + Sync;

// ============================================================================
// Leaderboards and tournaments
// ============================================================================

/// Create a leaderboard.
pub type LeaderboardCreateFn =
    dyn Fn(&str, bool, &str, &str, &str, &Metadata) -> Result<(), HostError> + Send + Sync;

/// Deletion by id (leaderboards, tournaments, groups).
pub type DeleteByIdFn = dyn Fn(&str) -> Result<(), HostError> + Send + Sync;

/// Record listing for leaderboards and tournaments, returning a full
/// [`RecordPage`].
pub type RecordsListFn =
    dyn Fn(&str, &[String], usize, &str, i64) -> Result<RecordPage, HostError> + Send + Sync;

/// Record write for leaderboards and tournaments.
pub type RecordWriteFn = dyn Fn(&str, &str, &str, i64, i64, &Metadata) -> Result<LeaderboardRecord, HostError>
    + Send
    + Sync;
/// Delete one owner's record: `(id, owner_id)`.
pub type LeaderboardRecordDeleteFn =
    dyn Fn(&str, &str) -> Result<(), HostError> + Send + Sync;

/// Create a tournament.
pub type TournamentCreateFn = dyn Fn(
        &str,
        &str,
        &str,
        &str,
        &Metadata,
        &str,
        &str,
        i32,
        i64,
        i64,
        i64,
        usize,
        usize,
        bool,
    ) -> Result<(), HostError>
    + Send
    + Sync;
/// Grant score attempts: `(id, owner_id, count)`.
pub type TournamentAddAttemptFn =
    dyn Fn(&str, &str, i32) -> Result<(), HostError> + Send + Sync;
/// Join a tournament: `(id, owner_id, username)`.
pub type TournamentJoinFn = dyn Fn(&str, &str, &str) -> Result<(), HostError> + Send + Sync;
/// Fetch tournaments by id.
pub type TournamentsGetIdFn =
    dyn Fn(&[String]) -> Result<Vec<Tournament>, HostError> + Send + Sync;
/// List tournaments by filter.
pub type TournamentListFn =
    dyn Fn(i32, i32, i64, i64, usize, &str) -> Result<TournamentList, HostError> + Send + Sync;
/// List records centered on one owner.
pub type TournamentRecordsHaystackFn =
    dyn Fn(&str, &str, usize, i64) -> Result<Vec<LeaderboardRecord>, HostError> + Send + Sync;

// ============================================================================
// Purchases
// ============================================================================

/// Receipt validation: `(user_id, receipt)`.
pub type PurchaseValidateFn =
    dyn Fn(&str, &str) -> Result<ValidatePurchaseResponse, HostError> + Send + Sync;
/// Receipt validation with a signature: `(user_id, signature, receipt)`.
pub type PurchaseValidateHuaweiFn =
    dyn Fn(&str, &str, &str) -> Result<ValidatePurchaseResponse, HostError> + Send + Sync;
/// List validated purchases.
pub type PurchasesListFn =
    dyn Fn(&str, usize, &str) -> Result<PurchaseList, HostError> + Send + Sync;

/// Purchase lookup, returning `(owner_user_id, purchase)`.
pub type PurchaseGetByTransactionIdFn =
    dyn Fn(&str) -> Result<(String, ValidatedPurchase), HostError> + Send + Sync;

// ============================================================================
// Groups and social graph
// ============================================================================

/// Fetch groups by id.
pub type GroupsGetIdFn = dyn Fn(&[String]) -> Result<Vec<Group>, HostError> + Send + Sync;
/// Create a group.
pub type GroupCreateFn = dyn Fn(&str, &str, &str, &str, &str, &str, bool, &Metadata, usize) -> Result<Group, HostError>
    + Send
    + Sync;
/// Update a group's fields.
pub type GroupUpdateFn = dyn Fn(&str, &str, &str, &str, &str, &str, bool, &Metadata, usize) -> Result<(), HostError>
    + Send
    + Sync;

/// Single-user group membership change: `(group_id, user_id, username)`.
pub type GroupUserFn = dyn Fn(&str, &str, &str) -> Result<(), HostError> + Send + Sync;

/// Bulk group membership change: `(group_id, user_ids)`.
pub type GroupUsersFn = dyn Fn(&str, &[String]) -> Result<(), HostError> + Send + Sync;

/// List a group's members, returning the page and next cursor.
pub type GroupUsersListFn = dyn Fn(&str, usize, Option<i32>, &str) -> Result<(Vec<GroupUser>, Option<String>), HostError>
    + Send
    + Sync;
/// List a user's groups, returning the page and next cursor.
pub type UserGroupsListFn = dyn Fn(&str, usize, Option<i32>, &str) -> Result<(Vec<UserGroup>, Option<String>), HostError>
    + Send
    + Sync;
/// List a user's friends, returning the page and next cursor.
pub type FriendsListFn = dyn Fn(&str, usize, Option<i32>, &str) -> Result<(Vec<Friend>, Option<String>), HostError>
    + Send
    + Sync;

// ============================================================================
// Events
// ============================================================================

/// Emit a custom event.
pub type EventFn = dyn Fn(&Event) -> Result<(), HostError> + Send + Sync;
