//! The host runtime interface.
//!
//! [`HostModule`] is the full operation surface a hosted extension module may
//! call against its execution environment. Server-side module code should be
//! written against this trait (usually as `&dyn HostModule`) so it can run
//! unmodified against the live runtime or a test double.
//!
//! Every operation is a plain synchronous call: the trait has no suspension
//! points and keeps no state of its own. Multi-value results are tuples inside
//! the `Result`; "no next page" cursors are `None`; trailing variadic
//! arguments from the wire protocol are explicit slices.

use crate::error::HostError;
use crate::types::{
    Account, AccountUpdate, Envelope, Event, Friend, Group, GroupUser, LeaderboardRecord, Match,
    Metadata, NotificationSend, Presence, PresenceMeta, PresenceReason, PurchaseList,
    StorageDelete, StorageObject, StorageObjectAck, StorageRead, StorageWrite, Tournament,
    TournamentList, User, UserGroup, ValidatePurchaseResponse, ValidatedPurchase, Vars, Wallet,
    WalletLedgerItem, WalletUpdate, WalletUpdateResult,
};
use std::fs::File;
use std::path::Path;

/// The complete host runtime API surface, one method per operation.
///
/// Successful authentication returns `(user_id, username, created)`.
pub trait HostModule: Send + Sync {
    // ========================================================================
    // Authentication
    // ========================================================================

    /// Authenticate with an Apple Sign In token, optionally creating the account.
    fn authenticate_apple(
        &self,
        token: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Authenticate with a custom identifier, optionally creating the account.
    fn authenticate_custom(
        &self,
        id: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Authenticate with a device identifier, optionally creating the account.
    fn authenticate_device(
        &self,
        id: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Authenticate with an email/password pair, optionally creating the account.
    fn authenticate_email(
        &self,
        email: &str,
        password: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Authenticate with a Facebook OAuth token, optionally importing friends.
    fn authenticate_facebook(
        &self,
        token: &str,
        import_friends: bool,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Authenticate with Facebook Instant Game signed player info.
    fn authenticate_facebook_instant_game(
        &self,
        signed_player_info: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Authenticate with Apple Game Center credentials.
    #[allow(clippy::too_many_arguments)]
    fn authenticate_game_center(
        &self,
        player_id: &str,
        bundle_id: &str,
        timestamp: i64,
        salt: &str,
        signature: &str,
        public_key_url: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Authenticate with a Google ID token, optionally creating the account.
    fn authenticate_google(
        &self,
        token: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Authenticate with a Steam session token, optionally creating the account.
    fn authenticate_steam(
        &self,
        token: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError>;

    /// Generate a session token for a user. Returns `(token, expiry)`.
    fn authenticate_token_generate(
        &self,
        user_id: &str,
        username: &str,
        exp: i64,
        vars: &Vars,
    ) -> Result<(String, i64), HostError>;

    // ========================================================================
    // Accounts and users
    // ========================================================================

    /// Fetch one account by user id.
    fn account_get_id(&self, user_id: &str) -> Result<Account, HostError>;

    /// Fetch multiple accounts by user id.
    fn accounts_get_id(&self, user_ids: &[String]) -> Result<Vec<Account>, HostError>;

    /// Update fields of one account.
    #[allow(clippy::too_many_arguments)]
    fn account_update_id(
        &self,
        user_id: &str,
        username: &str,
        metadata: &Metadata,
        display_name: &str,
        timezone: &str,
        location: &str,
        lang_tag: &str,
        avatar_url: &str,
    ) -> Result<(), HostError>;

    /// Delete one account, optionally recording the deletion.
    fn account_delete_id(&self, user_id: &str, recorded: bool) -> Result<(), HostError>;

    /// Export all of one account's data as JSON.
    fn account_export_id(&self, user_id: &str) -> Result<String, HostError>;

    /// Fetch users by id and/or Facebook id.
    fn users_get_id(
        &self,
        user_ids: &[String],
        facebook_ids: &[String],
    ) -> Result<Vec<User>, HostError>;

    /// Fetch users by username.
    fn users_get_username(&self, usernames: &[String]) -> Result<Vec<User>, HostError>;

    /// Ban the given users.
    fn users_ban_id(&self, user_ids: &[String]) -> Result<(), HostError>;

    /// Unban the given users.
    fn users_unban_id(&self, user_ids: &[String]) -> Result<(), HostError>;

    // ========================================================================
    // Identity linking
    // ========================================================================

    /// Link an Apple Sign In token to an account.
    fn link_apple(&self, user_id: &str, token: &str) -> Result<(), HostError>;

    /// Link a custom identifier to an account.
    fn link_custom(&self, user_id: &str, custom_id: &str) -> Result<(), HostError>;

    /// Link a device identifier to an account.
    fn link_device(&self, user_id: &str, device_id: &str) -> Result<(), HostError>;

    /// Link an email/password pair to an account.
    fn link_email(&self, user_id: &str, email: &str, password: &str) -> Result<(), HostError>;

    /// Link a Facebook profile to an account, optionally importing friends.
    fn link_facebook(
        &self,
        user_id: &str,
        username: &str,
        token: &str,
        import_friends: bool,
    ) -> Result<(), HostError>;

    /// Link a Facebook Instant Game profile to an account.
    fn link_facebook_instant_game(
        &self,
        user_id: &str,
        signed_player_info: &str,
    ) -> Result<(), HostError>;

    /// Link a Game Center profile to an account.
    #[allow(clippy::too_many_arguments)]
    fn link_game_center(
        &self,
        user_id: &str,
        player_id: &str,
        bundle_id: &str,
        timestamp: i64,
        salt: &str,
        signature: &str,
        public_key_url: &str,
    ) -> Result<(), HostError>;

    /// Link a Google profile to an account.
    fn link_google(&self, user_id: &str, token: &str) -> Result<(), HostError>;

    /// Link a Steam profile to an account, optionally importing friends.
    fn link_steam(
        &self,
        user_id: &str,
        username: &str,
        token: &str,
        import_friends: bool,
    ) -> Result<(), HostError>;

    /// Open a file from the runtime's data directory.
    fn read_file(&self, path: &Path) -> Result<File, HostError>;

    /// Unlink an Apple Sign In token from an account.
    fn unlink_apple(&self, user_id: &str, token: &str) -> Result<(), HostError>;

    /// Unlink a custom identifier from an account.
    fn unlink_custom(&self, user_id: &str, custom_id: &str) -> Result<(), HostError>;

    /// Unlink a device identifier from an account.
    fn unlink_device(&self, user_id: &str, device_id: &str) -> Result<(), HostError>;

    /// Unlink an email address from an account.
    fn unlink_email(&self, user_id: &str, email: &str) -> Result<(), HostError>;

    /// Unlink a Facebook profile from an account.
    fn unlink_facebook(&self, user_id: &str, token: &str) -> Result<(), HostError>;

    /// Unlink a Facebook Instant Game profile from an account.
    fn unlink_facebook_instant_game(
        &self,
        user_id: &str,
        signed_player_info: &str,
    ) -> Result<(), HostError>;

    /// Unlink a Game Center profile from an account.
    #[allow(clippy::too_many_arguments)]
    fn unlink_game_center(
        &self,
        user_id: &str,
        player_id: &str,
        bundle_id: &str,
        timestamp: i64,
        salt: &str,
        signature: &str,
        public_key_url: &str,
    ) -> Result<(), HostError>;

    /// Unlink a Google profile from an account.
    fn unlink_google(&self, user_id: &str, token: &str) -> Result<(), HostError>;

    /// Unlink a Steam profile from an account.
    fn unlink_steam(&self, user_id: &str, token: &str) -> Result<(), HostError>;

    // ========================================================================
    // Streams
    // ========================================================================

    /// List presences on a stream.
    fn stream_user_list(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        include_hidden: bool,
        include_not_hidden: bool,
    ) -> Result<Vec<Presence>, HostError>;

    /// Fetch one presence's metadata on a stream.
    fn stream_user_get(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<PresenceMeta, HostError>;

    /// Join a user's session to a stream. Returns whether the join was new.
    #[allow(clippy::too_many_arguments)]
    fn stream_user_join(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        user_id: &str,
        session_id: &str,
        hidden: bool,
        persistence: bool,
        status: &str,
    ) -> Result<bool, HostError>;

    /// Update a user's presence metadata on a stream.
    #[allow(clippy::too_many_arguments)]
    fn stream_user_update(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        user_id: &str,
        session_id: &str,
        hidden: bool,
        persistence: bool,
        status: &str,
    ) -> Result<(), HostError>;

    /// Remove a user's session from a stream.
    fn stream_user_leave(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<(), HostError>;

    /// Kick a presence from a stream.
    fn stream_user_kick(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        presence: &Presence,
    ) -> Result<(), HostError>;

    /// Count presences on a stream.
    fn stream_count(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
    ) -> Result<usize, HostError>;

    /// Close a stream, removing all presences.
    fn stream_close(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
    ) -> Result<(), HostError>;

    /// Send data to presences on a stream, or to all presences if none given.
    #[allow(clippy::too_many_arguments)]
    fn stream_send(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        data: &str,
        presences: &[Presence],
        reliable: bool,
    ) -> Result<(), HostError>;

    /// Send a raw envelope to presences on a stream.
    #[allow(clippy::too_many_arguments)]
    fn stream_send_raw(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        msg: &Envelope,
        presences: &[Presence],
        reliable: bool,
    ) -> Result<(), HostError>;

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Disconnect a session, with zero or more trailing disconnect reasons.
    fn session_disconnect(
        &self,
        session_id: &str,
        reasons: &[PresenceReason],
    ) -> Result<(), HostError>;

    /// Log a session out, invalidating its tokens.
    fn session_logout(
        &self,
        user_id: &str,
        token: &str,
        refresh_token: &str,
    ) -> Result<(), HostError>;

    // ========================================================================
    // Matches
    // ========================================================================

    /// Create an authoritative match. Returns the new match id.
    fn match_create(&self, module: &str, params: &Metadata) -> Result<String, HostError>;

    /// Fetch one match by id.
    fn match_get(&self, id: &str) -> Result<Match, HostError>;

    /// List matches matching the given filters.
    fn match_list(
        &self,
        limit: usize,
        authoritative: bool,
        label: &str,
        min_size: Option<usize>,
        max_size: Option<usize>,
        query: &str,
    ) -> Result<Vec<Match>, HostError>;

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Send one notification to one user.
    #[allow(clippy::too_many_arguments)]
    fn notification_send(
        &self,
        user_id: &str,
        subject: &str,
        content: &Metadata,
        code: i32,
        sender: &str,
        persistent: bool,
    ) -> Result<(), HostError>;

    /// Send a batch of notifications.
    fn notifications_send(&self, notifications: &[NotificationSend]) -> Result<(), HostError>;

    // ========================================================================
    // Wallet
    // ========================================================================

    /// Apply a changeset to one user's wallet. Returns the updated wallet and,
    /// when available, the previous wallet.
    fn wallet_update(
        &self,
        user_id: &str,
        changeset: &Wallet,
        metadata: &Metadata,
        update_ledger: bool,
    ) -> Result<(Wallet, Option<Wallet>), HostError>;

    /// Apply changesets to several wallets at once.
    fn wallets_update(
        &self,
        updates: &[WalletUpdate],
        update_ledger: bool,
    ) -> Result<Vec<WalletUpdateResult>, HostError>;

    /// Update the metadata of one ledger entry.
    fn wallet_ledger_update(
        &self,
        item_id: &str,
        metadata: &Metadata,
    ) -> Result<WalletLedgerItem, HostError>;

    /// List one user's ledger entries. Returns the page and the next cursor.
    fn wallet_ledger_list(
        &self,
        user_id: &str,
        limit: usize,
        cursor: &str,
    ) -> Result<(Vec<WalletLedgerItem>, Option<String>), HostError>;

    // ========================================================================
    // Storage
    // ========================================================================

    /// List a user's objects in a collection. Returns the page and the next
    /// cursor.
    fn storage_list(
        &self,
        user_id: &str,
        collection: &str,
        limit: usize,
        cursor: &str,
    ) -> Result<(Vec<StorageObject>, Option<String>), HostError>;

    /// Read a batch of objects.
    fn storage_read(&self, reads: &[StorageRead]) -> Result<Vec<StorageObject>, HostError>;

    /// Write a batch of objects.
    fn storage_write(&self, writes: &[StorageWrite]) -> Result<Vec<StorageObjectAck>, HostError>;

    /// Delete a batch of objects.
    fn storage_delete(&self, deletes: &[StorageDelete]) -> Result<(), HostError>;

    /// Atomically apply account, storage and wallet updates. Returns the
    /// storage acks and the wallet results.
    fn multi_update(
        &self,
        account_updates: &[AccountUpdate],
        storage_writes: &[StorageWrite],
        wallet_updates: &[WalletUpdate],
        update_ledger: bool,
    ) -> Result<(Vec<StorageObjectAck>, Vec<WalletUpdateResult>), HostError>;

    // ========================================================================
    // Leaderboards
    // ========================================================================

    /// Create a leaderboard.
    fn leaderboard_create(
        &self,
        id: &str,
        authoritative: bool,
        sort_order: &str,
        operator: &str,
        reset_schedule: &str,
        metadata: &Metadata,
    ) -> Result<(), HostError>;

    /// Delete a leaderboard.
    fn leaderboard_delete(&self, id: &str) -> Result<(), HostError>;

    /// List leaderboard records. Returns `(records, owner_records,
    /// next_cursor, prev_cursor)`.
    fn leaderboard_records_list(
        &self,
        id: &str,
        owner_ids: &[String],
        limit: usize,
        cursor: &str,
        expiry: i64,
    ) -> Result<RecordPage, HostError>;

    /// Write one leaderboard record.
    fn leaderboard_record_write(
        &self,
        id: &str,
        owner_id: &str,
        username: &str,
        score: i64,
        subscore: i64,
        metadata: &Metadata,
    ) -> Result<LeaderboardRecord, HostError>;

    /// Delete one owner's leaderboard record.
    fn leaderboard_record_delete(&self, id: &str, owner_id: &str) -> Result<(), HostError>;

    // ========================================================================
    // Purchases
    // ========================================================================

    /// Validate an Apple App Store receipt.
    fn purchase_validate_apple(
        &self,
        user_id: &str,
        receipt: &str,
    ) -> Result<ValidatePurchaseResponse, HostError>;

    /// Validate a Google Play receipt.
    fn purchase_validate_google(
        &self,
        user_id: &str,
        receipt: &str,
    ) -> Result<ValidatePurchaseResponse, HostError>;

    /// Validate a Huawei AppGallery purchase.
    fn purchase_validate_huawei(
        &self,
        user_id: &str,
        signature: &str,
        in_app_purchase_data: &str,
    ) -> Result<ValidatePurchaseResponse, HostError>;

    /// List a user's validated purchases.
    fn purchases_list(
        &self,
        user_id: &str,
        limit: usize,
        cursor: &str,
    ) -> Result<PurchaseList, HostError>;

    /// Look up a validated purchase by transaction id. Returns the owning
    /// user id and the purchase.
    fn purchase_get_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<(String, ValidatedPurchase), HostError>;

    // ========================================================================
    // Tournaments
    // ========================================================================

    /// Create a tournament.
    #[allow(clippy::too_many_arguments)]
    fn tournament_create(
        &self,
        id: &str,
        sort_order: &str,
        operator: &str,
        reset_schedule: &str,
        metadata: &Metadata,
        title: &str,
        description: &str,
        category: i32,
        start_time: i64,
        end_time: i64,
        duration: i64,
        max_size: usize,
        max_num_score: usize,
        join_required: bool,
    ) -> Result<(), HostError>;

    /// Delete a tournament.
    fn tournament_delete(&self, id: &str) -> Result<(), HostError>;

    /// Grant an owner additional score attempts in a tournament.
    fn tournament_add_attempt(&self, id: &str, owner_id: &str, count: i32)
    -> Result<(), HostError>;

    /// Join a tournament on behalf of an owner.
    fn tournament_join(&self, id: &str, owner_id: &str, username: &str) -> Result<(), HostError>;

    /// Fetch tournaments by id.
    fn tournaments_get_id(&self, tournament_ids: &[String]) -> Result<Vec<Tournament>, HostError>;

    /// List tournaments matching the given filters.
    fn tournament_list(
        &self,
        category_start: i32,
        category_end: i32,
        start_time: i64,
        end_time: i64,
        limit: usize,
        cursor: &str,
    ) -> Result<TournamentList, HostError>;

    /// List tournament records. Returns `(records, owner_records, next_cursor,
    /// prev_cursor)`.
    fn tournament_records_list(
        &self,
        tournament_id: &str,
        owner_ids: &[String],
        limit: usize,
        cursor: &str,
        override_expiry: i64,
    ) -> Result<RecordPage, HostError>;

    /// Write one tournament record.
    fn tournament_record_write(
        &self,
        id: &str,
        owner_id: &str,
        username: &str,
        score: i64,
        subscore: i64,
        metadata: &Metadata,
    ) -> Result<LeaderboardRecord, HostError>;

    /// List tournament records centered on one owner's position.
    fn tournament_records_haystack(
        &self,
        id: &str,
        owner_id: &str,
        limit: usize,
        expiry: i64,
    ) -> Result<Vec<LeaderboardRecord>, HostError>;

    // ========================================================================
    // Groups
    // ========================================================================

    /// Fetch groups by id.
    fn groups_get_id(&self, group_ids: &[String]) -> Result<Vec<Group>, HostError>;

    /// Create a group.
    #[allow(clippy::too_many_arguments)]
    fn group_create(
        &self,
        user_id: &str,
        name: &str,
        creator_id: &str,
        lang_tag: &str,
        description: &str,
        avatar_url: &str,
        open: bool,
        metadata: &Metadata,
        max_count: usize,
    ) -> Result<Group, HostError>;

    /// Update a group's fields.
    #[allow(clippy::too_many_arguments)]
    fn group_update(
        &self,
        id: &str,
        name: &str,
        creator_id: &str,
        lang_tag: &str,
        description: &str,
        avatar_url: &str,
        open: bool,
        metadata: &Metadata,
        max_count: usize,
    ) -> Result<(), HostError>;

    /// Delete a group.
    fn group_delete(&self, id: &str) -> Result<(), HostError>;

    /// Join a user to a group.
    fn group_user_join(&self, group_id: &str, user_id: &str, username: &str)
    -> Result<(), HostError>;

    /// Remove a user from a group at their own request.
    fn group_user_leave(
        &self,
        group_id: &str,
        user_id: &str,
        username: &str,
    ) -> Result<(), HostError>;

    /// Add users to a group directly.
    fn group_users_add(&self, group_id: &str, user_ids: &[String]) -> Result<(), HostError>;

    /// Kick users from a group.
    fn group_users_kick(&self, group_id: &str, user_ids: &[String]) -> Result<(), HostError>;

    /// Promote users within a group.
    fn group_users_promote(&self, group_id: &str, user_ids: &[String]) -> Result<(), HostError>;

    /// Demote users within a group.
    fn group_users_demote(&self, group_id: &str, user_ids: &[String]) -> Result<(), HostError>;

    /// List a group's members. Returns the page and the next cursor.
    fn group_users_list(
        &self,
        id: &str,
        limit: usize,
        state: Option<i32>,
        cursor: &str,
    ) -> Result<(Vec<GroupUser>, Option<String>), HostError>;

    /// List the groups a user belongs to. Returns the page and the next
    /// cursor.
    fn user_groups_list(
        &self,
        user_id: &str,
        limit: usize,
        state: Option<i32>,
        cursor: &str,
    ) -> Result<(Vec<UserGroup>, Option<String>), HostError>;

    // ========================================================================
    // Social graph
    // ========================================================================

    /// List a user's friends. Returns the page and the next cursor.
    fn friends_list(
        &self,
        user_id: &str,
        limit: usize,
        state: Option<i32>,
        cursor: &str,
    ) -> Result<(Vec<Friend>, Option<String>), HostError>;

    // ========================================================================
    // Events
    // ========================================================================

    /// Emit a custom event to the server's event processors.
    fn event(&self, evt: &Event) -> Result<(), HostError>;
}

/// One page of leaderboard or tournament records: `(records, owner_records,
/// next_cursor, prev_cursor)`. All four results are independent and must be
/// threaded through unchanged.
pub type RecordPage = (
    Vec<LeaderboardRecord>,
    Vec<LeaderboardRecord>,
    Option<String>,
    Option<String>,
);
