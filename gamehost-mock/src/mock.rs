//! The capability table: one slot per host operation.

use crate::slot::{
    AccountDeleteIdFn, AccountExportIdFn, AccountGetIdFn, AccountUpdateIdFn, AccountsGetIdFn,
    AuthenticateEmailFn, AuthenticateFacebookFn, AuthenticateFn, AuthenticateGameCenterFn,
    AuthenticateTokenGenerateFn, DeleteByIdFn, EventFn, FriendsListFn, GroupCreateFn,
    GroupUpdateFn, GroupUserFn, GroupUsersFn, GroupUsersListFn, GroupsGetIdFn,
    LeaderboardCreateFn, LeaderboardRecordDeleteFn, LinkEmailFn, LinkFn, LinkGameCenterFn,
    LinkSocialFn, MatchCreateFn, MatchGetFn, MatchListFn, MultiUpdateFn, NotificationSendFn,
    NotificationsSendFn, PurchaseGetByTransactionIdFn, PurchaseValidateFn,
    PurchaseValidateHuaweiFn, PurchasesListFn, ReadFileFn, RecordWriteFn, RecordsListFn,
    SessionDisconnectFn, SessionLogoutFn, Slot, StorageDeleteFn, StorageListFn, StorageReadFn,
    StorageWriteFn, StreamCloseFn, StreamCountFn, StreamSendFn, StreamSendRawFn, StreamUserGetFn,
    StreamUserJoinFn, StreamUserKickFn, StreamUserLeaveFn, StreamUserListFn, StreamUserUpdateFn,
    TournamentAddAttemptFn, TournamentCreateFn, TournamentJoinFn, TournamentListFn,
    TournamentRecordsHaystackFn, TournamentsGetIdFn, UserGroupsListFn, UserIdsFn, UsersGetIdFn,
    UsersGetUsernameFn, WalletLedgerListFn, WalletLedgerUpdateFn, WalletUpdateFn, WalletsUpdateFn,
};

/// A configurable test double for the host runtime API.
///
/// Holds exactly one optional behavior slot per [`HostModule`] operation,
/// named after the operation it stubs. All slots start empty; bind the ones
/// your test needs with a struct literal and leave the rest to
/// `..Default::default()`. Invoking an operation whose slot is still empty
/// fails with [`HostError::Unconfigured`] naming that operation, so missing
/// test setup surfaces as a failed test rather than a silent zero value.
///
/// The table is meant to be constructed fresh per test, fully configured
/// before the first call, and dropped at the end of the test. It keeps no
/// state of its own and never synchronizes: behaviors that need shared state
/// or locking bring their own.
///
/// # Example
///
/// ```
/// use gamehost_api::HostModule;
/// use gamehost_api::types::{ValidatePurchaseResponse, ValidatedPurchase, Wallet};
/// use gamehost_mock::MockHostModule;
///
/// let nk = MockHostModule {
///     purchase_validate_apple: Some(Box::new(|_user_id, _receipt| {
///         Ok(ValidatePurchaseResponse {
///             validated_purchases: vec![ValidatedPurchase {
///                 product_id: "my-test-product-id".to_string(),
///                 ..Default::default()
///             }],
///         })
///     })),
///     wallet_update: Some(Box::new(|_user_id, _changeset, _metadata, _update_ledger| {
///         Ok((Wallet::from([("gems".to_string(), 10)]), None))
///     })),
///     ..Default::default()
/// };
///
/// let (updated, previous) = nk
///     .wallet_update("user-1", &Wallet::new(), &Default::default(), false)
///     .unwrap();
/// assert_eq!(updated["gems"], 10);
/// assert!(previous.is_none());
///
/// // Anything left unbound fails loudly.
/// let err = nk.account_get_id("user-1").unwrap_err();
/// assert_eq!(err.operation(), Some("account_get_id"));
/// ```
///
/// [`HostModule`]: gamehost_api::HostModule
/// [`HostError::Unconfigured`]: gamehost_api::HostError::Unconfigured
#[derive(Default)]
#[allow(missing_docs)]
pub struct MockHostModule {
    // Authentication
    pub authenticate_apple: Slot<AuthenticateFn>,
    pub authenticate_custom: Slot<AuthenticateFn>,
    pub authenticate_device: Slot<AuthenticateFn>,
    pub authenticate_email: Slot<AuthenticateEmailFn>,
    pub authenticate_facebook: Slot<AuthenticateFacebookFn>,
    pub authenticate_facebook_instant_game: Slot<AuthenticateFn>,
    pub authenticate_game_center: Slot<AuthenticateGameCenterFn>,
    pub authenticate_google: Slot<AuthenticateFn>,
    pub authenticate_steam: Slot<AuthenticateFn>,
    pub authenticate_token_generate: Slot<AuthenticateTokenGenerateFn>,

    // Accounts and users
    pub account_get_id: Slot<AccountGetIdFn>,
    pub accounts_get_id: Slot<AccountsGetIdFn>,
    pub account_update_id: Slot<AccountUpdateIdFn>,
    pub account_delete_id: Slot<AccountDeleteIdFn>,
    pub account_export_id: Slot<AccountExportIdFn>,
    pub users_get_id: Slot<UsersGetIdFn>,
    pub users_get_username: Slot<UsersGetUsernameFn>,
    pub users_ban_id: Slot<UserIdsFn>,
    pub users_unban_id: Slot<UserIdsFn>,

    // Identity linking
    pub link_apple: Slot<LinkFn>,
    pub link_custom: Slot<LinkFn>,
    pub link_device: Slot<LinkFn>,
    pub link_email: Slot<LinkEmailFn>,
    pub link_facebook: Slot<LinkSocialFn>,
    pub link_facebook_instant_game: Slot<LinkFn>,
    pub link_game_center: Slot<LinkGameCenterFn>,
    pub link_google: Slot<LinkFn>,
    pub link_steam: Slot<LinkSocialFn>,
    pub read_file: Slot<ReadFileFn>,
    pub unlink_apple: Slot<LinkFn>,
    pub unlink_custom: Slot<LinkFn>,
    pub unlink_device: Slot<LinkFn>,
    pub unlink_email: Slot<LinkFn>,
    pub unlink_facebook: Slot<LinkFn>,
    pub unlink_facebook_instant_game: Slot<LinkFn>,
    pub unlink_game_center: Slot<LinkGameCenterFn>,
    pub unlink_google: Slot<LinkFn>,
    pub unlink_steam: Slot<LinkFn>,

    // Streams
    pub stream_user_list: Slot<StreamUserListFn>,
    pub stream_user_get: Slot<StreamUserGetFn>,
    pub stream_user_join: Slot<StreamUserJoinFn>,
    pub stream_user_update: Slot<StreamUserUpdateFn>,
    pub stream_user_leave: Slot<StreamUserLeaveFn>,
    pub stream_user_kick: Slot<StreamUserKickFn>,
    pub stream_count: Slot<StreamCountFn>,
    pub stream_close: Slot<StreamCloseFn>,
    pub stream_send: Slot<StreamSendFn>,
    pub stream_send_raw: Slot<StreamSendRawFn>,

    // Sessions
    pub session_disconnect: Slot<SessionDisconnectFn>,
    pub session_logout: Slot<SessionLogoutFn>,

    // Matches
    pub match_create: Slot<MatchCreateFn>,
    pub match_get: Slot<MatchGetFn>,
    pub match_list: Slot<MatchListFn>,

    // Notifications
    pub notification_send: Slot<NotificationSendFn>,
    pub notifications_send: Slot<NotificationsSendFn>,

    // Wallet
    pub wallet_update: Slot<WalletUpdateFn>,
    pub wallets_update: Slot<WalletsUpdateFn>,
    pub wallet_ledger_update: Slot<WalletLedgerUpdateFn>,
    pub wallet_ledger_list: Slot<WalletLedgerListFn>,

    // Storage
    pub storage_list: Slot<StorageListFn>,
    pub storage_read: Slot<StorageReadFn>,
    pub storage_write: Slot<StorageWriteFn>,
    pub storage_delete: Slot<StorageDeleteFn>,
    pub multi_update: Slot<MultiUpdateFn>,

    // Leaderboards
    pub leaderboard_create: Slot<LeaderboardCreateFn>,
    pub leaderboard_delete: Slot<DeleteByIdFn>,
    pub leaderboard_records_list: Slot<RecordsListFn>,
    pub leaderboard_record_write: Slot<RecordWriteFn>,
    pub leaderboard_record_delete: Slot<LeaderboardRecordDeleteFn>,

    // Purchases
    pub purchase_validate_apple: Slot<PurchaseValidateFn>,
    pub purchase_validate_google: Slot<PurchaseValidateFn>,
    pub purchase_validate_huawei: Slot<PurchaseValidateHuaweiFn>,
    pub purchases_list: Slot<PurchasesListFn>,
    pub purchase_get_by_transaction_id: Slot<PurchaseGetByTransactionIdFn>,

    // Tournaments
    pub tournament_create: Slot<TournamentCreateFn>,
    pub tournament_delete: Slot<DeleteByIdFn>,
    pub tournament_add_attempt: Slot<TournamentAddAttemptFn>,
    pub tournament_join: Slot<TournamentJoinFn>,
    pub tournaments_get_id: Slot<TournamentsGetIdFn>,
    pub tournament_list: Slot<TournamentListFn>,
    pub tournament_records_list: Slot<RecordsListFn>,
    pub tournament_record_write: Slot<RecordWriteFn>,
    pub tournament_records_haystack: Slot<TournamentRecordsHaystackFn>,

    // Groups and social graph
    pub groups_get_id: Slot<GroupsGetIdFn>,
    pub group_create: Slot<GroupCreateFn>,
    pub group_update: Slot<GroupUpdateFn>,
    pub group_delete: Slot<DeleteByIdFn>,
    pub group_user_join: Slot<GroupUserFn>,
    pub group_user_leave: Slot<GroupUserFn>,
    pub group_users_add: Slot<GroupUsersFn>,
    pub group_users_kick: Slot<GroupUsersFn>,
    pub group_users_promote: Slot<GroupUsersFn>,
    pub group_users_demote: Slot<GroupUsersFn>,
    pub group_users_list: Slot<GroupUsersListFn>,
    pub user_groups_list: Slot<UserGroupsListFn>,
    pub friends_list: Slot<FriendsListFn>,

    // Events
    pub event: Slot<EventFn>,
}
