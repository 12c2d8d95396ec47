//! The dispatcher: [`HostModule`] implemented by slot resolution.
//!
//! Every method resolves its own slot through [`bound`] and forwards all
//! arguments to the behavior verbatim; the behavior's result, value or
//! failure, flows back unchanged. The only logic the dispatcher adds is the
//! unconfigured-slot failure. No argument is validated, reordered or dropped,
//! and no result is interpreted.

use crate::mock::MockHostModule;
use crate::slot::bound;
use gamehost_api::types::{
    Account, AccountUpdate, Envelope, Event, Friend, Group, GroupUser, LeaderboardRecord, Match,
    Metadata, NotificationSend, Presence, PresenceMeta, PresenceReason, PurchaseList,
    StorageDelete, StorageObject, StorageObjectAck, StorageRead, StorageWrite, Tournament,
    TournamentList, User, UserGroup, ValidatePurchaseResponse, ValidatedPurchase, Vars, Wallet,
    WalletLedgerItem, WalletUpdate, WalletUpdateResult,
};
use gamehost_api::{HostError, HostModule, RecordPage};
use std::fs::File;
use std::path::Path;

impl HostModule for MockHostModule {
    fn authenticate_apple(
        &self,
        token: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError> {
        bound(&self.authenticate_apple, "authenticate_apple")?(token, username, create)
    }

    fn authenticate_custom(
        &self,
        id: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError> {
        bound(&self.authenticate_custom, "authenticate_custom")?(id, username, create)
    }

    fn authenticate_device(
        &self,
        id: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError> {
        bound(&self.authenticate_device, "authenticate_device")?(id, username, create)
    }

    fn authenticate_email(
        &self,
        email: &str,
        password: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError> {
        bound(&self.authenticate_email, "authenticate_email")?(email, password, username, create)
    }

    fn authenticate_facebook(
        &self,
        token: &str,
        import_friends: bool,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError> {
        bound(&self.authenticate_facebook, "authenticate_facebook")?(
            token,
            import_friends,
            username,
            create,
        )
    }

    fn authenticate_facebook_instant_game(
        &self,
        signed_player_info: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError> {
        bound(
            &self.authenticate_facebook_instant_game,
            "authenticate_facebook_instant_game",
        )?(signed_player_info, username, create)
    }

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
    ) -> Result<(String, String, bool), HostError> {
        bound(&self.authenticate_game_center, "authenticate_game_center")?(
            player_id,
            bundle_id,
            timestamp,
            salt,
            signature,
            public_key_url,
            username,
            create,
        )
    }

    fn authenticate_google(
        &self,
        token: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError> {
        bound(&self.authenticate_google, "authenticate_google")?(token, username, create)
    }

    fn authenticate_steam(
        &self,
        token: &str,
        username: &str,
        create: bool,
    ) -> Result<(String, String, bool), HostError> {
        bound(&self.authenticate_steam, "authenticate_steam")?(token, username, create)
    }

    fn authenticate_token_generate(
        &self,
        user_id: &str,
        username: &str,
        exp: i64,
        vars: &Vars,
    ) -> Result<(String, i64), HostError> {
        bound(
            &self.authenticate_token_generate,
            "authenticate_token_generate",
        )?(user_id, username, exp, vars)
    }

    fn account_get_id(&self, user_id: &str) -> Result<Account, HostError> {
        bound(&self.account_get_id, "account_get_id")?(user_id)
    }

    fn accounts_get_id(&self, user_ids: &[String]) -> Result<Vec<Account>, HostError> {
        bound(&self.accounts_get_id, "accounts_get_id")?(user_ids)
    }

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
    ) -> Result<(), HostError> {
        bound(&self.account_update_id, "account_update_id")?(
            user_id,
            username,
            metadata,
            display_name,
            timezone,
            location,
            lang_tag,
            avatar_url,
        )
    }

    fn account_delete_id(&self, user_id: &str, recorded: bool) -> Result<(), HostError> {
        bound(&self.account_delete_id, "account_delete_id")?(user_id, recorded)
    }

    fn account_export_id(&self, user_id: &str) -> Result<String, HostError> {
        bound(&self.account_export_id, "account_export_id")?(user_id)
    }

    fn users_get_id(
        &self,
        user_ids: &[String],
        facebook_ids: &[String],
    ) -> Result<Vec<User>, HostError> {
        bound(&self.users_get_id, "users_get_id")?(user_ids, facebook_ids)
    }

    fn users_get_username(&self, usernames: &[String]) -> Result<Vec<User>, HostError> {
        bound(&self.users_get_username, "users_get_username")?(usernames)
    }

    fn users_ban_id(&self, user_ids: &[String]) -> Result<(), HostError> {
        bound(&self.users_ban_id, "users_ban_id")?(user_ids)
    }

    fn users_unban_id(&self, user_ids: &[String]) -> Result<(), HostError> {
        bound(&self.users_unban_id, "users_unban_id")?(user_ids)
    }

    fn link_apple(&self, user_id: &str, token: &str) -> Result<(), HostError> {
        bound(&self.link_apple, "link_apple")?(user_id, token)
    }

    fn link_custom(&self, user_id: &str, custom_id: &str) -> Result<(), HostError> {
        bound(&self.link_custom, "link_custom")?(user_id, custom_id)
    }

    fn link_device(&self, user_id: &str, device_id: &str) -> Result<(), HostError> {
        bound(&self.link_device, "link_device")?(user_id, device_id)
    }

    fn link_email(&self, user_id: &str, email: &str, password: &str) -> Result<(), HostError> {
        bound(&self.link_email, "link_email")?(user_id, email, password)
    }

    fn link_facebook(
        &self,
        user_id: &str,
        username: &str,
        token: &str,
        import_friends: bool,
    ) -> Result<(), HostError> {
        bound(&self.link_facebook, "link_facebook")?(user_id, username, token, import_friends)
    }

    fn link_facebook_instant_game(
        &self,
        user_id: &str,
        signed_player_info: &str,
    ) -> Result<(), HostError> {
        bound(
            &self.link_facebook_instant_game,
            "link_facebook_instant_game",
        )?(user_id, signed_player_info)
    }

    fn link_game_center(
        &self,
        user_id: &str,
        player_id: &str,
        bundle_id: &str,
        timestamp: i64,
        salt: &str,
        signature: &str,
        public_key_url: &str,
    ) -> Result<(), HostError> {
        bound(&self.link_game_center, "link_game_center")?(
            user_id,
            player_id,
            bundle_id,
            timestamp,
            salt,
            signature,
            public_key_url,
        )
    }

    fn link_google(&self, user_id: &str, token: &str) -> Result<(), HostError> {
        bound(&self.link_google, "link_google")?(user_id, token)
    }

    fn link_steam(
        &self,
        user_id: &str,
        username: &str,
        token: &str,
        import_friends: bool,
    ) -> Result<(), HostError> {
        bound(&self.link_steam, "link_steam")?(user_id, username, token, import_friends)
    }

    fn read_file(&self, path: &Path) -> Result<File, HostError> {
        bound(&self.read_file, "read_file")?(path)
    }

    fn unlink_apple(&self, user_id: &str, token: &str) -> Result<(), HostError> {
        bound(&self.unlink_apple, "unlink_apple")?(user_id, token)
    }

    fn unlink_custom(&self, user_id: &str, custom_id: &str) -> Result<(), HostError> {
        bound(&self.unlink_custom, "unlink_custom")?(user_id, custom_id)
    }

    fn unlink_device(&self, user_id: &str, device_id: &str) -> Result<(), HostError> {
        bound(&self.unlink_device, "unlink_device")?(user_id, device_id)
    }

    fn unlink_email(&self, user_id: &str, email: &str) -> Result<(), HostError> {
        bound(&self.unlink_email, "unlink_email")?(user_id, email)
    }

    fn unlink_facebook(&self, user_id: &str, token: &str) -> Result<(), HostError> {
        bound(&self.unlink_facebook, "unlink_facebook")?(user_id, token)
    }

    fn unlink_facebook_instant_game(
        &self,
        user_id: &str,
        signed_player_info: &str,
    ) -> Result<(), HostError> {
        bound(
            &self.unlink_facebook_instant_game,
            "unlink_facebook_instant_game",
        )?(user_id, signed_player_info)
    }

    fn unlink_game_center(
        &self,
        user_id: &str,
        player_id: &str,
        bundle_id: &str,
        timestamp: i64,
        salt: &str,
        signature: &str,
        public_key_url: &str,
    ) -> Result<(), HostError> {
        bound(&self.unlink_game_center, "unlink_game_center")?(
            user_id,
            player_id,
            bundle_id,
            timestamp,
            salt,
            signature,
            public_key_url,
        )
    }

    fn unlink_google(&self, user_id: &str, token: &str) -> Result<(), HostError> {
        bound(&self.unlink_google, "unlink_google")?(user_id, token)
    }

    fn unlink_steam(&self, user_id: &str, token: &str) -> Result<(), HostError> {
        bound(&self.unlink_steam, "unlink_steam")?(user_id, token)
    }

    fn stream_user_list(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        include_hidden: bool,
        include_not_hidden: bool,
    ) -> Result<Vec<Presence>, HostError> {
        bound(&self.stream_user_list, "stream_user_list")?(
            mode,
            subject,
            subcontext,
            label,
            include_hidden,
            include_not_hidden,
        )
    }

    fn stream_user_get(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<PresenceMeta, HostError> {
        bound(&self.stream_user_get, "stream_user_get")?(
            mode, subject, subcontext, label, user_id, session_id,
        )
    }

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
    ) -> Result<bool, HostError> {
        bound(&self.stream_user_join, "stream_user_join")?(
            mode,
            subject,
            subcontext,
            label,
            user_id,
            session_id,
            hidden,
            persistence,
            status,
        )
    }

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
    ) -> Result<(), HostError> {
        bound(&self.stream_user_update, "stream_user_update")?(
            mode,
            subject,
            subcontext,
            label,
            user_id,
            session_id,
            hidden,
            persistence,
            status,
        )
    }

    fn stream_user_leave(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<(), HostError> {
        bound(&self.stream_user_leave, "stream_user_leave")?(
            mode, subject, subcontext, label, user_id, session_id,
        )
    }

    fn stream_user_kick(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        presence: &Presence,
    ) -> Result<(), HostError> {
        bound(&self.stream_user_kick, "stream_user_kick")?(
            mode, subject, subcontext, label, presence,
        )
    }

    fn stream_count(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
    ) -> Result<usize, HostError> {
        bound(&self.stream_count, "stream_count")?(mode, subject, subcontext, label)
    }

    fn stream_close(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
    ) -> Result<(), HostError> {
        bound(&self.stream_close, "stream_close")?(mode, subject, subcontext, label)
    }

    fn stream_send(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        data: &str,
        presences: &[Presence],
        reliable: bool,
    ) -> Result<(), HostError> {
        bound(&self.stream_send, "stream_send")?(
            mode, subject, subcontext, label, data, presences, reliable,
        )
    }

    fn stream_send_raw(
        &self,
        mode: u8,
        subject: &str,
        subcontext: &str,
        label: &str,
        msg: &Envelope,
        presences: &[Presence],
        reliable: bool,
    ) -> Result<(), HostError> {
        bound(&self.stream_send_raw, "stream_send_raw")?(
            mode, subject, subcontext, label, msg, presences, reliable,
        )
    }

    fn session_disconnect(
        &self,
        session_id: &str,
        reasons: &[PresenceReason],
    ) -> Result<(), HostError> {
        // Trailing variadic reasons are forwarded whole, not just the first.
        bound(&self.session_disconnect, "session_disconnect")?(session_id, reasons)
    }

    fn session_logout(
        &self,
        user_id: &str,
        token: &str,
        refresh_token: &str,
    ) -> Result<(), HostError> {
        bound(&self.session_logout, "session_logout")?(user_id, token, refresh_token)
    }

    fn match_create(&self, module: &str, params: &Metadata) -> Result<String, HostError> {
        bound(&self.match_create, "match_create")?(module, params)
    }

    fn match_get(&self, id: &str) -> Result<Match, HostError> {
        bound(&self.match_get, "match_get")?(id)
    }

    fn match_list(
        &self,
        limit: usize,
        authoritative: bool,
        label: &str,
        min_size: Option<usize>,
        max_size: Option<usize>,
        query: &str,
    ) -> Result<Vec<Match>, HostError> {
        bound(&self.match_list, "match_list")?(
            limit,
            authoritative,
            label,
            min_size,
            max_size,
            query,
        )
    }

    fn notification_send(
        &self,
        user_id: &str,
        subject: &str,
        content: &Metadata,
        code: i32,
        sender: &str,
        persistent: bool,
    ) -> Result<(), HostError> {
        bound(&self.notification_send, "notification_send")?(
            user_id, subject, content, code, sender, persistent,
        )
    }

    fn notifications_send(&self, notifications: &[NotificationSend]) -> Result<(), HostError> {
        bound(&self.notifications_send, "notifications_send")?(notifications)
    }

    fn wallet_update(
        &self,
        user_id: &str,
        changeset: &Wallet,
        metadata: &Metadata,
        update_ledger: bool,
    ) -> Result<(Wallet, Option<Wallet>), HostError> {
        bound(&self.wallet_update, "wallet_update")?(user_id, changeset, metadata, update_ledger)
    }

    fn wallets_update(
        &self,
        updates: &[WalletUpdate],
        update_ledger: bool,
    ) -> Result<Vec<WalletUpdateResult>, HostError> {
        bound(&self.wallets_update, "wallets_update")?(updates, update_ledger)
    }

    fn wallet_ledger_update(
        &self,
        item_id: &str,
        metadata: &Metadata,
    ) -> Result<WalletLedgerItem, HostError> {
        bound(&self.wallet_ledger_update, "wallet_ledger_update")?(item_id, metadata)
    }

    fn wallet_ledger_list(
        &self,
        user_id: &str,
        limit: usize,
        cursor: &str,
    ) -> Result<(Vec<WalletLedgerItem>, Option<String>), HostError> {
        bound(&self.wallet_ledger_list, "wallet_ledger_list")?(user_id, limit, cursor)
    }

    fn storage_list(
        &self,
        user_id: &str,
        collection: &str,
        limit: usize,
        cursor: &str,
    ) -> Result<(Vec<StorageObject>, Option<String>), HostError> {
        bound(&self.storage_list, "storage_list")?(user_id, collection, limit, cursor)
    }

    fn storage_read(&self, reads: &[StorageRead]) -> Result<Vec<StorageObject>, HostError> {
        bound(&self.storage_read, "storage_read")?(reads)
    }

    fn storage_write(&self, writes: &[StorageWrite]) -> Result<Vec<StorageObjectAck>, HostError> {
        bound(&self.storage_write, "storage_write")?(writes)
    }

    fn storage_delete(&self, deletes: &[StorageDelete]) -> Result<(), HostError> {
        bound(&self.storage_delete, "storage_delete")?(deletes)
    }

    fn multi_update(
        &self,
        account_updates: &[AccountUpdate],
        storage_writes: &[StorageWrite],
        wallet_updates: &[WalletUpdate],
        update_ledger: bool,
    ) -> Result<(Vec<StorageObjectAck>, Vec<WalletUpdateResult>), HostError> {
        bound(&self.multi_update, "multi_update")?(
            account_updates,
            storage_writes,
            wallet_updates,
            update_ledger,
        )
    }

    fn leaderboard_create(
        &self,
        id: &str,
        authoritative: bool,
        sort_order: &str,
        operator: &str,
        reset_schedule: &str,
        metadata: &Metadata,
    ) -> Result<(), HostError> {
        bound(&self.leaderboard_create, "leaderboard_create")?(
            id,
            authoritative,
            sort_order,
            operator,
            reset_schedule,
            metadata,
        )
    }

    fn leaderboard_delete(&self, id: &str) -> Result<(), HostError> {
        bound(&self.leaderboard_delete, "leaderboard_delete")?(id)
    }

    fn leaderboard_records_list(
        &self,
        id: &str,
        owner_ids: &[String],
        limit: usize,
        cursor: &str,
        expiry: i64,
    ) -> Result<RecordPage, HostError> {
        bound(&self.leaderboard_records_list, "leaderboard_records_list")?(
            id, owner_ids, limit, cursor, expiry,
        )
    }

    fn leaderboard_record_write(
        &self,
        id: &str,
        owner_id: &str,
        username: &str,
        score: i64,
        subscore: i64,
        metadata: &Metadata,
    ) -> Result<LeaderboardRecord, HostError> {
        bound(&self.leaderboard_record_write, "leaderboard_record_write")?(
            id, owner_id, username, score, subscore, metadata,
        )
    }

    fn leaderboard_record_delete(&self, id: &str, owner_id: &str) -> Result<(), HostError> {
        bound(&self.leaderboard_record_delete, "leaderboard_record_delete")?(id, owner_id)
    }

    fn purchase_validate_apple(
        &self,
        user_id: &str,
        receipt: &str,
    ) -> Result<ValidatePurchaseResponse, HostError> {
        bound(&self.purchase_validate_apple, "purchase_validate_apple")?(user_id, receipt)
    }

    fn purchase_validate_google(
        &self,
        user_id: &str,
        receipt: &str,
    ) -> Result<ValidatePurchaseResponse, HostError> {
        bound(&self.purchase_validate_google, "purchase_validate_google")?(user_id, receipt)
    }

    fn purchase_validate_huawei(
        &self,
        user_id: &str,
        signature: &str,
        in_app_purchase_data: &str,
    ) -> Result<ValidatePurchaseResponse, HostError> {
        bound(&self.purchase_validate_huawei, "purchase_validate_huawei")?(
            user_id,
            signature,
            in_app_purchase_data,
        )
    }

    fn purchases_list(
        &self,
        user_id: &str,
        limit: usize,
        cursor: &str,
    ) -> Result<PurchaseList, HostError> {
        bound(&self.purchases_list, "purchases_list")?(user_id, limit, cursor)
    }

    fn purchase_get_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<(String, ValidatedPurchase), HostError> {
        bound(
            &self.purchase_get_by_transaction_id,
            "purchase_get_by_transaction_id",
        )?(transaction_id)
    }

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
    ) -> Result<(), HostError> {
        bound(&self.tournament_create, "tournament_create")?(
            id,
            sort_order,
            operator,
            reset_schedule,
            metadata,
            title,
            description,
            category,
            start_time,
            end_time,
            duration,
            max_size,
            max_num_score,
            join_required,
        )
    }

    fn tournament_delete(&self, id: &str) -> Result<(), HostError> {
        bound(&self.tournament_delete, "tournament_delete")?(id)
    }

    fn tournament_add_attempt(
        &self,
        id: &str,
        owner_id: &str,
        count: i32,
    ) -> Result<(), HostError> {
        bound(&self.tournament_add_attempt, "tournament_add_attempt")?(id, owner_id, count)
    }

    fn tournament_join(&self, id: &str, owner_id: &str, username: &str) -> Result<(), HostError> {
        bound(&self.tournament_join, "tournament_join")?(id, owner_id, username)
    }

    fn tournaments_get_id(&self, tournament_ids: &[String]) -> Result<Vec<Tournament>, HostError> {
        bound(&self.tournaments_get_id, "tournaments_get_id")?(tournament_ids)
    }

    fn tournament_list(
        &self,
        category_start: i32,
        category_end: i32,
        start_time: i64,
        end_time: i64,
        limit: usize,
        cursor: &str,
    ) -> Result<TournamentList, HostError> {
        bound(&self.tournament_list, "tournament_list")?(
            category_start,
            category_end,
            start_time,
            end_time,
            limit,
            cursor,
        )
    }

    fn tournament_records_list(
        &self,
        tournament_id: &str,
        owner_ids: &[String],
        limit: usize,
        cursor: &str,
        override_expiry: i64,
    ) -> Result<RecordPage, HostError> {
        bound(&self.tournament_records_list, "tournament_records_list")?(
            tournament_id,
            owner_ids,
            limit,
            cursor,
            override_expiry,
        )
    }

    fn tournament_record_write(
        &self,
        id: &str,
        owner_id: &str,
        username: &str,
        score: i64,
        subscore: i64,
        metadata: &Metadata,
    ) -> Result<LeaderboardRecord, HostError> {
        bound(&self.tournament_record_write, "tournament_record_write")?(
            id, owner_id, username, score, subscore, metadata,
        )
    }

    fn tournament_records_haystack(
        &self,
        id: &str,
        owner_id: &str,
        limit: usize,
        expiry: i64,
    ) -> Result<Vec<LeaderboardRecord>, HostError> {
        bound(
            &self.tournament_records_haystack,
            "tournament_records_haystack",
        )?(id, owner_id, limit, expiry)
    }

    fn groups_get_id(&self, group_ids: &[String]) -> Result<Vec<Group>, HostError> {
        bound(&self.groups_get_id, "groups_get_id")?(group_ids)
    }

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
    ) -> Result<Group, HostError> {
        bound(&self.group_create, "group_create")?(
            user_id,
            name,
            creator_id,
            lang_tag,
            description,
            avatar_url,
            open,
            metadata,
            max_count,
        )
    }

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
    ) -> Result<(), HostError> {
        bound(&self.group_update, "group_update")?(
            id,
            name,
            creator_id,
            lang_tag,
            description,
            avatar_url,
            open,
            metadata,
            max_count,
        )
    }

    fn group_delete(&self, id: &str) -> Result<(), HostError> {
        bound(&self.group_delete, "group_delete")?(id)
    }

    fn group_user_join(
        &self,
        group_id: &str,
        user_id: &str,
        username: &str,
    ) -> Result<(), HostError> {
        bound(&self.group_user_join, "group_user_join")?(group_id, user_id, username)
    }

    fn group_user_leave(
        &self,
        group_id: &str,
        user_id: &str,
        username: &str,
    ) -> Result<(), HostError> {
        bound(&self.group_user_leave, "group_user_leave")?(group_id, user_id, username)
    }

    fn group_users_add(&self, group_id: &str, user_ids: &[String]) -> Result<(), HostError> {
        bound(&self.group_users_add, "group_users_add")?(group_id, user_ids)
    }

    fn group_users_kick(&self, group_id: &str, user_ids: &[String]) -> Result<(), HostError> {
        bound(&self.group_users_kick, "group_users_kick")?(group_id, user_ids)
    }

    fn group_users_promote(&self, group_id: &str, user_ids: &[String]) -> Result<(), HostError> {
        bound(&self.group_users_promote, "group_users_promote")?(group_id, user_ids)
    }

    fn group_users_demote(&self, group_id: &str, user_ids: &[String]) -> Result<(), HostError> {
        bound(&self.group_users_demote, "group_users_demote")?(group_id, user_ids)
    }

    fn group_users_list(
        &self,
        id: &str,
        limit: usize,
        state: Option<i32>,
        cursor: &str,
    ) -> Result<(Vec<GroupUser>, Option<String>), HostError> {
        bound(&self.group_users_list, "group_users_list")?(id, limit, state, cursor)
    }

    fn user_groups_list(
        &self,
        user_id: &str,
        limit: usize,
        state: Option<i32>,
        cursor: &str,
    ) -> Result<(Vec<UserGroup>, Option<String>), HostError> {
        bound(&self.user_groups_list, "user_groups_list")?(user_id, limit, state, cursor)
    }

    fn friends_list(
        &self,
        user_id: &str,
        limit: usize,
        state: Option<i32>,
        cursor: &str,
    ) -> Result<(Vec<Friend>, Option<String>), HostError> {
        bound(&self.friends_list, "friends_list")?(user_id, limit, state, cursor)
    }

    fn event(&self, evt: &Event) -> Result<(), HostError> {
        // Delegates to its own slot like every other operation.
        bound(&self.event, "event")?(evt)
    }
}
