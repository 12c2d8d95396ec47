//! Configuration errors: every operation on an unconfigured table fails
//! loudly, naming itself, regardless of the arguments passed.

use gamehost_api::types::{
    Envelope, Event, Presence, PresenceReason, StorageDelete, StorageRead, StorageWrite,
};
use gamehost_api::{HostError, HostModule};
use gamehost_mock::MockHostModule;
use std::path::Path;

mod common;

macro_rules! assert_unconfigured {
    ($call:expr, $op:expr) => {
        match $call {
            Err(HostError::Unconfigured(name)) => {
                assert_eq!(name, $op, "configuration error names the wrong operation")
            }
            Err(other) => panic!("expected configuration error for `{}`, got: {other}", $op),
            Ok(_) => panic!("expected configuration error for `{}`, got a value", $op),
        }
    };
}

#[test]
fn unconfigured_error_is_descriptive() {
    let nk = MockHostModule::default();
    let err = nk.account_get_id("u1").unwrap_err();

    assert!(err.is_unconfigured());
    assert_eq!(err.operation(), Some("account_get_id"));
    assert_eq!(
        err.to_string(),
        "no behavior bound for operation `account_get_id`"
    );
}

#[test]
fn argument_values_do_not_affect_the_outcome() {
    let nk = MockHostModule::default();

    for user_id in ["", "u1", "definitely-not-a-uuid"] {
        assert_unconfigured!(nk.account_get_id(user_id), "account_get_id");
    }
    assert_unconfigured!(nk.wallet_update("u1", &common::gems(5), &Default::default(), true), "wallet_update");
    assert_unconfigured!(
        nk.wallet_update("", &Default::default(), &Default::default(), false),
        "wallet_update"
    );
}

/// Sweep the whole surface: every operation resolves its own slot and reports
/// its own name. Catches copy-paste mistakes where a method delegates to the
/// wrong slot or misnames itself.
#[test]
fn every_operation_names_itself_when_unconfigured() {
    let nk = MockHostModule::default();
    let ids = vec!["u1".to_string()];
    let meta = Default::default();
    let presence = Presence::default();
    let envelope = Envelope::default();
    let evt = Event::default();

    assert_unconfigured!(nk.authenticate_apple("t", "u", true), "authenticate_apple");
    assert_unconfigured!(nk.authenticate_custom("id", "u", true), "authenticate_custom");
    assert_unconfigured!(nk.authenticate_device("id", "u", true), "authenticate_device");
    assert_unconfigured!(nk.authenticate_email("e", "p", "u", true), "authenticate_email");
    assert_unconfigured!(nk.authenticate_facebook("t", true, "u", true), "authenticate_facebook");
    assert_unconfigured!(
        nk.authenticate_facebook_instant_game("info", "u", true),
        "authenticate_facebook_instant_game"
    );
    assert_unconfigured!(
        nk.authenticate_game_center("p", "b", 0, "s", "sig", "url", "u", true),
        "authenticate_game_center"
    );
    assert_unconfigured!(nk.authenticate_google("t", "u", true), "authenticate_google");
    assert_unconfigured!(nk.authenticate_steam("t", "u", true), "authenticate_steam");
    assert_unconfigured!(
        nk.authenticate_token_generate("u1", "u", 0, &Default::default()),
        "authenticate_token_generate"
    );

    assert_unconfigured!(nk.account_get_id("u1"), "account_get_id");
    assert_unconfigured!(nk.accounts_get_id(&ids), "accounts_get_id");
    assert_unconfigured!(
        nk.account_update_id("u1", "u", &meta, "d", "tz", "loc", "lang", "url"),
        "account_update_id"
    );
    assert_unconfigured!(nk.account_delete_id("u1", false), "account_delete_id");
    assert_unconfigured!(nk.account_export_id("u1"), "account_export_id");
    assert_unconfigured!(nk.users_get_id(&ids, &[]), "users_get_id");
    assert_unconfigured!(nk.users_get_username(&ids), "users_get_username");
    assert_unconfigured!(nk.users_ban_id(&ids), "users_ban_id");
    assert_unconfigured!(nk.users_unban_id(&ids), "users_unban_id");

    assert_unconfigured!(nk.link_apple("u1", "t"), "link_apple");
    assert_unconfigured!(nk.link_custom("u1", "c"), "link_custom");
    assert_unconfigured!(nk.link_device("u1", "d"), "link_device");
    assert_unconfigured!(nk.link_email("u1", "e", "p"), "link_email");
    assert_unconfigured!(nk.link_facebook("u1", "u", "t", false), "link_facebook");
    assert_unconfigured!(
        nk.link_facebook_instant_game("u1", "info"),
        "link_facebook_instant_game"
    );
    assert_unconfigured!(
        nk.link_game_center("u1", "p", "b", 0, "s", "sig", "url"),
        "link_game_center"
    );
    assert_unconfigured!(nk.link_google("u1", "t"), "link_google");
    assert_unconfigured!(nk.link_steam("u1", "u", "t", false), "link_steam");
    assert_unconfigured!(nk.read_file(Path::new("data.json")), "read_file");
    assert_unconfigured!(nk.unlink_apple("u1", "t"), "unlink_apple");
    assert_unconfigured!(nk.unlink_custom("u1", "c"), "unlink_custom");
    assert_unconfigured!(nk.unlink_device("u1", "d"), "unlink_device");
    assert_unconfigured!(nk.unlink_email("u1", "e"), "unlink_email");
    assert_unconfigured!(nk.unlink_facebook("u1", "t"), "unlink_facebook");
    assert_unconfigured!(
        nk.unlink_facebook_instant_game("u1", "info"),
        "unlink_facebook_instant_game"
    );
    assert_unconfigured!(
        nk.unlink_game_center("u1", "p", "b", 0, "s", "sig", "url"),
        "unlink_game_center"
    );
    assert_unconfigured!(nk.unlink_google("u1", "t"), "unlink_google");
    assert_unconfigured!(nk.unlink_steam("u1", "t"), "unlink_steam");

    assert_unconfigured!(
        nk.stream_user_list(0, "s", "", "l", true, true),
        "stream_user_list"
    );
    assert_unconfigured!(
        nk.stream_user_get(0, "s", "", "l", "u1", "sess"),
        "stream_user_get"
    );
    assert_unconfigured!(
        nk.stream_user_join(0, "s", "", "l", "u1", "sess", false, false, ""),
        "stream_user_join"
    );
    assert_unconfigured!(
        nk.stream_user_update(0, "s", "", "l", "u1", "sess", false, false, ""),
        "stream_user_update"
    );
    assert_unconfigured!(
        nk.stream_user_leave(0, "s", "", "l", "u1", "sess"),
        "stream_user_leave"
    );
    assert_unconfigured!(
        nk.stream_user_kick(0, "s", "", "l", &presence),
        "stream_user_kick"
    );
    assert_unconfigured!(nk.stream_count(0, "s", "", "l"), "stream_count");
    assert_unconfigured!(nk.stream_close(0, "s", "", "l"), "stream_close");
    assert_unconfigured!(
        nk.stream_send(0, "s", "", "l", "data", &[], true),
        "stream_send"
    );
    assert_unconfigured!(
        nk.stream_send_raw(0, "s", "", "l", &envelope, &[], true),
        "stream_send_raw"
    );

    assert_unconfigured!(
        nk.session_disconnect("sess", &[PresenceReason::Disconnect]),
        "session_disconnect"
    );
    assert_unconfigured!(nk.session_logout("u1", "t", "rt"), "session_logout");

    assert_unconfigured!(nk.match_create("module", &meta), "match_create");
    assert_unconfigured!(nk.match_get("m1"), "match_get");
    assert_unconfigured!(nk.match_list(10, true, "l", None, None, "*"), "match_list");

    assert_unconfigured!(
        nk.notification_send("u1", "subj", &meta, 1, "sender", true),
        "notification_send"
    );
    assert_unconfigured!(nk.notifications_send(&[]), "notifications_send");

    assert_unconfigured!(
        nk.wallet_update("u1", &Default::default(), &meta, true),
        "wallet_update"
    );
    assert_unconfigured!(nk.wallets_update(&[], true), "wallets_update");
    assert_unconfigured!(nk.wallet_ledger_update("item", &meta), "wallet_ledger_update");
    assert_unconfigured!(nk.wallet_ledger_list("u1", 10, ""), "wallet_ledger_list");

    assert_unconfigured!(nk.storage_list("u1", "coll", 10, ""), "storage_list");
    assert_unconfigured!(nk.storage_read(&[StorageRead::default()]), "storage_read");
    assert_unconfigured!(nk.storage_write(&[StorageWrite::default()]), "storage_write");
    assert_unconfigured!(nk.storage_delete(&[StorageDelete::default()]), "storage_delete");
    assert_unconfigured!(nk.multi_update(&[], &[], &[], true), "multi_update");

    assert_unconfigured!(
        nk.leaderboard_create("lb", true, "desc", "best", "", &meta),
        "leaderboard_create"
    );
    assert_unconfigured!(nk.leaderboard_delete("lb"), "leaderboard_delete");
    assert_unconfigured!(
        nk.leaderboard_records_list("lb", &ids, 10, "", 0),
        "leaderboard_records_list"
    );
    assert_unconfigured!(
        nk.leaderboard_record_write("lb", "u1", "u", 1, 0, &meta),
        "leaderboard_record_write"
    );
    assert_unconfigured!(
        nk.leaderboard_record_delete("lb", "u1"),
        "leaderboard_record_delete"
    );

    assert_unconfigured!(
        nk.purchase_validate_apple("u1", "receipt"),
        "purchase_validate_apple"
    );
    assert_unconfigured!(
        nk.purchase_validate_google("u1", "receipt"),
        "purchase_validate_google"
    );
    assert_unconfigured!(
        nk.purchase_validate_huawei("u1", "sig", "data"),
        "purchase_validate_huawei"
    );
    assert_unconfigured!(nk.purchases_list("u1", 10, ""), "purchases_list");
    assert_unconfigured!(
        nk.purchase_get_by_transaction_id("tx-1"),
        "purchase_get_by_transaction_id"
    );

    assert_unconfigured!(
        nk.tournament_create("t1", "desc", "best", "", &meta, "title", "d", 0, 0, 0, 0, 0, 0, false),
        "tournament_create"
    );
    assert_unconfigured!(nk.tournament_delete("t1"), "tournament_delete");
    assert_unconfigured!(
        nk.tournament_add_attempt("t1", "u1", 1),
        "tournament_add_attempt"
    );
    assert_unconfigured!(nk.tournament_join("t1", "u1", "u"), "tournament_join");
    assert_unconfigured!(nk.tournaments_get_id(&ids), "tournaments_get_id");
    assert_unconfigured!(nk.tournament_list(0, 10, 0, 0, 10, ""), "tournament_list");
    assert_unconfigured!(
        nk.tournament_records_list("t1", &ids, 10, "", 0),
        "tournament_records_list"
    );
    assert_unconfigured!(
        nk.tournament_record_write("t1", "u1", "u", 1, 0, &meta),
        "tournament_record_write"
    );
    assert_unconfigured!(
        nk.tournament_records_haystack("t1", "u1", 10, 0),
        "tournament_records_haystack"
    );

    assert_unconfigured!(nk.groups_get_id(&ids), "groups_get_id");
    assert_unconfigured!(
        nk.group_create("u1", "name", "u1", "en", "d", "url", true, &meta, 100),
        "group_create"
    );
    assert_unconfigured!(
        nk.group_update("g1", "name", "u1", "en", "d", "url", true, &meta, 100),
        "group_update"
    );
    assert_unconfigured!(nk.group_delete("g1"), "group_delete");
    assert_unconfigured!(nk.group_user_join("g1", "u1", "u"), "group_user_join");
    assert_unconfigured!(nk.group_user_leave("g1", "u1", "u"), "group_user_leave");
    assert_unconfigured!(nk.group_users_add("g1", &ids), "group_users_add");
    assert_unconfigured!(nk.group_users_kick("g1", &ids), "group_users_kick");
    assert_unconfigured!(nk.group_users_promote("g1", &ids), "group_users_promote");
    assert_unconfigured!(nk.group_users_demote("g1", &ids), "group_users_demote");
    assert_unconfigured!(nk.group_users_list("g1", 10, None, ""), "group_users_list");
    assert_unconfigured!(nk.user_groups_list("u1", 10, None, ""), "user_groups_list");
    assert_unconfigured!(nk.friends_list("u1", 10, Some(0), ""), "friends_list");

    assert_unconfigured!(nk.event(&evt), "event");
}
