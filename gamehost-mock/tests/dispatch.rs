//! Dispatch behavior: bound slots are invoked with all arguments forwarded
//! and their results returned unchanged.

use gamehost_api::types::{PresenceReason, Wallet};
use gamehost_api::{HostError, HostModule};
use gamehost_mock::MockHostModule;
use std::sync::{Arc, Mutex};

mod common;
use common::{gems, record};

#[test]
fn bound_behavior_receives_all_arguments() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_slot = seen.clone();

    let nk = MockHostModule {
        authenticate_email: Some(Box::new(move |email, password, username, create| {
            seen_in_slot
                .lock()
                .unwrap()
                .push((email.to_string(), password.to_string(), username.to_string(), create));
            Ok(("uid-1".to_string(), "alice".to_string(), true))
        })),
        ..Default::default()
    };

    let (user_id, username, created) = nk
        .authenticate_email("a@example.com", "hunter2", "alice", true)
        .unwrap();

    assert_eq!(user_id, "uid-1");
    assert_eq!(username, "alice");
    assert!(created);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(
            "a@example.com".to_string(),
            "hunter2".to_string(),
            "alice".to_string(),
            true
        )],
        "the behavior should see the exact arguments the caller passed"
    );
}

#[test]
fn injected_failure_passes_through_verbatim() {
    let nk = MockHostModule {
        storage_delete: Some(Box::new(|_deletes| Err(HostError::injected("storage offline")))),
        ..Default::default()
    };

    let err = nk.storage_delete(&[]).unwrap_err();
    assert!(matches!(err, HostError::Injected(_)));
    assert_eq!(err.to_string(), "storage offline");
    assert_eq!(err.operation(), None);
}

#[test]
fn multi_results_are_threaded_through_in_order() {
    let nk = MockHostModule {
        leaderboard_records_list: Some(Box::new(|_id, _owner_ids, _limit, _cursor, _expiry| {
            Ok((
                vec![record("o1", 100)],
                vec![record("o2", 200)],
                Some("next".to_string()),
                Some("prev".to_string()),
            ))
        })),
        ..Default::default()
    };

    let (records, owner_records, next_cursor, prev_cursor) = nk
        .leaderboard_records_list("board", &[], 10, "", 0)
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].owner_id, "o1");
    assert_eq!(owner_records.len(), 1);
    assert_eq!(owner_records[0].score, 200);
    assert_eq!(next_cursor.as_deref(), Some("next"));
    assert_eq!(prev_cursor.as_deref(), Some("prev"));
}

#[test]
fn variadic_trailing_reasons_are_forwarded_whole() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_slot = seen.clone();

    let nk = MockHostModule {
        session_disconnect: Some(Box::new(move |session_id, reasons| {
            seen_in_slot
                .lock()
                .unwrap()
                .push((session_id.to_string(), reasons.to_vec()));
            Ok(())
        })),
        ..Default::default()
    };

    nk.session_disconnect("sess-1", &[PresenceReason::Leave, PresenceReason::Disconnect])
        .unwrap();

    let calls = seen.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "sess-1");
    assert_eq!(
        calls[0].1,
        vec![PresenceReason::Leave, PresenceReason::Disconnect],
        "all trailing reasons should reach the behavior, in order"
    );
}

#[test]
fn rebinding_affects_only_later_calls() {
    let mut nk = MockHostModule {
        account_export_id: Some(Box::new(|_user_id| Ok("first".to_string()))),
        ..Default::default()
    };

    assert_eq!(nk.account_export_id("u1").unwrap(), "first");

    nk.account_export_id = Some(Box::new(|_user_id| Ok("second".to_string())));

    assert_eq!(nk.account_export_id("u1").unwrap(), "second");
}

#[test]
fn binding_one_slot_leaves_others_unconfigured() {
    let nk = MockHostModule {
        wallet_update: Some(Box::new(|_, _, _, _| Ok((gems(10), None)))),
        ..Default::default()
    };

    assert!(nk.wallet_update("u1", &Wallet::new(), &Default::default(), false).is_ok());

    let err = nk.account_get_id("u1").unwrap_err();
    assert_eq!(err.operation(), Some("account_get_id"));
    let err = nk.friends_list("u1", 10, None, "").unwrap_err();
    assert_eq!(err.operation(), Some("friends_list"));
}

#[test]
fn incremental_binding_matches_bulk_construction() {
    let bulk = MockHostModule {
        account_export_id: Some(Box::new(|user_id| Ok(format!("export:{user_id}")))),
        stream_count: Some(Box::new(|_, _, _, _| Ok(3))),
        ..Default::default()
    };

    let mut incremental = MockHostModule::default();
    incremental.account_export_id = Some(Box::new(|user_id| Ok(format!("export:{user_id}"))));
    incremental.stream_count = Some(Box::new(|_, _, _, _| Ok(3)));

    for nk in [&bulk, &incremental] {
        assert_eq!(nk.account_export_id("u1").unwrap(), "export:u1");
        assert_eq!(nk.stream_count(0, "s", "", "label").unwrap(), 3);
        // Anything not bound stays unconfigured either way.
        assert_eq!(
            nk.match_get("m1").unwrap_err().operation(),
            Some("match_get")
        );
    }
}

#[test]
fn event_dispatches_to_its_own_slot() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_slot = seen.clone();

    let nk = MockHostModule {
        event: Some(Box::new(move |evt| {
            seen_in_slot.lock().unwrap().push(evt.name.clone());
            Ok(())
        })),
        ..Default::default()
    };

    let evt = gamehost_api::types::Event {
        name: "level_up".to_string(),
        ..Default::default()
    };
    nk.event(&evt).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec!["level_up".to_string()]);

    // Unbound, it reports itself like every other operation instead of
    // recursing into the facade.
    let empty = MockHostModule::default();
    assert_eq!(empty.event(&evt).unwrap_err().operation(), Some("event"));
}
