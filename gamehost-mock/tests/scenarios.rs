//! End-to-end scenarios: module code written against `&dyn HostModule`
//! exercised through a configured double.

use gamehost_api::types::{ValidatePurchaseResponse, ValidatedPurchase, Wallet};
use gamehost_api::{HostError, HostModule};
use gamehost_mock::MockHostModule;

mod common;
use common::{gems, metadata};

#[test]
fn wallet_update_scenario() {
    let nk = MockHostModule {
        wallet_update: Some(Box::new(|_user_id, _changeset, _metadata, _update_ledger| {
            Ok((gems(10), None))
        })),
        ..Default::default()
    };

    // Any user id and any changeset yield exactly the configured result.
    let (updated, previous) = nk
        .wallet_update(
            "u1",
            &gems(9000),
            &metadata(serde_json::json!({"source": "quest"})),
            true,
        )
        .unwrap();
    assert_eq!(updated, gems(10));
    assert!(previous.is_none());

    let (updated, previous) = nk
        .wallet_update("someone-else", &Wallet::new(), &Default::default(), false)
        .unwrap();
    assert_eq!(updated, gems(10));
    assert!(previous.is_none());

    // Any other operation on the same table is still unconfigured.
    let err = nk.account_get_id("u1").unwrap_err();
    assert_eq!(err.operation(), Some("account_get_id"));
}

#[test]
fn purchase_validation_scenario() {
    let nk = MockHostModule {
        purchase_validate_apple: Some(Box::new(|_user_id, _receipt| {
            Ok(ValidatePurchaseResponse {
                validated_purchases: vec![ValidatedPurchase {
                    product_id: "my-test-product-id".to_string(),
                    ..Default::default()
                }],
            })
        })),
        ..Default::default()
    };

    let response = nk
        .purchase_validate_apple("u1", "opaque-receipt-blob")
        .unwrap();
    assert_eq!(response.validated_purchases.len(), 1);
    assert_eq!(response.validated_purchases[0].product_id, "my-test-product-id");
}

/// Module-under-test code that only knows the host interface.
fn award_win(nk: &dyn HostModule, user_id: &str) -> Result<i64, HostError> {
    let (updated, _previous) =
        nk.wallet_update(user_id, &gems(5), &Default::default(), true)?;
    nk.notification_send(user_id, "You won!", &Default::default(), 1, "", true)?;
    Ok(updated.get("gems").copied().unwrap_or_default())
}

#[test]
fn module_code_runs_unmodified_against_the_double() {
    let nk = MockHostModule {
        wallet_update: Some(Box::new(|_, changeset, _, _| {
            let mut updated = changeset.clone();
            updated.entry("gems".to_string()).and_modify(|g| *g += 100);
            Ok((updated, Some(gems(100))))
        })),
        notification_send: Some(Box::new(|_, _, _, _, _, _| Ok(()))),
        ..Default::default()
    };

    assert_eq!(award_win(&nk, "u1").unwrap(), 105);
}

#[test]
fn module_code_surfaces_missing_setup() {
    // Only the wallet is configured; the notification step must fail the
    // test loudly instead of silently succeeding.
    let nk = MockHostModule {
        wallet_update: Some(Box::new(|_, _, _, _| Ok((gems(5), None)))),
        ..Default::default()
    };

    let err = award_win(&nk, "u1").unwrap_err();
    assert_eq!(err.operation(), Some("notification_send"));
}
