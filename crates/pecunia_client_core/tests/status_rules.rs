//! Which statuses an admin may set by hand, per transaction kind.

use pecunia_client_core::models::{TransactionKind, TransactionStatus};
use pecunia_client_core::transactions::ensure_manual_target;
use pecunia_client_core::GatewayError;

#[test]
fn deposits_never_offer_cancelled_or_failed() {
    let options = TransactionKind::Deposit.manual_statuses();
    assert_eq!(
        options,
        &[
            TransactionStatus::Pending,
            TransactionStatus::Success,
            TransactionStatus::Rejected,
        ]
    );
    assert!(!options.contains(&TransactionStatus::Cancelled));
    assert!(!options.contains(&TransactionStatus::Failed));
}

#[test]
fn withdrawals_additionally_offer_cancelled_and_failed() {
    let options = TransactionKind::Withdrawal.manual_statuses();
    assert!(options.contains(&TransactionStatus::Cancelled));
    assert!(options.contains(&TransactionStatus::Failed));
    assert_eq!(options.len(), 5);
}

#[test]
fn transfers_offer_no_manual_statuses() {
    assert!(TransactionKind::Transfer.manual_statuses().is_empty());
}

#[test]
fn cancelling_a_deposit_is_rejected_locally() {
    let err = ensure_manual_target(TransactionKind::Deposit, TransactionStatus::Cancelled)
        .unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
}

#[test]
fn cancelling_a_withdrawal_is_allowed() {
    assert!(ensure_manual_target(TransactionKind::Withdrawal, TransactionStatus::Cancelled).is_ok());
}

#[test]
fn transfers_reject_every_manual_target() {
    for status in [
        TransactionStatus::Pending,
        TransactionStatus::Success,
        TransactionStatus::Rejected,
        TransactionStatus::Cancelled,
        TransactionStatus::Failed,
    ] {
        let err = ensure_manual_target(TransactionKind::Transfer, status).unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
    }
}

#[test]
fn status_parses_from_selector_values() {
    assert_eq!(
        TransactionStatus::from_str("SUCCESS"),
        Some(TransactionStatus::Success)
    );
    assert_eq!(
        TransactionStatus::from_str("cancelled"),
        Some(TransactionStatus::Cancelled)
    );
    assert_eq!(TransactionStatus::from_str("bogus"), None);
}
