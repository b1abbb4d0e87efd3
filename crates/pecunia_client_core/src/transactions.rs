//! Transaction moderation and company bank settings. These are the
//! collaborator calls the admin console injects next to the profile
//! gateway; all of them are plain table CRUD.

use crate::api;
use crate::error::GatewayError;
use crate::ids::TransactionId;
use crate::models::{CompanyBankInfo, Transaction, TransactionKind, TransactionStatus};
use serde_json::Value;

const TRANSACTIONS: &str = "transactions";
const COMPANY_BANK_INFO: &str = "company_bank_info";

/// The single settings row holding the bank-account list.
const SETTINGS_ROW_ID: &str = "default";

/// All transactions, newest first. Rows that do not parse are skipped.
pub async fn get_all_transactions() -> Result<Vec<Transaction>, GatewayError> {
    let rows = api::table_select(TRANSACTIONS, &[], Some("date.desc")).await?;
    Ok(rows
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect())
}

/// Reject status targets an admin may not set for this transaction kind.
/// Transfer statuses are system-managed and never settable by hand.
pub fn ensure_manual_target(
    kind: TransactionKind,
    status: TransactionStatus,
) -> Result<(), GatewayError> {
    if kind.manual_statuses().contains(&status) {
        Ok(())
    } else {
        Err(GatewayError::Validation(format!(
            "{} cannot be set to {} by hand",
            kind, status
        )))
    }
}

async fn update_status(
    id: &str,
    kind: TransactionKind,
    status: TransactionStatus,
) -> Result<(), GatewayError> {
    let tid = TransactionId::parse(id).map_err(GatewayError::Validation)?;
    ensure_manual_target(kind, status)?;
    let patch = serde_json::json!({ "status": status.as_str() });
    api::table_update(
        TRANSACTIONS,
        &[("id", tid.as_str()), ("type", kind.as_str())],
        &patch,
    )
    .await?;
    Ok(())
}

pub async fn update_deposit_status(
    id: &str,
    status: TransactionStatus,
) -> Result<(), GatewayError> {
    update_status(id, TransactionKind::Deposit, status).await
}

pub async fn update_withdrawal_status(
    id: &str,
    status: TransactionStatus,
) -> Result<(), GatewayError> {
    update_status(id, TransactionKind::Withdrawal, status).await
}

/// Read the bank-account list; a missing settings row is the empty list.
pub async fn get_company_bank_info() -> Result<Vec<CompanyBankInfo>, GatewayError> {
    let rows = api::table_select(COMPANY_BANK_INFO, &[("id", SETTINGS_ROW_ID)], None).await?;
    if let Some(row) = rows.first() {
        let accounts = row.get("accounts").cloned().unwrap_or(Value::Array(Vec::new()));
        serde_json::from_value(accounts).map_err(|e| GatewayError::Query(e.to_string()))
    } else {
        Ok(Vec::new())
    }
}

/// Persist the whole list as one settings row: update in place, insert when
/// the row does not exist yet.
pub async fn save_company_bank_info(accounts: &[CompanyBankInfo]) -> Result<(), GatewayError> {
    let accounts_json =
        serde_json::to_value(accounts).map_err(|e| GatewayError::Query(e.to_string()))?;
    let patch = serde_json::json!({ "accounts": accounts_json.clone() });
    let updated = api::table_update(COMPANY_BANK_INFO, &[("id", SETTINGS_ROW_ID)], &patch).await?;
    if updated.is_empty() {
        let row = serde_json::json!({ "id": SETTINGS_ROW_ID, "accounts": accounts_json });
        api::table_insert(COMPANY_BANK_INFO, &row).await?;
    }
    Ok(())
}
