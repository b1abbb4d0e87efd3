//! Wire rows and application records for the account/table service.
//! IDs and dates stay strings on the wire; enums match the service's
//! stored UPPERCASE literals. Row-to-record mapping is explicit and total:
//! a sparse or oddly-typed row still maps, field by field, to safe defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::Transfer => "TRANSFER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DEPOSIT" => Some(TransactionKind::Deposit),
            "WITHDRAWAL" => Some(TransactionKind::Withdrawal),
            "TRANSFER" => Some(TransactionKind::Transfer),
            _ => None,
        }
    }

    /// Status targets an admin may set by hand. Transfer statuses are
    /// system-managed and accept none.
    pub fn manual_statuses(&self) -> &'static [TransactionStatus] {
        match self {
            TransactionKind::Deposit => &[
                TransactionStatus::Pending,
                TransactionStatus::Success,
                TransactionStatus::Rejected,
            ],
            TransactionKind::Withdrawal => &[
                TransactionStatus::Pending,
                TransactionStatus::Success,
                TransactionStatus::Rejected,
                TransactionStatus::Cancelled,
                TransactionStatus::Failed,
            ],
            TransactionKind::Transfer => &[],
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Rejected,
    Cancelled,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::Rejected => "REJECTED",
            TransactionStatus::Cancelled => "CANCELLED",
            TransactionStatus::Failed => "FAILED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(TransactionStatus::Pending),
            "SUCCESS" => Some(TransactionStatus::Success),
            "REJECTED" => Some(TransactionStatus::Rejected),
            "CANCELLED" => Some(TransactionStatus::Cancelled),
            "FAILED" => Some(TransactionStatus::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction row (wire format).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub status: TransactionStatus,
    pub date: String,
}

/// Notification row (wire format).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub date: String,
    #[serde(default)]
    pub read: bool,
}

/// One company bank account. The list is stored as a whole in a single
/// settings row; items carry no remote identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyBankInfo {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
}

/// Application-facing user record mapped from a `profiles` row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub username: String,
    pub phone_number: String,
    pub is_admin: bool,
    pub is_verified: bool,
    pub balance: f64,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    pub profile_picture_url: Option<String>,
}

fn str_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn bool_field(row: &Value, key: &str) -> bool {
    row.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn f64_field(row: &Value, key: &str) -> f64 {
    row.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Total mapping from a `profiles` row. Missing or mistyped fields fall
/// back to defaults instead of failing the row: absent flags are `false`,
/// absent balance is `0`, absent strings are empty.
pub fn user_from_row(row: &Value) -> User {
    User {
        id: str_field(row, "id"),
        email: str_field(row, "email"),
        full_name: str_field(row, "full_name"),
        username: str_field(row, "username"),
        phone_number: str_field(row, "phone_number"),
        is_admin: bool_field(row, "is_admin"),
        is_verified: bool_field(row, "is_verified"),
        balance: f64_field(row, "balance"),
        notifications: Vec::new(),
        profile_picture_url: row
            .get("profile_picture_url")
            .and_then(Value::as_str)
            .map(String::from),
    }
}

/// Newest first. RFC 3339 strings order lexicographically, so a plain
/// string compare is enough.
pub fn sort_notifications_newest_first(list: &mut [Notification]) {
    list.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Self-service registration input.
#[derive(Clone, Debug, Default)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub username: String,
    pub phone_number: String,
}

/// Privileged create input: the caller picks the flags and the starting
/// balance.
#[derive(Clone, Debug, Default)]
pub struct AdminNewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub username: String,
    pub phone_number: String,
    pub is_admin: bool,
    pub is_verified: bool,
    pub balance: f64,
}

/// Sparse profile update. `None` leaves the column untouched; `Some` writes
/// the value, including empty strings and `false`, so clearing a field is
/// expressible. The id selects the row and is never part of the body.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// Profile row for a self-registered account: zero balance, unverified,
/// not an admin.
pub fn registration_profile_row(account_id: &str, user: &NewUser) -> Value {
    serde_json::json!({
        "id": account_id,
        "email": user.email,
        "full_name": user.full_name,
        "username": user.username,
        "phone_number": user.phone_number,
        "is_admin": false,
        "is_verified": false,
        "balance": 0.0,
    })
}

/// Profile row for an admin-created account, flags and balance as supplied.
pub fn admin_profile_row(account_id: &str, user: &AdminNewUser) -> Value {
    serde_json::json!({
        "id": account_id,
        "email": user.email,
        "full_name": user.full_name,
        "username": user.username,
        "phone_number": user.phone_number,
        "is_admin": user.is_admin,
        "is_verified": user.is_verified,
        "balance": user.balance,
    })
}
