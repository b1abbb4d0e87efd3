//! Console rules kept free of UI state: transaction search, balance edits,
//! display formatting. No side effects, easy to test.

use pecunia_client_core::models::{Transaction, User};

/// How the balance modal applies the entered amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceEditMode {
    /// Delta on top of the current balance.
    Add,
    /// Absolute replacement.
    Set,
}

/// Parse the modal input and compute the absolute balance to store.
/// Anything that is not a finite number is rejected before any remote call.
pub fn resolve_balance_edit(
    mode: BalanceEditMode,
    current: f64,
    input: &str,
) -> Result<f64, String> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Enter a valid number".to_string())?;
    if !amount.is_finite() {
        return Err("Enter a valid number".to_string());
    }
    Ok(match mode {
        BalanceEditMode::Add => current + amount,
        BalanceEditMode::Set => amount,
    })
}

/// Case-insensitive substring match against transaction id, owner id,
/// owner email, and owner full name. An empty query matches everything.
pub fn transaction_matches(txn: &Transaction, owner: Option<&User>, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    if txn.id.to_lowercase().contains(&q) || txn.user_id.to_lowercase().contains(&q) {
        return true;
    }
    owner.map_or(false, |u| {
        u.email.to_lowercase().contains(&q) || u.full_name.to_lowercase().contains(&q)
    })
}

/// The list the transactions tab renders for a given search query.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    users: &[User],
    query: &str,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| {
            let owner = users.iter().find(|u| u.id == t.user_id);
            transaction_matches(t, owner, query)
        })
        .collect()
}

/// Thousands-separated amount with two decimals, e.g. `105,000.00`.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{}.{:02}", grouped, frac)
    } else {
        format!("{}.{:02}", grouped, frac)
    }
}

/// Short display form of an RFC 3339 timestamp; falls back to the raw value.
pub fn format_date(date: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(date)
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Compact id for table rows.
pub fn short_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        id.to_string()
    } else {
        let prefix: String = id.chars().take(8).collect();
        format!("{}…", prefix)
    }
}
