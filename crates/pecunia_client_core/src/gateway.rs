//! Auth/Profile Gateway: application-level user and notification operations
//! translated into account/table service calls. Every operation here is a
//! thin pass-through; persistence, token lifecycle, and authorization all
//! live on the service side.

use crate::api;
use crate::error::GatewayError;
use crate::ids::{NotificationId, UserId};
use crate::models::{self, AdminNewUser, NewUser, Notification, User, UserUpdate};

const PROFILES: &str = "profiles";
const NOTIFICATIONS: &str = "notifications";

async fn fetch_profile(user_id: &str) -> Result<Option<User>, GatewayError> {
    let rows = api::table_select(PROFILES, &[("id", user_id)], None).await?;
    Ok(rows.first().map(models::user_from_row))
}

async fn fetch_notifications(user_id: &str) -> Result<Vec<Notification>, GatewayError> {
    let rows = api::table_select(NOTIFICATIONS, &[("user_id", user_id)], Some("date.desc")).await?;
    let mut list: Vec<Notification> = rows
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect();
    // keep newest-first even if the service ignores order=
    models::sort_notifications_newest_first(&mut list);
    Ok(list)
}

/// Authenticate and load the caller's profile. On success the session
/// (token + account id) is stored for subsequent calls.
pub async fn login(identifier: &str, password: &str) -> Result<User, GatewayError> {
    let signin = api::sign_in(identifier, password).await?;
    crate::set_session(signin.token, signin.user_id.clone());
    match fetch_profile(&signin.user_id).await? {
        Some(user) => Ok(user),
        None => {
            crate::clear_session();
            Err(GatewayError::Auth("no profile for this account".to_string()))
        }
    }
}

/// Two-step create: account first, then the profile row. There is no
/// compensating delete if the second step fails; the error names the
/// partial state instead.
pub async fn register(user: &NewUser) -> Result<User, GatewayError> {
    let account_id = api::sign_up(&user.email, &user.password).await?;
    let row = models::registration_profile_row(&account_id, user);
    let inserted = api::table_insert(PROFILES, &row)
        .await
        .map_err(|e| GatewayError::OrphanedAccount(e.to_string()))?;
    Ok(models::user_from_row(&inserted))
}

/// Best-effort remote sign-out; the local session is always cleared.
pub async fn logout() {
    if crate::is_logged_in() {
        if let Err(e) = api::sign_out().await {
            log::warn!("sign-out failed: {}", e);
        }
    }
    crate::clear_session();
}

/// Resolve the active session and load the profile plus its notifications,
/// newest first. `None` when there is no session or no profile row.
pub async fn get_current_user() -> Option<User> {
    let user_id = match api::get_session().await {
        Ok(Some(id)) => id,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("session lookup failed: {}", e);
            return None;
        }
    };
    let mut user = match fetch_profile(&user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("profile load failed: {}", e);
            return None;
        }
    };
    user.notifications = fetch_notifications(&user_id).await.unwrap_or_default();
    Some(user)
}

/// Set a notification's read flag, scoped to the owning user.
pub async fn update_user_notification(
    user_id: &str,
    notification_id: &str,
    read: bool,
) -> Result<(), GatewayError> {
    let uid = UserId::parse(user_id).map_err(GatewayError::Validation)?;
    let nid = NotificationId::parse(notification_id).map_err(GatewayError::Validation)?;
    let patch = serde_json::json!({ "read": read });
    api::table_update(
        NOTIFICATIONS,
        &[("id", nid.as_str()), ("user_id", uid.as_str())],
        &patch,
    )
    .await?;
    Ok(())
}

/// Append an unread notification stamped with the current time.
pub async fn add_user_notification(
    user_id: &str,
    message: &str,
) -> Result<Notification, GatewayError> {
    let uid = UserId::parse(user_id).map_err(GatewayError::Validation)?;
    let notification = Notification {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: uid.as_str().to_string(),
        message: message.to_string(),
        date: chrono::Utc::now().to_rfc3339(),
        read: false,
    };
    let row = serde_json::to_value(&notification).map_err(|e| GatewayError::Query(e.to_string()))?;
    api::table_insert(NOTIFICATIONS, &row).await?;
    Ok(notification)
}

/// Absolute overwrite of the stored balance; the last writer wins.
pub async fn update_user_balance(user_id: &str, new_balance: f64) -> Result<(), GatewayError> {
    let uid = UserId::parse(user_id).map_err(GatewayError::Validation)?;
    if !new_balance.is_finite() {
        return Err(GatewayError::Validation("balance must be a finite number".to_string()));
    }
    let patch = serde_json::json!({ "balance": new_balance });
    api::table_update(PROFILES, &[("id", uid.as_str())], &patch).await?;
    Ok(())
}

/// Every profile row mapped to a `User`. A failed query degrades to the
/// empty list (logged, not surfaced).
pub async fn get_all_users() -> Vec<User> {
    match api::table_select(PROFILES, &[], Some("email.asc")).await {
        Ok(rows) => rows.iter().map(models::user_from_row).collect(),
        Err(e) => {
            log::warn!("user list query failed: {}", e);
            Vec::new()
        }
    }
}

/// Sparse profile update: `None` fields stay untouched, `Some` fields are
/// written even when empty or false.
pub async fn update_user_info(update: &UserUpdate) -> Result<(), GatewayError> {
    let uid = UserId::parse(&update.id).map_err(GatewayError::Validation)?;
    let patch = serde_json::to_value(update).map_err(|e| GatewayError::Query(e.to_string()))?;
    if patch.as_object().map_or(true, |body| body.is_empty()) {
        return Ok(());
    }
    api::table_update(PROFILES, &[("id", uid.as_str())], &patch).await?;
    Ok(())
}

/// Privileged create: the caller supplies the flags and starting balance.
/// Failures are not differentiated further; the console shows one generic
/// message either way.
pub async fn admin_create_user(user: &AdminNewUser) -> Result<User, GatewayError> {
    let account_id = api::sign_up(&user.email, &user.password).await?;
    let row = models::admin_profile_row(&account_id, user);
    let inserted = api::table_insert(PROFILES, &row)
        .await
        .map_err(|e| GatewayError::OrphanedAccount(e.to_string()))?;
    Ok(models::user_from_row(&inserted))
}

/// The account service sends its own confirmation mail on sign-up; nothing
/// to do client-side.
pub async fn verify_email(_email: &str) -> Result<(), GatewayError> {
    Ok(())
}
