//! Client core for the Pecunia admin application: backend configuration,
//! session state, and the gateway operations the UI calls against the
//! hosted account/table service.

use once_cell::sync::Lazy;
use std::sync::Mutex;

mod api;
pub mod error;
pub mod gateway;
pub mod ids;
pub mod models;
pub mod transactions;

pub use error::GatewayError;

struct BackendConfig {
    base_url: String,
    api_key: String,
}

/// Token and account id returned by the account service on sign-in.
struct Session {
    token: String,
    user_id: String,
}

static BACKEND_CONFIG: Lazy<Mutex<Option<BackendConfig>>> = Lazy::new(|| Mutex::new(None));
static SESSION: Lazy<Mutex<Option<Session>>> = Lazy::new(|| Mutex::new(None));

/// Point the client at the account/table service. The setup screen writes
/// through here; every gateway operation fails with `NotConfigured` until
/// this has been called.
pub fn set_backend_config(base_url: String, api_key: String) {
    let base_url = base_url.trim_end_matches('/').to_string();
    *BACKEND_CONFIG.lock().unwrap() = Some(BackendConfig { base_url, api_key });
}

pub fn is_configured() -> bool {
    BACKEND_CONFIG.lock().unwrap().is_some()
}

pub fn get_base_url() -> Option<String> {
    BACKEND_CONFIG.lock().unwrap().as_ref().map(|c| c.base_url.clone())
}

pub fn get_api_key() -> Option<String> {
    BACKEND_CONFIG.lock().unwrap().as_ref().map(|c| c.api_key.clone())
}

pub(crate) fn set_session(token: String, user_id: String) {
    *SESSION.lock().unwrap() = Some(Session { token, user_id });
}

pub(crate) fn clear_session() {
    *SESSION.lock().unwrap() = None;
}

pub fn is_logged_in() -> bool {
    SESSION.lock().unwrap().is_some()
}

pub fn get_user_id() -> Option<String> {
    SESSION.lock().unwrap().as_ref().map(|s| s.user_id.clone())
}

pub fn get_token() -> Option<String> {
    SESSION.lock().unwrap().as_ref().map(|s| s.token.clone())
}
