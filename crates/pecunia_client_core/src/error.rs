//! Error taxonomy for the gateway. The console renders `Display` text
//! inline; no variant is retried automatically.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("backend not configured")]
    NotConfigured,

    /// Bad credentials, expired session, or an authenticated account with
    /// no profile row.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Account creation rejected by the service (duplicate email and the
    /// like).
    #[error("account creation failed: {0}")]
    Conflict(String),

    /// The account was created but the profile insert failed. The account
    /// exists without a profile; the service offers no client-side delete
    /// to roll it back.
    #[error("account created but profile setup failed: {0}")]
    OrphanedAccount(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("request failed: {0}")]
    Http(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Http(err.to_string())
    }
}
