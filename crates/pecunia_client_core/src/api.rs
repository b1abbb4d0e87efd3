//! HTTP client for the account/table service: authentication endpoints plus
//! generic table select/insert/update against named collections.

use crate::error::GatewayError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
static CLIENT: once_cell::sync::Lazy<reqwest::Client> = once_cell::sync::Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("reqwest client")
});

#[cfg(not(target_arch = "wasm32"))]
fn http() -> reqwest::Client {
    CLIENT.clone()
}

// The browser client is not Sync, so no shared static on wasm.
#[cfg(target_arch = "wasm32")]
fn http() -> reqwest::Client {
    reqwest::Client::new()
}

fn base_url() -> Result<String, GatewayError> {
    crate::get_base_url().ok_or(GatewayError::NotConfigured)
}

fn service_headers() -> Result<HeaderMap, GatewayError> {
    let key = crate::get_api_key().ok_or(GatewayError::NotConfigured)?;
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-api-key",
        key.parse()
            .map_err(|_| GatewayError::Validation("API key is not a valid header value".to_string()))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Service key plus the bearer token when a session is active. Row access
/// control is the service's concern; the client sends what it has.
fn request_headers() -> Result<HeaderMap, GatewayError> {
    let mut headers = service_headers()?;
    if let Some(token) = crate::get_token() {
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| GatewayError::Auth("session token is not a valid header value".to_string()))?,
        );
    }
    Ok(headers)
}

/// Like `request_headers`, but the bearer token is mandatory.
fn auth_headers() -> Result<HeaderMap, GatewayError> {
    if crate::get_token().is_none() {
        return Err(GatewayError::Auth("not signed in".to_string()));
    }
    request_headers()
}

pub(crate) struct SignIn {
    pub token: String,
    pub user_id: String,
}

/// POST /auth/sign_in -> { token, user_id }
pub(crate) async fn sign_in(identifier: &str, password: &str) -> Result<SignIn, GatewayError> {
    let base = base_url()?;
    let url = format!("{}/auth/sign_in", base);
    let body = serde_json::json!({ "email": identifier, "password": password });
    let resp = http()
        .post(&url)
        .headers(service_headers()?)
        .json(&body)
        .send()
        .await?;
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(GatewayError::Auth(format!("{} {}", status, text)));
    }
    let json: Value = serde_json::from_str(&text).map_err(|e| GatewayError::Auth(e.to_string()))?;
    let token = json
        .get("token")
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::Auth("no token in response".to_string()))?;
    let user_id = json
        .get("user_id")
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::Auth("no user_id in response".to_string()))?;
    Ok(SignIn {
        token: token.to_string(),
        user_id: user_id.to_string(),
    })
}

/// POST /auth/sign_up -> { user_id }. Any rejection (duplicate email and
/// the like) maps to `Conflict`.
pub(crate) async fn sign_up(email: &str, password: &str) -> Result<String, GatewayError> {
    let base = base_url()?;
    let url = format!("{}/auth/sign_up", base);
    let body = serde_json::json!({ "email": email, "password": password });
    let resp = http()
        .post(&url)
        .headers(service_headers()?)
        .json(&body)
        .send()
        .await?;
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(GatewayError::Conflict(format!("{} {}", status, text)));
    }
    let json: Value = serde_json::from_str(&text).map_err(|e| GatewayError::Conflict(e.to_string()))?;
    json.get("user_id")
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| GatewayError::Conflict("no user_id in response".to_string()))
}

/// POST /auth/sign_out for the bearer token.
pub(crate) async fn sign_out() -> Result<(), GatewayError> {
    let base = base_url()?;
    let url = format!("{}/auth/sign_out", base);
    let resp = http().post(&url).headers(auth_headers()?).send().await?;
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(GatewayError::Auth(format!("{} {}", status, text)));
    }
    Ok(())
}

/// GET /auth/session -> the account id behind the bearer token, or `None`
/// when there is no local token or the service no longer accepts it.
pub(crate) async fn get_session() -> Result<Option<String>, GatewayError> {
    if crate::get_token().is_none() {
        return Ok(None);
    }
    let base = base_url()?;
    let url = format!("{}/auth/session", base);
    let resp = http().get(&url).headers(auth_headers()?).send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    if status.as_u16() == 401 {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(GatewayError::Auth(format!("{} {}", status, text)));
    }
    let json: Value = serde_json::from_str(&text).map_err(|e| GatewayError::Auth(e.to_string()))?;
    Ok(json.get("user_id").and_then(Value::as_str).map(String::from))
}

fn table_url(base: &str, table: &str, filters: &[(&str, &str)], order: Option<&str>) -> String {
    let mut url = format!("{}/tables/{}", base, table);
    let mut sep = '?';
    for (col, val) in filters {
        url.push(sep);
        sep = '&';
        url.push_str(&format!("{}=eq.{}", col, urlencoding::encode(val)));
    }
    if let Some(order) = order {
        url.push(sep);
        url.push_str(&format!("order={}", order));
    }
    url
}

/// GET /tables/{name} with `col=eq.value` filters; returns the row array.
pub(crate) async fn table_select(
    table: &str,
    filters: &[(&str, &str)],
    order: Option<&str>,
) -> Result<Vec<Value>, GatewayError> {
    let base = base_url()?;
    let url = table_url(&base, table, filters, order);
    let resp = http().get(&url).headers(request_headers()?).send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(GatewayError::Query(format!("{} {}", status, text)));
    }
    serde_json::from_str(&text).map_err(|e| GatewayError::Query(e.to_string()))
}

/// POST /tables/{name}; returns the inserted row (the service answers with
/// either the row or a one-element array).
pub(crate) async fn table_insert(table: &str, row: &Value) -> Result<Value, GatewayError> {
    let base = base_url()?;
    let url = format!("{}/tables/{}", base, table);
    let resp = http()
        .post(&url)
        .headers(request_headers()?)
        .json(row)
        .send()
        .await?;
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(GatewayError::Query(format!("{} {}", status, text)));
    }
    let json: Value = serde_json::from_str(&text).map_err(|e| GatewayError::Query(e.to_string()))?;
    Ok(match json {
        Value::Array(mut rows) if !rows.is_empty() => rows.remove(0),
        other => other,
    })
}

/// PATCH /tables/{name} with `col=eq.value` filters; returns the updated
/// rows (empty when nothing matched).
pub(crate) async fn table_update(
    table: &str,
    filters: &[(&str, &str)],
    patch: &Value,
) -> Result<Vec<Value>, GatewayError> {
    let base = base_url()?;
    let url = table_url(&base, table, filters, None);
    let resp = http()
        .patch(&url)
        .headers(request_headers()?)
        .json(patch)
        .send()
        .await?;
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(GatewayError::Query(format!("{} {}", status, text)));
    }
    serde_json::from_str(&text).map_err(|e| GatewayError::Query(e.to_string()))
}
