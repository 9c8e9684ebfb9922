//! HTTP API Client for the user record source
//!
//! The collection is read once per users-page mount. Update and delete are
//! only sent when the console runs in live mode.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, warn};

use teshdesk_core::{decode_users, ApiConfig, UserRecord, UserUpdate};

const RETRY_DELAY_MS: u32 = 750;

/// API client error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientError {
    pub status: u16,
    pub message: String,
}

impl ApiClientError {
    /// Transport failures and server errors are worth one more attempt.
    pub fn is_retryable(&self) -> bool {
        self.status == 0 || self.status >= 500
    }
}

impl std::fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status == 0 {
            f.write_str(&self.message)
        } else {
            write!(f, "API Error {}: {}", self.status, self.message)
        }
    }
}

impl From<gloo_net::Error> for ApiClientError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            status: 0,
            message: format!("Network error: {err}"),
        }
    }
}

impl From<teshdesk_core::Error> for ApiClientError {
    fn from(err: teshdesk_core::Error) -> Self {
        Self {
            status: err.status().unwrap_or(0),
            message: err.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiClientError>;

/// Turn a non-2xx response into an error carrying its body
async fn check_status(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => response.status_text(),
    };
    Err(ApiClientError { status, message })
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.header("Accept", "application/json").send().await?;
    check_status(response).await
}

async fn fetch_users_once(url: &str) -> ApiResult<Vec<UserRecord>> {
    let response = send(Request::get(url)).await?;
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiClientError {
        status,
        message: format!("Failed to read response: {e}"),
    })?;
    decode_users(&body).map_err(|e| ApiClientError {
        status,
        message: e.to_string(),
    })
}

/// Fetch the user collection, retrying once on a network or server error
pub async fn fetch_users(config: &ApiConfig) -> ApiResult<Vec<UserRecord>> {
    let url = config.users_url();
    debug!(%url, "Fetching users");

    match fetch_users_once(&url).await {
        Err(e) if e.is_retryable() => {
            warn!(error = %e, "User fetch failed, retrying once");
            TimeoutFuture::new(RETRY_DELAY_MS).await;
            fetch_users_once(&url).await
        }
        result => result,
    }
}

/// Send an edit to the record source
pub async fn update_user(config: &ApiConfig, id: &str, update: &UserUpdate) -> ApiResult<()> {
    let url = config.user_url(id);
    debug!(%url, "Updating user");

    let request = Request::put(&url)
        .header("Accept", "application/json")
        .json(update)?;
    let response = request.send().await?;
    check_status(response).await?;
    Ok(())
}

/// Remove a record from the source
pub async fn delete_user(config: &ApiConfig, id: &str) -> ApiResult<()> {
    let url = config.user_url(id);
    debug!(%url, "Deleting user");

    send(Request::delete(&url)).await?;
    Ok(())
}
