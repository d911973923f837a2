//! HTTP client and data model for the random-data-api user endpoint.
//!
//! A single GET returns a JSON array of mock user records. The response is
//! decoded in two steps: first into a generic value so the shape (non-empty
//! array) can be checked explicitly, then into typed records. Every record
//! field is optional; consumers render a fallback for anything missing.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

/// Default endpoint serving batches of mock users.
pub const DEFAULT_ENDPOINT: &str = "https://random-data-api.com/api/users/random_user";

/// Number of records requested per fetch when no override is given.
pub const DEFAULT_BATCH_SIZE: u64 = 80;

/// Fallback shown for any field that is absent, empty, or zero.
pub const FIELD_FALLBACK: &str = "N/A";

/// Errors from a user fetch.
///
/// All variants surface to the user as the same retryable failure message;
/// they differ only in what gets logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch user data: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to fetch user data: server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("Invalid user data received")]
    Shape,
    #[error("Failed to fetch user data: fetch task ended unexpectedly")]
    Cancelled,
}

/// Record identifier as returned by the API, either numeric or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl UserId {
    /// Displayable form of the id, treating zero and empty strings as
    /// missing (same falsy contract as the text fields).
    pub fn to_display(&self) -> Option<String> {
        match self {
            UserId::Number(0) => None,
            UserId::Number(n) => Some(n.to_string()),
            UserId::Text(s) if s.is_empty() => None,
            UserId::Text(s) => Some(s.clone()),
        }
    }
}

/// One mock person. Extra response fields are ignored, and none of these
/// are guaranteed to be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserRecord {
    /// Displayable id through the same fallback policy as the text fields.
    pub fn id_display(&self) -> String {
        display_or_default(self.id.as_ref().and_then(UserId::to_display).as_deref())
    }
}

/// Normalize an optional field for display.
///
/// Absent and empty values both render as the literal fallback. This is a
/// deliberately coarse contract: an empty string is treated the same as a
/// missing field.
pub fn display_or_default(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => FIELD_FALLBACK.to_string(),
    }
}

/// Client for the user batch endpoint.
#[derive(Debug, Clone)]
pub struct UserApiClient {
    http_client: Client,
    endpoint: String,
}

impl UserApiClient {
    /// Create a client for the given endpoint.
    ///
    /// No request timeout is configured: the flow waits for a response or a
    /// transport-level failure, with the UI staying responsive meanwhile.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch one batch of users.
    ///
    /// Succeeds only when the server responds 2xx with a non-empty JSON
    /// array; anything else maps onto the [`ApiError`] taxonomy.
    pub async fn fetch_users(&self, batch_size: u64) -> Result<Vec<UserRecord>, ApiError> {
        let url = format!("{}?size={}", self.endpoint, batch_size);
        info!("Fetching {} users from {}", batch_size, url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            error!("Failed to fetch user data: {}", e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to fetch user data: server returned {}", status);
            return Err(ApiError::Status(status));
        }

        let body: Value = response.json().await.map_err(|e| {
            error!("Failed to fetch user data: body is not valid JSON: {}", e);
            ApiError::Transport(e)
        })?;

        let users = decode_user_batch(body)?;
        info!("User data fetched successfully ({} records)", users.len());
        Ok(users)
    }
}

/// Check the response shape and decode the records.
///
/// The endpoint always returns an array for this request shape, so the
/// non-array branch is defensive rather than an expected path.
pub fn decode_user_batch(body: Value) -> Result<Vec<UserRecord>, ApiError> {
    let items = match body {
        Value::Array(items) if !items.is_empty() => items,
        _ => {
            error!("Invalid user data received: expected a non-empty array");
            return Err(ApiError::Shape);
        }
    };

    serde_json::from_value(Value::Array(items)).map_err(|e| {
        error!("Invalid user data received: {}", e);
        ApiError::Shape
    })
}
