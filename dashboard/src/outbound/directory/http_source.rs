//! Reqwest-backed user directory adapter.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP status mapping, and lenient JSON decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{UserDto, is_falsy};
use crate::domain::ports::{UserDirectorySource, UserDirectorySourceError};
use crate::domain::{User, UserIdentifier};

const DEFAULT_USER_AGENT: &str = "user-dashboard/0.1";
const USERS_SEGMENT: &str = "users";

/// Outbound identity for directory requests.
pub struct DirectoryHttpIdentity {
    /// HTTP user-agent sent upstream.
    pub user_agent: String,
}

impl Default for DirectoryHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Directory adapter issuing `GET` requests below one base URL.
pub struct UserDirectoryHttpSource {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl UserDirectoryHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let source = UserDirectoryHttpSource::new(base_url, Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(base_url, timeout, DirectoryHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        base_url: Url,
        timeout: Duration,
        identity: DirectoryHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            user_agent: identity.user_agent,
        })
    }

    async fn get_json(&self, url: Url) -> Result<Value, UserDirectorySourceError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        serde_json::from_slice(body.as_ref()).map_err(|error| {
            UserDirectorySourceError::decode(format!("invalid directory JSON payload: {error}"))
        })
    }
}

#[async_trait]
impl UserDirectorySource for UserDirectoryHttpSource {
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectorySourceError> {
        let result = match users_url(&self.base_url, None) {
            Ok(url) => self.get_json(url).await.and_then(parse_users),
            Err(error) => Err(error),
        };
        match &result {
            Ok(users) => debug!(count = users.len(), "fetched user collection"),
            Err(error) => warn!(%error, "user collection fetch failed"),
        }
        result
    }

    async fn fetch_user(
        &self,
        identifier: &UserIdentifier,
    ) -> Result<Option<User>, UserDirectorySourceError> {
        let result = match users_url(&self.base_url, Some(identifier)) {
            Ok(url) => self.get_json(url).await.map(parse_user),
            Err(error) => Err(error),
        };
        match &result {
            Ok(user) => debug!(%identifier, found = user.is_some(), "fetched user record"),
            Err(error) => warn!(%identifier, %error, "user record fetch failed"),
        }
        result
    }
}

/// `{base}/users` or `{base}/users/{identifier}`, with the identifier
/// percent-encoded as a single segment.
fn users_url(
    base_url: &Url,
    identifier: Option<&UserIdentifier>,
) -> Result<Url, UserDirectorySourceError> {
    let mut url = base_url.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            UserDirectorySourceError::invalid_request(format!(
                "base URL cannot carry a path: {base_url}"
            ))
        })?;
        segments.pop_if_empty().push(USERS_SEGMENT);
        if let Some(identifier) = identifier {
            segments.push(identifier.as_str());
        }
    }
    Ok(url)
}

fn parse_users(body: Value) -> Result<Vec<User>, UserDirectorySourceError> {
    let Value::Array(elements) = body else {
        return Err(UserDirectorySourceError::decode(
            "expected a JSON array of users",
        ));
    };
    Ok(elements
        .into_iter()
        .map(|element| UserDto::from_value(element).into_domain())
        .collect())
}

fn parse_user(body: Value) -> Option<User> {
    if is_falsy(&body) {
        None
    } else {
        Some(UserDto::from_value(body).into_domain())
    }
}

fn map_transport_error(error: reqwest::Error) -> UserDirectorySourceError {
    if error.is_timeout() {
        UserDirectorySourceError::timeout(error.to_string())
    } else {
        UserDirectorySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserDirectorySourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        status.canonical_reason().unwrap_or_default().to_owned()
    } else {
        body_preview
    };
    // 408 and 504 stay status failures; `Timeout` is reserved for the client deadline.
    UserDirectorySourceError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
