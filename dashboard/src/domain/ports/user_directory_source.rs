//! Driven port for reading the remote user directory.
//!
//! The domain owns the response contract; adapters translate transport
//! details (HTTP status, timeouts, JSON decoding) into
//! [`UserDirectorySourceError`].

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Address, Company, Geo, User, UserId, UserIdentifier};

define_port_error! {
    /// Errors surfaced while reading the user directory.
    pub enum UserDirectorySourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "user directory transport failed: {message}",
        /// The client-side request deadline elapsed.
        Timeout { message: String } =>
            "user directory timeout: {message}",
        /// Upstream answered with a non-success status.
        Status { status: u16, message: String } =>
            "user directory returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "user directory response decode failed: {message}",
        /// The adapter could not build the request.
        InvalidRequest { message: String } =>
            "user directory request invalid: {message}",
    }
}

impl UserDirectorySourceError {
    /// Failure detail without the category prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Timeout { message }
            | Self::Status { message, .. }
            | Self::Decode { message }
            | Self::InvalidRequest { message } => message.as_str(),
        }
    }

    /// Whether upstream responded with a non-success status.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Port for fetching directory records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectorySource: Send + Sync {
    /// Fetch the full collection in upstream order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use user_dashboard::domain::ports::{FixtureUserDirectorySource, UserDirectorySource};
    ///
    /// let users = FixtureUserDirectorySource.fetch_users().await?;
    /// assert_eq!(users.len(), 1);
    /// # Ok::<(), user_dashboard::domain::ports::UserDirectorySourceError>(())
    /// ```
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectorySourceError>;

    /// Fetch one record.
    ///
    /// `Ok(None)` means upstream answered successfully with an empty body
    /// (`null` or another falsy JSON value).
    async fn fetch_user(
        &self,
        identifier: &UserIdentifier,
    ) -> Result<Option<User>, UserDirectorySourceError>;
}

/// In-memory source holding the first record of the public directory.
///
/// Unknown identifiers answer with a 404 status error, mirroring upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserDirectorySource;

impl FixtureUserDirectorySource {
    /// The single record this fixture serves.
    #[must_use]
    pub fn user() -> User {
        User {
            id: Some(UserId::new(1)),
            name: "Leanne Graham".to_owned(),
            username: "Bret".to_owned(),
            email: "Sincere@april.biz".to_owned(),
            phone: "1-770-736-8031 x56442".to_owned(),
            website: "hildegard.org".to_owned(),
            address: Address {
                street: "Kulas Light".to_owned(),
                suite: "Apt. 556".to_owned(),
                city: "Gwenborough".to_owned(),
                zipcode: "92998-3874".to_owned(),
                geo: Geo {
                    lat: "-37.3159".to_owned(),
                    lng: "81.1496".to_owned(),
                },
            },
            company: Company {
                name: "Romaguera-Crona".to_owned(),
                catch_phrase: "Multi-layered client-server neural-net".to_owned(),
                bs: "harness real-time e-markets".to_owned(),
            },
        }
    }
}

#[async_trait]
impl UserDirectorySource for FixtureUserDirectorySource {
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectorySourceError> {
        Ok(vec![Self::user()])
    }

    async fn fetch_user(
        &self,
        identifier: &UserIdentifier,
    ) -> Result<Option<User>, UserDirectorySourceError> {
        if identifier.as_str() == "1" {
            Ok(Some(Self::user()))
        } else {
            Err(UserDirectorySourceError::status(404_u16, "Not Found"))
        }
    }
}
