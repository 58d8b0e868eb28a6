//! Three-state fetch lifecycle shared by both views.

use super::ports::UserDirectorySourceError;

/// Message used when a failure carries no usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

/// Lifecycle of one view's single fetch.
///
/// `Failed` is terminal for a view instance: nothing retries and no partial
/// data is kept alongside the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// The fetch has not completed.
    Loading,
    /// The fetch failed; carries the user-facing message.
    Failed(String),
    /// The fetch succeeded.
    Loaded(T),
}

impl<T> LoadState<T> {
    /// Collapse a fetch result into a view state.
    ///
    /// Non-success statuses become `status_message`; every other failure
    /// surfaces its own detail, or [`GENERIC_FAILURE_MESSAGE`] when that is
    /// blank.
    ///
    /// # Examples
    /// ```
    /// use user_dashboard::domain::LoadState;
    /// use user_dashboard::domain::ports::UserDirectorySourceError;
    ///
    /// let failed: LoadState<()> = LoadState::from_fetch(
    ///     Err(UserDirectorySourceError::status(500_u16, "oops")),
    ///     "Failed to fetch users",
    /// );
    /// assert_eq!(failed.failure(), Some("Failed to fetch users"));
    /// ```
    pub fn from_fetch(result: Result<T, UserDirectorySourceError>, status_message: &str) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(error) if error.is_status() => Self::Failed(status_message.to_owned()),
            Err(error) => {
                let detail = error.detail().trim();
                if detail.is_empty() {
                    Self::Failed(GENERIC_FAILURE_MESSAGE.to_owned())
                } else {
                    Self::Failed(detail.to_owned())
                }
            }
        }
    }

    /// Whether the fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Failure message, if the fetch failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Loading | Self::Loaded(_) => None,
        }
    }

    /// Loaded value, if the fetch succeeded.
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}
