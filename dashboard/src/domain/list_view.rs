//! Searchable list of every directory user.

use super::ports::UserDirectorySource;
use super::{LoadState, User, filter_users};

/// Message shown when the collection endpoint answers with a failure status.
pub const LIST_STATUS_FAILURE: &str = "Failed to fetch users";

/// State of one list page view.
///
/// The collection is fetched once per [`ListView::mount`]; changing the
/// query afterwards only re-runs [`filter_users`].
///
/// # Examples
/// ```
/// use user_dashboard::domain::ListView;
/// use user_dashboard::domain::ports::FixtureUserDirectorySource;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut view = ListView::new();
/// view.mount(&FixtureUserDirectorySource).await;
/// view.set_query("xyz");
/// assert_eq!(view.summary(), "Showing 0 of 1 users");
/// # });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    state: LoadState<Vec<User>>,
    query: String,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    /// A view that has not fetched yet, with an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::Loading,
            query: String::new(),
        }
    }

    /// Fetch the collection and settle into `Loaded` or `Failed`.
    pub async fn mount(&mut self, source: &dyn UserDirectorySource) {
        self.state = LoadState::Loading;
        let result = source.fetch_users().await;
        self.state = LoadState::from_fetch(result, LIST_STATUS_FAILURE);
    }

    /// Replace the search text. Never touches the network.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Fetch lifecycle.
    #[must_use]
    pub const fn state(&self) -> &LoadState<Vec<User>> {
        &self.state
    }

    /// The whole fetched collection; empty unless loaded.
    #[must_use]
    pub fn users(&self) -> &[User] {
        self.state.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    /// Users matching the current query, recomputed on every call.
    #[must_use]
    pub fn filtered(&self) -> Vec<&User> {
        filter_users(self.users(), &self.query)
    }

    /// Summary line shown under the table.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} users",
            self.filtered().len(),
            self.users().len()
        )
    }
}
