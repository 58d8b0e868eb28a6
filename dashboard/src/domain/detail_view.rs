//! Single-user detail view keyed by the navigation identifier.

use super::ports::UserDirectorySource;
use super::{LoadState, User, UserIdentifier};

/// Message shown when the single-record endpoint answers with a failure status.
pub const DETAIL_STATUS_FAILURE: &str = "Failed to fetch user details";

/// What the detail page should show, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome<'a> {
    /// The fetch failed; carries the message.
    Failed(&'a str),
    /// No identifier yet, or the fetch is outstanding.
    Loading,
    /// Upstream answered successfully without a record.
    NotFound,
    /// The record to render.
    Found(&'a User),
}

/// State of one detail page view.
///
/// The view fetches once per distinct identifier. A failure is terminal:
/// later identifiers are ignored until a new view is created.
///
/// # Examples
/// ```
/// use user_dashboard::domain::{DetailOutcome, DetailView, UserIdentifier};
/// use user_dashboard::domain::ports::FixtureUserDirectorySource;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut view = DetailView::new();
/// view.resolve(&FixtureUserDirectorySource, UserIdentifier::new("1")).await;
/// assert!(matches!(view.outcome(), DetailOutcome::Found(user) if user.username == "Bret"));
/// # });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    identifier: Option<UserIdentifier>,
    state: LoadState<Option<User>>,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    /// A view waiting for its identifier.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            identifier: None,
            state: LoadState::Loading,
        }
    }

    /// Consume the resolved identifier and fetch the record it names.
    ///
    /// - `None` means the router has not resolved an identifier yet; nothing
    ///   is fetched.
    /// - The identifier already loaded is not fetched again.
    /// - A failed view ignores further identifiers.
    pub async fn resolve(
        &mut self,
        source: &dyn UserDirectorySource,
        identifier: Option<UserIdentifier>,
    ) {
        let Some(identifier) = identifier else {
            return;
        };
        if self.state.failure().is_some() {
            return;
        }
        if self.state.loaded().is_some() && self.identifier.as_ref() == Some(&identifier) {
            return;
        }

        self.state = LoadState::Loading;
        let result = source.fetch_user(&identifier).await;
        self.identifier = Some(identifier);
        self.state = LoadState::from_fetch(result, DETAIL_STATUS_FAILURE);
    }

    /// Identifier of the most recent fetch.
    #[must_use]
    pub const fn identifier(&self) -> Option<&UserIdentifier> {
        self.identifier.as_ref()
    }

    /// Fetch lifecycle.
    #[must_use]
    pub const fn state(&self) -> &LoadState<Option<User>> {
        &self.state
    }

    /// Rendering decision: failure, then loading, then not-found, then the
    /// record.
    #[must_use]
    pub fn outcome(&self) -> DetailOutcome<'_> {
        match &self.state {
            LoadState::Failed(message) => DetailOutcome::Failed(message.as_str()),
            LoadState::Loading => DetailOutcome::Loading,
            LoadState::Loaded(None) => DetailOutcome::NotFound,
            LoadState::Loaded(Some(user)) => DetailOutcome::Found(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        FixtureUserDirectorySource, MockUserDirectorySource, UserDirectorySourceError,
    };
    use rstest::rstest;

    fn identifier(raw: &str) -> Option<UserIdentifier> {
        UserIdentifier::new(raw)
    }

    #[tokio::test]
    async fn unresolved_identifier_issues_no_fetch() {
        // No expectations: any call would panic.
        let source = MockUserDirectorySource::new();
        let mut view = DetailView::new();
        view.resolve(&source, None).await;

        assert_eq!(view.outcome(), DetailOutcome::Loading);
        assert!(view.identifier().is_none());
    }

    #[tokio::test]
    async fn found_record_is_rendered_verbatim() {
        let mut view = DetailView::new();
        view.resolve(&FixtureUserDirectorySource, identifier("1"))
            .await;

        assert_eq!(
            view.outcome(),
            DetailOutcome::Found(&FixtureUserDirectorySource::user())
        );
        assert_eq!(view.identifier().map(UserIdentifier::as_str), Some("1"));
    }

    #[tokio::test]
    async fn falsy_body_is_not_found() {
        let mut source = MockUserDirectorySource::new();
        source
            .expect_fetch_user()
            .times(1)
            .return_once(|_| Ok(None));
        let mut view = DetailView::new();
        view.resolve(&source, identifier("7")).await;

        assert_eq!(view.outcome(), DetailOutcome::NotFound);
    }

    #[rstest]
    #[case::not_found(UserDirectorySourceError::status(404_u16, ""), DETAIL_STATUS_FAILURE)]
    #[case::server_error(UserDirectorySourceError::status(500_u16, ""), DETAIL_STATUS_FAILURE)]
    #[case::decode(UserDirectorySourceError::decode("trailing characters"), "trailing characters")]
    #[tokio::test]
    async fn failures_win_over_not_found(
        #[case] error: UserDirectorySourceError,
        #[case] expected: &str,
    ) {
        let mut source = MockUserDirectorySource::new();
        source
            .expect_fetch_user()
            .times(1)
            .return_once(move |_| Err(error));
        let mut view = DetailView::new();
        view.resolve(&source, identifier("404")).await;

        assert_eq!(view.outcome(), DetailOutcome::Failed(expected));
    }

    #[tokio::test]
    async fn identifier_is_passed_through_unvalidated() {
        let mut source = MockUserDirectorySource::new();
        source
            .expect_fetch_user()
            .withf(|id: &UserIdentifier| id.as_str() == "not a number")
            .times(1)
            .return_once(|_| Ok(None));
        let mut view = DetailView::new();
        view.resolve(&source, identifier("not a number")).await;
    }

    #[tokio::test]
    async fn changed_identifier_refetches_and_same_identifier_does_not() {
        let mut source = MockUserDirectorySource::new();
        source
            .expect_fetch_user()
            .withf(|id: &UserIdentifier| id.as_str() == "1")
            .times(1)
            .returning(|_| Ok(Some(FixtureUserDirectorySource::user())));
        source
            .expect_fetch_user()
            .withf(|id: &UserIdentifier| id.as_str() == "2")
            .times(1)
            .returning(|_| Ok(None));

        let mut view = DetailView::new();
        view.resolve(&source, identifier("1")).await;
        view.resolve(&source, identifier("1")).await;
        assert!(matches!(view.outcome(), DetailOutcome::Found(_)));

        view.resolve(&source, identifier("2")).await;
        assert_eq!(view.outcome(), DetailOutcome::NotFound);
        assert_eq!(view.identifier().map(UserIdentifier::as_str), Some("2"));
    }

    #[tokio::test]
    async fn failure_is_terminal_for_the_view() {
        let mut source = MockUserDirectorySource::new();
        source
            .expect_fetch_user()
            .times(1)
            .return_once(|_| Err(UserDirectorySourceError::transport("reset by peer")));

        let mut view = DetailView::new();
        view.resolve(&source, identifier("1")).await;
        view.resolve(&source, identifier("2")).await;

        assert_eq!(view.outcome(), DetailOutcome::Failed("reset by peer"));
    }
}
