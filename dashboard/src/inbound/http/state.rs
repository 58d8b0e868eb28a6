//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the directory port and stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::UserDirectorySource;

/// Dependency bundle for page handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectorySource>,
}

impl HttpState {
    /// Bundle the directory port for handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use user_dashboard::domain::ports::FixtureUserDirectorySource;
    /// use user_dashboard::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureUserDirectorySource));
    /// let _cloned = state.clone();
    /// ```
    pub fn new(users: Arc<dyn UserDirectorySource>) -> Self {
        Self { users }
    }
}
