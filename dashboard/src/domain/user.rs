//! User directory records.
//!
//! These types are a read-only projection of the upstream directory payload.
//! The outbound adapter owns decoding; by the time a [`User`] exists every
//! text slot holds a defined value (possibly empty), so rendering never has to
//! reason about missing fields.

use std::fmt;

/// Numeric identifier assigned to a user by the upstream directory.
///
/// # Examples
/// ```
/// use user_dashboard::domain::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw upstream identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier taken verbatim from the navigation path.
///
/// No numeric validation is applied: whatever the router hands over is sent
/// upstream as a single path segment. Only the empty string is treated as
/// "not yet resolved".
///
/// # Examples
/// ```
/// use user_dashboard::domain::UserIdentifier;
///
/// assert!(UserIdentifier::new("").is_none());
/// let id = UserIdentifier::new("abc").expect("non-empty identifier");
/// assert_eq!(id.as_str(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentifier(String);

impl UserIdentifier {
    /// Accept any non-empty identifier.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for UserIdentifier {
    fn from(value: UserId) -> Self {
        Self(value.to_string())
    }
}

/// Raw coordinate pair; upstream sends both values as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geo {
    /// Latitude text.
    pub lat: String,
    /// Longitude text.
    pub lng: String,
}

/// Postal address block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// Suite or apartment line.
    pub suite: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
    /// Coordinates.
    pub geo: Geo,
}

/// Employer block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Marketing catch phrase.
    pub catch_phrase: String,
    /// Business tagline.
    pub bs: String,
}

/// One directory entry.
///
/// `id` is `None` when upstream omitted it or sent something that is not an
/// integer; such users still list but cannot be linked to a detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    /// Route key, when upstream supplied a usable one.
    pub id: Option<UserId>,
    /// Full name.
    pub name: String,
    /// Handle.
    pub username: String,
    /// Contact e-mail.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Website host, without scheme.
    pub website: String,
    /// Postal address.
    pub address: Address,
    /// Employer.
    pub company: Company,
}

impl User {
    /// Path of this user's detail view, when the user has an identifier.
    ///
    /// # Examples
    /// ```
    /// use user_dashboard::domain::{User, UserId};
    ///
    /// let user = User { id: Some(UserId::new(3)), ..User::default() };
    /// assert_eq!(user.detail_path().as_deref(), Some("/users/3"));
    /// assert!(User::default().detail_path().is_none());
    /// ```
    #[must_use]
    pub fn detail_path(&self) -> Option<String> {
        self.id.map(|id| format!("/users/{id}"))
    }
}
