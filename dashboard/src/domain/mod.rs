//! Domain records, view state machines and ports.
//!
//! Purpose: model the two dashboard views independently of HTTP. Each view
//! owns its data for the lifetime of one page view, performs a single fetch
//! through [`ports::UserDirectorySource`], and exposes a render decision.
//!
//! Public surface:
//! - `User` and its sub-records: read-only projection of the directory.
//! - `filter_users`: the pure search predicate.
//! - `ListView` / `DetailView`: per-page state over `LoadState`.

pub mod detail_view;
pub mod filter;
pub mod list_view;
pub mod load_state;
pub mod ports;
pub mod user;

pub use self::detail_view::{DETAIL_STATUS_FAILURE, DetailOutcome, DetailView};
pub use self::filter::filter_users;
pub use self::list_view::{LIST_STATUS_FAILURE, ListView};
pub use self::load_state::{GENERIC_FAILURE_MESSAGE, LoadState};
pub use self::user::{Address, Company, Geo, User, UserId, UserIdentifier};
