//! User dashboard library modules.
//!
//! A server-rendered view over a remote user directory: a searchable list
//! page and a per-user detail page, each backed by one upstream fetch.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use middleware::Trace;
