//! HTTP adapter for the remote user directory.

mod dto;
mod http_source;

pub use http_source::{DirectoryHttpIdentity, UserDirectoryHttpSource};
