//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_directory_source;

#[cfg(test)]
pub use user_directory_source::MockUserDirectorySource;
pub use user_directory_source::{
    FixtureUserDirectorySource, UserDirectorySource, UserDirectorySourceError,
};
