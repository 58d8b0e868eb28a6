//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

use super::settings::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT, DashboardSettings, SettingsError,
};

/// Validated configuration handed to [`super::create_server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) upstream_url: Url,
    pub(crate) request_timeout: Duration,
    pub(crate) user_agent: String,
}

impl ServerConfig {
    /// Configuration with the default timeout and user agent.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, upstream_url: Url) -> Self {
        Self {
            bind_addr,
            upstream_url,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout.max(Duration::from_secs(1));
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[must_use]
    pub fn upstream_url(&self) -> &Url {
        &self.upstream_url
    }
}

impl TryFrom<&DashboardSettings> for ServerConfig {
    type Error = SettingsError;

    fn try_from(settings: &DashboardSettings) -> Result<Self, Self::Error> {
        Ok(Self::new(settings.bind_addr()?, settings.upstream_url()?)
            .with_request_timeout(settings.request_timeout())
            .with_user_agent(settings.user_agent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_convert_into_config() {
        let settings = DashboardSettings {
            bind_addr: Some("127.0.0.1:0".to_owned()),
            upstream_url: Some("http://127.0.0.1:9000".to_owned()),
            request_timeout_secs: Some(4),
            user_agent: Some("probe/1".to_owned()),
        };
        let config = ServerConfig::try_from(&settings).expect("valid settings");

        assert_eq!(config.bind_addr().port(), 0);
        assert_eq!(config.upstream_url().as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.request_timeout, Duration::from_secs(4));
        assert_eq!(config.user_agent, "probe/1");
    }

    #[test]
    fn invalid_settings_surface_the_first_error() {
        let settings = DashboardSettings {
            bind_addr: Some("nope".to_owned()),
            upstream_url: None,
            request_timeout_secs: None,
            user_agent: None,
        };
        let error = ServerConfig::try_from(&settings).expect_err("bad bind address");
        assert!(error.to_string().contains("nope"));
    }

    #[test]
    fn builder_clamps_timeout() {
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("socket address"),
            Url::parse("http://127.0.0.1:9000").expect("url"),
        )
        .with_request_timeout(Duration::ZERO);
        assert_eq!(config.request_timeout, Duration::from_secs(1));
        assert_eq!(config.user_agent, "user-dashboard/0.1");
    }
}
