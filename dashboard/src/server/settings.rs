//! Start-up settings loaded via OrthoConfig.
//!
//! Values come from `DASHBOARD_*` environment variables, matching
//! `--kebab-case` command-line flags, or defaults.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_URL: &str = "https://jsonplaceholder.typicode.com";
pub(super) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub(super) const DEFAULT_USER_AGENT: &str = "user-dashboard/0.1";

/// Raw settings as supplied by the operator.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DASHBOARD")]
pub struct DashboardSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the user directory.
    pub upstream_url: Option<String>,
    /// Per-request timeout for upstream calls, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// `User-Agent` sent upstream.
    pub user_agent: Option<String>,
}

/// Settings that fail validation.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("invalid upstream URL {value:?}: {source}")]
    UpstreamUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("upstream URL {value:?} must be an http(s) base URL")]
    UpstreamNotHttp { value: String },
}

impl DashboardSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    pub fn upstream_url(&self) -> Result<Url, SettingsError> {
        let value = self.upstream_url.as_deref().unwrap_or(DEFAULT_UPSTREAM_URL);
        let url = Url::parse(value).map_err(|source| SettingsError::UpstreamUrl {
            value: value.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(SettingsError::UpstreamNotHttp {
                value: value.to_owned(),
            });
        }
        Ok(url)
    }

    /// Timeout clamped to at least one second.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .max(1);
        Duration::from_secs(secs)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
