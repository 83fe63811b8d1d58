//! Configuration loading and constants.
//!
//! The only runtime setting is the displayed version string, read once from the
//! `VERSION` environment variable at startup. Everything else (bind address,
//! cache headers, log defaults, template names) is a compile-time constant.
//! `AppConfig` is the root configuration struct handed to the router.

use const_format::formatcp;
use serde::Serialize;

// =============================================================================
// HTTP Listener
// =============================================================================

/// Interface the listener binds to (all interfaces)
pub const HTTP_HOST: &str = "0.0.0.0";

/// Port the listener binds to
pub const HTTP_PORT: u16 = 8080;

/// Pre-formatted bind address (compile-time string concatenation)
pub const HTTP_BIND_ADDR: &str = formatcp!("{}:{}", HTTP_HOST, HTTP_PORT);

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// The status page embeds the request time and /health reports liveness of this
// exact instance, so neither may be served from an upstream cache.

pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Version
// =============================================================================

/// Environment variable holding the displayed version string
pub const VERSION_ENV_VAR: &str = "VERSION";

/// Version shown when `VERSION` is unset or empty
pub const DEFAULT_VERSION: &str = "dev";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Template name of the status page
pub const INDEX_TEMPLATE: &str = "index.html";

/// Application title shown on the status page
pub const APP_TITLE: &str = "Talos Demo App";

/// Status line shown on the status page
pub const STATUS_MESSAGE: &str = "BGP LoadBalancer Working";

/// Body returned by the liveness probe
pub const HEALTH_BODY: &str = "OK";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "talos_demo=info";

/// Runtime configuration; the listener address is fixed at [`HTTP_BIND_ADDR`].
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Version string displayed on the status page
    pub version: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    ///
    /// An unset or empty `VERSION` falls back to [`DEFAULT_VERSION`]. Any other
    /// value, including whitespace, is used verbatim.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = lookup(VERSION_ENV_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        Self { version }
    }

    /// Configuration with an explicit version, used where no environment applies.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}
