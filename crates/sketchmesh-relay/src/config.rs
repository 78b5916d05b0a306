//! Relay configuration from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

/// Base URL of the mesh-generation service.
pub const DEFAULT_UPSTREAM: &str = "http://localhost:8000";

/// Status poll cadence for the job watcher.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Relay settings.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Mesh-service base URL, no trailing slash.
    pub upstream_base: String,
    /// Address the relay listens on.
    pub bind: SocketAddr,
    /// Fixed interval between job-status polls.
    pub poll_interval: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_base: DEFAULT_UPSTREAM.to_string(),
            bind: SocketAddr::from(([0, 0, 0, 0], 4000)),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl RelayConfig {
    /// Read `SKETCHMESH_UPSTREAM`, `SKETCHMESH_BIND` and
    /// `SKETCHMESH_POLL_MS`, falling back to defaults for unset or
    /// unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let upstream_base = std::env::var("SKETCHMESH_UPSTREAM")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.upstream_base);
        let bind = std::env::var("SKETCHMESH_BIND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bind);
        let poll_interval = std::env::var("SKETCHMESH_POLL_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);
        Self {
            upstream_base,
            bind,
            poll_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.upstream_base, "http://localhost:8000");
        assert_eq!(config.bind.port(), 4000);
        assert_eq!(config.poll_interval, Duration::from_secs(2));
    }
}
