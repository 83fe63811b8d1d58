//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, systemd, and load balancers to decide whether this
//! instance should receive traffic.

use crate::config::HEALTH_BODY;

/// Health check handler.
///
/// Returns "OK" for any method. This is a liveness probe: it only checks that
/// the process can respond to HTTP and performs no downstream checks.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
