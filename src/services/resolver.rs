//! Hostname resolution
//!
//! A submitted URL is only accepted when its host resolves to at least one
//! address. Every failure (NXDOMAIN, timeout, network error) collapses to
//! `false`; the cause is logged, not returned.

use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait HostResolver: Send + Sync {
    /// `true` if `hostname` resolves to at least one address.
    async fn resolves(&self, hostname: &str) -> bool;
}

/// Resolver backed by the operating system (`getaddrinfo`).
///
/// No timeout is layered on top; the system resolver's own timeout applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolves(&self, hostname: &str) -> bool {
        match tokio::net::lookup_host((hostname, 0)).await {
            Ok(mut addrs) => {
                let first = addrs.next();
                debug!("Resolved {} -> {:?}", hostname, first.map(|a| a.ip()));
                first.is_some()
            }
            Err(e) => {
                debug!("Failed to resolve {}: {}", hostname, e);
                false
            }
        }
    }
}
