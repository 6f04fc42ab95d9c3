//! Short URL service
//!
//! Shared business logic behind the HTTP handlers: a submission is
//! validated, its host resolved, then stored; lookups go straight to storage.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::errors::{Result, ShortUrlError};
use crate::services::HostResolver;
use crate::storage::{SeaOrmStorage, ShortUrlRecord};
use crate::utils::validate_url;

/// Service for short URL operations
pub struct ShortUrlService {
    storage: Arc<SeaOrmStorage>,
    resolver: Arc<dyn HostResolver>,
}

impl ShortUrlService {
    pub fn new(storage: Arc<SeaOrmStorage>, resolver: Arc<dyn HostResolver>) -> Self {
        Self { storage, resolver }
    }

    /// Validate, resolve and store `input`
    ///
    /// # Errors
    /// * `InvalidUrl` - `input` is not an absolute URL with a host
    /// * `UnresolvableHost` - the host has no address
    /// * storage errors when the record cannot be written
    #[instrument(name = "Service: submit url", skip(self))]
    pub async fn submit(&self, input: &str) -> Result<ShortUrlRecord> {
        let hostname = validate_url(input).map_err(|e| {
            debug!("Rejected submission: {}", e);
            ShortUrlError::from(e)
        })?;

        if !self.resolver.resolves(&hostname).await {
            debug!("Host did not resolve: {}", hostname);
            return Err(ShortUrlError::unresolvable_host(hostname));
        }

        let record = self.storage.create(input).await?;
        info!(short_url = record.id, "Created short URL for {}", record.original_url);
        Ok(record)
    }

    /// Look up a record by its short id
    pub async fn lookup(&self, id: i64) -> Result<Option<ShortUrlRecord>> {
        self.storage.lookup(id).await
    }

    /// Total number of stored records
    pub async fn count(&self) -> Result<u64> {
        self.storage.count().await
    }
}
