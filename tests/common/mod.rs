//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Once};

use async_trait::async_trait;
use shorturl::config::{StaticConfig, init_config_with};
use shorturl::services::{HostResolver, ShortUrlService};
use shorturl::storage::SeaOrmStorage;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn init_test_config() {
    INIT.call_once(|| {
        init_config_with(StaticConfig::default());
    });
}

/// Resolver that only knows a fixed set of hostnames
pub struct StaticResolver {
    hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolves(&self, hostname: &str) -> bool {
        self.hosts.contains(hostname)
    }
}

/// Fresh SQLite database in its own temp directory.
///
/// The returned `TempDir` must outlive the storage.
pub async fn fresh_storage() -> (TempDir, Arc<SeaOrmStorage>) {
    init_test_config();

    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("shorturl_test.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = SeaOrmStorage::new(&url, "sqlite").await.unwrap();
    (dir, Arc::new(storage))
}

pub fn known_hosts_resolver() -> Arc<dyn HostResolver> {
    Arc::new(StaticResolver::new(&[
        "www.example.com",
        "example.com",
        "freecodecamp.org",
        "127.0.0.1",
    ]))
}

pub async fn fresh_service() -> (TempDir, Arc<SeaOrmStorage>, Arc<ShortUrlService>) {
    let (dir, storage) = fresh_storage().await;
    let service = Arc::new(ShortUrlService::new(storage.clone(), known_hosts_resolver()));
    (dir, storage, service)
}
