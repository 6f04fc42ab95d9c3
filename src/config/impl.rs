use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (or "config.toml" in the current
/// directory), then applies environment overrides. Missing files fall back
/// to in-memory defaults. Only the first call has any effect.
///
/// # Examples
/// ```no_run
/// use shorturl::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)));
}

/// Initialize the global configuration from an already built value.
///
/// Used by tests and embedders that don't want file or environment lookup.
pub fn init_config_with(config: StaticConfig) {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(config));
}
