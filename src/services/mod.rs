//! Business logic services
//!
//! - `resolver`: hostname resolution behind the `HostResolver` trait
//! - `shorturl_service`: validate → resolve → store, and lookups

pub mod resolver;
pub mod shorturl_service;

pub use resolver::{HostResolver, SystemResolver};
pub use shorturl_service::ShortUrlService;
