pub mod frontend;
pub mod health;
pub mod shorturl;

pub use frontend::{FrontendService, frontend_routes};
pub use health::{AppStartTime, HealthService, health_routes};
pub use shorturl::{ShortUrlApi, shorturl_routes};
