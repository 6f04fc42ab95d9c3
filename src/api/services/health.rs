use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use crate::storage::SeaOrmStorage;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub storage_type: String,
    pub records: Option<u64>,
    pub error: Option<String>,
    pub response_time_ms: u32,
}

/// Health Service
///
/// 直接查询 storage 的 count，不经过业务层。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        storage: web::Data<Arc<SeaOrmStorage>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let (records, error) =
            match tokio::time::timeout(Duration::from_secs(5), storage.count()).await {
                Ok(Ok(count)) => (Some(count), None),
                Ok(Err(e)) => {
                    error!("Storage health check failed: {}", e);
                    (None, Some(format!("database error: {}", e.message())))
                }
                Err(_) => {
                    error!("Storage health check timeout");
                    (None, Some("timeout".to_string()))
                }
            };

        let now = chrono::Utc::now();
        let is_healthy = error.is_none();

        let body = HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            timestamp: now.to_rfc3339(),
            uptime: (now - app_start_time.start_datetime).num_seconds().max(0) as u64,
            storage_type: storage.get_backend_config().storage_type,
            records,
            error,
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        if is_healthy {
            HttpResponse::Ok().json(body)
        } else {
            HttpResponse::ServiceUnavailable().json(body)
        }
    }
}

pub fn health_routes() -> actix_web::Resource {
    web::resource("/health")
        .route(web::get().to(HealthService::health_check))
        .route(web::head().to(HealthService::health_check))
}
