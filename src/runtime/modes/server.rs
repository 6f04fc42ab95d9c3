//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::Compress,
    web,
};
use anyhow::Result;
use tracing::{info, warn};

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{AppStartTime, frontend_routes, health_routes, shorturl_routes};
use crate::config::{CorsConfig, get_config};
use crate::runtime::lifetime;

/// Build CORS middleware from configuration
fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    // 未启用时使用浏览器默认的同源策略
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(cors_config.max_age as usize);

    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Run the HTTP server
///
/// This function:
/// 1. Records startup time
/// 2. Connects storage and assembles services
/// 3. Configures and starts the HTTP server
/// 4. Stops gracefully on a shutdown signal and releases the storage pool
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {}", e.format_simple());
            anyhow::anyhow!(e)
        })?;

    let storage = startup.storage.clone();
    let shorturl_service = startup.shorturl_service.clone();

    let config = get_config();
    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let cors_config = config.cors.clone();
    if cors_config.enabled && cors_config.allowed_origins.is_empty() {
        warn!("CORS enabled but allowed_origins is empty; no cross-origin requests will be allowed");
    }

    let server_storage = storage.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .app_data(web::Data::new(server_storage.clone()))
            .app_data(web::Data::new(shorturl_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(64 * 1024))
            .service(shorturl_routes())
            .service(health_routes())
            .service(frontend_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(cpu_count)
    .disable_signals();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();

    // 收到信号后停止接收新请求，等待进行中的请求完成
    let handle = server.handle();
    tokio::spawn(async move {
        lifetime::shutdown::wait_for_signal().await;
        handle.stop(true).await;
    });

    server.await?;
    info!("HTTP server stopped");

    lifetime::shutdown::release_resources(&storage).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::test::{self, TestRequest};
    use actix_web::{App, HttpResponse};

    #[actix_web::test]
    async fn test_cors_allows_any_origin_by_default() {
        let cors_config = CorsConfig::default();
        let app = test::init_service(
            App::new()
                .wrap(build_cors_middleware(&cors_config))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://client.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
