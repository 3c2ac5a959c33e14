//! Server mode
//!
//! Builds the actix-web application and runs it until a shutdown signal
//! arrives, then releases the database connection.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::api::services::api_scope;
use crate::config::{CorsConfig, StaticConfig};
use crate::runtime::lifetime;

/// 启动时检查 CORS 配置（只执行一次，不在每个 worker 中重复）
fn validate_cors_config(cors_config: &CorsConfig) {
    if !cors_config.enabled {
        info!("CORS disabled, only same-origin requests are allowed");
        return;
    }

    if cors_config.allowed_origins.is_empty() {
        warn!(
            "CORS enabled but allowed_origins is empty. \
            No cross-origin requests will be allowed."
        );
    }

    let is_any_origin = cors_config.allowed_origins.iter().any(|o| o == "*");
    if is_any_origin && cors_config.allow_credentials {
        warn!(
            "CORS allows any origin with credentials: the request Origin is echoed back \
            instead of '*'. Restrict cors.allowed_origins for production deployments."
        );
    }
}

/// Build CORS middleware from configuration
pub fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
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

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

/// Run the HTTP server
///
/// **Note**: Logging must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let game_service = web::Data::from(startup.game_service.clone());
    let stats_service = web::Data::from(startup.stats_service.clone());
    let status_service = web::Data::from(startup.status_service.clone());

    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let api_prefix = config.server.api_prefix.clone();
    let workers = config.server.workers.max(1);
    warn!("Using {} workers for the server", workers);

    let server = HttpServer::new(move || {
        let cors = build_cors_middleware(&cors_config);

        App::new()
            .wrap(TimingMiddleware) // 在 request span 内记录延迟
            .wrap(RequestIdMiddleware)
            .wrap(cors)
            .wrap(Compress::default())
            .app_data(game_service.clone())
            .app_data(stats_service.clone())
            .app_data(status_service.clone())
            .service(api_scope(&api_prefix))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    warn!(
        "Starting server at http://{}{}",
        bind_address, config.server.api_prefix
    );

    // actix 负责 SIGINT/SIGTERM，优雅停止后才会返回
    let result = server.run().await;

    lifetime::shutdown::perform_shutdown(&storage).await;

    result.context("HTTP server terminated with an error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::HttpResponse;
    use actix_web::http::header::{self, HeaderMap};
    use actix_web::http::{Method, StatusCode};
    use actix_web::test::{self, TestRequest};

    async fn preflight(cors_config: CorsConfig, origin: &str) -> (StatusCode, HeaderMap) {
        let app = test::init_service(
            App::new()
                .wrap(build_cors_middleware(&cors_config))
                .route("/api/games", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/games")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        (resp.status(), resp.headers().clone())
    }

    #[actix_rt::test]
    async fn test_default_cors_echoes_origin_with_credentials() {
        let (status, headers) = preflight(CorsConfig::default(), "http://localhost:3000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[actix_rt::test]
    async fn test_restricted_origins_reject_others() {
        let cors_config = CorsConfig {
            allowed_origins: vec!["https://games.example.com".to_string()],
            ..Default::default()
        };
        let (_, headers) = preflight(cors_config, "https://evil.example.com").await;
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
