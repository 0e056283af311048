use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::state::AppState;
use crate::system::middleware::request_logger;

/// Конфигурация всех роутов приложения
///
/// Всё, что не попало в API, отдаётся из каталога сборки фронтенда; пути
/// клиентского роутера (`/filials/3` и т.п.) получают `index.html`.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/site-config",
            get(handlers::site_config::get_site_config),
        )
        .fallback_service(spa)
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
