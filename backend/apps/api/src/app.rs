//! HTTP application assembly

use std::sync::Arc;

use auth::{AuthAppState, PgAuthRepository, auth_router};
use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use typing::{PgTypingResultRepository, typing_router};

use crate::config::ApiConfig;

/// Auth under `/auth`, typing routes at the root
pub fn build_router(pool: PgPool, config: &ApiConfig) -> Router {
    let auth_state = AuthAppState::new(
        Arc::new(PgAuthRepository::new(pool.clone())),
        Arc::new(config.auth.clone()),
    );
    let results = Arc::new(PgTypingResultRepository::new(pool));

    Router::new()
        .route("/", get(root))
        .nest("/auth", auth_router(auth_state.clone()))
        .merge(typing_router(results, config.typing.clone(), auth_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors(&config.frontend_origins))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Typing Speed API Running" }))
}

fn cors(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
