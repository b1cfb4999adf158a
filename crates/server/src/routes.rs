use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::product::{repository::SeaOrmProductRepository, service::ProductService};

use crate::openapi::ApiDoc;

pub mod products;

/// Shared handler state: the product service is the only seam the HTTP
/// surface talks to.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<ProductService<SeaOrmProductRepository>>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route("/products/categories", get(products::categories))
        .route(
            "/products/:id",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // span per request with method and path, INFO level
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and friends logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
