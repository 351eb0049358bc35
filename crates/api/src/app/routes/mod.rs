use axum::{Router, routing::get};

pub mod products;
pub mod system;

/// Router for every public endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/openapi.json", get(system::openapi))
        .merge(products::router())
}
