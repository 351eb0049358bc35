//! HTTP application wiring (axum router + service wiring).
//!
//! - `services.rs`: the catalog handle shared by handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query parameters and response bodies
//! - `errors.rs`: consistent error responses
//! - `openapi.rs`: the served API description

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod openapi;
pub mod routes;
pub mod services;

pub const API_TITLE: &str = "Market Products API";
pub const API_DESCRIPTION: &str = "A simple API for managing market products";
pub const API_VERSION: &str = "1.0.0";

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: services::AppServices) -> Router {
    routes::router()
        .layer(Extension(Arc::new(services)))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_context)))
}
