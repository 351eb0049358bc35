use axum::Json;

use crate::app::dto::{EndpointIndex, HealthResponse, RootResponse};
use crate::app::{API_TITLE, openapi};

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {API_TITLE}"),
        endpoints: EndpointIndex {
            list_products: "/products",
            product_details: "/products/{product_id}",
            api_docs: "/openapi.json",
        },
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "API is running properly",
    })
}

pub async fn openapi() -> Json<serde_json::Value> {
    Json(openapi::openapi_spec())
}
