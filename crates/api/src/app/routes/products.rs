use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
    routing::get,
};

use market_catalog::Product;
use market_core::ProductId;

use crate::app::dto::ListProductsQuery;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:product_id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(pairs) = query.map_err(|e| {
        ApiError::validation("query", "query_string", "query_parsing", e.body_text())
    })?;
    let filter = ListProductsQuery::from_pairs(pairs).into_filter()?;

    let items = services.products_list(&filter);
    tracing::debug!(
        category = filter.category.as_deref(),
        in_stock = filter.in_stock,
        count = items.len(),
        "listed products"
    );
    Ok(Json(items))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    product_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(product_id) = product_id.map_err(|e| {
        ApiError::validation("path", "product_id", "int_parsing", e.body_text())
    })?;
    let id: ProductId = product_id.parse()?;
    let product = services.products_get(id).inspect_err(|_| {
        tracing::debug!(%id, "product not found");
    })?;
    Ok(Json(product))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::app::{build_app, services::AppServices};

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = build_app(AppServices::sample());
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn list_returns_all_products() {
        let (status, body) = get("/products").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn list_filters_by_category_and_stock() {
        let (status, body) = get("/products?category=dairy&in_stock=true").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![3, 6]);
    }

    #[tokio::test]
    async fn list_rejects_non_boolean_stock_flag() {
        let (status, body) = get("/products?in_stock=maybe").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"][1], "in_stock");
    }

    #[tokio::test]
    async fn get_missing_product_is_404() {
        let (status, body) = get("/products/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Product not found");
    }

    #[tokio::test]
    async fn list_keeps_last_value_of_repeated_keys() {
        let (status, body) = get("/products?category=Bakery&category=fruits").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Fresh Apples", "Organic Bananas"]);
    }

    #[tokio::test]
    async fn get_with_out_of_range_id_is_404() {
        let (status, body) = get("/products/99999999999999999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Product not found");
    }

    #[tokio::test]
    async fn get_with_non_utf8_id_is_422() {
        let (status, body) = get("/products/%FF").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], serde_json::json!(["path", "product_id"]));
        assert_eq!(body["detail"][0]["type"], "int_parsing");
    }

    #[tokio::test]
    async fn get_with_non_integer_id_is_422() {
        let (status, body) = get("/products/invalid").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"][1], "product_id");
        assert_eq!(body["detail"][0]["type"], "int_parsing");
    }
}
