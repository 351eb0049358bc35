use serde_json::json;

use crate::app::{API_DESCRIPTION, API_TITLE, API_VERSION};

/// OpenAPI 3 description of the public routes.
pub fn openapi_spec() -> serde_json::Value {
    let product_ref = json!({ "$ref": "#/components/schemas/Product" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": API_VERSION
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "API information",
                    "responses": { "200": { "description": "Welcome message and endpoint index" } }
                }
            },
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": { "200": { "description": "Service is healthy" } }
                }
            },
            "/products": {
                "get": {
                    "summary": "List products",
                    "parameters": [
                        {
                            "name": "category",
                            "in": "query",
                            "required": false,
                            "description": "Filter by product category (case-insensitive)",
                            "schema": { "type": "string" }
                        },
                        {
                            "name": "in_stock",
                            "in": "query",
                            "required": false,
                            "description": "Filter by stock availability",
                            "schema": { "type": "boolean" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Matching products in catalog order",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": product_ref.clone() }
                                }
                            }
                        },
                        "422": { "description": "Validation error" }
                    }
                }
            },
            "/products/{product_id}": {
                "get": {
                    "summary": "Get product details",
                    "parameters": [
                        {
                            "name": "product_id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "The product",
                            "content": { "application/json": { "schema": product_ref } }
                        },
                        "404": { "description": "Product not found" },
                        "422": { "description": "Validation error" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Product": {
                    "type": "object",
                    "required": ["id", "name", "category", "price", "description", "in_stock"],
                    "properties": {
                        "id": { "type": "integer" },
                        "name": { "type": "string" },
                        "category": { "type": "string" },
                        "price": { "type": "number" },
                        "description": { "type": "string" },
                        "in_stock": { "type": "boolean" }
                    }
                }
            }
        }
    })
}
