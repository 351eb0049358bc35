use serde::Serialize;

use market_catalog::ProductFilter;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Raw `/products` query parameters. Values stay strings so that a bad
/// `in_stock` becomes a 422 naming the field instead of a generic rejection.
#[derive(Debug, Default)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub in_stock: Option<String>,
}

impl ListProductsQuery {
    /// Collect known keys from decoded query pairs. A repeated key keeps
    /// its last value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "category" => query.category = Some(value),
                "in_stock" => query.in_stock = Some(value),
                _ => {}
            }
        }
        query
    }

    pub fn into_filter(self) -> Result<ProductFilter, ApiError> {
        let in_stock = self
            .in_stock
            .as_deref()
            .map(|raw| {
                parse_bool(raw).ok_or_else(|| {
                    ApiError::validation(
                        "query",
                        "in_stock",
                        "bool_parsing",
                        format!("Input should be a valid boolean, unable to interpret `{raw}`"),
                    )
                })
            })
            .transpose()?;

        Ok(ProductFilter {
            category: self.category,
            in_stock,
        })
    }
}

/// Lenient boolean parsing for query strings.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub endpoints: EndpointIndex,
}

#[derive(Debug, Serialize)]
pub struct EndpointIndex {
    pub list_products: &'static str,
    pub product_details: &'static str,
    pub api_docs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}
