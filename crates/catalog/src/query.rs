//! Read-only queries over a [`Catalog`].
//!
//! Both operations are pure: they borrow the catalog and return owned
//! results, so repeated calls with the same arguments always agree.

use serde::Deserialize;

use market_core::{DomainError, DomainResult, ProductId};

use crate::catalog::Catalog;
use crate::product::Product;

/// Optional list filters. Unset fields do not filter; set fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// An empty category string counts as "no category filter".
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match self.category.as_deref() {
            Some(c) if !c.is_empty() => product.is_in_category(c),
            _ => true,
        };
        let stock_ok = self.in_stock.is_none_or(|s| product.in_stock() == s);
        category_ok && stock_ok
    }
}

/// Products matching `filter`, in catalog order. Never fails.
pub fn list(catalog: &Catalog, filter: &ProductFilter) -> Vec<Product> {
    catalog
        .products()
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Look up a product by exact id.
pub fn get_by_id(catalog: &Catalog, id: ProductId) -> DomainResult<Product> {
    catalog
        .products()
        .iter()
        .find(|p| p.id() == id)
        .cloned()
        .ok_or_else(DomainError::not_found)
}
