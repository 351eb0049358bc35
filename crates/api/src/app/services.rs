use market_catalog::{Catalog, Product, ProductFilter};
use market_core::{DomainResult, ProductId};

/// Read-only services backing the HTTP handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppServices {
    catalog: &'static Catalog,
}

impl AppServices {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    /// Services over the built-in sample catalog.
    pub fn sample() -> Self {
        Self::new(Catalog::sample())
    }

    pub fn products_list(&self, filter: &ProductFilter) -> Vec<Product> {
        market_catalog::list(self.catalog, filter)
    }

    pub fn products_get(&self, id: ProductId) -> DomainResult<Product> {
        market_catalog::get_by_id(self.catalog, id)
    }
}
