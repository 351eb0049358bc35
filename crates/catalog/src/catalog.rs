use std::collections::HashSet;
use std::sync::OnceLock;

use market_core::{DomainError, DomainResult};

use crate::product::Product;
use crate::sample;

/// Immutable, ordered collection of products.
///
/// There is no mutation path: a catalog is built once and only ever read,
/// so it can be shared across request handlers without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

static SAMPLE: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Fails if two products share an id.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products })
    }

    /// The process-wide sample catalog, initialised on first use.
    pub fn sample() -> &'static Catalog {
        SAMPLE.get_or_init(|| {
            let products = sample::products();
            tracing::debug!(count = products.len(), "sample catalog initialised");
            Catalog { products }
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(Product::category)
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::ProductId;

    fn product(id: i64, category: &str) -> Product {
        Product::new(ProductId::new(id), "Item", category, 1.0, "An item", true).unwrap()
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, "A"), product(2, "B"), product(1, "C")]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn new_keeps_insertion_order() {
        let catalog = Catalog::new(vec![product(3, "A"), product(1, "B"), product(2, "C")]).unwrap();
        let ids: Vec<i64> = catalog.products().iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn sample_holds_eight_products() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());
        assert!(std::ptr::eq(catalog, Catalog::sample()));
    }

    #[test]
    fn sample_satisfies_record_and_catalog_invariants() {
        let catalog = Catalog::sample();
        for p in catalog.products() {
            let rebuilt = Product::new(
                p.id(),
                p.name(),
                p.category(),
                p.price(),
                p.description(),
                p.in_stock(),
            )
            .unwrap();
            assert_eq!(&rebuilt, p);
        }
        let revalidated = Catalog::new(catalog.products().to_vec()).unwrap();
        assert_eq!(&revalidated, catalog);
    }

    #[test]
    fn sample_categories_are_the_expected_set() {
        let categories = Catalog::sample().categories();
        assert_eq!(
            categories,
            vec!["Fruits", "Dairy", "Bakery", "Meat", "Seafood", "Vegetables"]
        );
    }

    #[test]
    fn sample_has_both_stock_states() {
        let products = Catalog::sample().products();
        assert!(products.iter().any(|p| p.in_stock()));
        assert!(products.iter().any(|p| !p.in_stock()));
    }
}
