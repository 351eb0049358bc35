use serde::{Deserialize, Serialize};

use market_core::{DomainError, DomainResult, ProductId};

/// A single market item.
///
/// Immutable once built. Deserialization goes through [`Product::new`], so a
/// record read from JSON obeys the same constraints as one built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: f64,
    description: String,
    in_stock: bool,
}

/// Raw wire shape, validated into a [`Product`].
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: i64,
    name: String,
    category: String,
    price: f64,
    description: String,
    in_stock: bool,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(
            ProductId::new(r.id),
            r.name,
            r.category,
            r.price,
            r.description,
            r.in_stock,
        )
    }
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        in_stock: bool,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();
        let description = description.into();

        if !id.is_positive() {
            return Err(DomainError::validation(format!("id must be positive, got {id}")));
        }
        ensure_non_empty("name", &name)?;
        ensure_non_empty("category", &category)?;
        ensure_non_empty("description", &description)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a positive amount, got {price}"
            )));
        }

        Ok(Self {
            id,
            name,
            category,
            price,
            description,
            in_stock,
        })
    }

    /// Builds a record from literal data that is known to be valid.
    pub(crate) fn trusted(
        id: i64,
        name: &str,
        category: &str,
        price: f64,
        description: &str,
        in_stock: bool,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_owned(),
            category: category.to_owned(),
            price,
            description: description.to_owned(),
            in_stock,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Case-insensitive category comparison.
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

fn ensure_non_empty(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}
