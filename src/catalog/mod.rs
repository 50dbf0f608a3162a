//! Catalog
//!
//! The menu: a seed list of pizzas embedded in the binary, plus any pizzas appended through
//! the "add to menu" flow. Products are never updated or deleted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::products::Product;

mod new_product;
pub mod query;

pub use new_product::{DEFAULT_IMAGE_URL, MAX_PRICE, MIN_PRICE, NewProduct};
pub use query::{MenuQuery, SortOrder};

const SEED_MENU: &str = include_str!("menu.yml");

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The seed menu could not be parsed.
    #[error("Failed to parse menu: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A new product had a blank name.
    #[error("Name is required")]
    MissingName,

    /// A new product was priced below the menu minimum.
    #[error("Price must be at least {minimum}, got {price}")]
    PriceTooLow {
        /// Lowest allowed base price
        minimum: Decimal,
        /// Price that was supplied
        price: Decimal,
    },

    /// A new product was priced above the menu maximum.
    #[error("Price must be at most {maximum}, got {price}")]
    PriceTooHigh {
        /// Highest allowed base price
        maximum: Decimal,
        /// Price that was supplied
        price: Decimal,
    },

    /// A new product's price had fractions of a cent.
    #[error("Price must be in whole cents, got {0}")]
    PriceNotInCents(Decimal),

    /// A new product had no ingredients.
    #[error("Select at least one ingredient")]
    NoIngredients,

    /// A new product's image reference was not an http(s) URL.
    #[error("Must be a valid URL: {0}")]
    InvalidImageUrl(String),

    /// A product with the same id is already on the menu.
    #[error("Product {0} already exists")]
    DuplicateId(String),
}

/// Menu of products in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "pizzas")]
    products: Vec<Product>,
}

impl Catalog {
    /// The built-in menu.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Yaml`] if the embedded menu cannot be parsed.
    pub fn seed() -> Result<Self, CatalogError> {
        Ok(serde_norway::from_str(SEED_MENU)?)
    }

    /// Create a catalog from a list of products.
    pub fn from_products(products: impl Into<Vec<Product>>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Find a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Validate a new product and append it to the menu.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the product fails validation or its id is taken.
    pub fn add(&mut self, new_product: NewProduct) -> Result<&Product, CatalogError> {
        let product = new_product.validate()?;

        self.insert(product)
    }

    /// Append an already-built product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the id is already on the menu.
    pub fn insert(&mut self, product: Product) -> Result<&Product, CatalogError> {
        if self.get(&product.id).is_some() {
            return Err(CatalogError::DuplicateId(product.id));
        }

        info!(id = %product.id, name = %product.name, "added product to menu");

        self.products.push(product);

        let Some(product) = self.products.last() else {
            unreachable!("a product was just pushed")
        };

        Ok(product)
    }

    /// Products matching the query, in the query's order.
    pub fn query(&self, query: &MenuQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }

    /// Iterate over the products.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
