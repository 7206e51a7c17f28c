//! Product domain model.
//!
//! # Responsibility
//! - Define the record shape shared by repository and service layers.
//! - Provide the price validation used at registration time.
//!
//! # Invariants
//! - `id` is `None` until the repository persists the record; after a
//!   successful insert it carries the database-assigned key.
//! - `price >= 0` is checked once, at registration, in the service layer.
//!   Update paths do not re-validate.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned product key (SQLite rowid domain).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProductId = i64;

/// Canonical product record.
///
/// Serde field names follow the external schema's column names, so a
/// serialized product matches the `produto` table shape byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Database-assigned key. `None` for records not yet saved.
    pub id: Option<ProductId>,
    /// Display name. Serialized as `nome` to match external schema naming.
    #[serde(rename = "nome")]
    pub name: String,
    /// Unit price. Must be >= 0 at registration time.
    #[serde(rename = "preco")]
    pub price: f64,
    /// Units in stock.
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    /// Free-form category label.
    #[serde(rename = "categoria")]
    pub category: String,
}

/// Business-rule violations detected by `Product::validate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductValidationError {
    /// Price is below zero.
    NegativePrice { price: f64 },
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativePrice { price } => {
                write!(f, "product price must not be negative, got {price}")
            }
        }
    }
}

impl Error for ProductValidationError {}

impl Product {
    /// Creates an unsaved product record.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        }
    }

    /// Checks the registration business rule.
    ///
    /// # Errors
    /// - `NegativePrice` when `price < 0`. Zero is a valid price.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.price < 0.0 {
            return Err(ProductValidationError::NegativePrice { price: self.price });
        }
        Ok(())
    }

    /// Returns whether the record has been persisted.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}
