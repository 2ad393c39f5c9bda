//! Product and cart item models.

use serde::{Deserialize, Serialize};

use auramart_core::{Price, ProductCategory, ProductId};

/// A purchasable product.
///
/// Products come from the fixed seed catalog and are never mutated at
/// runtime. The id doubles as a recency key for "new arrivals" ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id, numeric-sortable by recency.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Short marketing description.
    pub description: String,
    /// Image reference (URL or asset path).
    pub image_url: String,
    /// Category the product belongs to.
    pub category: ProductCategory,
}

/// A cart entry: a product plus a quantity.
///
/// The ledger holds at most one entry per product id, and `quantity` is
/// always at least 1 (removal is explicit, never quantity zero).
///
/// Product fields are denormalized into the entry, matching the persisted
/// cart record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product this entry refers to.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units, >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create an entry for a single unit of `product`.
    #[must_use]
    pub fn single(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price x quantity for this entry, before tax.
    #[must_use]
    pub fn line_total(&self) -> rust_decimal::Decimal {
        self.product.price.times(self.quantity)
    }
}
