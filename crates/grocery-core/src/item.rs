//! # Grocery Item
//!
//! The `GroceryItem` value type: four fields behind accessors and chaining
//! setters.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────┐
//! │        GroceryItem          │
//! │  ─────────────────────────  │
//! │  upc_code      String       │  identifier, uniqueness not enforced
//! │  brand_name    String       │
//! │  product_name  String       │
//! │  price         f64          │  non-negative by convention only
//! └─────────────────────────────┘
//! ```
//!
//! Equality and ordering live in [`crate::ordering`], the line format in
//! [`crate::codec`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Grocery Item
// =============================================================================

/// A retail grocery item.
///
/// `PartialEq`/`Ord` are hand-written (see [`crate::ordering`]) because the
/// price compares with a tolerance. Do not add them to the derive list.
///
/// ## Example
/// ```rust
/// use grocery_core::GroceryItem;
///
/// let mut item = GroceryItem::new("00034000020706", "York", "Peppermint Patties", 12.64);
/// item.set_brand_name("Hershey").set_price(12.99);
///
/// assert_eq!(item.brand_name(), "Hershey");
/// assert_eq!(item.price(), 12.99);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroceryItem {
    pub(crate) upc_code: String,
    pub(crate) brand_name: String,
    pub(crate) product_name: String,
    pub(crate) price: f64,
}

impl GroceryItem {
    /// Creates an item from its four fields.
    ///
    /// Nothing is validated: empty codes and negative prices are accepted.
    /// Use [`GroceryItem::default`] for the all-empty, zero-price item.
    pub fn new(
        upc_code: impl Into<String>,
        brand_name: impl Into<String>,
        product_name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            upc_code: upc_code.into(),
            brand_name: brand_name.into(),
            product_name: product_name.into(),
            price,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn upc_code(&self) -> &str {
        &self.upc_code
    }

    #[inline]
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    // -------------------------------------------------------------------------
    // Move-extracting accessors
    // -------------------------------------------------------------------------

    /// Consumes the item and returns its UPC code without copying.
    pub fn into_upc_code(self) -> String {
        self.upc_code
    }

    /// Consumes the item and returns its brand name without copying.
    pub fn into_brand_name(self) -> String {
        self.brand_name
    }

    /// Consumes the item and returns its product name without copying.
    pub fn into_product_name(self) -> String {
        self.product_name
    }

    /// Consumes the item and returns `(upc_code, brand_name, product_name, price)`.
    pub fn into_parts(self) -> (String, String, String, f64) {
        (self.upc_code, self.brand_name, self.product_name, self.price)
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------
    // Each returns `&mut Self` so calls chain left to right.

    pub fn set_upc_code(&mut self, upc_code: impl Into<String>) -> &mut Self {
        self.upc_code = upc_code.into();
        self
    }

    pub fn set_brand_name(&mut self, brand_name: impl Into<String>) -> &mut Self {
        self.brand_name = brand_name.into();
        self
    }

    pub fn set_product_name(&mut self, product_name: impl Into<String>) -> &mut Self {
        self.product_name = product_name.into();
        self
    }

    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = price;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
