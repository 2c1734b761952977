//! # Ordering Module
//!
//! Equality and a total weak order for [`GroceryItem`].
//!
//! ## Sort Key
//! ```text
//! upc_code ──► product_name ──► brand_name ──► price (within PRICE_EPSILON = Equal)
//! ```
//!
//! Equality checks the same four fields, price first since it is the cheapest
//! test. Both sides use [`approx_eq`] for the price, so
//! `a == b` holds exactly when `a.cmp(&b) == Ordering::Equal`.
//!
//! The order is weak: `"UPC", 9.99999` and `"UPC", 10.00001` are equivalent
//! without being identical. Tolerance equality is not transitive, so a chain
//! of prices each within epsilon of the next can still sort apart at the ends.
//!
//! A `NaN` price is outside the `Eq`/`Ord` contract: such an item is not equal
//! to itself and compares `Greater` against itself.
//!
//! `Hash` is not implemented; no hash function can agree with a tolerance.

use std::cmp::Ordering;

use crate::item::GroceryItem;
use crate::tolerance::approx_eq;

impl PartialEq for GroceryItem {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.price, other.price)
            && self.upc_code == other.upc_code
            && self.brand_name == other.brand_name
            && self.product_name == other.product_name
    }
}

impl Eq for GroceryItem {}

impl PartialOrd for GroceryItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroceryItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.upc_code
            .cmp(&other.upc_code)
            .then_with(|| self.product_name.cmp(&other.product_name))
            .then_with(|| self.brand_name.cmp(&other.brand_name))
            .then_with(|| compare_price(self.price, other.price))
    }
}

/// Never `partial_cmp` on the raw floats: that is finer than [`approx_eq`].
fn compare_price(lhs: f64, rhs: f64) -> Ordering {
    if approx_eq(lhs, rhs) {
        Ordering::Equal
    } else if lhs < rhs {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Same as `a == b`.
#[inline]
pub fn equals(a: &GroceryItem, b: &GroceryItem) -> bool {
    a == b
}

/// Same as `a.cmp(b)`.
///
/// ## Example
/// ```rust
/// use std::cmp::Ordering;
/// use grocery_core::{ordering::compare, GroceryItem};
///
/// let cheap_b = GroceryItem::new("B", "", "", 1.0);
/// let pricey_a = GroceryItem::new("A", "", "", 100.0);
/// assert_eq!(compare(&pricey_a, &cheap_b), Ordering::Less);
/// ```
#[inline]
pub fn compare(a: &GroceryItem, b: &GroceryItem) -> Ordering {
    a.cmp(b)
}

// =============================================================================
// Unit Tests
// =============================================================================
