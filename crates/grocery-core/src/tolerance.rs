//! # Tolerance Module
//!
//! Approximate equality for prices.
//!
//! ## Why Not `==`?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 == 0.3          → false  ❌                                │
//! │    approx_eq(0.1 + 0.2, 0.3) → true   ✅                                │
//! │                                                                         │
//! │  Prices carry two, maybe three decimal places, so two prices within    │
//! │  PRICE_EPSILON (0.0001) of each other are the same price.              │
//! │                                                                         │
//! │  Equality AND ordering of GroceryItem both call approx_eq, so they     │
//! │  can never disagree about whether two prices match.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::PRICE_EPSILON;

/// Returns true when `lhs` and `rhs` are within [`PRICE_EPSILON`] of each other.
///
/// ## Example
/// ```rust
/// use grocery_core::tolerance::approx_eq;
///
/// assert!(approx_eq(10.00000, 10.00009));
/// assert!(!approx_eq(10.00000, 10.0002));
/// ```
#[inline]
pub fn approx_eq(lhs: f64, rhs: f64) -> bool {
    approx_eq_with(lhs, rhs, PRICE_EPSILON)
}

/// Returns true when `|lhs - rhs| < epsilon`.
///
/// The bound is strict. `NaN` on either side is never equal to anything.
#[inline]
pub fn approx_eq_with(lhs: f64, rhs: f64, epsilon: f64) -> bool {
    (lhs - rhs).abs() < epsilon
}

// =============================================================================
// Unit Tests
// =============================================================================
