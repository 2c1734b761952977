//! # grocery-core: Grocery Item Value Type
//!
//! One value type, [`GroceryItem`], with tolerance-aware equality, a total
//! weak ordering, and a quoted single-line text codec.
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     grocery-core (THIS CRATE)                           │
//! │                                                                         │
//! │   ┌───────────┐      ┌───────────┐      ┌───────────┐                   │
//! │   │ tolerance │ ───► │ ordering  │      │   codec   │ ◄── scanner       │
//! │   │ approx_eq │      │ ==, cmp   │      │ encode    │     CharSource    │
//! │   └───────────┘      └─────┬─────┘      │ decode    │                   │
//! │                            │            └─────┬─────┘                   │
//! │                            └──────┬───────────┘                         │
//! │                                   ▼                                     │
//! │                             ┌───────────┐                               │
//! │                             │   item    │  GroceryItem                  │
//! │                             └───────────┘                               │
//! │                                                                         │
//! │   NO I/O • the caller owns every stream                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The `GroceryItem` type, accessors and setters
//! - [`tolerance`] - Approximate price equality
//! - [`ordering`] - `PartialEq`/`Eq`/`PartialOrd`/`Ord`
//! - [`codec`] - Text line encoding and decoding
//! - [`scanner`] - Character source used by the decoder
//! - [`error`] - Codec error types
//!
//! ## Example Usage
//!
//! ```rust
//! use grocery_core::GroceryItem;
//!
//! let item = GroceryItem::new(
//!     "00034000020706",
//!     "York",
//!     "York Peppermint Patties Dark Chocolate Covered Snack Size",
//!     12.64,
//! );
//!
//! let line = item.to_string();
//! let back: GroceryItem = line.parse().unwrap();
//! assert_eq!(back, item);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod item;
pub mod ordering;
pub mod scanner;
pub mod tolerance;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CodecError, CodecResult, Field};
pub use item::GroceryItem;
pub use scanner::{CharSource, StrScanner};
pub use tolerance::{approx_eq, approx_eq_with};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Two prices closer than this are the same price.
///
/// ## Why 1e-4?
/// Prices carry two, maybe three decimal places. A tenth of a hundredth of a
/// cent is well below anything meaningful and well above `f64` rounding noise
/// at grocery-scale values.
pub const PRICE_EPSILON: f64 = 1e-4;

/// Separator written between fields of an encoded line: a comma and two spaces.
///
/// The reader accepts any whitespace around the comma.
pub const FIELD_DELIMITER: &str = ",  ";
