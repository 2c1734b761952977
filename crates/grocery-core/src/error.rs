//! # Error Types
//!
//! Error types for the grocery item text codec.
//!
//! ## Where Errors Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Fallible Operations                             │
//! │                                                                         │
//! │  GroceryItem::new, accessors, setters    → infallible                  │
//! │  ==, cmp, sort, BTreeSet insert          → infallible                  │
//! │  Display / encode                        → infallible                  │
//! │  decode / decode_from / FromStr          → CodecError (this file)      │
//! │                                                                         │
//! │  Flow: StrScanner stops at the bad char → CodecError → caller          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant records the byte offset where decoding stopped
//! 3. Errors are enum variants, never String

use std::fmt;

use thiserror::Error;

// =============================================================================
// Field
// =============================================================================

/// The record field a codec error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UpcCode,
    BrandName,
    ProductName,
    Price,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::UpcCode => "upc_code",
            Field::BrandName => "brand_name",
            Field::ProductName => "product_name",
            Field::Price => "price",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Codec Error
// =============================================================================

/// Malformed-input errors raised while decoding a grocery item record.
///
/// A failed decode never modifies the destination item. The `offset` is the
/// byte position in the input where the scanner stopped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Input ended before the field started.
    #[error("unexpected end of input before {field} at byte {offset}")]
    UnexpectedEnd { field: Field, offset: usize },

    /// A text field did not begin with a double quote.
    #[error("{field} must start with '\"', found {found:?} at byte {offset}")]
    ExpectedQuote {
        field: Field,
        found: char,
        offset: usize,
    },

    /// A quoted field had no closing quote.
    ///
    /// ## When This Occurs
    /// - `"00034000020706, "York", ...` (quote never closed before end of line)
    /// - `"abc\` (escape character with nothing after it)
    #[error("unterminated quoted {field} starting at byte {offset}")]
    UnterminatedQuote { field: Field, offset: usize },

    /// The character after a field was not the `,` delimiter.
    #[error("expected ',' after {field}, found {found:?} at byte {offset}")]
    MissingDelimiter {
        field: Field,
        found: Option<char>,
        offset: usize,
    },

    /// The price field is not a valid number.
    #[error("invalid price {text:?} at byte {offset}")]
    InvalidPrice { text: String, offset: usize },

    /// Non-whitespace text followed a complete record.
    #[error("unexpected trailing input at byte {offset}")]
    TrailingInput { offset: usize },
}

impl CodecError {
    /// Byte offset in the input where decoding stopped.
    pub fn offset(&self) -> usize {
        match self {
            CodecError::UnexpectedEnd { offset, .. }
            | CodecError::ExpectedQuote { offset, .. }
            | CodecError::UnterminatedQuote { offset, .. }
            | CodecError::MissingDelimiter { offset, .. }
            | CodecError::InvalidPrice { offset, .. }
            | CodecError::TrailingInput { offset } => *offset,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CodecError.
pub type CodecResult<T> = Result<T, CodecError>;

// =============================================================================
// Unit Tests
// =============================================================================
