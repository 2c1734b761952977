//! # Codec Module
//!
//! Single-line text form of a [`GroceryItem`].
//!
//! ## Line Format
//! ```text
//!    UPC Code         | Brand Name | Product Name                                              | Price
//!    -----------------+------------+-----------------------------------------------------------+-------
//!    "00034000020706",  "York",      "York Peppermint Patties Dark Chocolate Covered Snack Size",  12.64
//! ```
//!
//! - Text fields are double-quoted; `"` and `\` inside them are escaped with `\`.
//! - Fields are separated by a comma. The writer emits [`FIELD_DELIMITER`];
//!   the reader ignores whitespace around every field.
//! - The price is a bare number written with `f64`'s `Display`, which always
//!   parses back to the same value. No trailing newline is written.
//!
//! ## Decode Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  decode_from(&mut item, &mut source)                                   │
//! │                                                                         │
//! │  ws "upc" ws , ws "brand" ws , ws "product" ws , ws price              │
//! │       │                                                                 │
//! │       ├── any step fails → Err(CodecError), item untouched             │
//! │       │                    source stops at the offending character     │
//! │       │                                                                 │
//! │       └── all steps ok   → candidate moved into item                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{CodecError, CodecResult, Field};
use crate::item::GroceryItem;
use crate::scanner::{CharSource, StrScanner};
use crate::FIELD_DELIMITER;

const QUOTE: char = '"';
const ESCAPE: char = '\\';
const DELIMITER: char = ',';

// =============================================================================
// Encoding
// =============================================================================

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.upc_code)?;
        f.write_str(FIELD_DELIMITER)?;
        write_quoted(f, &self.brand_name)?;
        f.write_str(FIELD_DELIMITER)?;
        write_quoted(f, &self.product_name)?;
        f.write_str(FIELD_DELIMITER)?;
        write!(f, "{}", self.price)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    use fmt::Write;

    f.write_char(QUOTE)?;
    for c in text.chars() {
        if c == QUOTE || c == ESCAPE {
            f.write_char(ESCAPE)?;
        }
        f.write_char(c)?;
    }
    f.write_char(QUOTE)
}

// =============================================================================
// Decoding
// =============================================================================

impl GroceryItem {
    /// Encodes the item as one line of text (same as `to_string()`).
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::GroceryItem;
    ///
    /// let item = GroceryItem::new("00034000020706", "York", "Snack Size", 12.64);
    /// assert_eq!(item.encode(), r#""00034000020706",  "York",  "Snack Size",  12.64"#);
    /// ```
    ///
    /// A non-finite price encodes as `inf`/`NaN`, which [`GroceryItem::decode`]
    /// rejects.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decodes a whole line into a new item.
    ///
    /// Only whitespace may follow the record. Same as `input.parse()`.
    pub fn decode(input: &str) -> CodecResult<Self> {
        input.parse()
    }

    /// Reads one record from `source` into `self`.
    ///
    /// On success `self` is replaced by the decoded item and `source` is left
    /// just past the price. On failure `self` is not modified and `source`
    /// stops at the character that revealed the error.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::{GroceryItem, StrScanner};
    ///
    /// let mut item = GroceryItem::new("keep", "me", "as is", 1.0);
    /// let mut source = StrScanner::new(r#""X", "Y", "Z", abc"#);
    ///
    /// assert!(item.decode_from(&mut source).is_err());
    /// assert_eq!(item.upc_code(), "keep");
    /// ```
    pub fn decode_from<S>(&mut self, source: &mut S) -> CodecResult<()>
    where
        S: CharSource + ?Sized,
    {
        match read_record(source) {
            Ok(candidate) => {
                debug!(upc_code = %candidate.upc_code, "Decoded grocery item");
                *self = candidate;
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, offset = err.offset(), "Grocery item decode failed");
                Err(err)
            }
        }
    }
}

impl FromStr for GroceryItem {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scanner = StrScanner::new(s);
        let mut item = GroceryItem::default();
        item.decode_from(&mut scanner)?;

        scanner.skip_whitespace();
        if !scanner.is_empty() {
            return Err(CodecError::TrailingInput {
                offset: scanner.offset(),
            });
        }

        Ok(item)
    }
}

fn read_record<S>(source: &mut S) -> CodecResult<GroceryItem>
where
    S: CharSource + ?Sized,
{
    let upc_code = read_quoted(source, Field::UpcCode)?;
    expect_delimiter(source, Field::UpcCode)?;
    let brand_name = read_quoted(source, Field::BrandName)?;
    expect_delimiter(source, Field::BrandName)?;
    let product_name = read_quoted(source, Field::ProductName)?;
    expect_delimiter(source, Field::ProductName)?;
    let price = read_price(source)?;

    Ok(GroceryItem {
        upc_code,
        brand_name,
        product_name,
        price,
    })
}

/// Reads `"..."`, undoing `\` escapes. `\x` yields `x` for any `x`.
fn read_quoted<S>(source: &mut S, field: Field) -> CodecResult<String>
where
    S: CharSource + ?Sized,
{
    source.skip_whitespace();
    let start = source.offset();

    match source.peek() {
        Some(QUOTE) => {
            source.next_char();
        }
        Some(found) => {
            return Err(CodecError::ExpectedQuote {
                field,
                found,
                offset: start,
            })
        }
        None => return Err(CodecError::UnexpectedEnd { field, offset: start }),
    }

    let mut text = String::new();
    loop {
        match source.next_char() {
            Some(QUOTE) => return Ok(text),
            Some(ESCAPE) => match source.next_char() {
                Some(c) => text.push(c),
                None => break,
            },
            Some(c) => text.push(c),
            None => break,
        }
    }

    Err(CodecError::UnterminatedQuote { field, offset: start })
}

/// Consumes the `,` after `field`. A wrong character is left unread.
fn expect_delimiter<S>(source: &mut S, field: Field) -> CodecResult<()>
where
    S: CharSource + ?Sized,
{
    source.skip_whitespace();
    match source.peek() {
        Some(DELIMITER) => {
            source.next_char();
            Ok(())
        }
        found => Err(CodecError::MissingDelimiter {
            field,
            found,
            offset: source.offset(),
        }),
    }
}

/// Reads `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit.
fn read_price<S>(source: &mut S) -> CodecResult<f64>
where
    S: CharSource + ?Sized,
{
    source.skip_whitespace();
    let start = source.offset();
    if source.peek().is_none() {
        return Err(CodecError::UnexpectedEnd {
            field: Field::Price,
            offset: start,
        });
    }

    let mut text = String::new();
    take_sign(source, &mut text);
    let mut digits = take_digits(source, &mut text);
    if source.peek() == Some('.') {
        source.next_char();
        text.push('.');
        digits += take_digits(source, &mut text);
    }

    if digits == 0 {
        if let Some(c) = source.peek() {
            text.push(c);
        }
        return Err(CodecError::InvalidPrice { text, offset: start });
    }

    if let Some(e @ ('e' | 'E')) = source.peek() {
        source.next_char();
        text.push(e);
        take_sign(source, &mut text);
        if take_digits(source, &mut text) == 0 {
            return Err(CodecError::InvalidPrice { text, offset: start });
        }
    }

    // Out-of-range literals parse to infinity, which the writer cannot round-trip.
    match text.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(CodecError::InvalidPrice { text, offset: start }),
    }
}

fn take_sign<S>(source: &mut S, text: &mut String)
where
    S: CharSource + ?Sized,
{
    if let Some(sign @ ('+' | '-')) = source.peek() {
        source.next_char();
        text.push(sign);
    }
}

fn take_digits<S>(source: &mut S, text: &mut String) -> usize
where
    S: CharSource + ?Sized,
{
    let mut count = 0;
    while let Some(d) = source.peek().filter(char::is_ascii_digit) {
        source.next_char();
        text.push(d);
        count += 1;
    }
    count
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const YORK_LINE: &str = r#""00034000020706",  "York",  "York Peppermint Patties Dark Chocolate Covered Snack Size",  12.64"#;

    fn york() -> GroceryItem {
        GroceryItem::new(
            "00034000020706",
            "York",
            "York Peppermint Patties Dark Chocolate Covered Snack Size",
            12.64,
        )
    }

    #[test]
    fn test_encode_york() {
        assert_eq!(york().encode(), YORK_LINE);
        assert_eq!(format!("{}", york()), YORK_LINE);
    }

    #[test]
    fn test_decode_york() {
        let item = GroceryItem::decode(YORK_LINE).unwrap();
        assert_eq!(item, york());
        assert_eq!(item.price(), 12.64);
    }

    #[test]
    fn test_encode_escapes_quote_and_backslash() {
        let item = GroceryItem::new("1", "Joe's \"Best\"", r"C:\bin, etc", 0.5);
        assert_eq!(
            item.encode(),
            r#""1",  "Joe's \"Best\"",  "C:\\bin, etc",  0.5"#
        );
    }

    #[test]
    fn test_decode_ignores_whitespace() {
        let item = GroceryItem::decode("\t \"u\"\n,\"b\" ,   \"p\",7 \n").unwrap();
        assert_eq!(item, GroceryItem::new("u", "b", "p", 7.0));
    }

    #[test]
    fn test_decode_price_forms() {
        for (text, expected) in [
            ("12.64", 12.64),
            ("-3", -3.0),
            ("+4.5", 4.5),
            (".25", 0.25),
            ("5.", 5.0),
            ("1e2", 100.0),
            ("2.5E-1", 0.25),
        ] {
            let line = format!(r#""u","b","p",{text}"#);
            let item = GroceryItem::decode(&line).unwrap();
            assert_eq!(item.price(), expected, "price text {text}");
        }
    }

    #[test]
    fn test_decode_from_stops_after_price() {
        let input = format!("{YORK_LINE}\n\"2\",  \"B\",  \"P\",  1.5\n");
        let mut scanner = StrScanner::new(&input);

        let mut first = GroceryItem::default();
        first.decode_from(&mut scanner).unwrap();
        assert_eq!(first, york());
        assert!(scanner.remaining().starts_with('\n'));

        let mut second = GroceryItem::default();
        second.decode_from(&mut scanner).unwrap();
        assert_eq!(second, GroceryItem::new("2", "B", "P", 1.5));
        assert_eq!(scanner.remaining(), "\n");
    }

    #[test]
    fn test_unterminated_quote() {
        let err = GroceryItem::decode(r#""00034000020706,  "York""#).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MissingDelimiter {
                field: Field::UpcCode,
                found: Some('Y'),
                ..
            }
        ));

        let err = GroceryItem::decode(r#""abc"#).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnterminatedQuote {
                field: Field::UpcCode,
                offset: 0
            }
        );

        let err = GroceryItem::decode(r#""u", "abc\"#).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnterminatedQuote {
                field: Field::BrandName,
                offset: 5
            }
        ));
    }

    #[test]
    fn test_missing_opening_quote() {
        let err = GroceryItem::decode(r#"u, "b", "p", 1"#).unwrap_err();
        assert_eq!(
            err,
            CodecError::ExpectedQuote {
                field: Field::UpcCode,
                found: 'u',
                offset: 0
            }
        );
    }

    #[test]
    fn test_wrong_delimiter_is_not_consumed() {
        let mut scanner = StrScanner::new(r#""u"; "b", "p", 1"#);
        let mut item = GroceryItem::default();
        let err = item.decode_from(&mut scanner).unwrap_err();
        assert_eq!(
            err,
            CodecError::MissingDelimiter {
                field: Field::UpcCode,
                found: Some(';'),
                offset: 3
            }
        );
        assert_eq!(scanner.remaining(), r#"; "b", "p", 1"#);
    }

    #[test]
    fn test_invalid_price() {
        let err = GroceryItem::decode(r#""X","Y","Z", abc"#).unwrap_err();
        assert!(matches!(err, CodecError::InvalidPrice { ref text, offset: 13 } if text == "a"));

        let err = GroceryItem::decode(r#""X","Y","Z", 1e"#).unwrap_err();
        assert!(matches!(err, CodecError::InvalidPrice { ref text, .. } if text == "1e"));

        let err = GroceryItem::decode(r#""X","Y","Z", -."#).unwrap_err();
        assert!(matches!(err, CodecError::InvalidPrice { .. }));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            GroceryItem::decode("").unwrap_err(),
            CodecError::UnexpectedEnd {
                field: Field::UpcCode,
                offset: 0
            }
        );
        assert!(matches!(
            GroceryItem::decode(r#""u","b","p","#).unwrap_err(),
            CodecError::UnexpectedEnd {
                field: Field::Price,
                ..
            }
        ));
        assert!(matches!(
            GroceryItem::decode(r#""u","b","p""#).unwrap_err(),
            CodecError::MissingDelimiter {
                field: Field::ProductName,
                found: None,
                ..
            }
        ));
    }

    #[test]
    fn test_trailing_input_rejected_by_decode() {
        let err = GroceryItem::decode(r#""u","b","p",1 extra"#).unwrap_err();
        assert_eq!(err, CodecError::TrailingInput { offset: 14 });
    }

    #[test]
    fn test_out_of_range_price_rejected() {
        for (line, literal) in [
            (r#""u","b","p",1e999"#, "1e999"),
            (r#""u","b","p",-1e999"#, "-1e999"),
        ] {
            let mut item = york();
            let err = item.decode_from(&mut StrScanner::new(line)).unwrap_err();
            assert_eq!(
                err,
                CodecError::InvalidPrice {
                    text: literal.to_string(),
                    offset: 12
                }
            );
            assert_eq!(item.upc_code(), york().upc_code());
            assert_eq!(item.price(), york().price());
        }
    }

    #[test]
    fn test_failed_decode_leaves_item_untouched() {
        let original = york();
        for bad in [
            r#""X,"Y","Z", 1"#,
            r#""X" "Y","Z", 1"#,
            r#""X","Y","Z", abc"#,
        ] {
            let mut item = original.clone();
            assert!(item.decode_from(&mut StrScanner::new(bad)).is_err());
            assert_eq!(item.upc_code(), original.upc_code());
            assert_eq!(item.brand_name(), original.brand_name());
            assert_eq!(item.product_name(), original.product_name());
            assert_eq!(item.price(), original.price());
        }
    }
}
