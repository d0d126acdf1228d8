//! Hexadecimal-string-to-int helpers.
use num_bigint::BigInt;

use super::digits::{is_parse_space, HexDigits};

/// The error type for strict str-int conversion.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Nothing after the sign and prefix is a hex digit.
    #[error("String contains no hexadecimal digits")]
    NoDigits,
    /// Something other than whitespace follows the digits.
    #[error("Unexpected character at byte offset {offset}")]
    TrailingCharacters { offset: usize },
    /// The value is outside of [`i64`] range.
    #[error("Hexadecimal value doesn't fit in a 64-bit signed integer")]
    Overflow,
}

type Result<T> = std::result::Result<T, Error>;

/// A helper that parses the hexadecimal numeral at the start of a string into an i64.
///
/// Leading whitespace, one `+`/`-` sign and a `0x`/`0X` prefix are allowed. Parsing stops
/// at the first character that isn't a hex digit and the rest of the string is ignored.
/// Returns [`None`] if there are no digits or the value doesn't fit an [`i64`].
///
/// # Example
///
/// ```ignore
/// use hex_to_int::utils::hex2int;
///
/// assert_eq!(hex2int("ff"), Some(255));
/// assert_eq!(hex2int("0xFF"), Some(255));
/// assert_eq!(hex2int(" -1a"), Some(-26));
/// assert_eq!(hex2int("1g"), Some(1));
/// assert_eq!(hex2int("zz"), None);
/// ```
pub fn hex2int(value: &str) -> Option<i64> {
    HexDigits::scan(value)?.to_i64()
}

/// Same as [`hex2int`], but without an upper bound on the value.
pub fn hex2bigint(value: &str) -> Option<BigInt> {
    HexDigits::scan(value).map(|digits| digits.to_bigint())
}

/// A helper that parses a string that is exactly one hexadecimal numeral into an i64.
///
/// Accepts what [`hex2int`] accepts, but only whitespace may follow the digits.
///
/// # Example
///
/// ```ignore
/// use hex_to_int::utils::{hex2int_strict, HexParseError};
///
/// assert_eq!(hex2int_strict(" 0x00A1\n"), Ok(161));
///
/// let res = hex2int_strict("1g");
/// assert_eq!(res, Err(HexParseError::TrailingCharacters { offset: 1 }));
/// ```
pub fn hex2int_strict(value: &str) -> Result<i64> {
    let digits = HexDigits::scan(value).ok_or(Error::NoDigits)?;
    let trailing = digits.rest.trim_start_matches(is_parse_space);
    if !trailing.is_empty() {
        return Err(Error::TrailingCharacters {
            offset: value.len() - trailing.len(),
        });
    }
    digits.to_i64().ok_or(Error::Overflow)
}
