//! Scanning of the hexadecimal part of a string.
use num_bigint::{BigInt, BigUint, Sign};

/// Whitespace skipped before a numeral: Unicode `White_Space` plus the byte order mark,
/// minus U+0085.
pub(crate) fn is_parse_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// The pieces of a string that start with a hexadecimal numeral.
///
/// Leading whitespace, a single `+`/`-` sign and a `0x`/`0X` prefix are consumed,
/// then the longest run of hex digits. Whatever follows the run is kept in `rest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDigits<'a> {
    /// A `-` sign preceded the digits.
    pub negative: bool,
    /// Non-empty run of `[0-9a-fA-F]`.
    pub digits: &'a str,
    /// Everything after the digit run, unparsed.
    pub rest: &'a str,
}

impl<'a> HexDigits<'a> {
    /// Split `value` into sign, digit run and rest.
    /// Returns [`None`] if there are no digits after the sign and prefix.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use hex_to_int::utils::HexDigits;
    ///
    /// let scanned = HexDigits::scan("  -0x1Fg").unwrap();
    /// assert!(scanned.negative);
    /// assert_eq!(scanned.digits, "1F");
    /// assert_eq!(scanned.rest, "g");
    ///
    /// assert!(HexDigits::scan("0x").is_none());
    /// ```
    pub fn scan(value: &'a str) -> Option<Self> {
        let s = value.trim_start_matches(is_parse_space);
        let (negative, s) = if let Some(s) = s.strip_prefix('-') {
            (true, s)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let end = s
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(s.len());
        if end == 0 {
            return None;
        }
        let (digits, rest) = s.split_at(end);
        Some(Self {
            negative,
            digits,
            rest,
        })
    }

    /// Unsigned value of the digit run, or [`None`] if it exceeds [`u64::MAX`].
    fn magnitude(&self) -> Option<u64> {
        self.digits.chars().try_fold(0u64, |acc, c| {
            acc.checked_mul(16)?.checked_add(u64::from(c.to_digit(16)?))
        })
    }

    /// Signed value, or [`None`] if it doesn't fit an [`i64`].
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude()?;
        if self.negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Signed value with unlimited width.
    pub fn to_bigint(&self) -> BigInt {
        let magnitude = self
            .digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(BigUint::default(), |acc, d| acc * 16u32 + d);
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, magnitude)
    }
}
