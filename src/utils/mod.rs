//! Helper functions.

mod digits;
mod hex;

pub use digits::HexDigits;

pub use hex::Error as HexParseError;
pub use hex::{hex2bigint, hex2int, hex2int_strict};
