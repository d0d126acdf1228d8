//! Helpers for turning hexadecimal strings into integers.

/// Helper functions.
pub mod utils;
