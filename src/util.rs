/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Use these helpers whenever an `f64` produced by an engine has to be treated
/// as an exact integer.
///
/// The checked functions return an `Option`, which is `Some` only if the
/// conversion is lossless and valid.
pub mod num;
/// Number formatting helpers.
///
/// Engines describe their results with human-readable text. These helpers
/// render reals consistently across every trace and summary.
pub mod fmt;
