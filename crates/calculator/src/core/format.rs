//! Display formatting
//!
//! Whole numbers render without a fractional part, everything else uses the
//! shortest representation that parses back to the same `f64`.

use crate::core::{CalcError, CalcResult};

/// Largest magnitude rendered through the integer path (2^63)
const INTEGER_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Renders a number for the display
///
/// `format_number(4.0) == "4"`, `format_number(4.5) == "4.5"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < INTEGER_LIMIT {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Parses a display string back into a number
pub fn parse_number(text: &str) -> CalcResult<f64> {
    text.parse::<f64>()
        .map_err(|_| CalcError::invalid_state(format!("display '{text}' is not a number")))
}

/// True when the display holds a finite numeral that digits may extend
#[must_use]
pub(crate) fn is_numeral(text: &str) -> bool {
    parse_number(text).is_ok_and(f64::is_finite)
}
