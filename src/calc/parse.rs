//! Operand Parser Module
//!
//! Converts raw query-string text into numeric operands. The parser is
//! deliberately permissive: absent, empty, or non-numeric input yields
//! NaN rather than an error, and the NaN value flows through the
//! arithmetic pipeline to the formatter's NaN token.

// == Parse Operand ==
/// Parses an optional query-string value into an `f64` operand.
///
/// Accepts plain integers, decimals, scientific notation, and
/// grouped-thousands notation (`"1,234.5"`). Comma separators are
/// stripped before parsing, surrounding whitespace is ignored.
///
/// Returns `f64::NAN` when the value is absent or does not parse.
pub fn parse_operand(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }

    // Grouping separators are cosmetic; their placement is not validated.
    let cleaned = trimmed.replace(',', "");
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}
