//! Request DTOs for the calculator API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query parameters for every arithmetic route (`?a=...&b=...`)
///
/// Both operands arrive as raw text and stay optional: absence and
/// unparseable values alike degrade to NaN in the operand parser
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperandPair {
    /// First operand, verbatim query text
    #[serde(default)]
    pub a: Option<String>,
    /// Second operand, verbatim query text
    #[serde(default)]
    pub b: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_pair_deserialize() {
        let json = r#"{"a": "5", "b": "15"}"#;
        let pair: OperandPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.a.as_deref(), Some("5"));
        assert_eq!(pair.b.as_deref(), Some("15"));
    }

    #[test]
    fn test_operand_pair_missing_fields_default_to_none() {
        let pair: OperandPair = serde_json::from_str("{}").unwrap();
        assert!(pair.a.is_none());
        assert!(pair.b.is_none());
    }

    #[test]
    fn test_operand_pair_keeps_raw_text() {
        // Grouping separators and junk both survive to the parser.
        let json = r#"{"a": "1,000", "b": "abc"}"#;
        let pair: OperandPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.a.as_deref(), Some("1,000"));
        assert_eq!(pair.b.as_deref(), Some("abc"));
    }
}
