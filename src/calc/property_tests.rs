//! Property-Based Tests for the Calculation Pipeline
//!
//! Uses proptest to verify the algebraic and round-trip properties of the
//! operations and the formatter.

use proptest::prelude::*;

use crate::calc::{
    add, divide, exponent, format_result, multiply, parse_operand, subtract, Operation,
};

// == Strategies ==
/// Finite operands in a range where the inverse-operation tolerances hold.
fn finite_operand() -> impl Strategy<Value = f64> {
    -1e12..1e12f64
}

/// Divisors bounded away from zero.
fn nonzero_divisor() -> impl Strategy<Value = f64> {
    (-1e6..1e6f64).prop_filter("divisor must not be near zero", |b| b.abs() > 1e-6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Adding then subtracting the same operand returns the original
    // value within floating-point tolerance.
    #[test]
    fn prop_add_subtract_inverse(a in finite_operand(), b in finite_operand()) {
        let round_trip = subtract(add(a, b), b);
        let tolerance = a.abs().max(b.abs()).max(1.0) * 1e-9;
        prop_assert!((round_trip - a).abs() <= tolerance,
            "add/subtract round trip drifted: {} -> {}", a, round_trip);
    }

    // Dividing then multiplying by the same nonzero operand returns the
    // original value within floating-point tolerance.
    #[test]
    fn prop_divide_multiply_inverse(a in finite_operand(), b in nonzero_divisor()) {
        let round_trip = multiply(divide(a, b), b);
        let tolerance = a.abs().max(1.0) * 1e-9;
        prop_assert!((round_trip - a).abs() <= tolerance,
            "divide/multiply round trip drifted: {} -> {}", a, round_trip);
    }

    // Anything nonzero raised to the zeroth power is one.
    #[test]
    fn prop_exponent_zero_is_one(a in finite_operand().prop_filter("nonzero base", |a| *a != 0.0)) {
        prop_assert_eq!(exponent(a, 0.0), 1.0);
    }

    // Division by zero yields signed infinity for nonzero dividends.
    #[test]
    fn prop_divide_by_zero_signs(a in finite_operand().prop_filter("nonzero dividend", |a| *a != 0.0)) {
        let quotient = divide(a, 0.0);
        if a > 0.0 {
            prop_assert_eq!(quotient, f64::INFINITY);
        } else {
            prop_assert_eq!(quotient, f64::NEG_INFINITY);
        }
    }

    // Formatting then parsing a value recovers it within one unit in the
    // last printed (14th fractional) digit.
    #[test]
    fn prop_format_parse_round_trip(value in finite_operand()) {
        let formatted = format_result(value);
        let parsed = parse_operand(Some(&formatted));
        prop_assert!((parsed - value).abs() <= 1e-14,
            "round trip {} -> {:?} -> {}", value, formatted, parsed);
    }

    // A NaN operand propagates through every operation. The zero exponent
    // is excluded: IEEE-754 pow(x, 0) is 1 even for NaN x.
    #[test]
    fn prop_nan_propagates_through_all_operations(
        b in finite_operand().prop_filter("nonzero", |b| *b != 0.0),
    ) {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
            Operation::Exponent,
        ] {
            prop_assert!(op.apply(f64::NAN, b).is_nan());
        }
    }
}
