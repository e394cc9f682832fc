//! Parsing utilities for visualizer text input
//!
//! Operand text is read permissively: every character that is not an ASCII
//! digit is dropped and an empty remainder means zero. This never fails and
//! never yields a negative number. [`validate_operand_text`] is the strict
//! counterpart for callers that prefer rejection over coercion.

use crate::{BitvizError, Operation};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Accepted spellings per operation, compared case-insensitively with
/// spaces, underscores and dashes removed
const OPERATION_NAMES: [(Operation, &[&str]); 6] = [
    (Operation::And, &["and"]),
    (Operation::Or, &["or"]),
    (Operation::Xor, &["xor"]),
    (Operation::NotA, &["nota", "not"]),
    (
        Operation::LeftShiftA,
        &["leftshifta", "leftshift", "lshift", "shl"],
    ),
    (
        Operation::RightShiftA,
        &["rightshifta", "rightshift", "rshift", "shr"],
    ),
];

/// Check whether text contains at least one ASCII digit
pub fn has_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

/// Keep only the ASCII digits of operand text
///
/// The result may be empty, which callers read as zero.
#[cfg(feature = "alloc")]
pub fn sanitize_operand_text(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Strictly validate operand text
///
/// Surrounding whitespace is ignored and blank text is accepted as zero.
/// Anything else must consist solely of ASCII digits.
pub fn validate_operand_text(text: &str) -> Result<(), BitvizError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BitvizError::MalformedOperandText);
    }

    Ok(())
}

/// Read the leading integer of shift-count text
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Text without leading digits reads as zero. Magnitudes
/// beyond `i64` saturate. The result still needs clamping.
pub fn parse_shift_text(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Resolve an operation from its display name or a compact alias
pub fn parse_operation(name: &str) -> Result<Operation, BitvizError> {
    OPERATION_NAMES
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|alias| name_matches(name, alias)))
        .map(|(operation, _)| *operation)
        .ok_or(BitvizError::UnknownOperation)
}

/// Compare `input` against a lowercase alias, skipping separators
fn name_matches(input: &str, alias: &str) -> bool {
    let mut input = input.chars().filter(|c| !matches!(c, ' ' | '_' | '-'));
    let mut alias = alias.chars();

    loop {
        match (input.next(), alias.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => continue,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_digit() {
        assert!(has_digit("12a3b"));
        assert!(has_digit("x9"));
        assert!(!has_digit(""));
        assert!(!has_digit("abc"));
        assert!(!has_digit("-"));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_sanitize_operand_text() {
        assert_eq!(sanitize_operand_text("12a3b"), "123");
        assert_eq!(sanitize_operand_text("-42"), "42");
        assert_eq!(sanitize_operand_text("1,000,000"), "1000000");
        assert_eq!(sanitize_operand_text("3.75"), "375");
        assert_eq!(sanitize_operand_text("abc"), "");
        assert_eq!(sanitize_operand_text(""), "");
    }

    #[test]
    fn test_validate_operand_text() {
        assert_eq!(validate_operand_text("123"), Ok(()));
        assert_eq!(validate_operand_text("  456 "), Ok(()));
        assert_eq!(validate_operand_text(""), Ok(()));
        assert_eq!(validate_operand_text("   "), Ok(()));

        assert_eq!(
            validate_operand_text("12a3b"),
            Err(BitvizError::MalformedOperandText)
        );
        assert_eq!(
            validate_operand_text("abc"),
            Err(BitvizError::MalformedOperandText)
        );
        assert_eq!(
            validate_operand_text("-5"),
            Err(BitvizError::MalformedOperandText)
        );
        assert_eq!(
            validate_operand_text("1 000"),
            Err(BitvizError::MalformedOperandText)
        );
    }

    #[test]
    fn test_parse_shift_text() {
        assert_eq!(parse_shift_text("4"), 4);
        assert_eq!(parse_shift_text("  12"), 12);
        assert_eq!(parse_shift_text("+7"), 7);
        assert_eq!(parse_shift_text("-3"), -3);
        assert_eq!(parse_shift_text("5px"), 5);
        assert_eq!(parse_shift_text("2.9"), 2);
        assert_eq!(parse_shift_text(""), 0);
        assert_eq!(parse_shift_text("abc"), 0);
        assert_eq!(parse_shift_text("-"), 0);
        assert_eq!(parse_shift_text("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!(parse_operation("AND"), Ok(Operation::And));
        assert_eq!(parse_operation("or"), Ok(Operation::Or));
        assert_eq!(parse_operation("Xor"), Ok(Operation::Xor));
        assert_eq!(parse_operation("NOT A"), Ok(Operation::NotA));
        assert_eq!(parse_operation("not"), Ok(Operation::NotA));
        assert_eq!(parse_operation("Left Shift A"), Ok(Operation::LeftShiftA));
        assert_eq!(parse_operation("left-shift"), Ok(Operation::LeftShiftA));
        assert_eq!(parse_operation("SHL"), Ok(Operation::LeftShiftA));
        assert_eq!(parse_operation("right_shift_a"), Ok(Operation::RightShiftA));
        assert_eq!(parse_operation("rshift"), Ok(Operation::RightShiftA));

        assert_eq!(parse_operation(""), Err(BitvizError::UnknownOperation));
        assert_eq!(parse_operation("NAND"), Err(BitvizError::UnknownOperation));
        assert_eq!(parse_operation("an"), Err(BitvizError::UnknownOperation));
        assert_eq!(parse_operation("andd"), Err(BitvizError::UnknownOperation));
    }
}
