//! Arbitrary-precision operands and results
//!
//! Operands are unbounded non-negative integers. Results are signed because
//! the complement of a non-negative operand is negative. Both are displayed
//! through their low 32 bits, see [`crate::render`].

use bitviz_core::{
    sanitize_operand_text, validate_operand_text, BitPattern, BitString, BitvizError,
};
use num::{BigInt, BigUint, Signed, Zero};

use crate::render;

/// Non-negative operand of unbounded magnitude
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Operand {
    value: BigUint,
}

impl Operand {
    /// The zero operand
    pub fn zero() -> Self {
        Self::default()
    }

    /// Read operand text permissively
    ///
    /// Every non-digit character is discarded and the remaining digits are
    /// read as a base-10 number; no digits at all reads as zero. This is
    /// intentionally lossy: `"12a3b"` is 123 and `"-5"` is 5.
    pub fn parse_lossy(text: &str) -> Self {
        let digits = sanitize_operand_text(text);
        let value = BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default();
        Self { value }
    }

    /// Read operand text, rejecting anything but digits and surrounding whitespace
    pub fn parse_strict(text: &str) -> Result<Self, BitvizError> {
        validate_operand_text(text)?;
        Ok(Self::parse_lossy(text))
    }

    /// The underlying value
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The value as a signed integer for evaluation
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.value.clone())
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether bits above position 31 are set and hidden by the 32-bit display
    pub fn exceeds_word(&self) -> bool {
        self.value.bits() > 32
    }
}

impl BitPattern for Operand {
    fn low_word(&self) -> u32 {
        render::low_word_unsigned(&self.value)
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self {
            value: BigUint::from(value),
        }
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Self {
            value: BigUint::from(value),
        }
    }
}

impl From<BigUint> for Operand {
    fn from(value: BigUint) -> Self {
        Self { value }
    }
}

impl std::str::FromStr for Operand {
    type Err = BitvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Signed result of evaluating an operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WideValue {
    value: BigInt,
}

impl WideValue {
    /// Wrap a signed value
    pub fn new(value: BigInt) -> Self {
        Self { value }
    }

    /// The underlying value
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Unwrap into the underlying value
    pub fn into_inner(self) -> BigInt {
        self.value
    }

    /// Whether the value is below zero
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Whether the 32-bit display loses information about this value
    pub fn exceeds_word(&self) -> bool {
        render::exceeds_word(&self.value)
    }
}

impl BitPattern for WideValue {
    fn low_word(&self) -> u32 {
        render::low_word(&self.value)
    }

    fn render_bits(&self) -> BitString {
        render::render_bits(&self.value)
    }
}

impl From<BigInt> for WideValue {
    fn from(value: BigInt) -> Self {
        Self::new(value)
    }
}

impl From<i64> for WideValue {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value))
    }
}

impl std::fmt::Display for WideValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lossy_strips_non_digits() {
        assert_eq!(Operand::parse_lossy("12a3b"), Operand::from(123u32));
        assert_eq!(Operand::parse_lossy("-42"), Operand::from(42u32));
        assert_eq!(Operand::parse_lossy("1,024"), Operand::from(1024u32));
        assert_eq!(Operand::parse_lossy(""), Operand::zero());
        assert_eq!(Operand::parse_lossy("abc"), Operand::zero());
        assert_eq!(Operand::parse_lossy("007"), Operand::from(7u32));
    }

    #[test]
    fn test_parse_lossy_is_unbounded() {
        let operand = Operand::parse_lossy("340282366920938463463374607431768211456");
        // 2^128
        assert_eq!(operand.value().bits(), 129);
        assert!(operand.exceeds_word());
        assert_eq!(operand.low_word(), 0);
        assert_eq!(operand.to_string(), "340282366920938463463374607431768211456");
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(Operand::parse_strict(" 255 "), Ok(Operand::from(255u32)));
        assert_eq!(Operand::parse_strict(""), Ok(Operand::zero()));
        assert_eq!(
            Operand::parse_strict("12a3b"),
            Err(BitvizError::MalformedOperandText)
        );
        assert_eq!(
            "xyz".parse::<Operand>(),
            Err(BitvizError::MalformedOperandText)
        );
    }

    #[test]
    fn test_operand_low_word() {
        assert_eq!(Operand::from(u32::MAX).low_word(), u32::MAX);
        assert!(!Operand::from(u32::MAX).exceeds_word());
        let wide = Operand::from((1u64 << 32) | 0xABCD);
        assert_eq!(wide.low_word(), 0xABCD);
        assert!(wide.exceeds_word());
        assert_eq!(Operand::zero().render_bits().as_str(), "0".repeat(32));
        let wide = WideValue::from(-(BigInt::from(1) << 40usize) - 1);
        assert_eq!(wide.render_bits(), render::render_bits(wide.value()));
        assert_eq!(wide.render_bits().as_str(), "1".repeat(32));
    }

    #[test]
    fn test_wide_value() {
        let minus_one = WideValue::from(-1i64);
        assert!(minus_one.is_negative());
        assert!(minus_one.exceeds_word());
        assert_eq!(minus_one.low_word(), u32::MAX);
        assert_eq!(minus_one.to_string(), "-1");

        let small = WideValue::from(240i64);
        assert!(!small.exceeds_word());
        assert_eq!(small.into_inner(), BigInt::from(240));
    }
}
