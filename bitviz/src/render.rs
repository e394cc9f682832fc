//! 32-bit display of arbitrary-precision integers
//!
//! Values are truncated to the low 32 bits of their two's-complement
//! representation before rendering. Negative values therefore show their
//! sign-extended low word (`-1` renders as 32 ones) and values wider than
//! 32 bits lose their upper bits. The rendering is always 32 characters.

use bitviz_core::BitString;
use num::{BigInt, BigUint, Signed, ToPrimitive};

/// Low 32 bits of a signed value in two's complement
pub fn low_word(value: &BigInt) -> u32 {
    // Bitwise ops on negative BigInt behave as infinite sign extension
    let mask = BigInt::from(u32::MAX);
    (value & &mask).to_u32().unwrap_or(0)
}

/// Low 32 bits of an unsigned value
pub fn low_word_unsigned(value: &BigUint) -> u32 {
    value.iter_u32_digits().next().unwrap_or(0)
}

/// Render the low 32 bits of a signed value
pub fn render_bits(value: &BigInt) -> BitString {
    BitString::from_word(low_word(value))
}

/// Whether rendering `value` in 32 bits hides part of it
///
/// True for negative values (the sign extension is cut off) and for values
/// needing more than 32 bits.
pub fn exceeds_word(value: &BigInt) -> bool {
    value.is_negative() || value.bits() > 32
}
