//! Index and shift-count range checks
//!
//! Bit indices are always rejected when out of range. Shift counts are
//! clamped by the permissive API and only rejected by strict callers.

use crate::constants::{MAX_BIT_INDEX, MAX_SHIFT_COUNT};
use crate::BitvizError;

/// Validate a bit index (0 = most significant)
pub const fn validate_bit_index(index: usize) -> Result<usize, BitvizError> {
    if index > MAX_BIT_INDEX {
        return Err(BitvizError::OutOfRangeIndex);
    }
    Ok(index)
}

/// Convert a bit index into its bit position (`31 - index`)
pub const fn bit_position(index: usize) -> Result<u8, BitvizError> {
    match validate_bit_index(index) {
        Ok(index) => Ok((MAX_BIT_INDEX - index) as u8),
        Err(e) => Err(e),
    }
}

/// Clamp any integer into the shift range 0..=31
pub const fn clamp_shift_count(count: i64) -> u8 {
    if count < 0 {
        0
    } else if count > MAX_SHIFT_COUNT as i64 {
        MAX_SHIFT_COUNT
    } else {
        count as u8
    }
}

/// Validate a shift count without clamping
pub const fn validate_shift_count(count: i64) -> Result<u8, BitvizError> {
    if count < 0 || count > MAX_SHIFT_COUNT as i64 {
        return Err(BitvizError::ShiftOutOfRange);
    }
    Ok(count as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bit_index() {
        assert_eq!(validate_bit_index(0), Ok(0));
        assert_eq!(validate_bit_index(31), Ok(31));
        assert_eq!(validate_bit_index(32), Err(BitvizError::OutOfRangeIndex));
    }

    #[test]
    fn test_bit_position() {
        assert_eq!(bit_position(0), Ok(31));
        assert_eq!(bit_position(31), Ok(0));
        assert_eq!(bit_position(12), Ok(19));
        assert_eq!(bit_position(99), Err(BitvizError::OutOfRangeIndex));
    }

    #[test]
    fn test_clamp_shift_count() {
        assert_eq!(clamp_shift_count(-5), 0);
        assert_eq!(clamp_shift_count(0), 0);
        assert_eq!(clamp_shift_count(17), 17);
        assert_eq!(clamp_shift_count(31), 31);
        assert_eq!(clamp_shift_count(32), 31);
        assert_eq!(clamp_shift_count(i64::MAX), 31);
        assert_eq!(clamp_shift_count(i64::MIN), 0);
    }

    #[test]
    fn test_validate_shift_count() {
        assert_eq!(validate_shift_count(4), Ok(4));
        assert_eq!(validate_shift_count(-1), Err(BitvizError::ShiftOutOfRange));
        assert_eq!(validate_shift_count(32), Err(BitvizError::ShiftOutOfRange));
    }
}
