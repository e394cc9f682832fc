//! Width and range constants for the bit model

/// Number of bits in a displayed word
pub const WORD_BITS: usize = 32;

/// Highest valid bit index (and bit position)
pub const MAX_BIT_INDEX: usize = WORD_BITS - 1;

/// Number of bits per display group
pub const BYTE_BITS: usize = 8;

/// Largest shift count accepted by the shift operations
pub const MAX_SHIFT_COUNT: u8 = 31;

/// Shift count used when a session starts or is cleared
pub const DEFAULT_SHIFT_COUNT: u8 = 1;

/// Separator placed between byte groups in grouped renderings
pub const BYTE_SEPARATOR: char = ' ';
