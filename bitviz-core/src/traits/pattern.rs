//! 32-bit display rendering
//!
//! Every rendered row uses the same convention as [`crate::BitField`]:
//! index 0 is bit position 31 and index 31 is bit position 0.

use crate::constants::{BYTE_BITS, BYTE_SEPARATOR, MAX_BIT_INDEX, WORD_BITS};

/// Types that can be displayed as a 32-bit row
///
/// Implementors only provide the low 32 bits of their two's-complement
/// representation. Values wider than 32 bits are truncated; negative values
/// expose their sign-extended low word.
pub trait BitPattern {
    /// Low 32 bits of the value
    fn low_word(&self) -> u32;

    /// Bits of the low word, most significant first
    fn bit_sequence(&self) -> [bool; WORD_BITS] {
        let word = self.low_word();
        core::array::from_fn(|index| word & (1u32 << (MAX_BIT_INDEX - index)) != 0)
    }

    /// Render the low word as exactly 32 `'0'`/`'1'` characters
    fn render_bits(&self) -> BitString {
        BitString::from_word(self.low_word())
    }
}

impl BitPattern for u32 {
    fn low_word(&self) -> u32 {
        *self
    }
}

impl BitPattern for i32 {
    fn low_word(&self) -> u32 {
        *self as u32
    }
}

impl BitPattern for u64 {
    fn low_word(&self) -> u32 {
        *self as u32
    }
}

impl BitPattern for i64 {
    fn low_word(&self) -> u32 {
        *self as u32
    }
}

/// Fixed 32-character binary rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitString {
    chars: [u8; WORD_BITS],
}

impl BitString {
    /// Render a word, most significant bit first
    pub fn from_word(word: u32) -> Self {
        let chars = core::array::from_fn(|index| {
            if word & (1u32 << (MAX_BIT_INDEX - index)) != 0 {
                b'1'
            } else {
                b'0'
            }
        });
        Self { chars }
    }

    /// Render a bit sequence, index 0 first
    pub fn from_bits(bits: &[bool; WORD_BITS]) -> Self {
        let chars = core::array::from_fn(|index| if bits[index] { b'1' } else { b'0' });
        Self { chars }
    }

    /// The rendering as a string slice (always 32 characters)
    pub fn as_str(&self) -> &str {
        // Only ASCII '0' and '1' are ever stored
        core::str::from_utf8(&self.chars).unwrap_or("")
    }

    /// Raw ASCII characters
    pub fn as_bytes(&self) -> &[u8; WORD_BITS] {
        &self.chars
    }

    /// Iterate over `(position, is_set)` pairs, position 31 first
    pub fn positions(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        self.chars
            .iter()
            .enumerate()
            .map(|(index, &c)| ((MAX_BIT_INDEX - index) as u8, c == b'1'))
    }

    /// Number of `'1'` characters
    pub fn count_ones(&self) -> usize {
        self.chars.iter().filter(|&&c| c == b'1').count()
    }

    /// Display adapter separating each byte with a space
    pub fn grouped(&self) -> GroupedBits<'_> {
        GroupedBits { bits: self }
    }
}

impl core::fmt::Display for BitString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte-grouped rendering of a [`BitString`], e.g. `00000000 00000000 00000000 00000001`
pub struct GroupedBits<'a> {
    bits: &'a BitString,
}

impl core::fmt::Display for GroupedBits<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = self.bits.as_str();
        for (group, start) in (0..WORD_BITS).step_by(BYTE_BITS).enumerate() {
            if group > 0 {
                write!(f, "{BYTE_SEPARATOR}")?;
            }
            f.write_str(&text[start..start + BYTE_BITS])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_render_word() {
        assert_eq!(0u32.render_bits().as_str(), "0".repeat(32));
        assert_eq!(
            1u32.render_bits().as_str(),
            "00000000000000000000000000000001"
        );
        assert_eq!(
            0x8000_0001u32.render_bits().as_str(),
            "10000000000000000000000000000001"
        );
        assert_eq!(u32::MAX.render_bits().count_ones(), 32);
    }

    #[test]
    fn test_render_truncates_and_sign_extends() {
        // Bit 32 and above are dropped
        assert_eq!((1u64 << 32).render_bits(), 0u32.render_bits());
        assert_eq!(((1u64 << 32) | 5).render_bits(), 5u32.render_bits());

        // Negative values show their two's-complement low word
        assert_eq!((-1i64).render_bits().as_str(), "1".repeat(32));
        assert_eq!(
            (-2i32).render_bits().as_str(),
            "11111111111111111111111111111110"
        );
    }

    #[test]
    fn test_bit_sequence_matches_rendering() {
        let value = 0xA5A5_0F0Fu32;
        let bits = value.bit_sequence();
        let rendered = value.render_bits();
        for (index, c) in rendered.as_bytes().iter().enumerate() {
            assert_eq!(bits[index], *c == b'1');
        }
        assert_eq!(BitString::from_bits(&bits), rendered);
    }

    #[test]
    fn test_positions() {
        let positions: std::vec::Vec<_> = 0x8000_0001u32.render_bits().positions().collect();
        assert_eq!(positions.len(), 32);
        assert_eq!(positions[0], (31, true));
        assert_eq!(positions[1], (30, false));
        assert_eq!(positions[31], (0, true));
    }

    #[test]
    fn test_grouped() {
        let grouped = 0x0100_00FFu32.render_bits().grouped().to_string();
        assert_eq!(grouped, "00000001 00000000 00000000 11111111");
    }
}
