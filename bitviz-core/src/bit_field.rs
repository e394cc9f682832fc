//! Fixed 32-bit field of independently toggled bits
//!
//! Index 0 holds the most significant bit (position 31) and index 31 the
//! least significant bit (position 0). The decimal value and the list of
//! active bits are derived on every query and never stored.

use crate::constants::{MAX_BIT_INDEX, WORD_BITS};
use crate::traits::BitPattern;
use crate::validation::validate_bit_index;
use crate::Result;

/// Ordered sequence of exactly 32 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitField {
    bits: [bool; WORD_BITS],
}

impl BitField {
    /// Create a field with every bit cleared
    pub const fn new() -> Self {
        Self {
            bits: [false; WORD_BITS],
        }
    }

    /// Create a field whose decimal value equals `value`
    pub fn from_value(value: u32) -> Self {
        Self {
            bits: value.bit_sequence(),
        }
    }

    /// Create a field from an explicit bit sequence, index 0 first
    pub const fn from_bits(bits: [bool; WORD_BITS]) -> Self {
        Self { bits }
    }

    /// Flip the bit at `index`
    ///
    /// Rejects indices outside 0..=31 without touching the field.
    pub fn toggle_bit(&mut self, index: usize) -> Result<()> {
        let index = validate_bit_index(index)?;
        self.bits[index] = !self.bits[index];
        Ok(())
    }

    /// Read the bit at `index`
    pub fn bit(&self, index: usize) -> Result<bool> {
        let index = validate_bit_index(index)?;
        Ok(self.bits[index])
    }

    /// All bits, index 0 (position 31) first
    pub fn bits(&self) -> &[bool; WORD_BITS] {
        &self.bits
    }

    /// Unsigned value: sum of `2^(31 - i)` over every set index `i`
    pub fn decimal_value(&self) -> u32 {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .fold(0u32, |acc, (index, _)| acc | (1u32 << (MAX_BIT_INDEX - index)))
    }

    /// Set bits as `(position, value)` pairs, most significant first
    pub fn active_bits(&self) -> ActiveBits<'_> {
        ActiveBits {
            bits: &self.bits,
            next_index: 0,
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&set| set).count()
    }

    /// Whether no bit is set
    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&set| set)
    }

    /// Clear every bit
    pub fn clear(&mut self) {
        self.bits = [false; WORD_BITS];
    }
}

impl BitPattern for BitField {
    fn low_word(&self) -> u32 {
        self.decimal_value()
    }

    fn bit_sequence(&self) -> [bool; WORD_BITS] {
        self.bits
    }
}

impl From<u32> for BitField {
    fn from(value: u32) -> Self {
        Self::from_value(value)
    }
}

/// A set bit and its place value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveBit {
    /// Bit position, 0 = least significant
    pub position: u8,
    /// Place value, `2^position`
    pub value: u32,
}

impl ActiveBit {
    /// Active bit at `position` (must be below 32)
    pub const fn new(position: u8) -> Self {
        Self {
            position,
            value: 1u32 << position,
        }
    }
}

/// Iterator over the set bits of a [`BitField`], descending position
pub struct ActiveBits<'a> {
    bits: &'a [bool; WORD_BITS],
    next_index: usize,
}

impl Iterator for ActiveBits<'_> {
    type Item = ActiveBit;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index < WORD_BITS {
            let index = self.next_index;
            self.next_index += 1;
            if self.bits[index] {
                return Some(ActiveBit::new((MAX_BIT_INDEX - index) as u8));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits[self.next_index..]
            .iter()
            .filter(|&&set| set)
            .count();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ActiveBits<'_> {}
