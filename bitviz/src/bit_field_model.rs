//! Binary-to-decimal converter session
//!
//! Wraps a [`BitField`] with logging and view derivation. The field itself
//! carries the semantics; this layer only reacts to events.

use bitviz_core::constants::WORD_BITS;
use bitviz_core::{ActiveBit, BitField, BitPattern, BitString, Result};
use log::{debug, trace, warn};

use crate::config::VisualizerConfig;
use crate::format::format_decimal;
use crate::view::{ActiveBitRow, BitRow, ConverterView};

/// Interactive 32-bit converter
#[derive(Debug, Clone)]
pub struct BitFieldModel {
    field: BitField,
    group_digits: bool,
}

impl BitFieldModel {
    /// Start with every bit cleared
    pub fn new() -> Self {
        Self::with_config(&VisualizerConfig::default())
    }

    /// Start with every bit cleared, formatting views per `config`
    pub fn with_config(config: &VisualizerConfig) -> Self {
        Self {
            field: BitField::new(),
            group_digits: config.group_digits,
        }
    }

    /// Flip the bit at `index` (0 = most significant)
    pub fn toggle_bit(&mut self, index: usize) -> Result<()> {
        match self.field.toggle_bit(index) {
            Ok(()) => {
                debug!(
                    "toggled bit index {index} (position {}), value now {}",
                    WORD_BITS - 1 - index,
                    self.field.decimal_value()
                );
                Ok(())
            }
            Err(e) => {
                warn!("rejected toggle of bit index {index}: {e}");
                Err(e)
            }
        }
    }

    /// Replace every bit so the field equals `value`
    pub fn set_value(&mut self, value: u32) {
        debug!("set field value to {value}");
        self.field = BitField::from_value(value);
    }

    /// Clear every bit
    pub fn clear(&mut self) {
        debug!("cleared bit field");
        self.field.clear();
    }

    /// Unsigned value of the field
    pub fn decimal_value(&self) -> u32 {
        self.field.decimal_value()
    }

    /// Set bits, most significant first
    pub fn active_bits(&self) -> Vec<ActiveBit> {
        self.field.active_bits().collect()
    }

    /// Bits, index 0 (position 31) first
    pub fn bit_sequence(&self) -> [bool; WORD_BITS] {
        *self.field.bits()
    }

    /// The field rendered as 32 binary digits
    pub fn render_bits(&self) -> BitString {
        self.field.render_bits()
    }

    /// The underlying field
    pub fn field(&self) -> &BitField {
        &self.field
    }

    /// Derive a snapshot of the current state
    pub fn view(&self) -> ConverterView {
        let value = self.field.decimal_value();
        trace!("deriving converter view for {value}");

        let decimal = format_decimal(&value, self.group_digits);
        ConverterView {
            value,
            bits: BitRow::new("Bits", decimal.clone(), &self.field, false),
            decimal,
            active_bits: self
                .field
                .active_bits()
                .map(|bit| ActiveBitRow::new(bit, self.group_digits))
                .collect(),
        }
    }
}

impl Default for BitFieldModel {
    fn default() -> Self {
        Self::new()
    }
}
