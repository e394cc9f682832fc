//! Serializable snapshots of model state
//!
//! Views are re-derived from the model after every event; nothing in them
//! is patched incrementally. They serialize to JSON for external front
//! ends and implement `Display` for terminal output.

use bitviz_core::{ActiveBit, BitPattern, Operation};
use serde::Serialize;

use crate::format::{format_decimal, power_of_two};

/// One labelled 32-bit row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitRow {
    /// Row heading
    pub label: String,
    /// Full decimal value (not truncated)
    pub decimal: String,
    /// 32 binary digits, position 31 first
    pub bits: String,
    /// Binary digits split into bytes
    pub grouped_bits: String,
    /// Whether the row hides bits of the decimal value (negative or wider than 32 bits)
    pub truncated: bool,
}

impl BitRow {
    /// Build a row from any 32-bit displayable value
    pub fn new(
        label: impl Into<String>,
        decimal: String,
        pattern: &impl BitPattern,
        truncated: bool,
    ) -> Self {
        let bits = pattern.render_bits();
        Self {
            label: label.into(),
            decimal,
            bits: bits.to_string(),
            grouped_bits: bits.grouped().to_string(),
            truncated,
        }
    }
}

impl std::fmt::Display for BitRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (decimal: {})", self.label, self.decimal)?;
        write!(f, "  {}", self.grouped_bits)?;
        if self.truncated {
            write!(f, "  [low 32 bits]")?;
        }
        Ok(())
    }
}

/// Row of the active-bit table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveBitRow {
    /// Bit position
    pub position: u8,
    /// Power-of-two notation, e.g. `2^5`
    pub power: String,
    /// Place value in decimal
    pub value: String,
}

impl ActiveBitRow {
    /// Build a table row from an active bit
    pub fn new(bit: ActiveBit, group: bool) -> Self {
        Self {
            position: bit.position,
            power: power_of_two(bit.position),
            value: format_decimal(&bit.value, group),
        }
    }
}

/// Snapshot of a binary-to-decimal converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConverterView {
    /// Unsigned value of the field
    pub value: u32,
    /// `value` formatted for display
    pub decimal: String,
    /// The bit row
    pub bits: BitRow,
    /// Set bits, most significant first
    pub active_bits: Vec<ActiveBitRow>,
}

impl std::fmt::Display for ConverterView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Decimal Value: {}", self.decimal)?;
        writeln!(f, "{}", self.bits)?;
        if self.active_bits.is_empty() {
            return Ok(());
        }
        writeln!(f, "Active Bits:")?;
        writeln!(f, "  {:<14}{:<12}{}", "Bit Position", "Power of 2", "Decimal Value")?;
        for row in &self.active_bits {
            writeln!(f, "  {:<14}{:<12}{}", row.position, row.power, row.value)?;
        }
        Ok(())
    }
}

/// Snapshot of a bitwise operation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationView {
    /// Selected operation
    pub operation: Operation,
    /// Shift count, present only for shift operations
    pub shift_count: Option<u8>,
    /// Operand A row
    pub a: BitRow,
    /// Operand B row, present only for operations that read B
    pub b: Option<BitRow>,
    /// Result row
    pub result: BitRow,
    /// Explanatory sentence
    pub explanation: String,
}

impl std::fmt::Display for OperationView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.a)?;
        if let Some(b) = &self.b {
            writeln!(f, "{b}")?;
        }
        writeln!(f, "{}", "-".repeat(35))?;
        writeln!(f, "{}", self.result)?;
        writeln!(f)?;
        write!(f, "{}", self.explanation)
    }
}
