//! Bitwise operation demonstrator session
//!
//! Holds operands A and B, the selected [`Operation`] and the shift count.
//! Every query re-evaluates from current state.
//!
//! `NOT A` uses signed infinite-precision complement: the result is
//! `-(A + 1)`, so `NOT 0` is `-1` and renders as 32 ones. Shifts never
//! truncate; only the 32-bit display does.

use bitviz_core::constants::MAX_SHIFT_COUNT;
use bitviz_core::{
    clamp_shift_count, has_digit, parse_shift_text, BitPattern, BitString, OperandSlot,
    Operation, Result,
};
use log::{debug, trace, warn};

use crate::config::VisualizerConfig;
use crate::format::format_decimal;
use crate::operand::{Operand, WideValue};
use crate::view::{BitRow, OperationView};

/// Interactive bitwise operation session
#[derive(Debug, Clone)]
pub struct BitwiseOperationModel {
    a: Operand,
    b: Operand,
    operation: Operation,
    shift_count: u8,
    config: VisualizerConfig,
}

impl BitwiseOperationModel {
    /// Start a session with default configuration
    pub fn new() -> Self {
        Self::with_config(VisualizerConfig::default())
    }

    /// Start a session using `config` for defaults and input policy
    pub fn with_config(config: VisualizerConfig) -> Self {
        let config = config.normalized();
        Self {
            a: Operand::zero(),
            b: Operand::zero(),
            operation: config.default_operation,
            shift_count: config.default_shift_count,
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Current value of an operand
    pub fn operand(&self, slot: OperandSlot) -> &Operand {
        match slot {
            OperandSlot::A => &self.a,
            OperandSlot::B => &self.b,
        }
    }

    /// Replace an operand
    pub fn set_operand(&mut self, slot: OperandSlot, operand: Operand) {
        debug!("set {slot} to {operand}");
        *self.operand_mut(slot) = operand;
    }

    /// Replace an operand from user text
    ///
    /// In the default permissive mode non-digits are stripped and the call
    /// never fails. With `strict_operands` enabled, malformed text is
    /// rejected and the operand keeps its previous value.
    pub fn set_operand_text(&mut self, slot: OperandSlot, text: &str) -> Result<&Operand> {
        let operand = if self.config.strict_operands {
            Operand::parse_strict(text).map_err(|e| {
                warn!("rejected {slot} text {text:?}: {e}");
                e
            })?
        } else {
            let operand = Operand::parse_lossy(text);
            if !text.bytes().all(|b| b.is_ascii_digit()) {
                if has_digit(text) {
                    warn!("stripped non-digits from {slot} text {text:?}, read as {operand}");
                } else if !text.is_empty() {
                    warn!("{slot} text {text:?} has no digits, read as 0");
                }
            }
            operand
        };

        debug!("set {slot} to {operand}");
        let target = self.operand_mut(slot);
        *target = operand;
        Ok(&*target)
    }

    /// Select an operation by name; unknown names leave the selection unchanged
    pub fn select_operation(&mut self, name: &str) -> Result<Operation> {
        match Operation::from_name(name) {
            Ok(operation) => {
                self.set_operation(operation);
                Ok(operation)
            }
            Err(e) => {
                warn!("rejected operation name {name:?}: {e}");
                Err(e)
            }
        }
    }

    /// Select an operation
    pub fn set_operation(&mut self, operation: Operation) {
        debug!("selected operation {operation}");
        self.operation = operation;
    }

    /// The selected operation
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Set the shift count, clamping into 0..=31
    ///
    /// Returns the stored count.
    pub fn set_shift_count(&mut self, count: i64) -> u8 {
        let clamped = clamp_shift_count(count);
        if i64::from(clamped) != count {
            warn!("shift count {count} out of range, clamped to {clamped}");
        }
        debug!("set shift count to {clamped}");
        self.shift_count = clamped;
        clamped
    }

    /// Set the shift count from user text (leading integer, then clamped)
    pub fn set_shift_text(&mut self, text: &str) -> u8 {
        self.set_shift_count(parse_shift_text(text))
    }

    /// Raise the shift count by one, saturating at 31
    pub fn increment_shift(&mut self) -> u8 {
        self.set_shift_count(i64::from(self.shift_count.saturating_add(1).min(MAX_SHIFT_COUNT)))
    }

    /// Lower the shift count by one, saturating at 0
    pub fn decrement_shift(&mut self) -> u8 {
        self.set_shift_count(i64::from(self.shift_count.saturating_sub(1)))
    }

    /// The current shift count
    pub fn shift_count(&self) -> u8 {
        self.shift_count
    }

    /// Reset operands, operation and shift count to the configured defaults
    pub fn clear(&mut self) {
        debug!("cleared bitwise session");
        self.a = Operand::zero();
        self.b = Operand::zero();
        self.operation = self.config.default_operation;
        self.shift_count = self.config.default_shift_count;
    }

    /// Evaluate the selected operation on the current state
    pub fn compute(&self) -> WideValue {
        let a = self.a.to_bigint();
        let shift = usize::from(self.shift_count);
        let value = match self.operation {
            Operation::And => &a & &self.b.to_bigint(),
            Operation::Or => &a | &self.b.to_bigint(),
            Operation::Xor => &a ^ &self.b.to_bigint(),
            Operation::NotA => !a,
            Operation::LeftShiftA => a << shift,
            // BigInt right shift rounds toward negative infinity
            Operation::RightShiftA => a >> shift,
        };
        trace!("computed {} = {value}", self.operation);
        WideValue::new(value)
    }

    /// 32-bit rendering of an operand
    pub fn operand_bit_sequence(&self, slot: OperandSlot) -> BitString {
        self.operand(slot).render_bits()
    }

    /// 32-bit rendering of the result
    pub fn result_bit_sequence(&self) -> BitString {
        self.compute().render_bits()
    }

    /// Heading for the result row
    pub fn result_label(&self) -> String {
        self.operation.result_label(self.shift_count).to_string()
    }

    /// Explanation of the selected operation
    pub fn explanation(&self) -> String {
        self.operation.explanation(self.shift_count).to_string()
    }

    /// Derive a snapshot of the current state
    pub fn view(&self) -> OperationView {
        let group = self.config.group_digits;
        let result = self.compute();
        let row = |slot: OperandSlot| {
            let operand = self.operand(slot);
            BitRow::new(
                slot.label(),
                format_decimal(operand, group),
                operand,
                operand.exceeds_word(),
            )
        };

        OperationView {
            operation: self.operation,
            shift_count: self.operation.uses_shift().then_some(self.shift_count),
            a: row(OperandSlot::A),
            b: self.operation.uses_operand_b().then(|| row(OperandSlot::B)),
            result: BitRow::new(
                self.result_label(),
                format_decimal(&result, group),
                &result,
                result.exceeds_word(),
            ),
            explanation: self.explanation(),
        }
    }

    fn operand_mut(&mut self, slot: OperandSlot) -> &mut Operand {
        match slot {
            OperandSlot::A => &mut self.a,
            OperandSlot::B => &mut self.b,
        }
    }
}

impl Default for BitwiseOperationModel {
    fn default() -> Self {
        Self::new()
    }
}
