//! Operation catalogue for the bitwise demonstrator
//!
//! This module defines which operations exist, how they are named, which
//! inputs they read and how they are explained. Evaluation itself needs
//! arbitrary-precision integers and lives in the `bitviz` crate.

use crate::validation::parse_operation;
use crate::BitvizError;

/// Bitwise operation applied to operand A (and B for binary operations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    /// Bitwise conjunction of A and B
    #[default]
    And,
    /// Bitwise disjunction of A and B
    Or,
    /// Bitwise exclusive-or of A and B
    Xor,
    /// Signed complement of A, `-(A + 1)`
    NotA,
    /// A multiplied by `2^shift`
    LeftShiftA,
    /// A arithmetically shifted right by `shift`
    RightShiftA,
}

impl Operation {
    /// Every operation, in menu order
    pub const ALL: [Operation; 6] = [
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::NotA,
        Operation::LeftShiftA,
        Operation::RightShiftA,
    ];

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
            Operation::NotA => "NOT A",
            Operation::LeftShiftA => "Left Shift A",
            Operation::RightShiftA => "Right Shift A",
        }
    }

    /// Look up an operation by name
    pub fn from_name(name: &str) -> Result<Self, BitvizError> {
        parse_operation(name)
    }

    /// Whether the operation reads operand B
    pub const fn uses_operand_b(self) -> bool {
        matches!(self, Operation::And | Operation::Or | Operation::Xor)
    }

    /// Whether the operation reads the shift count
    pub const fn uses_shift(self) -> bool {
        matches!(self, Operation::LeftShiftA | Operation::RightShiftA)
    }

    /// Explanatory sentence for this operation
    pub fn explanation(self, shift_count: u8) -> Explanation {
        Explanation {
            operation: self,
            shift_count,
        }
    }

    /// Result heading, e.g. `Result (Left Shift A by 3)`
    pub fn result_label(self, shift_count: u8) -> ResultLabel {
        ResultLabel {
            operation: self,
            shift_count,
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Operation {
    type Err = BitvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_operation(s)
    }
}

/// Which operand an input event targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandSlot {
    A,
    B,
}

impl OperandSlot {
    /// Label shown next to the operand row
    pub const fn label(self) -> &'static str {
        match self {
            OperandSlot::A => "Number A",
            OperandSlot::B => "Number B",
        }
    }
}

impl core::fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display adapter for [`Operation::explanation`]
#[derive(Debug, Clone, Copy)]
pub struct Explanation {
    operation: Operation,
    shift_count: u8,
}

impl core::fmt::Display for Explanation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let count = self.shift_count;
        let plural = if count == 1 { "" } else { "s" };
        match self.operation {
            Operation::And => f.write_str("Sets each bit to 1 if both bits are 1."),
            Operation::Or => f.write_str("Sets each bit to 1 if at least one of two bits is 1."),
            Operation::Xor => f.write_str("Sets each bit to 1 if exactly one of two bits is 1."),
            Operation::NotA => {
                f.write_str("Inverts all the bits, changing 1s to 0s and vice versa.")
            }
            Operation::LeftShiftA => write!(
                f,
                "Shifts all bits to the left by {count} position{plural}. Rightmost bits become 0."
            ),
            Operation::RightShiftA => write!(
                f,
                "Shifts all bits to the right by {count} position{plural}. \
                 Leftmost bits are filled based on the sign (0 for positive numbers)."
            ),
        }
    }
}

/// Display adapter for [`Operation::result_label`]
#[derive(Debug, Clone, Copy)]
pub struct ResultLabel {
    operation: Operation,
    shift_count: u8,
}

impl core::fmt::Display for ResultLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.operation.uses_shift() {
            write!(f, "Result ({} by {})", self.operation, self.shift_count)
        } else {
            write!(f, "Result ({})", self.operation)
        }
    }
}
