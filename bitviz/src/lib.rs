//! BITVIZ - Binary-to-Decimal Converter and Bitwise Operation Models
//!
//! This library provides the state models behind an educational bit
//! visualizer: a 32-bit field whose bits are toggled one at a time, and a
//! bitwise operation session over arbitrary-precision operands.
//!
//! ## Architecture
//!
//! - **bitviz-core**: bit field, operation catalogue, display convention and
//!   input validation (no_std, no big integers)
//! - **bitviz**: arbitrary-precision operands, session models, configuration
//!   and serializable views
//!
//! ## Quick Start
//!
//! ```rust
//! use bitviz::{BitFieldModel, BitwiseOperationModel, OperandSlot};
//!
//! let mut converter = BitFieldModel::new();
//! converter.toggle_bit(0).unwrap();
//! converter.toggle_bit(31).unwrap();
//! assert_eq!(converter.decimal_value(), 2_147_483_649);
//!
//! let mut session = BitwiseOperationModel::new();
//! session.set_operand_text(OperandSlot::A, "255").unwrap();
//! session.set_operand_text(OperandSlot::B, "15").unwrap();
//! session.select_operation("XOR").unwrap();
//! assert_eq!(session.compute().to_string(), "240");
//! assert_eq!(
//!     session.result_bit_sequence().as_str(),
//!     "00000000000000000000000011110000"
//! );
//! ```
//!
//! ## Display policy
//!
//! Every row is exactly 32 characters: the low 32 bits of the value's
//! two's-complement representation. Values that need more bits, and
//! negative results of `NOT A`, are flagged as truncated in views.

// Re-export core abstractions
pub use bitviz_core::{
    // Bit model
    ActiveBit, BitField,
    // Display convention
    BitPattern, BitString,
    // Operations
    OperandSlot, Operation,
    // Error handling
    BitvizError, ErrorCategory,
};

pub mod bit_field_model;
pub mod bitwise_model;
pub mod config;
pub mod error;
pub mod format;
pub mod operand;
pub mod render;
pub mod view;

pub use bit_field_model::BitFieldModel;
pub use bitwise_model::BitwiseOperationModel;
pub use config::VisualizerConfig;
pub use error::{Result, VisualizerError};
pub use operand::{Operand, WideValue};
pub use view::{ActiveBitRow, BitRow, ConverterView, OperationView};
