#![no_std]

//! BITVIZ Core - 32-bit Bit Field Model and Operation Definitions
//!
//! This crate provides the fixed-width bit model, the operation catalogue
//! and pure input validation for the bit visualizer. It has no I/O and no
//! arbitrary-precision arithmetic; those live in the `bitviz` crate.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bit_field;
pub mod constants;
pub mod error;
pub mod operation;
pub mod traits;
pub mod validation;

pub use bit_field::*;
pub use error::*;
pub use operation::*;
pub use traits::*;
pub use validation::{
    clamp_shift_count, has_digit, parse_operation, parse_shift_text, validate_bit_index,
    validate_operand_text, validate_shift_count,
};
#[cfg(feature = "alloc")]
pub use validation::sanitize_operand_text;
