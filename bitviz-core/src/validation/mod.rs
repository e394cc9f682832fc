//! Input validation utilities for the bit visualizer
//!
//! This module contains pure validation and coercion functions with no I/O
//! dependencies. Each input has a permissive path (coerce silently) and a
//! strict path (reject with a [`crate::BitvizError`]).

pub mod bounds;
pub mod parsing;

pub use bounds::{bit_position, clamp_shift_count, validate_bit_index, validate_shift_count};
pub use parsing::{has_digit, parse_operation, parse_shift_text, validate_operand_text};
#[cfg(feature = "alloc")]
pub use parsing::sanitize_operand_text;
