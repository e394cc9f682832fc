//! Abstract interfaces for the bit model
//!
//! Anything that can be shown as a 32-bit row implements [`BitPattern`].

pub mod pattern;

pub use pattern::{BitPattern, BitString, GroupedBits};
