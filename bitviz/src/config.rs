//! Session configuration for the visualizer models

use bitviz_core::constants::DEFAULT_SHIFT_COUNT;
use bitviz_core::{clamp_shift_count, Operation};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Defaults and input policy applied when a session starts or is cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Operation selected at start and after `clear()`
    pub default_operation: Operation,
    /// Shift count used at start and after `clear()` (0..=31)
    pub default_shift_count: u8,
    /// Reject operand text containing non-digits instead of stripping them
    pub strict_operands: bool,
    /// Insert thousands separators into decimal strings of views
    pub group_digits: bool,
}

impl VisualizerConfig {
    /// Config that rejects malformed operand text
    pub fn strict() -> Self {
        Self::default().with_strict_operands(true)
    }

    /// Load a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Set the default operation
    pub fn with_default_operation(mut self, operation: Operation) -> Self {
        self.default_operation = operation;
        self
    }

    /// Set the default shift count, clamped into 0..=31
    pub fn with_default_shift_count(mut self, shift_count: i64) -> Self {
        self.default_shift_count = clamp_shift_count(shift_count);
        self
    }

    /// Choose strict or permissive operand parsing
    pub fn with_strict_operands(mut self, strict: bool) -> Self {
        self.strict_operands = strict;
        self
    }

    /// Choose whether decimal strings are grouped with separators
    pub fn with_group_digits(mut self, group: bool) -> Self {
        self.group_digits = group;
        self
    }

    pub(crate) fn normalized(mut self) -> Self {
        let clamped = clamp_shift_count(i64::from(self.default_shift_count));
        if clamped != self.default_shift_count {
            warn!(
                "default_shift_count {} out of range, clamped to {clamped}",
                self.default_shift_count
            );
            self.default_shift_count = clamped;
        }
        self
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            default_operation: Operation::And,
            default_shift_count: DEFAULT_SHIFT_COUNT,
            strict_operands: false,
            group_digits: true,
        }
    }
}
