//! Error types for BITVIZ operations

/// Errors that can occur while feeding input events into the models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitvizError {
    /// Bit index outside 0..=31
    OutOfRangeIndex,
    /// Shift count outside 0..=31 (strict validation only)
    ShiftOutOfRange,
    /// Operand text that cannot be read as a decimal number (strict validation only)
    MalformedOperandText,
    /// Operation name that matches no known operation
    UnknownOperation,
}

/// Broad classification of a [`BitvizError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A value supplied by the caller was out of range or unreadable
    Input,
    /// A named selection did not resolve
    Selection,
}

impl BitvizError {
    /// Classify this error
    pub const fn category(self) -> ErrorCategory {
        match self {
            BitvizError::OutOfRangeIndex
            | BitvizError::ShiftOutOfRange
            | BitvizError::MalformedOperandText => ErrorCategory::Input,
            BitvizError::UnknownOperation => ErrorCategory::Selection,
        }
    }
}

impl core::fmt::Display for BitvizError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BitvizError::OutOfRangeIndex => "Bit index out of range (expected 0..=31)",
            BitvizError::ShiftOutOfRange => "Shift count out of range (expected 0..=31)",
            BitvizError::MalformedOperandText => "Operand text is not a decimal number",
            BitvizError::UnknownOperation => "Unknown operation",
        };
        write!(f, "{msg}")
    }
}

/// Result type for BITVIZ operations
pub type Result<T> = core::result::Result<T, BitvizError>;
