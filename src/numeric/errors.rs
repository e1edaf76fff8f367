// ============================================================================
// Transform Errors
// Structural failures detected before any element is touched
// ============================================================================

use crate::domain::Outcome;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structural errors that reject a call before the sequence is mutated.
///
/// When one of these is returned the sequence is guaranteed to be unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransformError {
    /// The sequence reference was null (raw pointer boundary only)
    NullSequence,
    /// The sequence has zero elements
    EmptySequence,
    /// Invalid parameters, e.g. a clamp range with min > max
    InvalidRange,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::NullSequence => write!(f, "null sequence: no elements to transform"),
            TransformError::EmptySequence => write!(f, "empty sequence: size is zero"),
            TransformError::InvalidRange => {
                write!(f, "invalid input: minimum bound exceeds maximum bound")
            },
        }
    }
}

impl std::error::Error for TransformError {}

/// Result type alias for transform operations
pub type TransformResult<T = Outcome> = Result<T, TransformError>;
