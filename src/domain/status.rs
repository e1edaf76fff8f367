// ============================================================================
// Call Outcome and Status
// Result taxonomy returned once per transform call
// ============================================================================

use crate::numeric::{TransformError, TransformResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a call that passed its structural checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Every element was transformed exactly
    Applied,
    /// At least one element left the target range and was clamped
    OverflowClamped,
    /// Offset by zero: nothing was written
    OperandZero,
}

impl Outcome {
    /// Fold an element-level event into the call outcome.
    ///
    /// Once any element clamped, the whole call reports it.
    #[inline]
    pub fn merge(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::OverflowClamped, _) | (_, Outcome::OverflowClamped) => {
                Outcome::OverflowClamped
            },
            (Outcome::OperandZero, _) | (_, Outcome::OperandZero) => Outcome::OperandZero,
            _ => Outcome::Applied,
        }
    }

    pub const fn is_warning(self) -> bool {
        !matches!(self, Outcome::Applied)
    }
}

/// Flat status code covering both outcomes and structural errors.
///
/// Discriminants are stable and shared with the C ABI. The first four match
/// the codes used by existing C callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum Status {
    Ok = 0,
    ErrorNullPointer = 1,
    ErrorEmptySequence = 2,
    ErrorInvalidInput = 3,
    WarningOverflowClamped = 4,
    WarningOperandZero = 5,
}

impl Status {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::ErrorNullPointer),
            2 => Some(Status::ErrorEmptySequence),
            3 => Some(Status::ErrorInvalidInput),
            4 => Some(Status::WarningOverflowClamped),
            5 => Some(Status::WarningOperandZero),
            _ => None,
        }
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }

    pub const fn is_warning(self) -> bool {
        matches!(
            self,
            Status::WarningOverflowClamped | Status::WarningOperandZero
        )
    }

    /// Structural error: the sequence was not touched.
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            Status::ErrorNullPointer | Status::ErrorEmptySequence | Status::ErrorInvalidInput
        )
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Applied => Status::Ok,
            Outcome::OverflowClamped => Status::WarningOverflowClamped,
            Outcome::OperandZero => Status::WarningOperandZero,
        }
    }
}

impl From<TransformError> for Status {
    fn from(error: TransformError) -> Self {
        match error {
            TransformError::NullSequence => Status::ErrorNullPointer,
            TransformError::EmptySequence => Status::ErrorEmptySequence,
            TransformError::InvalidRange => Status::ErrorInvalidInput,
        }
    }
}

impl From<TransformResult> for Status {
    fn from(result: TransformResult) -> Self {
        match result {
            Ok(outcome) => outcome.into(),
            Err(error) => error.into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Ok => "ok",
            Status::ErrorNullPointer => "error: null pointer",
            Status::ErrorEmptySequence => "error: empty sequence",
            Status::ErrorInvalidInput => "error: invalid input",
            Status::WarningOverflowClamped => "warning: overflow occurred, values clamped",
            Status::WarningOperandZero => "warning: operand is zero, nothing done",
        };
        f.write_str(text)
    }
}
