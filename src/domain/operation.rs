// ============================================================================
// Operation
// The three elementwise transforms and their operands
// ============================================================================

use crate::numeric::{Arithmetic, Element};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operation tag without operands (for events and logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationKind {
    Clamp,
    Scale,
    Offset,
}

impl OperationKind {
    /// The arithmetic checked by the overflow predicates, if any.
    pub const fn arithmetic(self) -> Option<Arithmetic> {
        match self {
            OperationKind::Clamp => None,
            OperationKind::Scale => Some(Arithmetic::Multiply),
            OperationKind::Offset => Some(Arithmetic::Add),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OperationKind::Clamp => "clamp",
            OperationKind::Scale => "scale",
            OperationKind::Offset => "offset",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An elementwise transform with its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<T: Element> {
    /// Bound every element to `[min, max]`
    Clamp { min: T, max: T },
    /// Multiply every element by `factor`
    Scale { factor: T },
    /// Add `operand` to every element
    Offset { operand: T },
}

impl<T: Element> Operation<T> {
    pub const fn kind(&self) -> OperationKind {
        match self {
            Operation::Clamp { .. } => OperationKind::Clamp,
            Operation::Scale { .. } => OperationKind::Scale,
            Operation::Offset { .. } => OperationKind::Offset,
        }
    }
}

impl<T: Element> fmt::Display for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Clamp { min, max } => write!(f, "clamp to [{}, {}]", min, max),
            Operation::Scale { factor } => write!(f, "scale by {}", factor),
            Operation::Offset { operand } => write!(f, "offset by {}", operand),
        }
    }
}
