// ============================================================================
// Target Width
// Clamp range table mapping a declared bit-width to its representable bounds
// ============================================================================

use super::element::Element;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signedness of a declared target width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Declared logical width of the transformed data.
///
/// The target width selects the range every element must end up in after a
/// scale or offset, independently of the native storage type. Storing 8-bit
/// sensor readings in a `Vec<i32>` and transforming against `TargetWidth::I8`
/// keeps every result inside `[-128, 127]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetWidth {
    I8,
    I16,
    #[default]
    I32,
    U8,
    U16,
    U32,
}

impl TargetWidth {
    /// All widths, in code order
    pub const ALL: [TargetWidth; 6] = [
        TargetWidth::I8,
        TargetWidth::I16,
        TargetWidth::I32,
        TargetWidth::U8,
        TargetWidth::U16,
        TargetWidth::U32,
    ];

    /// Build a width from a bit count and signedness.
    ///
    /// Returns `None` for bit counts other than 8, 16 and 32.
    pub const fn new(bits: u32, signedness: Signedness) -> Option<Self> {
        match (bits, signedness) {
            (8, Signedness::Signed) => Some(TargetWidth::I8),
            (16, Signedness::Signed) => Some(TargetWidth::I16),
            (32, Signedness::Signed) => Some(TargetWidth::I32),
            (8, Signedness::Unsigned) => Some(TargetWidth::U8),
            (16, Signedness::Unsigned) => Some(TargetWidth::U16),
            (32, Signedness::Unsigned) => Some(TargetWidth::U32),
            _ => None,
        }
    }

    /// Number of bits
    pub const fn bits(self) -> u32 {
        match self {
            TargetWidth::I8 | TargetWidth::U8 => 8,
            TargetWidth::I16 | TargetWidth::U16 => 16,
            TargetWidth::I32 | TargetWidth::U32 => 32,
        }
    }

    pub const fn signedness(self) -> Signedness {
        match self {
            TargetWidth::I8 | TargetWidth::I16 | TargetWidth::I32 => Signedness::Signed,
            TargetWidth::U8 | TargetWidth::U16 | TargetWidth::U32 => Signedness::Unsigned,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self.signedness(), Signedness::Signed)
    }

    /// Canonical `(min, max)` of this width.
    pub const fn limits(self) -> (i64, i64) {
        match self {
            TargetWidth::I8 => (i8::MIN as i64, i8::MAX as i64),
            TargetWidth::I16 => (i16::MIN as i64, i16::MAX as i64),
            TargetWidth::I32 => (i32::MIN as i64, i32::MAX as i64),
            TargetWidth::U8 => (0, u8::MAX as i64),
            TargetWidth::U16 => (0, u16::MAX as i64),
            TargetWidth::U32 => (0, u32::MAX as i64),
        }
    }

    /// Effective bounds for a sequence stored as `T`.
    ///
    /// This is the intersection of the width's canonical range with the
    /// native range of `T`, so every (storage, width) pair has a defined,
    /// non-empty range containing zero.
    pub fn bounds<T: Element>(self) -> Bounds<T> {
        let (min, max) = self.limits();
        Bounds {
            min: T::saturating_from_i64(min),
            max: T::saturating_from_i64(max),
        }
    }

    /// Stable numeric code used across the C ABI.
    pub const fn code(self) -> u8 {
        match self {
            TargetWidth::I8 => 0,
            TargetWidth::I16 => 1,
            TargetWidth::I32 => 2,
            TargetWidth::U8 => 3,
            TargetWidth::U16 => 4,
            TargetWidth::U32 => 5,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TargetWidth::I8),
            1 => Some(TargetWidth::I16),
            2 => Some(TargetWidth::I32),
            3 => Some(TargetWidth::U8),
            4 => Some(TargetWidth::U16),
            5 => Some(TargetWidth::U32),
            _ => None,
        }
    }
}

impl fmt::Display for TargetWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_signed() { "int" } else { "uint" };
        write!(f, "{}{}", prefix, self.bits())
    }
}

/// Inclusive `[min, max]` range in native storage units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Element> Bounds<T> {
    /// Build a range, rejecting `min > max`.
    pub fn new(min: T, max: T) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// The full native range of `T`
    pub const fn native() -> Self {
        Self {
            min: T::MIN,
            max: T::MAX,
        }
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Move `value` to the nearest bound if it lies outside the range.
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}
