// ============================================================================
// Sequence Element
// Native storage types the transform engine operates on
// ============================================================================

use super::overflow::{self, Excursion};
use super::width::Bounds;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer that can be stored in a transformable sequence.
///
/// Implemented for `i8`, `i16`, `i32`, `i64` and `u8`, `u16`, `u32`, `u64`.
/// The trait is sealed: the overflow predicates rely on the exact semantics
/// of primitive integer division and comparison.
///
/// Signed and unsigned types share one engine; the only thing that differs
/// is which overflow predicate `mul_excursion` / `add_excursion` route to.
pub trait Element:
    sealed::Sealed
    + Copy
    + Ord
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Zero value
    const ZERO: Self;

    /// Smallest value of the native storage type
    const MIN: Self;

    /// Largest value of the native storage type
    const MAX: Self;

    /// Whether the native storage type is signed
    const SIGNED: bool;

    /// Convert from `i64`, saturating at the native range.
    fn saturating_from_i64(value: i64) -> Self;

    /// Convert from `i128`, saturating at the native range.
    fn saturating_from_i128(value: i128) -> Self;

    /// Lossless widening to `i128`.
    fn to_i128(self) -> i128;

    /// Subtraction that reports native overflow as `None`.
    fn checked_sub_val(self, rhs: Self) -> Option<Self>;

    /// Classify `self * factor` against `bounds` without multiplying.
    fn mul_excursion(self, factor: Self, bounds: Bounds<Self>) -> Excursion;

    /// Classify `self + operand` against `bounds` without adding.
    fn add_excursion(self, operand: Self, bounds: Bounds<Self>) -> Excursion;
}

macro_rules! impl_element {
    ($signed:expr, $mul:path, $add:path; $($t:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Element for $t {
                const ZERO: Self = 0;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const SIGNED: bool = $signed;

                #[inline]
                fn saturating_from_i64(value: i64) -> Self {
                    <$t>::try_from(value).unwrap_or(if value < 0 { <$t>::MIN } else { <$t>::MAX })
                }

                #[inline]
                fn saturating_from_i128(value: i128) -> Self {
                    <$t>::try_from(value).unwrap_or(if value < 0 { <$t>::MIN } else { <$t>::MAX })
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn checked_sub_val(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn mul_excursion(self, factor: Self, bounds: Bounds<Self>) -> Excursion {
                    $mul(self, factor, bounds)
                }

                #[inline]
                fn add_excursion(self, operand: Self, bounds: Bounds<Self>) -> Excursion {
                    $add(self, operand, bounds)
                }
            }
        )+
    };
}

impl_element!(
    true,
    overflow::signed_mul_excursion,
    overflow::signed_add_excursion;
    i8, i16, i32, i64
);

impl_element!(
    false,
    overflow::unsigned_mul_excursion,
    overflow::unsigned_add_excursion;
    u8, u16, u32, u64
);
