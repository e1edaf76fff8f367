// ============================================================================
// Overflow Predicates
// Decide whether scale/offset would leave the target range, without
// performing the arithmetic
// ============================================================================
//
// Every check below uses only division, checked subtraction and comparison,
// so none of them can itself overflow in the native type. Division never
// sees `MIN / -1`: either the divisor is positive or the dividend is `max`.

use super::element::Element;
use super::width::{Bounds, TargetWidth};

/// Where the true mathematical result of an operation lies relative to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Excursion {
    /// Result is representable in the range
    Within,
    /// Result is greater than the range maximum
    Above,
    /// Result is less than the range minimum
    Below,
}

impl Excursion {
    #[inline]
    pub const fn is_overflow(self) -> bool {
        !matches!(self, Excursion::Within)
    }

    /// Boundary value an overflowing element is clamped to.
    #[inline]
    pub fn boundary<T: Element>(self, bounds: Bounds<T>) -> Option<T> {
        match self {
            Excursion::Within => None,
            Excursion::Above => Some(bounds.max),
            Excursion::Below => Some(bounds.min),
        }
    }
}

/// Arithmetic operation checked by the predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arithmetic {
    /// `value * operand` (scale)
    Multiply,
    /// `value + operand` (offset)
    Add,
}

/// Classify `value <op> operand` against the range of `width`.
pub fn excursion<T: Element>(value: T, operand: T, op: Arithmetic, width: TargetWidth) -> Excursion {
    let bounds = width.bounds::<T>();
    match op {
        Arithmetic::Multiply => value.mul_excursion(operand, bounds),
        Arithmetic::Add => value.add_excursion(operand, bounds),
    }
}

/// Would `value <op> operand` fall outside the range of `width`?
#[inline]
pub fn would_overflow<T: Element>(value: T, operand: T, op: Arithmetic, width: TargetWidth) -> bool {
    excursion(value, operand, op, width).is_overflow()
}

#[inline]
fn position<T: Element>(value: T, bounds: Bounds<T>) -> Excursion {
    if value > bounds.max {
        Excursion::Above
    } else if value < bounds.min {
        Excursion::Below
    } else {
        Excursion::Within
    }
}

// ============================================================================
// Signed
// ============================================================================

/// Signed multiply check.
///
/// The sign of the product is known up front, so only one side of the range
/// can be crossed. Requires `bounds.min <= 0 <= bounds.max`.
pub fn signed_mul_excursion<T: Element>(value: T, factor: T, bounds: Bounds<T>) -> Excursion {
    let zero = T::ZERO;
    if value == zero || factor == zero {
        return Excursion::Within;
    }

    let overflow = match (value > zero, factor > zero) {
        (true, true) => value > bounds.max / factor,
        (false, false) => value < bounds.max / factor,
        (true, false) => factor < bounds.min / value,
        (false, true) => value < bounds.min / factor,
    };

    if !overflow {
        Excursion::Within
    } else if (value > zero) == (factor > zero) {
        Excursion::Above
    } else {
        Excursion::Below
    }
}

/// Signed add check.
///
/// Besides the usual `v > max - f` / `v < min - f` tests, an element that
/// already sits outside the range is reported even when the operand moves it
/// the other way but not far enough.
pub fn signed_add_excursion<T: Element>(value: T, operand: T, bounds: Bounds<T>) -> Excursion {
    let zero = T::ZERO;
    if operand > zero {
        // v + f > max  <=>  v > max - f
        match bounds.max.checked_sub_val(operand) {
            Some(ceiling) if value <= ceiling => {},
            _ => return Excursion::Above,
        }
        // min - f below the native range: nothing can end up below min
        match bounds.min.checked_sub_val(operand) {
            Some(floor) if value < floor => Excursion::Below,
            _ => Excursion::Within,
        }
    } else if operand < zero {
        // v + f < min  <=>  v < min - f; min - f above the native range
        // (unsigned target on signed storage) means every value is below
        match bounds.min.checked_sub_val(operand) {
            Some(floor) if value >= floor => {},
            _ => return Excursion::Below,
        }
        match bounds.max.checked_sub_val(operand) {
            Some(ceiling) if value > ceiling => Excursion::Above,
            _ => Excursion::Within,
        }
    } else {
        position(value, bounds)
    }
}

// ============================================================================
// Unsigned
// ============================================================================

/// Unsigned multiply check: `v > max / f` for nonzero `f`.
pub fn unsigned_mul_excursion<T: Element>(value: T, factor: T, bounds: Bounds<T>) -> Excursion {
    if factor == T::ZERO {
        return Excursion::Within;
    }
    if value > bounds.max / factor {
        Excursion::Above
    } else {
        Excursion::Within
    }
}

/// Unsigned add check: `v > max - f`.
///
/// An operand larger than `max` overflows for every value.
pub fn unsigned_add_excursion<T: Element>(value: T, operand: T, bounds: Bounds<T>) -> Excursion {
    match bounds.max.checked_sub_val(operand) {
        Some(headroom) if value <= headroom => Excursion::Within,
        _ => Excursion::Above,
    }
}
