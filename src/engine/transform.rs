// ============================================================================
// Transform Kernels
// In-place clamp, scale and offset over a caller-owned sequence
// ============================================================================
//
// Each call is one bounded pass in index order. Structural checks run before
// the first write; overflow is handled per element as it is discovered, so a
// clamped call still applies every non-overflowing element.

use crate::domain::{Operation, Outcome};
use crate::numeric::{Arithmetic, Bounds, Element, TargetWidth, TransformError, TransformResult};

/// Clamp every element of `seq` to `[min, max]`.
///
/// # Errors
/// - `EmptySequence` if `seq` is empty
/// - `InvalidRange` if `min > max`
///
/// # Example
/// ```
/// use array_transform::engine::clamp;
/// use array_transform::domain::Outcome;
///
/// let mut data = [-8, -9, 12, 9, 1, 8, 5, 7, 3];
/// assert_eq!(clamp(&mut data, 3, 6), Ok(Outcome::Applied));
/// assert_eq!(data, [3, 3, 6, 6, 3, 6, 5, 6, 3]);
/// ```
pub fn clamp<T: Element>(seq: &mut [T], min: T, max: T) -> TransformResult {
    clamp_with(seq, min, max, |_, _, _| {})
}

/// Multiply every element by `factor`, clamping results outside `width`.
///
/// # Errors
/// - `EmptySequence` if `seq` is empty
///
/// # Example
/// ```
/// use array_transform::engine::scale;
/// use array_transform::domain::Outcome;
/// use array_transform::numeric::TargetWidth;
///
/// let mut data = [-8, -9, 12, 9, 1, 8, 5, 7, 3];
/// let outcome = scale(&mut data, 100, TargetWidth::I8);
/// assert_eq!(outcome, Ok(Outcome::OverflowClamped));
/// assert_eq!(data, [-128, -128, 127, 127, 100, 127, 127, 127, 127]);
/// ```
pub fn scale<T: Element>(seq: &mut [T], factor: T, width: TargetWidth) -> TransformResult {
    transform_with(seq, Arithmetic::Multiply, factor, width, |_, _, _| {})
}

/// Add `operand` to every element, clamping results outside `width`.
///
/// An operand of exactly zero writes nothing and reports `OperandZero`.
///
/// # Errors
/// - `EmptySequence` if `seq` is empty
pub fn offset<T: Element>(seq: &mut [T], operand: T, width: TargetWidth) -> TransformResult {
    transform_with(seq, Arithmetic::Add, operand, width, |_, _, _| {})
}

/// Apply any [`Operation`] to `seq`.
///
/// `width` is ignored by `Clamp`, whose range is explicit.
pub fn apply<T: Element>(seq: &mut [T], op: Operation<T>, width: TargetWidth) -> TransformResult {
    apply_with(seq, op, width, |_, _, _| {})
}

// ============================================================================
// Kernels with clamp notification
// ============================================================================

/// `apply` that reports each clamped element as `(index, original, bound)`.
pub(crate) fn apply_with<T, F>(
    seq: &mut [T],
    op: Operation<T>,
    width: TargetWidth,
    on_clamp: F,
) -> TransformResult
where
    T: Element,
    F: FnMut(usize, T, T),
{
    match op {
        Operation::Clamp { min, max } => clamp_with(seq, min, max, on_clamp),
        Operation::Scale { factor } => {
            transform_with(seq, Arithmetic::Multiply, factor, width, on_clamp)
        },
        Operation::Offset { operand } => {
            transform_with(seq, Arithmetic::Add, operand, width, on_clamp)
        },
    }
}

fn clamp_with<T, F>(seq: &mut [T], min: T, max: T, mut on_clamp: F) -> TransformResult
where
    T: Element,
    F: FnMut(usize, T, T),
{
    if seq.is_empty() {
        return Err(TransformError::EmptySequence);
    }
    let bounds = Bounds::new(min, max).ok_or(TransformError::InvalidRange)?;

    for (index, slot) in seq.iter_mut().enumerate() {
        let clamped = bounds.clamp(*slot);
        if clamped != *slot {
            on_clamp(index, *slot, clamped);
            *slot = clamped;
        }
    }

    // Explicit clamping is the requested effect, never a warning
    Ok(Outcome::Applied)
}

fn transform_with<T, F>(
    seq: &mut [T],
    op: Arithmetic,
    operand: T,
    width: TargetWidth,
    mut on_clamp: F,
) -> TransformResult
where
    T: Element,
    F: FnMut(usize, T, T),
{
    if seq.is_empty() {
        return Err(TransformError::EmptySequence);
    }
    if op == Arithmetic::Add && operand == T::ZERO {
        return Ok(Outcome::OperandZero);
    }

    let bounds = width.bounds::<T>();
    let mut outcome = Outcome::Applied;

    for (index, slot) in seq.iter_mut().enumerate() {
        let value = *slot;
        let excursion = match op {
            Arithmetic::Multiply => value.mul_excursion(operand, bounds),
            Arithmetic::Add => value.add_excursion(operand, bounds),
        };

        match excursion.boundary(bounds) {
            Some(bound) => {
                on_clamp(index, value, bound);
                *slot = bound;
                outcome = outcome.merge(Outcome::OverflowClamped);
            },
            // In range of the target, hence of the native type
            None => {
                *slot = match op {
                    Arithmetic::Multiply => value * operand,
                    Arithmetic::Add => value + operand,
                };
            },
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i32; 9] = [-8, -9, 12, 9, 1, 8, 5, 7, 3];
    const SAMPLE_U: [u32; 9] = [8, 9, 12, 9, 1, 8, 5, 7, 3];

    // ------------------------------------------------------------------
    // Clamp
    // ------------------------------------------------------------------

    #[test]
    fn test_clamp_sample() {
        let mut data = SAMPLE;
        assert_eq!(clamp(&mut data, 3, 6), Ok(Outcome::Applied));
        assert_eq!(data, [3, 3, 6, 6, 3, 6, 5, 6, 3]);
    }

    #[test]
    fn test_clamp_degenerate_range() {
        let mut data = [1, 2, 3];
        assert_eq!(clamp(&mut data, 2, 2), Ok(Outcome::Applied));
        assert_eq!(data, [2, 2, 2]);
    }

    #[test]
    fn test_clamp_invalid_range_leaves_sequence() {
        let mut data = SAMPLE;
        assert_eq!(clamp(&mut data, 6, 3), Err(TransformError::InvalidRange));
        assert_eq!(data, SAMPLE);
    }

    #[test]
    fn test_clamp_empty() {
        let mut data: [i32; 0] = [];
        assert_eq!(clamp(&mut data, 0, 1), Err(TransformError::EmptySequence));
    }

    #[test]
    fn test_clamp_empty_checked_before_range() {
        let mut data: [u8; 0] = [];
        assert_eq!(clamp(&mut data, 9, 1), Err(TransformError::EmptySequence));
    }

    #[test]
    fn test_clamp_unsigned() {
        let mut data = [1u16, 5, 12, 300];
        assert_eq!(clamp(&mut data, 0, 10), Ok(Outcome::Applied));
        assert_eq!(data, [1, 5, 10, 10]);
    }

    // ------------------------------------------------------------------
    // Scale
    // ------------------------------------------------------------------

    #[test]
    fn test_scale_in_range() {
        let mut data = SAMPLE;
        assert_eq!(scale(&mut data, 3, TargetWidth::I32), Ok(Outcome::Applied));
        assert_eq!(data, [-24, -27, 36, 27, 3, 24, 15, 21, 9]);
    }

    #[test]
    fn test_scale_clamps_toward_product_sign() {
        let mut data = SAMPLE;
        assert_eq!(
            scale(&mut data, 100, TargetWidth::I8),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [-128, -128, 127, 127, 100, 127, 127, 127, 127]);
    }

    #[test]
    fn test_scale_negative_factor() {
        let mut data = [2, -2, 50, -50];
        assert_eq!(
            scale(&mut data, -3, TargetWidth::I8),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [-6, 6, -128, 127]);
    }

    #[test]
    fn test_scale_by_zero() {
        let mut data = SAMPLE;
        assert_eq!(scale(&mut data, 0, TargetWidth::I8), Ok(Outcome::Applied));
        assert_eq!(data, [0; 9]);
    }

    #[test]
    fn test_scale_native_i32_overflow() {
        let mut data = [i32::MAX, i32::MIN, 2];
        assert_eq!(
            scale(&mut data, 2, TargetWidth::I32),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [i32::MAX, i32::MIN, 4]);
    }

    #[test]
    fn test_scale_unsigned_target_width_semantics() {
        // 100 * 3 = 300 exceeds uint8 even though it fits in u32
        let mut data = [100u32, 200, 300, 400];
        assert_eq!(
            scale(&mut data, 3, TargetWidth::U8),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [255, 255, 255, 255]);
    }

    #[test]
    fn test_scale_unsigned_mixed() {
        let mut data = SAMPLE_U;
        assert_eq!(
            scale(&mut data, 50, TargetWidth::U8),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [255, 255, 255, 255, 50, 255, 250, 255, 150]);
    }

    #[test]
    fn test_scale_empty() {
        let mut data: Vec<u32> = Vec::new();
        assert_eq!(
            scale(&mut data, 2, TargetWidth::U8),
            Err(TransformError::EmptySequence)
        );
    }

    // ------------------------------------------------------------------
    // Offset
    // ------------------------------------------------------------------

    #[test]
    fn test_offset_in_range() {
        let mut data = SAMPLE;
        assert_eq!(offset(&mut data, 10, TargetWidth::I16), Ok(Outcome::Applied));
        assert_eq!(data, [2, 1, 22, 19, 11, 18, 15, 17, 13]);
    }

    #[test]
    fn test_offset_unsigned_clamps() {
        let mut data = [240u32, 250, 100, 0];
        assert_eq!(
            offset(&mut data, 20, TargetWidth::U8),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [255, 255, 120, 20]);
    }

    #[test]
    fn test_offset_negative_clamps_to_min() {
        let mut data = [-120i32, 0, 100];
        assert_eq!(
            offset(&mut data, -10, TargetWidth::I8),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [-128, -10, 90]);
    }

    #[test]
    fn test_offset_zero_is_noop_warning() {
        let mut data = [1_000_000i32, -5];
        assert_eq!(offset(&mut data, 0, TargetWidth::I8), Ok(Outcome::OperandZero));
        // nothing written, even for an element outside the target range
        assert_eq!(data, [1_000_000, -5]);
    }

    #[test]
    fn test_offset_empty_checked_before_zero() {
        let mut data: [i32; 0] = [];
        assert_eq!(
            offset(&mut data, 0, TargetWidth::I8),
            Err(TransformError::EmptySequence)
        );
    }

    #[test]
    fn test_offset_large_unsigned_operand() {
        let mut data = [0u32, 1];
        assert_eq!(
            offset(&mut data, 250, TargetWidth::U8),
            Ok(Outcome::Applied)
        );
        assert_eq!(data, [250, 251]);

        let mut data = [0u32, 1];
        assert_eq!(
            offset(&mut data, 1_000, TargetWidth::U8),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [255, 255]);
    }

    #[test]
    fn test_offset_element_outside_target_range() {
        let mut data = [300i32, -300];
        assert_eq!(
            offset(&mut data, -1, TargetWidth::I8),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [127, -128]);
    }

    // ------------------------------------------------------------------
    // Apply and notification
    // ------------------------------------------------------------------

    #[test]
    fn test_apply_dispatch() {
        let mut data = [1i16, 2, 3];
        assert_eq!(
            apply(&mut data, Operation::Offset { operand: 1 }, TargetWidth::I16),
            Ok(Outcome::Applied)
        );
        assert_eq!(data, [2, 3, 4]);

        assert_eq!(
            apply(&mut data, Operation::Clamp { min: 3, max: 3 }, TargetWidth::I8),
            Ok(Outcome::Applied)
        );
        assert_eq!(data, [3, 3, 3]);
    }

    #[test]
    fn test_clamp_notifications_in_index_order() {
        let mut data = [5i32, 200, 7, -200];
        let mut seen = Vec::new();
        let outcome = apply_with(
            &mut data,
            Operation::Scale { factor: 2 },
            TargetWidth::I8,
            |index, original, bound| seen.push((index, original, bound)),
        );
        assert_eq!(outcome, Ok(Outcome::OverflowClamped));
        assert_eq!(seen, vec![(1, 200, 127), (3, -200, -128)]);
        assert_eq!(data, [10, 127, 14, -128]);
    }

    #[test]
    fn test_narrow_storage_wide_target() {
        // i8 storage with a 32-bit target is bounded by the native range
        let mut data = [100i8, -100];
        assert_eq!(
            scale(&mut data, 2, TargetWidth::I32),
            Ok(Outcome::OverflowClamped)
        );
        assert_eq!(data, [i8::MAX, i8::MIN]);
    }
}
