// ============================================================================
// Sequence Reductions
// Linear-scan min, max, sum and mean
// ============================================================================

use crate::numeric::{Element, TransformError};

/// Smallest element.
///
/// # Errors
/// Returns `EmptySequence` if `seq` is empty.
pub fn min<T: Element>(seq: &[T]) -> Result<T, TransformError> {
    seq.iter().copied().min().ok_or(TransformError::EmptySequence)
}

/// Largest element.
///
/// # Errors
/// Returns `EmptySequence` if `seq` is empty.
pub fn max<T: Element>(seq: &[T]) -> Result<T, TransformError> {
    seq.iter().copied().max().ok_or(TransformError::EmptySequence)
}

/// Sum of all elements, accumulated in `i128`.
///
/// The widened accumulator cannot overflow for any slice that fits in
/// memory.
///
/// # Errors
/// Returns `EmptySequence` if `seq` is empty.
pub fn sum<T: Element>(seq: &[T]) -> Result<i128, TransformError> {
    if seq.is_empty() {
        return Err(TransformError::EmptySequence);
    }
    Ok(seq.iter().map(|value| value.to_i128()).sum())
}

/// Integer mean, truncated toward zero.
///
/// The mean always lies between `min` and `max`, so it is representable
/// in `T`.
///
/// # Errors
/// Returns `EmptySequence` if `seq` is empty.
pub fn mean<T: Element>(seq: &[T]) -> Result<T, TransformError> {
    let total = sum(seq)?;
    let len = i128::try_from(seq.len()).unwrap_or(i128::MAX);
    Ok(T::saturating_from_i128(total / len))
}
