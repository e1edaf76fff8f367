// ============================================================================
// C ABI
// Pointer + length entry points for C callers
// ============================================================================
//
// This is the only layer where a null sequence can be observed. Every entry
// point validates, in order: null pointers, zero length, then operands, and
// returns a `Status` without writing anything if a check fails.

use crate::domain::Status;
use crate::engine::{clamp, offset, scale};
use crate::numeric::{TargetWidth, TransformError};
use crate::stats;
use std::slice;

/// Borrow `size` elements at `array` mutably.
///
/// # Safety
///
/// If non-null, `array` must be valid for reads and writes of `size`
/// elements and not aliased for the duration of the borrow.
unsafe fn sequence_mut<'a, T>(array: *mut T, size: usize) -> Result<&'a mut [T], TransformError> {
    if array.is_null() {
        return Err(TransformError::NullSequence);
    }
    if size == 0 {
        return Err(TransformError::EmptySequence);
    }
    Ok(slice::from_raw_parts_mut(array, size))
}

/// Borrow `size` elements at `array` immutably.
///
/// # Safety
///
/// If non-null, `array` must be valid for reads of `size` elements.
unsafe fn sequence<'a, T>(array: *const T, size: usize) -> Result<&'a [T], TransformError> {
    if array.is_null() {
        return Err(TransformError::NullSequence);
    }
    if size == 0 {
        return Err(TransformError::EmptySequence);
    }
    Ok(slice::from_raw_parts(array, size))
}

macro_rules! ffi_transforms {
    ($t:ty, $clamp:ident, $scale:ident, $offset:ident) => {
        /// Clamps each element to `[min, max]` in place.
        ///
        /// # Safety
        ///
        /// `array` must be null or valid for reads and writes of `size`
        /// elements.
        #[no_mangle]
        pub unsafe extern "C" fn $clamp(array: *mut $t, size: usize, min: $t, max: $t) -> Status {
            match sequence_mut(array, size) {
                Ok(seq) => clamp(seq, min, max).into(),
                Err(error) => error.into(),
            }
        }

        /// Scales each element in place, clamping to the range of
        /// `target_width` (a `TargetWidth` code).
        ///
        /// # Safety
        ///
        /// `array` must be null or valid for reads and writes of `size`
        /// elements.
        #[no_mangle]
        pub unsafe extern "C" fn $scale(
            array: *mut $t,
            size: usize,
            factor: $t,
            target_width: u8,
        ) -> Status {
            let seq = match sequence_mut(array, size) {
                Ok(seq) => seq,
                Err(error) => return error.into(),
            };
            match TargetWidth::from_code(target_width) {
                Some(width) => scale(seq, factor, width).into(),
                None => Status::ErrorInvalidInput,
            }
        }

        /// Offsets each element in place, clamping to the range of
        /// `target_width` (a `TargetWidth` code).
        ///
        /// # Safety
        ///
        /// `array` must be null or valid for reads and writes of `size`
        /// elements.
        #[no_mangle]
        pub unsafe extern "C" fn $offset(
            array: *mut $t,
            size: usize,
            operand: $t,
            target_width: u8,
        ) -> Status {
            let seq = match sequence_mut(array, size) {
                Ok(seq) => seq,
                Err(error) => return error.into(),
            };
            match TargetWidth::from_code(target_width) {
                Some(width) => offset(seq, operand, width).into(),
                None => Status::ErrorInvalidInput,
            }
        }
    };
}

ffi_transforms!(i32, array_clamp_i32, array_scale_i32, array_offset_i32);
ffi_transforms!(u32, array_clamp_u32, array_scale_u32, array_offset_u32);

// ============================================================================
// Statistics
// ============================================================================

macro_rules! ffi_reduction {
    ($name:ident, $reduce:path, $out:ty, $doc:literal) => {
        #[doc = $doc]
        ///
        /// # Safety
        ///
        /// `array` must be null or valid for reads of `size` elements, and
        /// `out` must be null or valid for a write.
        #[no_mangle]
        pub unsafe extern "C" fn $name(array: *const i32, size: usize, out: *mut $out) -> Status {
            if out.is_null() {
                return Status::ErrorNullPointer;
            }
            let seq = match sequence(array, size) {
                Ok(seq) => seq,
                Err(error) => return error.into(),
            };
            match $reduce(seq) {
                Ok(value) => {
                    *out = value;
                    Status::Ok
                },
                Err(error) => error.into(),
            }
        }
    };
}

ffi_reduction!(array_min_i32, stats::min, i32, "Writes the smallest element to `out`.");
ffi_reduction!(array_max_i32, stats::max, i32, "Writes the largest element to `out`.");
ffi_reduction!(array_mean_i32, stats::mean, i32, "Writes the truncated integer mean to `out`.");

/// Writes the sum of all elements to `out`.
///
/// # Safety
///
/// `array` must be null or valid for reads of `size` elements, and `out`
/// must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn array_sum_i32(array: *const i32, size: usize, out: *mut i64) -> Status {
    if out.is_null() {
        return Status::ErrorNullPointer;
    }
    let seq = match sequence(array, size) {
        Ok(seq) => seq,
        Err(error) => return error.into(),
    };
    match stats::sum(seq) {
        // Saturates only past 2^32 elements
        Ok(total) => {
            *out = i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX });
            Status::Ok
        },
        Err(error) => error.into(),
    }
}
