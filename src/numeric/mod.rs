// ============================================================================
// Numeric Module
// Element types, target widths and overflow predicates
// ============================================================================
//
// This module provides:
// - Element: sealed trait over the native storage integers
// - TargetWidth / Bounds: the clamp range table
// - Overflow predicates: pure "would this leave the range?" checks
// - TransformError: structural failure taxonomy
//
// Design principles:
// - No floating-point operations
// - Predicates never perform the operation they guard
// - Signed and unsigned storage share one generic code path

mod element;
mod errors;
pub mod overflow;
mod width;

pub use element::Element;
pub use errors::{TransformError, TransformResult};
pub use overflow::{excursion, would_overflow, Arithmetic, Excursion};
pub use width::{Bounds, Signedness, TargetWidth};
