// ============================================================================
// Array Transform Library
// Overflow-safe in-place transforms over integer sequences
// ============================================================================

//! # Array Transform
//!
//! In-place clamp, scale and offset over integer sequences, with overflow
//! detected against a declared target bit-width and saturated to its bounds.
//!
//! ## Features
//!
//! - **Overflow detection without overflow**: every check is division and
//!   comparison based, so no intermediate can wrap
//! - **Target-width semantics**: an i32 sequence can be kept within 8 or 16
//!   bits, signed or unsigned
//! - **Layered status**: structural errors are distinct from warnings, and
//!   a clamped call still applies every in-range element
//! - **Generic over all primitive integers** up to 64 bits
//! - **C ABI** in [`ffi`] for pointer + length callers
//!
//! ## Example
//!
//! ```rust
//! use array_transform::prelude::*;
//!
//! let mut data = [-8, -9, 12, 9, 1, 8, 5, 7, 3];
//!
//! let outcome = scale(&mut data, 100, TargetWidth::I8);
//! assert_eq!(outcome, Ok(Outcome::OverflowClamped));
//! assert_eq!(Status::from(outcome), Status::WarningOverflowClamped);
//!
//! println!("{}", SequenceDisplay(&data));
//! // [ -128 -128 127 127 100 127 127 127 127 ]
//! ```

pub mod domain;
pub mod engine;
pub mod ffi;
pub mod interfaces;
pub mod numeric;
pub mod stats;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{EngineConfig, Operation, OperationKind, Outcome, Status};
    pub use crate::engine::{
        apply, clamp, offset, scale, TransformEngine, TransformEngineBuilder,
    };
    pub use crate::interfaces::{LoggingObserver, NoOpObserver, TransformEvent, TransformObserver};
    pub use crate::numeric::{
        Arithmetic, Bounds, Element, Excursion, Signedness, TargetWidth, TransformError,
        TransformResult,
    };
    pub use crate::utils::SequenceDisplay;
}
