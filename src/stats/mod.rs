// ============================================================================
// Statistics Module
// Read-only reductions over a sequence
// ============================================================================
//
// These share the structural error taxonomy of the transforms but never
// mutate the sequence and never produce warnings.

mod reduce;

pub use reduce::{max, mean, min, sum};
