// ============================================================================
// Utilities Module
// Helper types for presenting sequences
// ============================================================================

mod display;

pub use display::{display, SequenceDisplay};
