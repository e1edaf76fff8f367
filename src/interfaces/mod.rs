// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod observer;

pub use observer::{LoggingObserver, NoOpObserver, TransformEvent, TransformObserver};
