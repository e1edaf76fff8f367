// ============================================================================
// Domain Models Module
// Operations, call outcomes and engine configuration
// ============================================================================

pub mod config;
pub mod operation;
pub mod status;

pub use config::EngineConfig;
pub use operation::{Operation, OperationKind};
pub use status::{Outcome, Status};
