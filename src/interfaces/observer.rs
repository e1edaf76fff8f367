// ============================================================================
// Transform Observer Interface
// Optional sink for transform events; the kernels never depend on it
// ============================================================================

use crate::domain::{OperationKind, Status};
use crate::numeric::{TargetWidth, TransformError};

/// Events emitted by the [`TransformEngine`](crate::engine::TransformEngine)
///
/// Element values are widened to `i128` so one observer can serve sequences
/// of every element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformEvent {
    /// A call passed to the engine
    Started {
        operation: OperationKind,
        len: usize,
        width: Option<TargetWidth>,
    },

    /// One element left the target range and was written as a bound
    ElementClamped {
        operation: OperationKind,
        index: usize,
        original: i128,
        bound: i128,
    },

    /// The call finished with a success or warning status
    Completed {
        operation: OperationKind,
        status: Status,
    },

    /// The call was rejected before touching the sequence
    Rejected {
        operation: OperationKind,
        error: TransformError,
    },
}

/// Observer trait for transform events
/// Implementations can handle logging, metrics, test capture, etc.
pub trait TransformObserver: Send + Sync {
    /// Handle a transform event
    fn on_event(&self, event: TransformEvent);
}

/// No-op observer
pub struct NoOpObserver;

impl TransformObserver for NoOpObserver {
    fn on_event(&self, _event: TransformEvent) {}
}

/// Logging observer backed by `tracing`
pub struct LoggingObserver;

impl TransformObserver for LoggingObserver {
    fn on_event(&self, event: TransformEvent) {
        match event {
            TransformEvent::Started {
                operation,
                len,
                width,
            } => {
                tracing::debug!(%operation, len, ?width, "transform started");
            },
            TransformEvent::ElementClamped {
                operation,
                index,
                original,
                bound,
            } => {
                tracing::warn!(%operation, index, original, bound, "element clamped");
            },
            TransformEvent::Completed { operation, status } => {
                if status.is_warning() {
                    tracing::warn!(%operation, %status, "transform completed");
                } else {
                    tracing::debug!(%operation, %status, "transform completed");
                }
            },
            TransformEvent::Rejected { operation, error } => {
                tracing::warn!(%operation, %error, "transform rejected");
            },
        }
    }
}
