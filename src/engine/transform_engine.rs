// ============================================================================
// Transform Engine
// Configured, observed front end over the transform kernels
// ============================================================================

use crate::domain::{EngineConfig, Operation, Status};
use crate::engine::transform::apply_with;
use crate::interfaces::{TransformEvent, TransformObserver};
use crate::numeric::{Element, TargetWidth, TransformResult};
use std::sync::Arc;

/// Transform engine with a default target width and an injected observer.
///
/// The engine holds no per-call state: every method borrows the sequence
/// for the duration of the call only. Results are identical to the free
/// functions in [`crate::engine`]; the engine only adds event reporting.
pub struct TransformEngine {
    /// Engine configuration
    config: EngineConfig,

    /// Observer receiving transform events
    observer: Arc<dyn TransformObserver>,
}

impl TransformEngine {
    /// Create a new transform engine
    pub fn new(config: EngineConfig, observer: Arc<dyn TransformObserver>) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Default target width for `scale` and `offset`
    pub fn target_width(&self) -> TargetWidth {
        self.config.target_width
    }

    /// Clamp every element to `[min, max]`
    pub fn clamp<T: Element>(&self, seq: &mut [T], min: T, max: T) -> TransformResult {
        self.run(seq, Operation::Clamp { min, max }, None)
    }

    /// Scale against the configured target width
    pub fn scale<T: Element>(&self, seq: &mut [T], factor: T) -> TransformResult {
        self.scale_to(seq, factor, self.config.target_width)
    }

    /// Scale against an explicit target width
    pub fn scale_to<T: Element>(
        &self,
        seq: &mut [T],
        factor: T,
        width: TargetWidth,
    ) -> TransformResult {
        self.run(seq, Operation::Scale { factor }, Some(width))
    }

    /// Offset against the configured target width
    pub fn offset<T: Element>(&self, seq: &mut [T], operand: T) -> TransformResult {
        self.offset_to(seq, operand, self.config.target_width)
    }

    /// Offset against an explicit target width
    pub fn offset_to<T: Element>(
        &self,
        seq: &mut [T],
        operand: T,
        width: TargetWidth,
    ) -> TransformResult {
        self.run(seq, Operation::Offset { operand }, Some(width))
    }

    /// Apply an operation against the configured target width
    pub fn apply<T: Element>(&self, seq: &mut [T], op: Operation<T>) -> TransformResult {
        self.apply_to(seq, op, self.config.target_width)
    }

    /// Apply an operation against an explicit target width
    pub fn apply_to<T: Element>(
        &self,
        seq: &mut [T],
        op: Operation<T>,
        width: TargetWidth,
    ) -> TransformResult {
        let width = match op {
            Operation::Clamp { .. } => None,
            _ => Some(width),
        };
        self.run(seq, op, width)
    }

    fn run<T: Element>(
        &self,
        seq: &mut [T],
        op: Operation<T>,
        width: Option<TargetWidth>,
    ) -> TransformResult {
        let operation = op.kind();
        self.observer.on_event(TransformEvent::Started {
            operation,
            len: seq.len(),
            width,
        });

        let element_events = self.config.element_events;
        let observer = &self.observer;
        let result = apply_with(
            seq,
            op,
            width.unwrap_or(self.config.target_width),
            |index, original, bound| {
                if element_events {
                    observer.on_event(TransformEvent::ElementClamped {
                        operation,
                        index,
                        original: original.to_i128(),
                        bound: bound.to_i128(),
                    });
                }
            },
        );

        let event = match result {
            Ok(outcome) => TransformEvent::Completed {
                operation,
                status: Status::from(outcome),
            },
            Err(error) => TransformEvent::Rejected { operation, error },
        };
        self.observer.on_event(event);

        result
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default(), Arc::new(crate::interfaces::NoOpObserver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OperationKind, Outcome};
    use crate::numeric::TransformError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<TransformEvent>>,
    }

    impl RecordingObserver {
        fn take(&self) -> Vec<TransformEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl TransformObserver for RecordingObserver {
        fn on_event(&self, event: TransformEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn engine_with(config: EngineConfig) -> (TransformEngine, Arc<RecordingObserver>) {
        let observer = Arc::new(RecordingObserver::default());
        let engine = TransformEngine::new(config, observer.clone());
        (engine, observer)
    }

    #[test]
    fn test_scale_uses_configured_width() {
        let (engine, _) = engine_with(EngineConfig::signed_8bit());
        let mut data = [-8, -9, 12, 9, 1, 8, 5, 7, 3];
        assert_eq!(engine.scale(&mut data, 100), Ok(Outcome::OverflowClamped));
        assert_eq!(data, [-128, -128, 127, 127, 100, 127, 127, 127, 127]);
    }

    #[test]
    fn test_explicit_width_overrides_config() {
        let (engine, _) = engine_with(EngineConfig::signed_8bit());
        let mut data = [1, 2];
        assert_eq!(
            engine.scale_to(&mut data, 100, TargetWidth::I16),
            Ok(Outcome::Applied)
        );
        assert_eq!(data, [100, 200]);
    }

    #[test]
    fn test_call_events() {
        let (engine, observer) = engine_with(EngineConfig::sensor_8bit());
        let mut data = [240u32, 250, 100, 0];
        assert_eq!(engine.offset(&mut data, 20), Ok(Outcome::OverflowClamped));

        let events = observer.take();
        assert_eq!(
            events,
            vec![
                TransformEvent::Started {
                    operation: OperationKind::Offset,
                    len: 4,
                    width: Some(TargetWidth::U8),
                },
                TransformEvent::Completed {
                    operation: OperationKind::Offset,
                    status: Status::WarningOverflowClamped,
                },
            ]
        );
    }

    #[test]
    fn test_element_events() {
        let config = EngineConfig::sensor_8bit().with_element_events(true);
        let (engine, observer) = engine_with(config);
        let mut data = [240u32, 100, 250];
        engine.offset(&mut data, 20).unwrap();

        let clamped: Vec<_> = observer
            .take()
            .into_iter()
            .filter_map(|event| match event {
                TransformEvent::ElementClamped {
                    index,
                    original,
                    bound,
                    ..
                } => Some((index, original, bound)),
                _ => None,
            })
            .collect();
        assert_eq!(clamped, vec![(0, 240, 255), (2, 250, 255)]);
    }

    #[test]
    fn test_rejected_event() {
        let (engine, observer) = engine_with(EngineConfig::default());
        let mut data = [1, 2, 3];
        assert_eq!(
            engine.clamp(&mut data, 5, 1),
            Err(TransformError::InvalidRange)
        );
        assert_eq!(data, [1, 2, 3]);

        let events = observer.take();
        assert_eq!(
            events.last(),
            Some(&TransformEvent::Rejected {
                operation: OperationKind::Clamp,
                error: TransformError::InvalidRange,
            })
        );
        assert!(matches!(
            events.first(),
            Some(TransformEvent::Started { width: None, .. })
        ));
    }

    #[test]
    fn test_offset_zero_reports_warning() {
        let (engine, observer) = engine_with(EngineConfig::default());
        let mut data = [7i64];
        assert_eq!(engine.offset(&mut data, 0), Ok(Outcome::OperandZero));
        assert!(observer.take().contains(&TransformEvent::Completed {
            operation: OperationKind::Offset,
            status: Status::WarningOperandZero,
        }));
    }

    #[test]
    fn test_apply_matches_free_functions() {
        let engine = TransformEngine::default();
        let mut via_engine = [3u16, 40_000, 7];
        let mut via_free = via_engine;

        let op = Operation::Scale { factor: 2 };
        let a = engine.apply_to(&mut via_engine, op, TargetWidth::U16);
        let b = crate::engine::apply(&mut via_free, op, TargetWidth::U16);

        assert_eq!(a, b);
        assert_eq!(via_engine, via_free);
    }
}
