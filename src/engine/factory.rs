// ============================================================================
// Transform Engine Factory
// Creates transform engines with proper configuration
// ============================================================================

use crate::domain::EngineConfig;
use crate::engine::TransformEngine;
use crate::interfaces::{NoOpObserver, TransformObserver};
use crate::numeric::TargetWidth;
use std::sync::Arc;

/// Builder for creating transform engines with fluent API
///
/// # Example
/// ```
/// use array_transform::prelude::*;
/// use std::sync::Arc;
///
/// let engine = TransformEngineBuilder::new()
///     .target_width(TargetWidth::U8)
///     .element_events(true)
///     .build(Arc::new(LoggingObserver));
///
/// let mut readings = [240u32, 250, 100, 0];
/// assert_eq!(engine.offset(&mut readings, 20), Ok(Outcome::OverflowClamped));
/// assert_eq!(readings, [255, 255, 120, 20]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransformEngineBuilder {
    config: EngineConfig,
}

impl TransformEngineBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Set the default target width
    pub fn target_width(mut self, width: TargetWidth) -> Self {
        self.config.target_width = width;
        self
    }

    /// Enable or disable per-element clamp events
    pub fn element_events(mut self, enabled: bool) -> Self {
        self.config.element_events = enabled;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Unsigned 8-bit sensor preset
    pub fn sensor_8bit() -> Self {
        Self::from_config(EngineConfig::sensor_8bit())
    }

    /// Signed 16-bit PCM preset
    pub fn pcm_16bit() -> Self {
        Self::from_config(EngineConfig::pcm_16bit())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the engine with the given observer
    pub fn build(self, observer: Arc<dyn TransformObserver>) -> TransformEngine {
        TransformEngine::new(self.config, observer)
    }

    /// Build the engine without an observer
    pub fn build_silent(self) -> TransformEngine {
        self.build(Arc::new(NoOpObserver))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}
