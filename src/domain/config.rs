// ============================================================================
// Engine Configuration
// Default target width and event granularity for a TransformEngine
// ============================================================================

use crate::numeric::TargetWidth;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`TransformEngine`](crate::engine::TransformEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Width used by `scale` / `offset` when no explicit width is given
    pub target_width: TargetWidth,

    /// Emit one event per clamped element (otherwise only per call)
    pub element_events: bool,
}

impl EngineConfig {
    /// Create a new configuration with the given default width
    pub fn new(target_width: TargetWidth) -> Self {
        Self {
            target_width,
            element_events: false,
        }
    }

    /// Builder method: Set the default target width
    pub fn with_target_width(mut self, width: TargetWidth) -> Self {
        self.target_width = width;
        self
    }

    /// Builder method: Enable or disable per-element clamp events
    pub fn with_element_events(mut self, enabled: bool) -> Self {
        self.element_events = enabled;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(TargetWidth::I32)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl EngineConfig {
    /// Raw 8-bit ADC readings (unsigned 8-bit)
    pub fn sensor_8bit() -> Self {
        Self::new(TargetWidth::U8)
    }

    /// Signed 8-bit samples
    pub fn signed_8bit() -> Self {
        Self::new(TargetWidth::I8)
    }

    /// 16-bit PCM audio samples (signed 16-bit)
    pub fn pcm_16bit() -> Self {
        Self::new(TargetWidth::I16)
    }

    /// Full signed 32-bit range
    pub fn full_32bit() -> Self {
        Self::new(TargetWidth::I32)
    }

    /// Full unsigned 32-bit range
    pub fn unsigned_32bit() -> Self {
        Self::new(TargetWidth::U32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = EngineConfig::new(TargetWidth::U16);
        assert_eq!(config.target_width, TargetWidth::U16);
        assert!(!config.element_events);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::pcm_16bit()
            .with_element_events(true)
            .with_target_width(TargetWidth::I8);

        assert_eq!(config.target_width, TargetWidth::I8);
        assert!(config.element_events);
    }

    #[test]
    fn test_default() {
        assert_eq!(EngineConfig::default(), EngineConfig::full_32bit());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(EngineConfig::sensor_8bit().target_width, TargetWidth::U8);
        assert_eq!(EngineConfig::signed_8bit().target_width, TargetWidth::I8);
        assert_eq!(EngineConfig::unsigned_32bit().target_width, TargetWidth::U32);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = EngineConfig::sensor_8bit().with_element_events(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
