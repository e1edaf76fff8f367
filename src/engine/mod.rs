// ============================================================================
// Engine Module
// Contains the transform kernels and the observed transform engine
// ============================================================================

mod transform;
mod transform_engine;

pub mod factory;

pub use factory::TransformEngineBuilder;
pub use transform::{apply, clamp, offset, scale};
pub use transform_engine::TransformEngine;
