mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from huespokes for tests
#[allow(unused_imports)]
pub use huespokes::{
    Circle, ColorWheel, MetadataValue, Pipeline, RadiusAnchor, RenderConfig, RenderContext,
    RenderStep, SampleStep, SceneData, WheelColor,
};
