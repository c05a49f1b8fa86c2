pub mod drawing;
pub mod models;
pub mod pipeline;

pub use models::{Circle, ColorWheel, RadiusAnchor, SampleStep, WheelColor};
pub use drawing::RenderConfig;
pub use pipeline::{
    Pipeline, SceneData, RenderStep, RenderContext, MetadataValue, DebugConfig
};
