use image::RgbaImage;
use std::sync::Arc;
use std::collections::HashMap;
use std::path::Path;
use anyhow::Result;

use crate::models::{Circle, ColorWheel};

/// Everything a render step works on.
/// A single SceneData is moved through the pipeline, each step taking ownership and handing it on.
#[derive(Debug, Clone)]
pub struct SceneData {
    /// The canvas being drawn on
    pub canvas: RgbaImage,

    /// The circle all shapes are drawn relative to
    pub circle: Circle,

    /// Hue wheel colors (empty until a wheel step runs)
    pub wheel: ColorWheel,

    /// Metadata recorded by steps (e.g., "wheel_len", "seed", "sorted")
    pub metadata: HashMap<String, MetadataValue>,
}

/// Metadata value types
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Bool(bool),
    Float(f64),
    UInt(u64),
    String(String),
}

impl SceneData {
    /// Create a scene with a blank canvas
    pub fn new(width: u32, height: u32, circle: Circle) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
            circle,
            wheel: ColorWheel::default(),
            metadata: HashMap::new(),
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: MetadataValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Get metadata as bool
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.metadata.get(key) {
            Some(MetadataValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get metadata as float
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.metadata.get(key) {
            Some(MetadataValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get metadata as unsigned integer
    pub fn get_uint(&self, key: &str) -> Option<u64> {
        match self.metadata.get(key) {
            Some(MetadataValue::UInt(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get metadata as string
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.metadata.get(key) {
            Some(MetadataValue::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory receiving one snapshot per step
    pub output_dir: std::path::PathBuf,
}

/// Context available to all render steps
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

impl RenderContext {
    /// Save a PNG snapshot of the canvas if debug mode is enabled
    fn save_snapshot(&self, canvas: &RgbaImage, filename: &str) -> Result<()> {
        if let Some(debug_config) = &self.debug {
            let output_path = debug_config.output_dir.join(filename);
            canvas.save(&output_path)
                .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

            if self.verbose {
                println!("  Debug: saved {}", filename);
            }
        }

        Ok(())
    }
}

/// Trait that all render steps must implement
pub trait RenderStep: Send + Sync {
    /// Take the scene, draw or rearrange something, and hand it back
    fn process(&self, scene: SceneData, context: &RenderContext) -> Result<SceneData>;

    /// Human-readable name for this step (used in verbose output and debug filenames)
    fn name(&self) -> &str;
}

/// Snapshot filename for a step, e.g. "03_color_wheel.png"
pub fn snapshot_filename(step_index: usize, step_name: &str) -> String {
    format!("{:02}_{}.png", step_index + 1,
        step_name.to_lowercase().replace(' ', "_"))
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn RenderStep>>,
    context: RenderContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: RenderContext {
                verbose: false,
                debug: None,
            },
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: std::path::PathBuf) -> Result<Self> {
        ensure_empty_dir(&output_dir)?;

        self.context.debug = Some(DebugConfig { output_dir });

        Ok(self)
    }

    /// Add a render step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn RenderStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn RenderStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    /// Names of the steps in execution order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Run every step in order on the scene
    pub fn run(&self, scene: SceneData) -> Result<SceneData> {
        self.run_partial(scene, self.steps.len())
    }

    /// Run the pipeline but stop after `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, input: SceneData, num_steps: usize) -> Result<SceneData> {
        self.context.save_snapshot(&input.canvas, "00_input.png")?;

        let mut scene = input;

        for (step_idx, step) in self.steps.iter().enumerate() {
            if step_idx >= num_steps {
                break;
            }
            if self.context.verbose {
                println!("Running step {}: {}", step_idx + 1, step.name());
            }

            scene = step.process(scene, &self.context)?;

            self.context.save_snapshot(&scene.canvas, &snapshot_filename(step_idx, step.name()))?;
        }

        Ok(scene)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_empty_dir(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        let entries = std::fs::read_dir(output_dir)?;
        if entries.count() > 0 {
            return Err(anyhow::anyhow!(
                "Debug directory is not empty: {}",
                output_dir.display()
            ));
        }
    } else {
        std::fs::create_dir_all(output_dir)?;
    }
    Ok(())
}
