use crate::pipeline::{SceneData, RenderStep, RenderContext, MetadataValue};
use crate::drawing::canvas;
use crate::models::{samples_in, ColorWheel, RadiusAnchor, SampleStep, MAX_SAMPLES};
use anyhow::Result;
use image::Rgba;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::TAU;
use std::sync::Mutex;

/// Flood-fill the whole canvas with one color
pub struct FillStep {
    pub color: Rgba<u8>,
}

impl RenderStep for FillStep {
    fn process(&self, mut scene: SceneData, _context: &RenderContext) -> Result<SceneData> {
        canvas::fill(&mut scene.canvas, self.color);
        Ok(scene)
    }

    fn name(&self) -> &str {
        "Fill"
    }
}

/// Draw the circle's dotted outline
pub struct OutlineStep {
    pub color: Rgba<u8>,
    /// Angular sampling in radians
    pub step: f64,
}

impl RenderStep for OutlineStep {
    fn process(&self, mut scene: SceneData, context: &RenderContext) -> Result<SceneData> {
        let circle = scene.circle;
        let samples = samples_in(TAU, self.step);
        if samples > MAX_SAMPLES {
            anyhow::bail!("Outline step {} needs {} samples, limit is {}", self.step, samples, MAX_SAMPLES);
        }

        let drawn = circle.draw_bounds(&mut scene.canvas, self.color, self.step);

        if context.verbose {
            println!("  outline: {} samples on canvas (radius {})", drawn, circle.radius);
        }

        scene.metadata.insert("outline_samples".to_string(), MetadataValue::UInt(drawn as u64));
        Ok(scene)
    }

    fn name(&self) -> &str {
        "Circle Outline"
    }
}

/// Generate the tagged hue wheel
pub struct WheelStep {
    pub sampling: SampleStep,
}

impl RenderStep for WheelStep {
    fn process(&self, mut scene: SceneData, context: &RenderContext) -> Result<SceneData> {
        scene.wheel = ColorWheel::generate(self.sampling)?;

        if context.verbose {
            println!("  wheel: {} colors, step {:.5} rad", scene.wheel.len(), self.sampling.radians());
        }

        scene.metadata.insert("wheel_len".to_string(), MetadataValue::UInt(scene.wheel.len() as u64));
        scene.metadata.insert("wheel_step".to_string(), MetadataValue::Float(self.sampling.radians()));
        Ok(scene)
    }

    fn name(&self) -> &str {
        "Color Wheel"
    }
}

/// Randomly permute the wheel with an owned, seeded generator
pub struct ShuffleStep {
    seed: u64,
    // Shared across calls so a reused step keeps advancing the same stream
    rng: Mutex<StdRng>,
}

impl ShuffleStep {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw a fresh seed; read it back with `seed()` to reproduce the run
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RenderStep for ShuffleStep {
    fn process(&self, mut scene: SceneData, context: &RenderContext) -> Result<SceneData> {
        let mut rng = self.rng.lock()
            .map_err(|_| anyhow::anyhow!("Shuffle generator lock poisoned"))?;
        scene.wheel.shuffle(&mut *rng);

        if context.verbose {
            println!("  shuffled {} colors (seed {})", scene.wheel.len(), self.seed);
        }

        scene.metadata.insert("seed".to_string(), MetadataValue::UInt(self.seed));
        scene.metadata.insert("sorted".to_string(), MetadataValue::Bool(false));
        Ok(scene)
    }

    fn name(&self) -> &str {
        "Shuffle"
    }
}

/// Put the wheel back into generation order
pub struct SortStep;

impl RenderStep for SortStep {
    fn process(&self, mut scene: SceneData, _context: &RenderContext) -> Result<SceneData> {
        scene.wheel.sort_by_tag();
        scene.metadata.insert("sorted".to_string(), MetadataValue::Bool(true));
        Ok(scene)
    }

    fn name(&self) -> &str {
        "Sort By Tag"
    }
}

/// Draw one radius per wheel color, at an angle given by its position
pub struct SpokesStep {
    /// Radial sampling distance in pixels
    pub step: f64,
    pub anchor: RadiusAnchor,
}

impl RenderStep for SpokesStep {
    fn process(&self, mut scene: SceneData, context: &RenderContext) -> Result<SceneData> {
        let circle = scene.circle;
        let samples = samples_in(circle.radius as f64, self.step);
        if samples > MAX_SAMPLES {
            anyhow::bail!("Radius step {} needs {} samples per spoke, limit is {}", self.step, samples, MAX_SAMPLES);
        }

        for (index, color) in scene.wheel.iter().enumerate() {
            let angle = scene.wheel.spoke_angle(index);
            circle.draw_radius(&mut scene.canvas, angle, color.rgba(), self.step, self.anchor);
        }

        if context.verbose {
            println!("  drew {} spokes ({:?} anchor)", scene.wheel.len(), self.anchor);
        }

        let anchor = match self.anchor {
            RadiusAnchor::Center => "center",
            RadiusAnchor::CenterX => "center_x",
        };
        scene.metadata.insert("spokes".to_string(), MetadataValue::UInt(scene.wheel.len() as u64));
        scene.metadata.insert("anchor".to_string(), MetadataValue::String(anchor.to_string()));
        Ok(scene)
    }

    fn name(&self) -> &str {
        "Spokes"
    }
}
