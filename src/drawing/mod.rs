pub mod canvas;
pub mod hue;
pub mod output;
pub mod steps;

use image::Rgba;
use std::sync::Arc;

use crate::models::{Circle, RadiusAnchor, SampleStep};
use crate::pipeline::{Pipeline, SceneData};
use steps::*;

/// Every parameter of a render. Defaults reproduce `sample.jpg`.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub circle: Circle,
    pub background: Rgba<u8>,
    pub outline_color: Rgba<u8>,
    pub outline_step: f64,
    pub radius_step: f64,
    pub sampling: SampleStep,
    /// Restore generation order after shuffling
    pub sorted: bool,
    pub anchor: RadiusAnchor,
    /// None draws a fresh seed for every pipeline built
    pub seed: Option<u64>,
    pub quality: u8,
    pub verbose: bool,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            width: 500,
            height: 500,
            circle: Circle::new(250, 250, 100),
            background: canvas::WHITE,
            outline_color: canvas::RED,
            outline_step: 0.01,
            radius_step: 0.1,
            sampling: SampleStep::Fixed(0.01),
            sorted: false,
            anchor: RadiusAnchor::Center,
            seed: None,
            quality: output::DEFAULT_QUALITY,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn with_sampling(mut self, sampling: SampleStep) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_anchor(mut self, anchor: RadiusAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_circle(mut self, circle: Circle) -> Self {
        self.circle = circle;
        self
    }

    /// Blank canvas plus circle, ready for the pipeline
    pub fn initial_scene(&self) -> SceneData {
        SceneData::new(self.width, self.height, self.circle)
    }

    /// Build the standard render pipeline:
    /// fill, outline, wheel, shuffle, optional sort, spokes
    pub fn build_pipeline(&self) -> Pipeline {
        let shuffle = match self.seed {
            Some(seed) => ShuffleStep::from_seed(seed),
            None => ShuffleStep::from_entropy(),
        };

        let mut pipeline = Pipeline::new()
            .with_verbose(self.verbose)
            .add_step(Arc::new(FillStep { color: self.background }))
            .add_step(Arc::new(OutlineStep {
                color: self.outline_color,
                step: self.outline_step,
            }))
            .add_step(Arc::new(WheelStep { sampling: self.sampling }))
            .add_step(Arc::new(shuffle));

        if self.sorted {
            pipeline = pipeline.add_step(Arc::new(SortStep));
        }

        pipeline.add_step(Arc::new(SpokesStep {
            step: self.radius_step,
            anchor: self.anchor,
        }))
    }

    /// Run the standard pipeline and return the finished scene
    pub fn render(&self) -> anyhow::Result<SceneData> {
        self.build_pipeline().run(self.initial_scene())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
