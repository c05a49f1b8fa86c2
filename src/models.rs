use anyhow::Result;
use image::{Rgba, RgbaImage};
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::drawing::{canvas, hue};

/// Upper bound on the samples taken along any single sweep
pub const MAX_SAMPLES: usize = 1_000_000;

/// Number of samples `k * step` that fall inside [0, extent).
///
/// A ratio within 1e-9 of an integer counts as exact, so 2π / (π / 360) gives 720.
/// Saturates at `usize::MAX` for tiny steps; callers compare against `MAX_SAMPLES`.
pub fn samples_in(extent: f64, step: f64) -> usize {
    if !(step > 0.0) || !(extent > 0.0) {
        return 0;
    }
    let ratio = extent / step;
    let nearest = ratio.round();
    if (ratio - nearest).abs() < 1e-9 {
        nearest as usize
    } else {
        ratio.ceil() as usize
    }
}

/// Which center coordinate anchors the y component of a drawn radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusAnchor {
    /// y is measured from the circle's center y
    #[default]
    Center,
    /// y is measured from the circle's center x (reproduces old output)
    CenterX,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: u32) -> Self {
        Self { x, y, radius }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Perimeter samples at angles `k * step` over one full turn.
    ///
    /// The outline is a dotted approximation; density depends only on `step`.
    pub fn outline_points(&self, step: f64) -> Vec<(i32, i32)> {
        let r = self.radius as f64;

        (0..samples_in(TAU, step))
            .map(|k| {
                let theta = k as f64 * step;
                let x = (self.x as f64 + r * theta.cos()).round() as i32;
                let y = (self.y as f64 + r * theta.sin()).round() as i32;
                (x, y)
            })
            .collect()
    }

    /// Samples along the segment from the center to the perimeter.
    ///
    /// Angle 0 points straight up; angles grow clockwise on screen.
    pub fn radius_points(&self, angle: f64, step: f64, anchor: RadiusAnchor) -> Vec<(i32, i32)> {
        let r = self.radius as f64;
        let (cos, sin) = ((angle - FRAC_PI_2).cos(), (angle - FRAC_PI_2).sin());
        let origin_y = match anchor {
            RadiusAnchor::Center => self.y as f64,
            RadiusAnchor::CenterX => self.x as f64,
        };

        (0..samples_in(r, step))
            .map(|k| {
                let distance = k as f64 * step;
                let x = (self.x as f64 + distance * cos).round() as i32;
                let y = (origin_y + distance * sin).round() as i32;
                (x, y)
            })
            .collect()
    }

    /// Draw the dotted outline, returning how many samples landed on the canvas
    pub fn draw_bounds(&self, img: &mut RgbaImage, color: Rgba<u8>, step: f64) -> usize {
        let mut drawn = 0;
        for (x, y) in self.outline_points(step) {
            if canvas::put_pixel_checked(img, x, y, color) {
                drawn += 1;
            }
        }
        drawn
    }

    /// Draw one radius, returning how many samples landed on the canvas
    pub fn draw_radius(
        &self,
        img: &mut RgbaImage,
        angle: f64,
        color: Rgba<u8>,
        step: f64,
        anchor: RadiusAnchor,
    ) -> usize {
        let mut drawn = 0;
        for (x, y) in self.radius_points(angle, step, anchor) {
            if canvas::put_pixel_checked(img, x, y, color) {
                drawn += 1;
            }
        }
        drawn
    }
}

/// Angular sampling used when generating a color wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleStep {
    /// Fixed step in radians; yields ⌈2π / step⌉ samples
    Fixed(f64),
    /// Step of π / n; yields exactly 2n samples
    PiDivisor(u32),
}

impl SampleStep {
    pub fn radians(&self) -> f64 {
        match *self {
            SampleStep::Fixed(step) => step,
            SampleStep::PiDivisor(n) => PI / n as f64,
        }
    }

    pub fn sample_count(&self) -> usize {
        match *self {
            SampleStep::Fixed(step) => samples_in(TAU, step),
            SampleStep::PiDivisor(n) => 2 * n as usize,
        }
    }

    /// Angle of the `index`-th sample
    pub fn angle(&self, index: usize) -> f64 {
        match *self {
            SampleStep::Fixed(step) => index as f64 * step,
            SampleStep::PiDivisor(n) => index as f64 * PI / n as f64,
        }
    }
}

impl Default for SampleStep {
    fn default() -> Self {
        SampleStep::Fixed(0.01)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Generation index; the only sort key
    pub tag: u64,
}

impl WheelColor {
    pub fn rgba(&self) -> Rgba<u8> {
        Rgba([self.red, self.green, self.blue, 255])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorWheel {
    colors: Vec<WheelColor>,
}

impl ColorWheel {
    /// Sample the hue wheel over [0, 2π), tagging each color with its index.
    /// Fails when the step would need more than `MAX_SAMPLES` colors.
    pub fn generate(step: SampleStep) -> Result<Self> {
        let count = step.sample_count();
        if count > MAX_SAMPLES {
            anyhow::bail!(
                "Color wheel step {:?} needs {} samples, limit is {}",
                step, count, MAX_SAMPLES
            );
        }

        let colors = (0..count)
            .map(|i| {
                let [red, green, blue] = hue::rgb_at(step.angle(i));
                WheelColor {
                    red,
                    green,
                    blue,
                    tag: i as u64,
                }
            })
            .collect();

        Ok(Self { colors })
    }

    pub fn from_colors(colors: Vec<WheelColor>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[WheelColor] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WheelColor> {
        self.colors.iter()
    }

    /// Fisher-Yates: position i swaps with a uniform j in [0, i]
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.colors.len() {
            let j = rng.gen_range(0..=i);
            self.colors.swap(i, j);
        }
    }

    /// Restore generation order. Tags are unique so this undoes any shuffle.
    pub fn sort_by_tag(&mut self) {
        self.colors.sort_by_key(|c| c.tag);
    }

    /// Angle at which the color at `index` is drawn
    pub fn spoke_angle(&self, index: usize) -> f64 {
        if self.colors.is_empty() {
            return 0.0;
        }
        index as f64 / self.colors.len() as f64 * TAU
    }
}
