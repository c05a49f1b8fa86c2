#![allow(dead_code)]

use huespokes::{Circle, RenderConfig};
use image::{Rgba, RgbaImage};

/// Small blank canvas for drawing tests
pub fn blank_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::new(width, height)
}

/// The circle every default render draws around
pub fn default_circle() -> Circle {
    Circle::new(250, 250, 100)
}

/// Default render with a fixed seed
pub fn seeded_config(seed: u64) -> RenderConfig {
    RenderConfig::new().with_seed(seed)
}

/// Count the pixels of `img` equal to `color`
pub fn count_pixels(img: &RgbaImage, color: Rgba<u8>) -> usize {
    img.pixels().filter(|p| **p == color).count()
}

/// Color constants for tests
pub const TEST_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TEST_RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const TEST_BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const TEST_BLANK: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Seeds exercised by shuffle tests
pub const TEST_SEEDS: [u64; 6] = [0, 1, 7, 42, 1234, u64::MAX];
