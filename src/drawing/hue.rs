use std::f64::consts::{FRAC_PI_3, TAU};

/// Number of 60° sectors in one turn of the wheel
const SECTORS: f64 = 6.0;

/// Sector position of each channel's plateau center
const RED_PEAK: f64 = 0.0;
const GREEN_PEAK: f64 = 2.0;
const BLUE_PEAK: f64 = 4.0;

/// Position of `angle` on the wheel measured in sectors, in [0, 6)
fn sector_position(angle: f64) -> f64 {
    angle.rem_euclid(TAU) / FRAC_PI_3
}

/// Trapezoid around `peak`: 255 within one sector of it, 0 beyond two,
/// linear in between (slope 255 per sector, i.e. 255 * 3 / π per radian).
fn channel(angle: f64, peak: f64) -> u8 {
    let offset = (sector_position(angle) - peak).rem_euclid(SECTORS);
    let distance = offset.min(SECTORS - offset);
    let level = (2.0 - distance).clamp(0.0, 1.0);
    (level * 255.0).round() as u8
}

/// Red channel: 255 on [0, π/3] and [5π/3, 2π), 0 on [2π/3, 4π/3]
pub fn red(angle: f64) -> u8 {
    channel(angle, RED_PEAK)
}

/// Green channel: 255 on [π/3, π], 0 on [4π/3, 2π)
pub fn green(angle: f64) -> u8 {
    channel(angle, GREEN_PEAK)
}

/// Blue channel: 255 on [π, 5π/3], 0 on [0, 2π/3]
pub fn blue(angle: f64) -> u8 {
    channel(angle, BLUE_PEAK)
}

/// Full-saturation color at `angle` (radians) around the hue wheel
pub fn rgb_at(angle: f64) -> [u8; 3] {
    [red(angle), green(angle), blue(angle)]
}
