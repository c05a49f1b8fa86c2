//! Tests for color wheel generation, shuffling and sorting.
//!
//! Tests cover:
//! - Sample counts for fixed and π-divisor steps
//! - Generation tags
//! - Shuffle then sort restores generation order
//! - Seeded shuffles are reproducible

mod common;

use common::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::{PI, TAU};

#[test]
fn test_fixed_step_sample_count() -> anyhow::Result<()> {
    let wheel = ColorWheel::generate(SampleStep::Fixed(0.01))?;
    assert_eq!(wheel.len(), (TAU / 0.01).ceil() as usize);
    assert_eq!(wheel.len(), 629);

    let coarse = ColorWheel::generate(SampleStep::Fixed(1.0))?;
    assert_eq!(coarse.len(), 7);

    Ok(())
}

#[test]
fn test_pi_divisor_sample_count() -> anyhow::Result<()> {
    assert_eq!(ColorWheel::generate(SampleStep::PiDivisor(360))?.len(), 720);
    assert_eq!(ColorWheel::generate(SampleStep::PiDivisor(3))?.len(), 6);

    // The same step expressed in radians must not gain a stray sample
    let fixed = ColorWheel::generate(SampleStep::Fixed(PI / 360.0))?;
    assert_eq!(fixed.len(), 720);

    Ok(())
}

#[test]
fn test_degenerate_step_is_empty() -> anyhow::Result<()> {
    assert!(ColorWheel::generate(SampleStep::Fixed(0.0))?.is_empty());
    assert!(ColorWheel::generate(SampleStep::Fixed(-1.0))?.is_empty());

    Ok(())
}

#[test]
fn test_tags_follow_generation_order() -> anyhow::Result<()> {
    let wheel = ColorWheel::generate(SampleStep::default())?;

    for (i, color) in wheel.iter().enumerate() {
        assert_eq!(color.tag, i as u64);
    }

    Ok(())
}

#[test]
fn test_first_color_is_red() -> anyhow::Result<()> {
    let wheel = ColorWheel::generate(SampleStep::PiDivisor(3))?;
    let colors = wheel.colors();

    let rgb: Vec<(u8, u8, u8)> = colors.iter().map(|c| (c.red, c.green, c.blue)).collect();
    assert_eq!(
        rgb,
        vec![
            (255, 0, 0),
            (255, 255, 0),
            (0, 255, 0),
            (0, 255, 255),
            (0, 0, 255),
            (255, 0, 255),
        ]
    );

    Ok(())
}

#[test]
fn test_shuffle_then_sort_restores_wheel() -> anyhow::Result<()> {
    let original = ColorWheel::generate(SampleStep::default())?;

    for seed in TEST_SEEDS {
        let mut wheel = original.clone();
        let mut rng = StdRng::seed_from_u64(seed);

        wheel.shuffle(&mut rng);
        wheel.sort_by_tag();

        assert_eq!(wheel, original, "round trip failed for seed {}", seed);
    }

    Ok(())
}

#[test]
fn test_shuffle_permutes() -> anyhow::Result<()> {
    let original = ColorWheel::generate(SampleStep::default())?;
    let mut wheel = original.clone();
    let mut rng = StdRng::seed_from_u64(42);

    wheel.shuffle(&mut rng);

    assert_eq!(wheel.len(), original.len());
    assert_ne!(wheel, original, "629 colors should not shuffle into the same order");

    let mut tags: Vec<u64> = wheel.iter().map(|c| c.tag).collect();
    tags.sort_unstable();
    assert_eq!(tags, (0..original.len() as u64).collect::<Vec<_>>());

    Ok(())
}

#[test]
fn test_same_seed_same_permutation() -> anyhow::Result<()> {
    let mut a = ColorWheel::generate(SampleStep::PiDivisor(360))?;
    let mut b = a.clone();

    a.shuffle(&mut StdRng::seed_from_u64(7));
    b.shuffle(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);

    let mut c = ColorWheel::generate(SampleStep::PiDivisor(360))?;
    c.shuffle(&mut StdRng::seed_from_u64(8));
    assert_ne!(a, c);

    Ok(())
}

#[test]
fn test_sort_uses_tag_only() -> anyhow::Result<()> {
    // Two identical colors, reversed tags
    let colors = vec![
        WheelColor { red: 1, green: 2, blue: 3, tag: 1 },
        WheelColor { red: 9, green: 9, blue: 9, tag: 0 },
    ];
    let mut wheel = ColorWheel::from_colors(colors);

    wheel.sort_by_tag();

    assert_eq!(wheel.colors()[0].red, 9);
    assert_eq!(wheel.colors()[1].red, 1);

    Ok(())
}

#[test]
fn test_small_wheels_shuffle() -> anyhow::Result<()> {
    let mut empty = ColorWheel::default();
    empty.shuffle(&mut StdRng::seed_from_u64(0));
    assert!(empty.is_empty());

    let mut single = ColorWheel::generate(SampleStep::Fixed(10.0))?;
    assert_eq!(single.len(), 1);
    single.shuffle(&mut StdRng::seed_from_u64(0));
    assert_eq!(single.colors()[0].tag, 0);

    Ok(())
}

#[test]
fn test_spoke_angles() -> anyhow::Result<()> {
    let wheel = ColorWheel::generate(SampleStep::PiDivisor(2))?;
    assert_eq!(wheel.len(), 4);

    assert_eq!(wheel.spoke_angle(0), 0.0);
    assert!((wheel.spoke_angle(1) - PI / 2.0).abs() < 1e-12);
    assert!((wheel.spoke_angle(2) - PI).abs() < 1e-12);
    assert!((wheel.spoke_angle(3) - 3.0 * PI / 2.0).abs() < 1e-12);

    assert_eq!(ColorWheel::default().spoke_angle(3), 0.0);

    Ok(())
}

#[test]
fn test_oversized_wheel_is_rejected() {
    // 1. A divisor this large would need billions of colors
    let result = ColorWheel::generate(SampleStep::PiDivisor(u32::MAX));

    // 2. It is refused with an error instead of being allocated
    assert!(result.is_err());
    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("limit"), "got: {}", error_msg);

    // 3. The same holds for a tiny fixed step
    assert!(ColorWheel::generate(SampleStep::Fixed(1e-12)).is_err());
}

#[test]
fn test_wheel_at_sample_limit() -> anyhow::Result<()> {
    let divisor = (huespokes::models::MAX_SAMPLES / 2) as u32;
    let wheel = ColorWheel::generate(SampleStep::PiDivisor(divisor))?;
    assert_eq!(wheel.len(), huespokes::models::MAX_SAMPLES);

    assert!(ColorWheel::generate(SampleStep::PiDivisor(divisor + 1)).is_err());

    Ok(())
}

#[test]
fn test_samples_in_handles_tiny_steps() {
    use huespokes::models::samples_in;

    assert_eq!(samples_in(TAU, 0.01), 629);
    assert_eq!(samples_in(100.0, 0.1), 1000);
    assert_eq!(samples_in(TAU, 0.0), 0);
    assert_eq!(samples_in(TAU, f64::NAN), 0);
    assert_eq!(samples_in(0.0, 0.1), 0);

    // Far past any counter width, without overflowing
    assert!(samples_in(TAU, 1e-300) > huespokes::models::MAX_SAMPLES);
}
