use clap::Parser;
use std::path::PathBuf;

use huespokes::drawing::output;
use huespokes::{RadiusAnchor, RenderConfig, SampleStep};

/// Keeps the wheel at 200k colors or fewer
const MAX_PI_DIVISOR: i64 = 100_000;

#[derive(Parser)]
#[command(name = "huespokes")]
#[command(about = "Draw a circle filled with hue-wheel spokes and save it as JPEG")]
struct Cli {
    /// Output JPEG path
    #[arg(short, long, value_name = "PATH", default_value = output::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for the shuffle (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Sort the shuffled colors back into generation order before drawing
    #[arg(long)]
    sorted: bool,

    /// Sample the wheel every π/N radians instead of every 0.01 radians
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=MAX_PI_DIVISOR))]
    pi_divisor: Option<u32>,

    /// JPEG quality
    #[arg(long, default_value_t = output::DEFAULT_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Anchor spoke y coordinates on the center's x (old rendering)
    #[arg(long)]
    anchor_center_x: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save a PNG after every step to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config = RenderConfig::new()
        .with_verbose(args.verbose)
        .with_sorted(args.sorted)
        .with_quality(args.quality);

    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(n) = args.pi_divisor {
        config = config.with_sampling(SampleStep::PiDivisor(n));
    }
    if args.anchor_center_x {
        config = config.with_anchor(RadiusAnchor::CenterX);
    }

    let mut pipeline = config.build_pipeline();
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    if args.verbose {
        println!("Rendering {}x{}: {}", config.width, config.height,
                pipeline.step_names().join(" -> "));
    }

    let scene = pipeline.run(config.initial_scene())?;
    output::write_jpeg(&args.output, &scene.canvas, config.quality)?;

    if let Some(seed) = scene.get_uint("seed") {
        println!("Wrote {} (seed {})", args.output.display(), seed);
    } else {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}
