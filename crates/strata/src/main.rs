//! # STRATA Height-Map Generator
//!
//! Command-line tool that renders a fractal gradient-noise height map
//! and saves it as a PNG.
//!
//! ```bash
//! strata                         # stock 256x256, ten octaves
//! strata render.toml             # load a config file
//! strata --width 512 --height 512 --octaves 8 --seed 42 --name alpine
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use strata_raster::{export, render};

mod config;

use config::HeightmapConfig;

/// Flag overrides collected from the command line.
#[derive(Debug, Default)]
struct CliOverrides {
    /// Optional positional config file.
    config_path: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
    octaves: Option<u32>,
    seed: Option<u64>,
    wrap: Option<u32>,
    frequency: Option<f64>,
    output_dir: Option<PathBuf>,
    name: Option<String>,
}

fn print_usage() {
    println!("Usage: strata [config.toml] [flags]");
    println!();
    println!("Flags:");
    println!("  --width <px>       canvas width (default 256)");
    println!("  --height <px>      canvas height (default 256)");
    println!("  --octaves <n>      noise layers (default 10)");
    println!("  --seed <n>         fixed seed for reproducible output");
    println!("  --wrap <n>         grid wrap size (enables non-square canvases)");
    println!("  --frequency <f>    first-octave spatial scale (default 0.025)");
    println!("  --out <dir>        output directory (default .)");
    println!("  --name <stem>      output file stem (default noise_<random>)");
}

/// Parses the command line. Returns `None` after printing a message for
/// `--help` or a malformed invocation.
fn parse_args(args: &[String]) -> Option<CliOverrides> {
    let mut overrides = CliOverrides::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--help" || arg == "-h" {
            print_usage();
            return None;
        }
        if !arg.starts_with("--") {
            if overrides.config_path.is_some() {
                println!("Error: more than one config file given");
                return None;
            }
            overrides.config_path = Some(PathBuf::from(arg));
            continue;
        }

        let Some(value) = iter.next() else {
            println!("Error: {arg} needs a value");
            return None;
        };
        let parsed = match arg.as_str() {
            "--width" => value.parse().map(|v| overrides.width = Some(v)).is_ok(),
            "--height" => value.parse().map(|v| overrides.height = Some(v)).is_ok(),
            "--octaves" => value.parse().map(|v| overrides.octaves = Some(v)).is_ok(),
            "--seed" => value.parse().map(|v| overrides.seed = Some(v)).is_ok(),
            "--wrap" => value.parse().map(|v| overrides.wrap = Some(v)).is_ok(),
            "--frequency" => value.parse().map(|v| overrides.frequency = Some(v)).is_ok(),
            "--out" => {
                overrides.output_dir = Some(PathBuf::from(value));
                true
            }
            "--name" => {
                overrides.name = Some(value.clone());
                true
            }
            _ => {
                println!("Error: unknown flag {arg}");
                return None;
            }
        };
        if !parsed {
            println!("Error: {arg} got an invalid value: {value}");
            return None;
        }
    }

    Some(overrides)
}

/// Applies CLI overrides on top of the loaded configuration.
fn apply_overrides(config: &mut HeightmapConfig, overrides: &CliOverrides) {
    if let Some(width) = overrides.width {
        config.width = width;
    }
    if let Some(height) = overrides.height {
        config.height = height;
    }
    if let Some(octaves) = overrides.octaves {
        config.octaves = octaves;
    }
    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }
    if let Some(wrap) = overrides.wrap {
        config.wrap = Some(wrap);
    }
    if let Some(frequency) = overrides.frequency {
        config.frequency = frequency;
    }
    if let Some(ref output_dir) = overrides.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(ref name) = overrides.name {
        config.name = Some(name.clone());
    }
}

/// The output file stem: the configured name, or `noise_<5 digits>` so
/// repeated unnamed runs do not overwrite each other.
fn output_stem(config: &HeightmapConfig) -> String {
    config.name.clone().unwrap_or_else(|| {
        let suffix = ChaCha8Rng::from_entropy().gen_range(10_000..=99_999_u32);
        format!("noise_{suffix}")
    })
}

fn main() -> ExitCode {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         STRATA HEIGHT-MAP GENERATOR                              ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(overrides) = parse_args(&args) else {
        return ExitCode::FAILURE;
    };

    let mut config = match overrides.config_path {
        Some(ref path) => match HeightmapConfig::load(path) {
            Ok(config) => {
                println!("Loaded config: {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => HeightmapConfig::default(),
    };
    apply_overrides(&mut config, &overrides);

    println!("Canvas:    {}x{}", config.width, config.height);
    println!("Octaves:   {}", config.octaves);
    println!("Frequency: {}", config.frequency);
    match config.seed {
        Some(seed) => println!("Seed:      {seed}"),
        None => println!("Seed:      (random)"),
    }
    println!();

    let start = Instant::now();
    let buffer = match render(&config.render_options()) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("Rendered in {:?}", start.elapsed());

    let path = config.output_dir.join(format!("{}.png", output_stem(&config)));
    if let Err(e) = export::save_png(&buffer, &path) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    println!("Saved {}", path.display());

    ExitCode::SUCCESS
}
