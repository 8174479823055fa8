//! # Field Renderer
//!
//! Iterates every pixel of a canvas, accumulates the octave field at its
//! coordinates, and shades the resulting intensity through the palette.
//!
//! All validation happens in [`render`]; [`render_field`] is the
//! infallible inner loop and can be driven directly with a prepared
//! sampler (fixtures and benchmarks do exactly that).

use std::time::Instant;

use strata_noise::{GradientNoise, NoiseSeed, OctaveSettings, PermutationTable};

use crate::buffer::PixelBuffer;
use crate::error::{RasterError, RasterResult};
use crate::palette::Palette;

/// Parameters for one height-map render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Number of octave layers per pixel.
    pub octaves: u32,
    /// Spatial scale of the first octave.
    pub base_frequency: f64,
    /// Seed for the permutation table; entropy-seeded when absent.
    pub seed: Option<NoiseSeed>,
    /// Grid wrap size. When absent the grid wraps at the canvas height,
    /// which requires a square canvas; set it explicitly to render
    /// non-square canvases.
    pub wrap: Option<u32>,
    /// Intensity-to-color mapping.
    pub palette: Palette,
}

impl Default for RenderOptions {
    /// The stock demo render: 256x256, ten octaves, default palette.
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            octaves: 10,
            base_frequency: OctaveSettings::BASE_FREQUENCY,
            seed: None,
            wrap: None,
            palette: Palette::default(),
        }
    }
}

/// Renders a height field into a fresh pixel buffer.
///
/// Builds one permutation table for this render (tables are never reused
/// across images), accumulates the octave field per pixel and shades it.
///
/// # Errors
///
/// - [`RasterError::InvalidCanvas`] when either dimension is zero
/// - [`RasterError::NonSquareCanvas`] when no wrap size is given and the
///   canvas is not square
/// - [`RasterError::InvalidWrap`] when an explicit wrap size is zero
pub fn render(options: &RenderOptions) -> RasterResult<PixelBuffer> {
    if options.width == 0 || options.height == 0 {
        return Err(RasterError::InvalidCanvas {
            width: options.width,
            height: options.height,
        });
    }

    let wrap = match options.wrap {
        Some(0) => return Err(RasterError::InvalidWrap),
        Some(wrap) => wrap as usize,
        None => {
            if options.width != options.height {
                return Err(RasterError::NonSquareCanvas {
                    width: options.width,
                    height: options.height,
                });
            }
            options.height as usize
        }
    };

    let table = match options.seed {
        Some(seed) => PermutationTable::generate_seeded(wrap, seed)?,
        None => PermutationTable::generate(wrap)?,
    };
    let noise = GradientNoise::new(table, wrap)?;

    let settings = OctaveSettings {
        octaves: options.octaves,
        base_frequency: options.base_frequency,
    };

    let start = Instant::now();
    let buffer = render_field(&noise, options.width, options.height, &settings, &options.palette);
    tracing::info!(
        width = options.width,
        height = options.height,
        octaves = options.octaves,
        elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        "height field rendered"
    );
    Ok(buffer)
}

/// Fills a fresh buffer from a prepared sampler.
///
/// Infallible: canvas and sampler have already been validated by the
/// caller. Each pixel is written exactly once.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_field(
    noise: &GradientNoise,
    width: u32,
    height: u32,
    settings: &OctaveSettings,
    palette: &Palette,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let field = noise.accumulate(f64::from(x), f64::from(y), settings);
            // The field is clamped to [0, 1], so this stays in [0, 255].
            let intensity = (field * 255.0).round() as u8;
            buffer.set(x, y, palette.shade(intensity));
        }
    }
    buffer
}
