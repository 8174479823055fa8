//! # STRATA Raster
//!
//! Drives the noise core across a pixel grid and turns the accumulated
//! field into an RGB image.
//!
//! ## Pipeline
//!
//! 1. `render` validates the canvas, builds one fresh permutation table
//!    and hands off to the pixel loop
//! 2. `render_field` accumulates octaves per pixel and shades intensities
//!    through the [`Palette`]
//! 3. `export` persists the finished [`PixelBuffer`] as a PNG — the only
//!    I/O in the workspace
//!
//! ## Example
//!
//! ```rust,ignore
//! use strata_raster::{render, RenderOptions};
//!
//! let buffer = render(&RenderOptions::default())?;
//! strata_raster::export::save_png(&buffer, "heightmap.png".as_ref())?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod error;
pub mod export;
pub mod palette;
pub mod renderer;

pub use buffer::{PixelBuffer, Rgb};
pub use error::{RasterError, RasterResult};
pub use palette::Palette;
pub use renderer::{render, render_field, RenderOptions};
