//! # Raster Error Types
//!
//! All errors surfaced at the rendering and export boundaries. The inner
//! pixel loop is infallible once `render` has validated its inputs.

use thiserror::Error;

use strata_noise::NoiseError;

/// Errors from canvas validation, noise wiring and image export.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Canvas dimensions must both be non-zero.
    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    InvalidCanvas {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Without an explicit wrap size the grid wraps at the canvas height,
    /// which only lines up on a square canvas.
    #[error(
        "default wrap size requires a square canvas, got {width}x{height}; \
         set an explicit wrap size for non-square output"
    )]
    NonSquareCanvas {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// An explicit wrap size of zero was requested.
    #[error("wrap size must be at least 1")]
    InvalidWrap,

    /// The noise core rejected its construction inputs.
    #[error(transparent)]
    Noise(#[from] NoiseError),

    /// PNG encoding or the underlying file write failed.
    #[error("failed to export image: {0}")]
    Export(#[from] image::ImageError),
}

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;
