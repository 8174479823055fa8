//! # STRATA Noise
//!
//! Deterministic 2D gradient noise for height-field generation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the shuffle source is injected; same seed always
//!    produces the same field
//! 2. **One table per field**: permutation tables are built fresh for each
//!    render and never cached or shared between images
//! 3. **Boundary validation**: constructors return errors, the sampling
//!    path is infallible
//!
//! ## Core Components
//!
//! - `PermutationTable`: shuffled index table, duplicated to twice its size
//! - `GradientNoise`: single-octave sampling over a wrapped grid
//! - `OctaveSettings`: fractal accumulation parameters
//!
//! ## Example
//!
//! ```rust,ignore
//! use strata_noise::{GradientNoise, NoiseSeed, OctaveSettings, PermutationTable};
//!
//! let table = PermutationTable::generate_seeded(256, NoiseSeed::new(42))?;
//! let noise = GradientNoise::new(table, 256)?;
//!
//! // Single octave, in [-1, 1]
//! let raw = noise.sample(3.7, 12.25);
//!
//! // Ten octaves, normalized to [0, 1]
//! let field = noise.accumulate(120.0, 80.0, &OctaveSettings::new(10));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod gradient;
pub mod sampler;
pub mod table;

pub use error::{NoiseError, NoiseResult};
pub use sampler::{GradientNoise, OctaveSettings};
pub use table::{NoiseSeed, PermutationTable};
