//! # Run Configuration
//!
//! Everything a render needs, loadable from a TOML file. Every field has
//! a default, so a config file only states what it overrides:
//!
//! ```toml
//! width = 512
//! height = 512
//! octaves = 8
//! seed = 42
//! output_dir = "renders"
//!
//! [palette]
//! water_cutoff = 120
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use strata_noise::{NoiseSeed, OctaveSettings};
use strata_raster::{Palette, RenderOptions};

/// Errors from reading or parsing a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the rejected file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Height-map run configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeightmapConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Number of octave layers.
    pub octaves: u32,
    /// Spatial scale of the first octave.
    pub frequency: f64,
    /// Fixed seed; a random table is used when absent.
    pub seed: Option<u64>,
    /// Grid wrap size override for non-square canvases.
    pub wrap: Option<u32>,
    /// Color thresholds.
    pub palette: Palette,
    /// Directory the image is written into.
    pub output_dir: PathBuf,
    /// Output file stem, without extension. When absent a randomized
    /// `noise_<digits>` stem is used so repeated runs do not overwrite
    /// each other.
    pub name: Option<String>,
}

impl Default for HeightmapConfig {
    /// The stock demo render: 256x256, ten octaves, current directory.
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            octaves: 10,
            frequency: OctaveSettings::BASE_FREQUENCY,
            seed: None,
            wrap: None,
            palette: Palette::default(),
            output_dir: PathBuf::from("."),
            name: None,
        }
    }
}

impl HeightmapConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns the underlying TOML error for unknown fields or type
    /// mismatches.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Converts the configuration into renderer options.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            octaves: self.octaves,
            base_frequency: self.frequency,
            seed: self.seed.map(NoiseSeed::new),
            wrap: self.wrap,
            palette: self.palette,
        }
    }
}
