//! YAML configuration file.
//!
//! ```yaml
//! defaults:
//!   colormap: viridis
//!   scaling: Logarithmic
//!   inverted: false
//! survey:
//!   base_url: https://skyview.gsfc.nasa.gov/current/cgi/runquery.pl
//!   pixels: 300
//!   timeout_secs: 60
//!   max_retries: 3
//! output:
//!   zoom: 2
//!   path: skyspotter.png
//! ```
//!
//! Every key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sky_common::{RenderConfig, ScalingMode, DEFAULT_COLORMAP};
use std::path::{Path, PathBuf};
use survey_client::SurveyClientConfig;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub defaults: DisplayDefaults,
    pub survey: SurveyClientConfig,
    pub output: OutputConfig,
}

/// Rendering options a new session starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayDefaults {
    pub colormap: String,
    pub scaling: ScalingMode,
    pub inverted: bool,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            colormap: DEFAULT_COLORMAP.to_string(),
            scaling: ScalingMode::Identity,
            inverted: false,
        }
    }
}

/// Where rendered frames go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Integer enlargement factor
    pub zoom: u32,
    /// File rewritten on every redraw
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            zoom: 1,
            path: PathBuf::from("skyspotter.png"),
        }
    }
}

impl ViewerConfig {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load `path` if given and present, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => {
                let config = Self::load(path)?;
                info!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            Some(path) => {
                warn!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(
            self.defaults.scaling,
            self.defaults.colormap.clone(),
            self.defaults.inverted,
        )
    }
}
