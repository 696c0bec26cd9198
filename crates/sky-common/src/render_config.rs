//! Rendering options chosen by the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ViewerError;

/// Colormap used by a fresh session.
pub const DEFAULT_COLORMAP: &str = "gist_heat";

/// Suffix appended to a colormap name to select its reversed variant.
pub const REVERSED_SUFFIX: &str = "_r";

/// Intensity transform applied to samples before color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScalingMode {
    /// output = input (shown to users as "Normal")
    #[default]
    #[serde(alias = "Normal")]
    Identity,
    /// output = sqrt(1 + input)
    Root,
    /// output = ln(1 + input)
    Logarithmic,
}

impl ScalingMode {
    pub const ALL: [ScalingMode; 3] = [
        ScalingMode::Identity,
        ScalingMode::Root,
        ScalingMode::Logarithmic,
    ];

    /// Label used in the user interface.
    pub fn label(&self) -> &'static str {
        match self {
            ScalingMode::Identity => "Normal",
            ScalingMode::Root => "Root",
            ScalingMode::Logarithmic => "Logarithmic",
        }
    }

    /// Apply the transform to a single sample.
    ///
    /// Samples below -1 have no real root or logarithm and become NaN.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            ScalingMode::Identity => value,
            ScalingMode::Root => (1.0 + value).sqrt(),
            ScalingMode::Logarithmic => (1.0 + value).ln(),
        }
    }
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScalingMode {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "identity" | "linear" => Ok(ScalingMode::Identity),
            "root" | "sqrt" => Ok(ScalingMode::Root),
            "logarithmic" | "log" => Ok(ScalingMode::Logarithmic),
            _ => Err(ViewerError::ConfigError(format!(
                "unknown scaling mode '{}' (expected Normal, Root or Logarithmic)",
                s
            ))),
        }
    }
}

/// The active rendering configuration of a session.
///
/// The base colormap name and the invert flag are kept apart; the name handed
/// to the rendering side is derived from both on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub scaling: ScalingMode,
    colormap: String,
    inverted: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scaling: ScalingMode::Identity,
            colormap: DEFAULT_COLORMAP.to_string(),
            inverted: false,
        }
    }
}

impl RenderConfig {
    pub fn new(scaling: ScalingMode, colormap: impl Into<String>, inverted: bool) -> Self {
        Self {
            scaling,
            colormap: colormap.into(),
            inverted,
        }
    }

    /// The base colormap name, without any reversal suffix.
    pub fn colormap(&self) -> &str {
        &self.colormap
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn set_colormap(&mut self, name: impl Into<String>) {
        self.colormap = name.into();
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Name presented to the rendering surface.
    pub fn effective_colormap(&self) -> String {
        if self.inverted {
            format!("{}{}", self.colormap, REVERSED_SUFFIX)
        } else {
            self.colormap.clone()
        }
    }
}
