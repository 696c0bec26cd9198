//! Common types and utilities shared across all skyspotter crates.

pub mod collaborators;
pub mod error;
pub mod image;
pub mod render_config;
pub mod survey;
pub mod wcs;

pub use collaborators::{ImageSource, SurveySearch};
pub use error::{ViewerError, ViewerResult};
pub use image::{ImageMetadata, LoadedImage, SampleArray};
pub use render_config::{RenderConfig, ScalingMode, DEFAULT_COLORMAP, REVERSED_SUFFIX};
pub use survey::{Survey, SurveyCatalog, SurveyGroup};
pub use wcs::{Projection, WcsKeywords, WorldMapping};
