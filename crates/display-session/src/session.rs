//! The display session: current image plus rendering options.

use renderer::{ColormapRegistry, DisplayBuffer};
use sky_common::{
    ImageMetadata, LoadedImage, RenderConfig, SampleArray, ScalingMode, ViewerError,
    ViewerResult, WorldMapping,
};
use tracing::{debug, info};
use uuid::Uuid;

/// Holds the image being displayed and how to display it.
///
/// Rendering options survive image loads. Every setter either applies fully
/// or leaves the session untouched.
#[derive(Debug)]
pub struct DisplaySession {
    id: Uuid,
    image: Option<LoadedImage>,
    config: RenderConfig,
    colormaps: ColormapRegistry,
}

impl Default for DisplaySession {
    fn default() -> Self {
        Self::new(ColormapRegistry::builtin())
    }
}

impl DisplaySession {
    /// A session with the default options and no image.
    pub fn new(colormaps: ColormapRegistry) -> Self {
        Self {
            id: Uuid::new_v4(),
            image: None,
            config: RenderConfig::default(),
            colormaps,
        }
    }

    /// A session starting from `config`, whose colormap must be known.
    pub fn with_config(colormaps: ColormapRegistry, config: RenderConfig) -> ViewerResult<Self> {
        if !colormaps.contains(config.colormap()) {
            return Err(ViewerError::UnknownColormap(config.colormap().to_string()));
        }
        Ok(Self {
            config,
            ..Self::new(colormaps)
        })
    }

    /// Identifier used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn colormaps(&self) -> &ColormapRegistry {
        &self.colormaps
    }

    /// Replace the current image.
    pub fn load_image(&mut self, samples: SampleArray, mapping: WorldMapping) -> ViewerResult<()> {
        self.load(LoadedImage::new(samples, mapping, ImageMetadata::default()))
    }

    /// Replace the current image from nested rows.
    ///
    /// Fails with `InvalidImage` for empty or ragged input.
    pub fn load_rows(&mut self, rows: Vec<Vec<f64>>, mapping: WorldMapping) -> ViewerResult<()> {
        let samples = SampleArray::from_rows(rows)?;
        self.load_image(samples, mapping)
    }

    /// Replace the current image along with its metadata.
    ///
    /// Fails with `InvalidImage` when no sample is finite.
    pub fn load(&mut self, image: LoadedImage) -> ViewerResult<()> {
        image.samples.validate()?;

        info!(
            session = %self.id,
            rows = image.samples.rows(),
            cols = image.samples.cols(),
            celestial = image.mapping.is_celestial(),
            source = %image.metadata.source,
            "Image loaded"
        );
        self.image = Some(image);
        Ok(())
    }

    pub fn set_scaling_mode(&mut self, mode: ScalingMode) {
        debug!(session = %self.id, scaling = %mode, "Scaling mode set");
        self.config.scaling = mode;
    }

    /// Select a colormap by base name, keeping the invert flag.
    pub fn set_colormap(&mut self, name: &str) -> ViewerResult<()> {
        if !self.colormaps.contains(name) {
            return Err(ViewerError::UnknownColormap(name.to_string()));
        }
        self.config.set_colormap(name);
        debug!(
            session = %self.id,
            colormap = %self.config.effective_colormap(),
            "Colormap set"
        );
        Ok(())
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.config.set_inverted(inverted);
        debug!(
            session = %self.id,
            colormap = %self.config.effective_colormap(),
            "Colormap inversion set"
        );
    }

    /// Colormap name handed to the renderer, with `_r` when inverted.
    pub fn effective_colormap(&self) -> String {
        self.config.effective_colormap()
    }

    /// Render the current image with the current options.
    pub fn render_image(&self) -> ViewerResult<DisplayBuffer> {
        let image = self.image.as_ref().ok_or(ViewerError::NoImageLoaded)?;
        renderer::render(&image.samples, &image.mapping, &self.config, &self.colormaps)
    }
}
