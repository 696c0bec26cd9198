//! Destinations for rendered frames.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use serde::Serialize;
use sky_common::{ViewerError, ViewerResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::buffer::DisplayBuffer;
use crate::png::create_png_auto;
use crate::ticks::AxisLabels;

/// Something that can show or store a display buffer.
pub trait RenderSurface: Send {
    /// Show the buffer, replacing whatever was shown before.
    fn present(&mut self, buffer: &DisplayBuffer) -> ViewerResult<()>;

    /// Write the buffer to `path`.
    fn save(&mut self, buffer: &DisplayBuffer, path: &Path) -> ViewerResult<()>;
}

/// Writes frames as PNG files with an axis-label sidecar.
///
/// `present` rewrites the preview file when one is configured and is a
/// no-op otherwise.
#[derive(Debug, Clone)]
pub struct PngSurface {
    zoom: u32,
    preview: Option<PathBuf>,
}

impl Default for PngSurface {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Contents of the `<file>.axes.json` sidecar.
#[derive(Debug, Serialize)]
struct AxesSidecar<'a> {
    colormap: &'a str,
    rows: usize,
    cols: usize,
    zoom: u32,
    axes: &'a AxisLabels,
}

impl PngSurface {
    /// A surface enlarging every frame by an integer `zoom` factor.
    pub fn new(zoom: u32) -> Self {
        Self {
            zoom: zoom.max(1),
            preview: None,
        }
    }

    /// Also write every presented frame to `path`.
    pub fn with_preview(mut self, path: impl Into<PathBuf>) -> Self {
        self.preview = Some(path.into());
        self
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Encode a buffer as PNG, applying the zoom factor.
    pub fn encode(&self, buffer: &DisplayBuffer) -> ViewerResult<Vec<u8>> {
        if self.zoom == 1 {
            return buffer.to_png();
        }

        let (width, height) = (buffer.cols as u32, buffer.rows as u32);
        let frame = RgbaImage::from_raw(width, height, buffer.rgba.clone()).ok_or_else(|| {
            ViewerError::RenderError(format!(
                "{} bytes do not match a {}x{} frame",
                buffer.rgba.len(),
                width,
                height
            ))
        })?;
        let zoomed_size = |side: u32| {
            side.checked_mul(self.zoom).ok_or_else(|| {
                ViewerError::RenderError(format!(
                    "zoom {} of a {}x{} frame is too large",
                    self.zoom, width, height
                ))
            })
        };
        let zoomed = imageops::resize(
            &frame,
            zoomed_size(width)?,
            zoomed_size(height)?,
            FilterType::Nearest,
        );

        create_png_auto(
            zoomed.as_raw(),
            zoomed.width() as usize,
            zoomed.height() as usize,
        )
    }

    /// Write the image and its sidecar. Both are encoded before any file is
    /// touched and land through renames, sidecar first.
    fn write(&self, buffer: &DisplayBuffer, path: &Path) -> ViewerResult<()> {
        let png = self.encode(buffer)?;
        let sidecar = serde_json::to_vec_pretty(&AxesSidecar {
            colormap: &buffer.colormap,
            rows: buffer.rows,
            cols: buffer.cols,
            zoom: self.zoom,
            axes: &buffer.axes,
        })?;

        let sidecar_target = sidecar_path(path);
        let png_staged = staging_path(path);
        let sidecar_staged = staging_path(&sidecar_target);

        let staged = fs::write(&png_staged, &png)
            .and_then(|_| fs::write(&sidecar_staged, &sidecar))
            .and_then(|_| fs::rename(&sidecar_staged, &sidecar_target))
            .and_then(|_| fs::rename(&png_staged, path));
        if let Err(err) = staged {
            let _ = fs::remove_file(&png_staged);
            let _ = fs::remove_file(&sidecar_staged);
            return Err(err.into());
        }

        info!(
            path = %path.display(),
            bytes = png.len(),
            colormap = %buffer.colormap,
            zoom = self.zoom,
            "Saved rendered image"
        );
        Ok(())
    }
}

impl RenderSurface for PngSurface {
    fn present(&mut self, buffer: &DisplayBuffer) -> ViewerResult<()> {
        match &self.preview {
            Some(path) => self.write(buffer, path),
            None => {
                debug!(rows = buffer.rows, cols = buffer.cols, "No preview configured");
                Ok(())
            }
        }
    }

    fn save(&mut self, buffer: &DisplayBuffer, path: &Path) -> ViewerResult<()> {
        self.write(buffer, path)
    }
}

/// `image.png` -> `image.png.axes.json`
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".axes.json");
    PathBuf::from(name)
}

/// `image.png` -> `image.png.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Keeps every frame in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub presented: Vec<DisplayBuffer>,
    pub saved: Vec<(PathBuf, DisplayBuffer)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently presented frame.
    pub fn last(&self) -> Option<&DisplayBuffer> {
        self.presented.last()
    }
}

impl RenderSurface for RecordingSurface {
    fn present(&mut self, buffer: &DisplayBuffer) -> ViewerResult<()> {
        self.presented.push(buffer.clone());
        Ok(())
    }

    fn save(&mut self, buffer: &DisplayBuffer, path: &Path) -> ViewerResult<()> {
        self.saved.push((path.to_path_buf(), buffer.clone()));
        Ok(())
    }
}
