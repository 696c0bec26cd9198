//! Samples -> display buffer.

use sky_common::image::finite_range;
use sky_common::{RenderConfig, SampleArray, ViewerResult, WorldMapping};
use std::time::Instant;
use tracing::debug;

use crate::buffer::DisplayBuffer;
use crate::colormap::ColormapRegistry;
use crate::gradient::{render_grid_lut, Normalization};
use crate::scaling::apply_scaling;
use crate::ticks::AxisLabels;

/// Render `samples` with the scaling and colormap chosen in `config`.
///
/// Scaled values are normalized linearly over their finite range; a constant
/// image maps to the middle of the colormap and NaN samples are transparent.
/// Fails with `UnknownColormap` when the effective name is not in `registry`.
pub fn render(
    samples: &SampleArray,
    mapping: &WorldMapping,
    config: &RenderConfig,
    registry: &ColormapRegistry,
) -> ViewerResult<DisplayBuffer> {
    let start = Instant::now();
    let colormap_name = config.effective_colormap();
    let colormap = registry.resolve(&colormap_name)?;

    let values = apply_scaling(samples.data(), config.scaling);
    let (min, max) = finite_range(&values).unwrap_or((0.0, 0.0));
    let lut = colormap.lut();
    let rgba = render_grid_lut(
        &values,
        samples.cols(),
        samples.rows(),
        Normalization::new(min, max),
        &lut,
    );
    let axes = AxisLabels::compute(mapping, samples.rows(), samples.cols());

    debug!(
        rows = samples.rows(),
        cols = samples.cols(),
        scaling = %config.scaling,
        colormap = %colormap_name,
        min = min,
        max = max,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Rendered image"
    );

    Ok(DisplayBuffer {
        rows: samples.rows(),
        cols: samples.cols(),
        values,
        colormap: colormap_name,
        rgba,
        axes,
    })
}
