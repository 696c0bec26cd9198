//! Turns sample grids into displayable frames.
//!
//! - [`scaling`]: identity, root and logarithmic intensity transforms
//! - [`colormap`]: the named colormap palette and lookup tables
//! - [`gradient`]: normalization and RGBA color mapping
//! - [`ticks`]: sexagesimal axis labels from a world mapping
//! - [`pipeline`]: the full samples-to-[`DisplayBuffer`] render
//! - [`png`], [`surface`]: encoding and output destinations

pub mod buffer;
pub mod colormap;
pub mod gradient;
pub mod pipeline;
pub mod png;
pub mod scaling;
pub mod surface;
pub mod ticks;

pub use buffer::DisplayBuffer;
pub use colormap::{Category, Colormap, ColormapRegistry, LUT_SIZE};
pub use gradient::{Color, Normalization};
pub use pipeline::render;
pub use scaling::apply_scaling;
pub use surface::{PngSurface, RecordingSurface, RenderSurface};
pub use ticks::{format_dms, format_hms, AxisLabels, Tick};
