//! The displayable result of one render.

use sky_common::ViewerResult;

use crate::png::create_png_auto;
use crate::ticks::AxisLabels;

/// Scaled samples, their RGBA rendering and the axis labels.
///
/// `values` keeps the row order of the source samples (row 0 first) while
/// `rgba` is flipped vertically so that row 0 ends up at the bottom of the
/// picture.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBuffer {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<f64>,
    /// Effective colormap name, including any "_r" suffix
    pub colormap: String,
    pub rgba: Vec<u8>,
    pub axes: AxisLabels,
}

impl DisplayBuffer {
    pub fn width(&self) -> usize {
        self.cols
    }

    pub fn height(&self) -> usize {
        self.rows
    }

    /// Scaled value at data position (row, col).
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    /// RGBA of the sample at data position (row, col).
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 4]> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let start = ((self.rows - 1 - row) * self.cols + col) * 4;
        let px = self.rgba.get(start..start + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode the RGBA rendering as PNG.
    pub fn to_png(&self) -> ViewerResult<Vec<u8>> {
        create_png_auto(&self.rgba, self.cols, self.rows)
    }
}
