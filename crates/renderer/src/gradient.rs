//! Color-mapped rendering of sample grids.

use rayon::prelude::*;

/// Minimum pixels to benefit from parallel color mapping
const PARALLEL_THRESHOLD: usize = 65_536; // 256x256 or larger

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Opaque color from a 0xRRGGBB literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
            a: 255,
        }
    }

    /// Opaque color from unit-interval channels, clipped to [0, 1].
    pub fn from_unit(rgb: [f64; 3]) -> Self {
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_byte(rgb[0]), to_byte(rgb[1]), to_byte(rgb[2]), 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Linear color interpolation
pub fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f32 * t_inv) + (color2.r as f32 * t)).round() as u8,
        ((color1.g as f32 * t_inv) + (color2.g as f32 * t)).round() as u8,
        ((color1.b as f32 * t_inv) + (color2.b as f32 * t)).round() as u8,
        ((color1.a as f32 * t_inv) + (color2.a as f32 * t)).round() as u8,
    )
}

/// Linear map from a value range onto [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub min: f64,
    pub max: f64,
}

impl Normalization {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Normalized position of `value`, or None for NaN.
    ///
    /// Out-of-range values (including infinities) are clipped. A degenerate
    /// range maps every value to the middle.
    #[inline]
    pub fn apply(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let range = self.max - self.min;
        if !range.is_finite() || range <= 0.0 {
            return Some(0.5);
        }
        Some(((value - self.min) / range).clamp(0.0, 1.0))
    }
}

/// Render grid data through a color function.
///
/// # Arguments
/// - `data`: 2D grid of values (row-major order, row 0 first)
/// - `width`: Number of columns
/// - `height`: Number of rows
/// - `norm`: Value range mapped onto the color function's [0, 1] input
/// - `color_fn`: Function to convert a normalized value (0-1) to a color
///
/// # Returns
/// RGBA pixel data (4 bytes per pixel) with the last data row first, so
/// that row 0 of the grid ends up at the bottom of the image. NaN values
/// are fully transparent.
pub fn render_grid<F>(
    data: &[f64],
    width: usize,
    height: usize,
    norm: Normalization,
    color_fn: F,
) -> Vec<u8>
where
    F: Fn(f64) -> Color + Sync,
{
    let mut pixels = vec![0u8; width * height * 4];
    if width == 0 || height == 0 {
        return pixels;
    }

    let render_row = |(out_row, row_pixels): (usize, &mut [u8])| {
        let src_row = height - 1 - out_row;
        let start = src_row * width;
        for (x, pixel) in row_pixels.chunks_exact_mut(4).enumerate() {
            let color = data
                .get(start + x)
                .and_then(|&v| norm.apply(v))
                .map(&color_fn)
                .unwrap_or_else(Color::transparent);
            pixel.copy_from_slice(&color.to_array());
        }
    };

    if width * height >= PARALLEL_THRESHOLD {
        pixels
            .par_chunks_mut(width * 4)
            .enumerate()
            .for_each(render_row);
    } else {
        pixels.chunks_mut(width * 4).enumerate().for_each(render_row);
    }

    pixels
}

/// Render grid data through a lookup table.
///
/// The normalized value selects entry `floor(t * len)`, clamped to the
/// last entry.
pub fn render_grid_lut(
    data: &[f64],
    width: usize,
    height: usize,
    norm: Normalization,
    lut: &[Color],
) -> Vec<u8> {
    let n = lut.len();
    if n == 0 {
        return vec![0u8; width * height * 4];
    }
    render_grid(data, width, height, norm, |t| {
        let idx = ((t * n as f64) as usize).min(n - 1);
        lut[idx]
    })
}
