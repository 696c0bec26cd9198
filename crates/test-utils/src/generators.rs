//! Test data generators for creating synthetic sky-like images.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite. All grids are row-major with
//! row 0 first, the same layout as a decoded FITS image.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a linear ramp from 0 (first sample) to `max` (last sample).
pub fn create_ramp_grid(width: usize, height: usize, max: f64) -> Vec<f64> {
    let n = width * height;
    let step = if n > 1 { max / (n - 1) as f64 } else { 0.0 };
    (0..n).map(|i| i as f64 * step).collect()
}

/// Creates a deterministic star field: a flat sky background with noise
/// plus Gaussian point sources.
///
/// Counts are positive and span a few orders of magnitude, which is what
/// the Root and Logarithmic intensity transforms exist for.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `seed` - Seed value for deterministic generation
pub fn create_star_field(width: usize, height: usize, seed: u32) -> Vec<f64> {
    let background = 100.0;
    let mut data: Vec<f64> = (0..height)
        .flat_map(|row| {
            (0..width).map(move |col| {
                let noise = (simple_hash(col as u32, row as u32, seed) % 1000) as f64 / 100.0;
                background + noise
            })
        })
        .collect();

    let n_stars = (width * height / 200).max(1);
    for i in 0..n_stars {
        let h = simple_hash(i as u32, 7919, seed);
        let cx = (h % width.max(1) as u32) as f64;
        let cy = ((h / 7) % height.max(1) as u32) as f64;
        let peak = 500.0 + (h % 60_000) as f64;
        let sigma = 1.0 + (h % 3) as f64 * 0.5;

        for row in 0..height {
            for col in 0..width {
                let dx = col as f64 - cx;
                let dy = row as f64 - cy;
                let r2 = dx * dx + dy * dy;
                if r2 < 25.0 * sigma * sigma {
                    data[row * width + col] += peak * (-r2 / (2.0 * sigma * sigma)).exp();
                }
            }
        }
    }
    data
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a grid with NaN values at specified positions.
///
/// Useful for testing blank-pixel handling.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `nan_positions` - List of (col, row) positions that should be NaN
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f64> {
    let mut data = vec![0.0f64; width * height];
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f64::NAN;
        }
    }
    data
}

/// Creates RGBA pixel data for a simple test pattern.
///
/// Creates a gradient pattern useful for testing PNG encoding.
pub fn create_test_rgba_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            let b = 128u8;
            let a = 255u8;
            pixels.extend_from_slice(&[r, g, b, a]);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_grid() {
        let grid = create_test_grid(10, 5);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.0); // col=0, row=0
        assert_eq!(grid[1], 1000.0); // col=1, row=0
        assert_eq!(grid[10], 1.0); // col=0, row=1
        assert_eq!(grid[11], 1001.0); // col=1, row=1
    }

    #[test]
    fn test_create_ramp_grid() {
        let grid = create_ramp_grid(5, 2, 9.0);
        assert_eq!(grid.len(), 10);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[9], 9.0);
    }

    #[test]
    fn test_star_field_positive_and_deterministic() {
        let field1 = create_star_field(64, 48, 42);
        let field2 = create_star_field(64, 48, 42);
        assert_eq!(field1, field2, "Same seed should produce same data");
        assert_eq!(field1.len(), 64 * 48);
        assert!(field1.iter().all(|&v| v >= 100.0));

        let max = field1.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max > 500.0, "at least one star should stand out");
    }

    #[test]
    fn test_create_constant_grid() {
        let grid = create_constant_grid(10, 10, 42.0);
        assert_eq!(grid.len(), 100);
        assert!(grid.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn test_create_grid_with_nans() {
        let grid = create_grid_with_nans(10, 10, &[(5, 5), (0, 0)]);
        assert!(grid[0].is_nan()); // (0, 0)
        assert!(grid[55].is_nan()); // (5, 5) = row 5 * 10 + col 5
        assert!(!grid[1].is_nan()); // (1, 0) should be 0.0
    }

    #[test]
    fn test_create_test_rgba_pixels() {
        let pixels = create_test_rgba_pixels(16, 16);
        assert_eq!(pixels.len(), 16 * 16 * 4);
        assert_eq!(pixels[0], 0); // R
        assert_eq!(pixels[1], 0); // G
        assert_eq!(pixels[2], 128); // B
        assert_eq!(pixels[3], 255); // A
    }
}
