//! Tests for normalization and color mapping of sample grids.

use renderer::gradient::{interpolate_color, render_grid, render_grid_lut, Color, Normalization};
use test_utils::{create_grid_with_nans, create_ramp_grid};

// ============================================================================
// interpolate_color tests
// ============================================================================

#[test]
fn test_interpolate_color_endpoints() {
    let black = Color::new(0, 0, 0, 255);
    let white = Color::new(255, 255, 255, 255);
    assert_eq!(interpolate_color(black, white, 0.0), black);
    assert_eq!(interpolate_color(black, white, 1.0), white);
    assert_eq!(interpolate_color(black, white, 0.5), Color::new(128, 128, 128, 255));
}

#[test]
fn test_interpolate_color_clamps() {
    let a = Color::new(10, 20, 30, 255);
    let b = Color::new(200, 100, 0, 255);
    assert_eq!(interpolate_color(a, b, -1.0), a);
    assert_eq!(interpolate_color(a, b, 2.0), b);
}

// ============================================================================
// render_grid tests
// ============================================================================

#[test]
fn test_ramp_maps_across_lut() {
    // 256 evenly spaced values hit every entry of a 256-entry table once
    let data = create_ramp_grid(256, 1, 255.0);
    let lut: Vec<Color> = (0..=255u8).map(|v| Color::new(v, 0, 0, 255)).collect();
    let pixels = render_grid_lut(&data, 256, 1, Normalization::new(0.0, 255.0), &lut);

    let reds: Vec<u8> = pixels.chunks_exact(4).map(|px| px[0]).collect();
    assert_eq!(reds, (0..=255u8).collect::<Vec<_>>());
}

#[test]
fn test_blank_pixels_transparent() {
    let data = create_grid_with_nans(3, 2, &[(1, 0), (2, 1)]);
    let pixels = render_grid(&data, 3, 2, Normalization::new(0.0, 1.0), |_| {
        Color::new(1, 2, 3, 255)
    });

    // Output row 0 is data row 1
    let alpha: Vec<u8> = pixels.chunks_exact(4).map(|px| px[3]).collect();
    assert_eq!(alpha, vec![255, 255, 0, 255, 0, 255]);
}

#[test]
fn test_constant_grid_maps_to_middle() {
    let data = vec![7.0; 4];
    let lut = [Color::from_hex(0x000000), Color::from_hex(0x808080), Color::from_hex(0xffffff)];
    let pixels = render_grid_lut(&data, 2, 2, Normalization::new(7.0, 7.0), &lut);
    assert!(pixels.chunks_exact(4).all(|px| px == [0x80, 0x80, 0x80, 255]));
}

#[test]
fn test_infinities_clip_to_ends() {
    let data = [f64::NEG_INFINITY, f64::INFINITY];
    let lut = [Color::from_hex(0x0000ff), Color::from_hex(0xff0000)];
    let pixels = render_grid_lut(&data, 2, 1, Normalization::new(0.0, 1.0), &lut);
    assert_eq!(&pixels[0..4], &[0, 0, 255, 255]);
    assert_eq!(&pixels[4..8], &[255, 0, 0, 255]);
}

#[test]
fn test_empty_lut_is_transparent() {
    let pixels = render_grid_lut(&[1.0, 2.0], 2, 1, Normalization::new(1.0, 2.0), &[]);
    assert!(pixels.iter().all(|&b| b == 0));
}
