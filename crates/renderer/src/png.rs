//! PNG encoding for rendered frames.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: used when the frame has ≤256 unique
//!   colors, which is always the case for lookup-table rendering of
//!   continuous colormaps.
//! - **RGBA PNG (color type 6)**: fallback for frames with more colors,
//!   e.g. after resampling.
//!
//! Use `create_png_auto` for automatic mode selection, or `create_png` for
//! explicit RGBA encoding.

use rayon::prelude::*;
use sky_common::{ViewerError, ViewerResult};
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Minimum pixels to benefit from parallel palette extraction
const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const COLOR_TYPE_INDEXED: u8 = 3;
const COLOR_TYPE_RGBA: u8 = 6;

/// Palette entries and the per-pixel indices into them.
type Palette = (Vec<[u8; 4]>, Vec<u8>);

/// Create a PNG image with automatic format selection.
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel, top row first)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png_auto(pixels: &[u8], width: usize, height: usize) -> ViewerResult<Vec<u8>> {
    check_dimensions(pixels.len(), width, height, 4)?;

    let palette = if width * height >= PARALLEL_THRESHOLD {
        extract_palette_parallel(pixels)
    } else {
        extract_palette_sequential(pixels)
    };

    match palette {
        Some((palette, indices)) => create_png_indexed(width, height, &palette, &indices),
        None => create_png(pixels, width, height),
    }
}

/// Pack RGBA bytes into a u32 for faster hashing and comparison
#[inline(always)]
fn pack_color(px: &[u8]) -> u32 {
    u32::from_le_bytes([px[0], px[1], px[2], px[3]])
}

fn extract_palette_sequential(pixels: &[u8]) -> Option<Palette> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices = Vec::with_capacity(pixels.len() / 4);

    for px in pixels.chunks_exact(4) {
        let packed = pack_color(px);
        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push(packed.to_le_bytes());
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Two parallel passes: collect the distinct colors per chunk, then map
/// every pixel to its index once the merged palette is known to fit.
fn extract_palette_parallel(pixels: &[u8]) -> Option<Palette> {
    let chunk_pixels = (pixels.len() / 4 / rayon::current_num_threads()).max(256);

    let chunk_colors: Vec<HashSet<u32>> = pixels
        .par_chunks(chunk_pixels * 4)
        .map(|chunk| {
            let mut local = HashSet::with_capacity(MAX_PALETTE_SIZE);
            for px in chunk.chunks_exact(4) {
                local.insert(pack_color(px));
                if local.len() > MAX_PALETTE_SIZE {
                    break;
                }
            }
            local
        })
        .collect();

    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette = Vec::with_capacity(MAX_PALETTE_SIZE);
    for packed in chunk_colors.into_iter().flatten() {
        if color_to_index.contains_key(&packed) {
            continue;
        }
        if palette.len() >= MAX_PALETTE_SIZE {
            return None;
        }
        color_to_index.insert(packed, palette.len() as u8);
        palette.push(packed.to_le_bytes());
    }

    let indices = pixels
        .par_chunks(4)
        .map(|px| color_to_index.get(&pack_color(px)).copied().unwrap_or(0))
        .collect();

    Some((palette, indices))
}

/// Create an indexed PNG (color type 3) from palette and indices.
///
/// A tRNS chunk is written only when some palette entry is not opaque.
pub fn create_png_indexed(
    width: usize,
    height: usize,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> ViewerResult<Vec<u8>> {
    check_dimensions(indices.len(), width, height, 1)?;
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(ViewerError::RenderError(format!(
            "palette of {} colors cannot be indexed",
            palette.len()
        )));
    }

    let mut png = start_png(width, height, COLOR_TYPE_INDEXED);

    let plte: Vec<u8> = palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|c| c[3] < 255) {
        let trns: Vec<u8> = palette.iter().map(|c| c[3]).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width, height)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Create a PNG image from RGBA pixel data (color type 6).
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> ViewerResult<Vec<u8>> {
    check_dimensions(pixels.len(), width, height, 4)?;

    let mut png = start_png(width, height, COLOR_TYPE_RGBA);
    let idat = deflate_scanlines(pixels, width * 4, height)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn check_dimensions(len: usize, width: usize, height: usize, bytes_per_pixel: usize) -> ViewerResult<()> {
    if width == 0 || height == 0 {
        return Err(ViewerError::RenderError(format!(
            "cannot encode a {}x{} frame",
            width, height
        )));
    }
    if len != width * height * bytes_per_pixel {
        return Err(ViewerError::RenderError(format!(
            "{} bytes do not match a {}x{} frame",
            len, width, height
        )));
    }
    Ok(())
}

/// Signature plus IHDR for an 8-bit image of the given color type.
fn start_png(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(color_type);
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr);

    png
}

/// Write a PNG chunk: length, type, data, CRC over type and data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each scanline with filter type 0 and zlib-compress the result.
fn deflate_scanlines(data: &[u8], row_bytes: usize, height: usize) -> ViewerResult<Vec<u8>> {
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));
    for row in data.chunks_exact(row_bytes).take(height) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let compression_failed =
        |e: std::io::Error| ViewerError::RenderError(format!("IDAT compression failed: {}", e));
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed).map_err(compression_failed)?;
    encoder.finish().map_err(compression_failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_type(png: &[u8]) -> u8 {
        // Signature (8) + length (4) + "IHDR" (4) + width (4) + height (4) + depth (1)
        png[25]
    }

    #[test]
    fn test_extract_palette_simple() {
        // 4 pixels: red, green, blue, red (3 unique colors)
        let pixels = [
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 0, 0, 255, // red again
        ];

        let (palette, indices) = extract_palette_sequential(&pixels).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(indices.len(), 4);
        assert_eq!(indices[0], indices[3]);
        assert_eq!(palette[indices[2] as usize], [0, 0, 255, 255]);
    }

    #[test]
    fn test_extract_palette_with_transparency() {
        let pixels = [
            255, 0, 0, 255, // red, opaque
            0, 0, 0, 0, // transparent (NaN sample)
        ];

        let (palette, _) = extract_palette_sequential(&pixels).unwrap();
        assert_eq!(palette.len(), 2);
        assert!(palette.iter().any(|c| c[3] == 0));
        assert!(palette.iter().any(|c| c[3] == 255));
    }

    #[test]
    fn test_extract_palette_parallel_matches_pixels() {
        // 128x128 = 16384 pixels, above PARALLEL_THRESHOLD
        let mut pixels = Vec::with_capacity(128 * 128 * 4);
        for y in 0..128 {
            for x in 0..128 {
                let idx = ((x / 8) + (y / 8)) % 50;
                pixels.extend_from_slice(&[(idx * 5) as u8, (100 + idx * 3) as u8, (200 - idx * 2) as u8, 255]);
            }
        }

        let (palette, indices) = extract_palette_parallel(&pixels).unwrap();
        assert!(palette.len() <= 50);
        assert_eq!(indices.len(), 128 * 128);
        for (px, &idx) in pixels.chunks_exact(4).zip(indices.iter()).step_by(97) {
            assert_eq!(&palette[idx as usize][..], px);
        }
    }

    #[test]
    fn test_create_png_indexed() {
        let pixels = [
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 255, 0, 255, //
            255, 0, 0, 255,
        ];

        let png = create_png_auto(&pixels, 2, 2).unwrap();
        assert_eq!(&png[0..8], &SIGNATURE);
        assert_eq!(color_type(&png), COLOR_TYPE_INDEXED);
        assert!(!png.windows(4).any(|w| w == b"tRNS"));
    }

    #[test]
    fn test_create_png_rgba_fallback() {
        let mut pixels = Vec::with_capacity(300 * 4);
        for i in 0..300 {
            pixels.extend_from_slice(&[(i % 256) as u8, ((i / 2) % 256) as u8, ((i / 3) % 256) as u8, 255]);
        }

        let png = create_png_auto(&pixels, 300, 1).unwrap();
        assert_eq!(color_type(&png), COLOR_TYPE_RGBA);
    }

    #[test]
    fn test_lut_rendering_uses_indexed() {
        // Frames rendered through a 256-entry lookup table fit the palette
        let mut pixels = Vec::with_capacity(64 * 64 * 4);
        for y in 0..64u32 {
            for x in 0..64u32 {
                let v = ((x * 4 + y) % 256) as u8;
                pixels.extend_from_slice(&[v, v / 2, 255 - v, 255]);
            }
        }

        assert_eq!(color_type(&create_png_auto(&pixels, 64, 64).unwrap()), COLOR_TYPE_INDEXED);
        assert_eq!(color_type(&create_png(&pixels, 64, 64).unwrap()), COLOR_TYPE_RGBA);
    }

    #[test]
    fn test_transparent_pixels_write_trns() {
        let pixels = [0, 0, 0, 0, 200, 10, 10, 255];
        let png = create_png_auto(&pixels, 2, 1).unwrap();
        assert!(png.windows(4).any(|w| w == b"tRNS"));
    }

    #[test]
    fn test_many_colors_fall_back_to_rgba() {
        let mut pixels = Vec::with_capacity(128 * 128 * 4);
        for y in 0..128u32 {
            for x in 0..128u32 {
                pixels.extend_from_slice(&[x as u8, y as u8, ((x + y) / 2) as u8, 255]);
            }
        }
        assert!(extract_palette_parallel(&pixels).is_none());
        assert_eq!(color_type(&create_png_auto(&pixels, 128, 128).unwrap()), COLOR_TYPE_RGBA);
    }

    #[test]
    fn test_size_mismatch_is_render_error() {
        assert!(matches!(
            create_png(&[0, 0, 0], 1, 1),
            Err(ViewerError::RenderError(_))
        ));
        assert!(matches!(
            create_png_auto(&[], 0, 0),
            Err(ViewerError::RenderError(_))
        ));
    }

    #[test]
    fn test_chunk_crc() {
        let mut out = Vec::new();
        write_chunk(&mut out, b"IEND", &[]);
        // Well-known CRC of an empty IEND chunk
        assert_eq!(&out[8..12], &[0xAE, 0x42, 0x60, 0x82]);
    }
}
