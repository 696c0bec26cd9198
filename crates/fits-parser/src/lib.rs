//! FITS decoder (NASA/IAU Flexible Image Transport System, version 4.0).
//!
//! Pure Rust reader for the primary HDU of a FITS file: header cards, WCS
//! keywords and the 2-D image array with BSCALE/BZERO/BLANK applied.
//! Extensions after the primary HDU are ignored.

pub mod data;
pub mod error;
pub mod header;

use bytes::Bytes;
use std::path::Path;
use tracing::{debug, info};

use sky_common::{ImageSource, LoadedImage, SampleArray, ViewerError, ViewerResult, WorldMapping};

pub use data::{Bitpix, ImageShape, Scaling};
pub use error::{FitsError, FitsResult};
pub use header::{Card, Header, HeaderValue};

/// Size of a FITS logical record in bytes.
pub const BLOCK_SIZE: usize = 2880;

/// Size of a header card in bytes.
pub const CARD_SIZE: usize = 80;

/// File extensions accepted by [`FitsFileSource`].
pub const FITS_EXTENSIONS: &[&str] = &["fits", "fit", "fts"];

/// Quick check for the FITS signature at the start of a byte stream.
pub fn is_fits(bytes: &[u8]) -> bool {
    bytes.starts_with(b"SIMPLE  =")
}

/// Decoded primary image.
#[derive(Debug, Clone)]
pub struct FitsImage {
    pub header: Header,
    pub shape: ImageShape,
    pub bitpix: Bitpix,
    /// Physical values, row-major, first stored row first
    pub data: Vec<f64>,
}

impl FitsImage {
    /// Coordinate mapping from the header WCS keywords.
    pub fn world_mapping(&self) -> WorldMapping {
        WorldMapping::from_keywords(&self.header.wcs_keywords())
    }

    /// Convert into the shared image model, tagging it with `source`.
    pub fn into_loaded(self, source: &str) -> ViewerResult<LoadedImage> {
        let mapping = self.world_mapping();
        let metadata = self.header.metadata(source);
        let samples = SampleArray::new(self.shape.rows, self.shape.cols, self.data)?;
        Ok(LoadedImage::new(samples, mapping, metadata))
    }
}

/// Reader over an in-memory FITS stream.
pub struct FitsReader {
    data: Bytes,
}

impl FitsReader {
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    /// Parse only the primary header.
    pub fn header(&self) -> FitsResult<Header> {
        Header::parse(&self.data).map(|(header, _)| header)
    }

    /// Decode the primary HDU image.
    pub fn primary_image(&self) -> FitsResult<FitsImage> {
        let (header, offset) = Header::parse(&self.data)?;

        if header.get_bool("SIMPLE") != Some(true) {
            return Err(FitsError::NotFits(
                "SIMPLE = F, file does not conform to the standard".to_string(),
            ));
        }

        let bitpix = Bitpix::from_value(header.require_int("BITPIX")?)?;
        let shape = data::image_shape(&header)?;
        let scaling = Scaling::from_header(&header, bitpix);

        debug!(
            rows = shape.rows,
            cols = shape.cols,
            bitpix = ?bitpix,
            bscale = scaling.bscale,
            bzero = scaling.bzero,
            "Decoding primary array"
        );

        let body = self.data.get(offset..).unwrap_or_default();
        let data = data::decode_samples(body, bitpix, shape.len()?, &scaling)?;

        Ok(FitsImage {
            header,
            shape,
            bitpix,
            data,
        })
    }
}

/// Decode the primary image of an in-memory FITS stream.
pub fn read_primary_image(bytes: &[u8]) -> FitsResult<FitsImage> {
    FitsReader::new(Bytes::copy_from_slice(bytes)).primary_image()
}

/// Decode a FITS stream straight into the shared image model.
pub fn decode_loaded_image(data: Bytes, source: &str) -> ViewerResult<LoadedImage> {
    let image = FitsReader::new(data).primary_image()?;
    image.into_loaded(source)
}

/// File-open collaborator backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitsFileSource;

impl FitsFileSource {
    pub fn new() -> Self {
        Self
    }

    /// Whether the path carries one of the accepted extensions.
    pub fn accepts(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| FITS_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

impl ImageSource for FitsFileSource {
    fn open(&self, path: &Path) -> ViewerResult<LoadedImage> {
        if !Self::accepts(path) {
            return Err(ViewerError::UnsupportedFile(format!(
                "{} (expected .fits, .fit or .fts)",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)?;
        let source = path.display().to_string();
        let image = decode_loaded_image(Bytes::from(bytes), &source)?;

        info!(
            path = %source,
            rows = image.samples.rows(),
            cols = image.samples.cols(),
            celestial = image.mapping.is_celestial(),
            "Opened FITS file"
        );
        Ok(image)
    }
}
