//! Synthetic FITS files for tests.
//!
//! [`FitsBuilder`] writes a single primary HDU in fixed format: 80-byte
//! cards, an `END` card, space padding to the 2880-byte block, then
//! big-endian data zero-padded to the next block.

use std::io;
use std::path::Path;

/// Size of a FITS logical record.
pub const BLOCK_SIZE: usize = 2880;

/// Size of one header card.
pub const CARD_SIZE: usize = 80;

/// A header value as it will be written.
#[derive(Debug, Clone, PartialEq)]
pub enum CardValue {
    Logical(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    /// Card with no value indicator (COMMENT, HISTORY)
    Commentary(String),
}

/// Format one 80-character header card.
pub fn fits_card(keyword: &str, value: &CardValue) -> String {
    let mut card = match value {
        CardValue::Commentary(text) => format!("{:<8}{}", keyword, text),
        CardValue::Logical(b) => {
            format!("{:<8}= {:>20}", keyword, if *b { "T" } else { "F" })
        }
        CardValue::Integer(i) => format!("{:<8}= {:>20}", keyword, i),
        CardValue::Real(r) => format!("{:<8}= {:>20}", keyword, format!("{:?}", r).to_uppercase()),
        CardValue::Text(s) => {
            let escaped = s.replace('\'', "''");
            format!("{:<8}= '{:<8}'", keyword, escaped)
        }
    };
    card.truncate(CARD_SIZE);
    format!("{:<80}", card)
}

/// Builder for an in-memory FITS file with one image in the primary HDU.
///
/// Sample values are the *stored* values; with `bscale`/`bzero` set the
/// physical value a reader reports is `bzero + bscale * stored`.
///
/// ```
/// use test_utils::FitsBuilder;
///
/// let bytes = FitsBuilder::new(2, 2, vec![0.0, 3.0, 8.0, 15.0])
///     .bitpix(16)
///     .to_bytes();
/// assert_eq!(bytes.len() % 2880, 0);
/// assert!(bytes.starts_with(b"SIMPLE  ="));
/// ```
#[derive(Debug, Clone)]
pub struct FitsBuilder {
    simple: bool,
    bitpix: i32,
    axes: Vec<usize>,
    data: Vec<f64>,
    bscale: Option<f64>,
    bzero: Option<f64>,
    blank: Option<i64>,
    cards: Vec<(String, CardValue)>,
    truncate: usize,
}

impl FitsBuilder {
    /// Image of `cols` x `rows` stored values (row-major, first row first).
    /// Defaults to BITPIX -64.
    pub fn new(cols: usize, rows: usize, data: Vec<f64>) -> Self {
        Self {
            simple: true,
            bitpix: -64,
            axes: vec![cols, rows],
            data,
            bscale: None,
            bzero: None,
            blank: None,
            cards: Vec::new(),
            truncate: 0,
        }
    }

    /// A primary header with NAXIS = 0 and no data.
    pub fn header_only() -> Self {
        let mut builder = Self::new(0, 0, Vec::new());
        builder.axes.clear();
        builder
    }

    pub fn bitpix(mut self, bitpix: i32) -> Self {
        self.bitpix = bitpix;
        self
    }

    /// Override the NAXISn values (the data is written as given).
    pub fn axes(mut self, axes: &[usize]) -> Self {
        self.axes = axes.to_vec();
        self
    }

    pub fn simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    pub fn bscale(mut self, bscale: f64) -> Self {
        self.bscale = Some(bscale);
        self
    }

    pub fn bzero(mut self, bzero: f64) -> Self {
        self.bzero = Some(bzero);
        self
    }

    /// Integer value marking undefined pixels. NaN samples are written as it.
    pub fn blank(mut self, blank: i64) -> Self {
        self.blank = Some(blank);
        self
    }

    pub fn card(mut self, keyword: &str, value: CardValue) -> Self {
        self.cards.push((keyword.to_string(), value));
        self
    }

    pub fn text(self, keyword: &str, value: &str) -> Self {
        self.card(keyword, CardValue::Text(value.to_string()))
    }

    pub fn real(self, keyword: &str, value: f64) -> Self {
        self.card(keyword, CardValue::Real(value))
    }

    pub fn integer(self, keyword: &str, value: i64) -> Self {
        self.card(keyword, CardValue::Integer(value))
    }

    /// Gnomonic equatorial WCS centred on the image with square pixels of
    /// `scale` degrees and RA increasing to the left.
    pub fn tan_wcs(self, ra: f64, dec: f64, scale: f64) -> Self {
        let crpix1 = (*self.axes.first().unwrap_or(&1) as f64 + 1.0) / 2.0;
        let crpix2 = (*self.axes.get(1).unwrap_or(&1) as f64 + 1.0) / 2.0;
        self.text("CTYPE1", "RA---TAN")
            .text("CTYPE2", "DEC--TAN")
            .real("CRPIX1", crpix1)
            .real("CRPIX2", crpix2)
            .real("CRVAL1", ra)
            .real("CRVAL2", dec)
            .real("CDELT1", -scale)
            .real("CDELT2", scale)
    }

    /// Drop the last `bytes` bytes of the file, cutting into the data.
    pub fn truncate(mut self, bytes: usize) -> Self {
        self.truncate = bytes;
        self
    }

    fn header(&self) -> Vec<u8> {
        let mut cards = vec![
            fits_card("SIMPLE", &CardValue::Logical(self.simple)),
            fits_card("BITPIX", &CardValue::Integer(self.bitpix as i64)),
            fits_card("NAXIS", &CardValue::Integer(self.axes.len() as i64)),
        ];
        for (i, n) in self.axes.iter().enumerate() {
            cards.push(fits_card(
                &format!("NAXIS{}", i + 1),
                &CardValue::Integer(*n as i64),
            ));
        }
        if let Some(bscale) = self.bscale {
            cards.push(fits_card("BSCALE", &CardValue::Real(bscale)));
        }
        if let Some(bzero) = self.bzero {
            cards.push(fits_card("BZERO", &CardValue::Real(bzero)));
        }
        if let Some(blank) = self.blank {
            cards.push(fits_card("BLANK", &CardValue::Integer(blank)));
        }
        for (keyword, value) in &self.cards {
            cards.push(fits_card(keyword, value));
        }
        cards.push(format!("{:<80}", "END"));

        let mut bytes: Vec<u8> = cards.concat().into_bytes();
        pad_to_block(&mut bytes, b' ');
        bytes
    }

    fn encode_sample(&self, value: f64, out: &mut Vec<u8>) {
        let integer = |v: f64| -> i64 {
            match self.blank {
                Some(blank) if v.is_nan() => blank,
                _ => v as i64,
            }
        };
        match self.bitpix {
            8 => out.push(integer(value) as u8),
            16 => out.extend_from_slice(&(integer(value) as i16).to_be_bytes()),
            32 => out.extend_from_slice(&(integer(value) as i32).to_be_bytes()),
            64 => out.extend_from_slice(&integer(value).to_be_bytes()),
            -32 => out.extend_from_slice(&(value as f32).to_be_bytes()),
            _ => out.extend_from_slice(&value.to_be_bytes()),
        }
    }

    /// Serialize the complete file.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.header();

        if !self.data.is_empty() {
            let mut data = Vec::with_capacity(self.data.len() * 8);
            for &v in &self.data {
                self.encode_sample(v, &mut data);
            }
            pad_to_block(&mut data, 0);
            bytes.extend_from_slice(&data);
        }

        let keep = bytes.len().saturating_sub(self.truncate);
        bytes.truncate(keep);
        bytes
    }

    /// Write the file to disk.
    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        std::fs::write(path, self.to_bytes())
    }
}

fn pad_to_block(bytes: &mut Vec<u8>, fill: u8) {
    let rem = bytes.len() % BLOCK_SIZE;
    if rem != 0 {
        bytes.resize(bytes.len() + BLOCK_SIZE - rem, fill);
    }
}
