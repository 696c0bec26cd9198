//! Primary data unit decoding.

use bytes::Buf;
use num_traits::ToPrimitive;

use crate::{FitsError, FitsResult, Header};

/// Sample type of the data unit, from BITPIX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bitpix {
    U8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl Bitpix {
    pub fn from_value(bitpix: i64) -> FitsResult<Self> {
        match bitpix {
            8 => Ok(Bitpix::U8),
            16 => Ok(Bitpix::I16),
            32 => Ok(Bitpix::I32),
            64 => Ok(Bitpix::I64),
            -32 => Ok(Bitpix::F32),
            -64 => Ok(Bitpix::F64),
            other => Err(FitsError::UnsupportedBitpix(other)),
        }
    }

    pub fn bytes_per_sample(&self) -> usize {
        match self {
            Bitpix::U8 => 1,
            Bitpix::I16 => 2,
            Bitpix::I32 | Bitpix::F32 => 4,
            Bitpix::I64 | Bitpix::F64 => 8,
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Bitpix::F32 | Bitpix::F64)
    }
}

/// Linear scaling from stored to physical values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pub bscale: f64,
    pub bzero: f64,
    /// Stored integer value marking undefined pixels
    pub blank: Option<i64>,
}

impl Default for Scaling {
    fn default() -> Self {
        Self {
            bscale: 1.0,
            bzero: 0.0,
            blank: None,
        }
    }
}

impl Scaling {
    pub fn from_header(header: &Header, bitpix: Bitpix) -> Self {
        Self {
            bscale: header.get_real("BSCALE").unwrap_or(1.0),
            bzero: header.get_real("BZERO").unwrap_or(0.0),
            // BLANK only applies to integer data
            blank: header.get_int("BLANK").filter(|_| bitpix.is_integer()),
        }
    }

    #[inline]
    fn integer<T: ToPrimitive>(&self, raw: T) -> f64 {
        if let (Some(blank), Some(v)) = (self.blank, raw.to_i64()) {
            if v == blank {
                return f64::NAN;
            }
        }
        self.float(raw.to_f64().unwrap_or(f64::NAN))
    }

    #[inline]
    fn float(&self, raw: f64) -> f64 {
        self.bzero + self.bscale * raw
    }
}

/// Shape of the primary array after squeezing degenerate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    pub rows: usize,
    pub cols: usize,
}

/// Largest NAXIS the FITS standard allows.
pub const MAX_AXES: i64 = 999;

impl ImageShape {
    /// Number of samples, or `NotAnImage` when it does not fit in memory.
    pub fn len(&self) -> FitsResult<usize> {
        self.rows.checked_mul(self.cols).ok_or_else(|| {
            FitsError::NotAnImage(format!(
                "{}x{} image is too large to address",
                self.cols, self.rows
            ))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Read NAXISn and reduce the array to two dimensions.
///
/// Axes beyond the second must have length 1.
pub fn image_shape(header: &Header) -> FitsResult<ImageShape> {
    let naxis = header.require_int("NAXIS")?;
    if naxis > MAX_AXES {
        return Err(FitsError::InvalidHeader(format!(
            "NAXIS = {} exceeds {}",
            naxis, MAX_AXES
        )));
    }
    if naxis < 2 {
        return Err(FitsError::NotAnImage(format!(
            "primary array has {} axes, a 2-D image is required",
            naxis
        )));
    }

    let mut axes = Vec::with_capacity(naxis as usize);
    for n in 1..=naxis {
        let key = format!("NAXIS{}", n);
        let len = header
            .get_int(&key)
            .ok_or_else(|| FitsError::InvalidHeader(format!("missing {}", key)))?;
        let len = usize::try_from(len)
            .map_err(|_| FitsError::InvalidHeader(format!("{} = {}", key, len)))?;
        axes.push(len);
    }

    if let Some((i, len)) = axes.iter().enumerate().skip(2).find(|(_, len)| **len != 1) {
        return Err(FitsError::NotAnImage(format!(
            "axis {} has length {}, the image is not 2-D",
            i + 1,
            len
        )));
    }

    let shape = ImageShape {
        cols: axes[0],
        rows: axes[1],
    };
    if shape.is_empty() {
        return Err(FitsError::NotAnImage(format!(
            "empty image ({}x{})",
            shape.cols, shape.rows
        )));
    }
    shape.len()?;
    Ok(shape)
}

/// Decode `count` big-endian samples into physical values.
pub fn decode_samples(
    mut bytes: &[u8],
    bitpix: Bitpix,
    count: usize,
    scaling: &Scaling,
) -> FitsResult<Vec<f64>> {
    let expected = count
        .checked_mul(bitpix.bytes_per_sample())
        .unwrap_or(usize::MAX);
    if bytes.len() < expected {
        return Err(FitsError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }

    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let v = match bitpix {
            Bitpix::U8 => scaling.integer(bytes.get_u8()),
            Bitpix::I16 => scaling.integer(bytes.get_i16()),
            Bitpix::I32 => scaling.integer(bytes.get_i32()),
            Bitpix::I64 => scaling.integer(bytes.get_i64()),
            Bitpix::F32 => scaling.float(bytes.get_f32() as f64),
            Bitpix::F64 => scaling.float(bytes.get_f64()),
        };
        out.push(v);
    }
    Ok(out)
}
