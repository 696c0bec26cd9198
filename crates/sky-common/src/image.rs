//! Decoded image data handed to the display session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ViewerError, ViewerResult, WorldMapping};

/// A 2-D grid of real-valued samples.
///
/// Samples are stored row-major. Row 0 is the first row stored in the
/// source file, which for FITS is the bottom of the sky image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleArray {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl SampleArray {
    /// Create a sample array from row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> ViewerResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ViewerError::InvalidImage(format!(
                "empty array ({}x{})",
                rows, cols
            )));
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(ViewerError::InvalidImage(format!(
                "{} samples do not fill a {}x{} grid",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a sample array from nested rows. Ragged input is not 2-D.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ViewerResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(ViewerError::InvalidImage(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                n_cols
            )));
        }

        Self::new(n_rows, n_cols, rows.into_iter().flatten().collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major sample data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Sample at (row, col), or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Minimum and maximum over the finite samples.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        finite_range(&self.data)
    }

    /// Check that the array holds at least one finite sample.
    pub fn validate(&self) -> ViewerResult<()> {
        if self.data.iter().any(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(ViewerError::InvalidImage(format!(
                "{}x{} array contains no finite values",
                self.rows, self.cols
            )))
        }
    }
}

/// Minimum and maximum over the finite values of a slice.
pub fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// Descriptive header values carried along with an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Where the image came from (file path or survey query)
    pub source: String,
    /// OBJECT keyword
    pub object: Option<String>,
    /// TELESCOP keyword
    pub telescope: Option<String>,
    /// INSTRUME keyword
    pub instrument: Option<String>,
    /// DATE-OBS keyword, when it is a valid ISO-8601 timestamp
    pub observed_at: Option<DateTime<Utc>>,
    /// BUNIT keyword
    pub unit: Option<String>,
}

impl ImageMetadata {
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Short human readable title for status lines.
    pub fn title(&self) -> String {
        match (&self.object, &self.telescope) {
            (Some(object), Some(telescope)) => format!("{} ({})", object, telescope),
            (Some(object), None) => object.clone(),
            _ => self.source.clone(),
        }
    }
}

/// A decoded image together with the mapping derived from the same header.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub samples: SampleArray,
    pub mapping: WorldMapping,
    pub metadata: ImageMetadata,
}

impl LoadedImage {
    pub fn new(samples: SampleArray, mapping: WorldMapping, metadata: ImageMetadata) -> Self {
        Self {
            samples,
            mapping,
            metadata,
        }
    }
}
