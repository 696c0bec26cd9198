//! Axis tick labels derived from an image's world mapping.
//!
//! Equatorial images get right ascension in `hh:mm:ss` along the first axis
//! and declination in `dd:mm:ss` along the second. Other celestial frames use
//! `dd:mm:ss` on both axes. Without a celestial mapping the ticks fall back to
//! 1-based pixel numbers.

use serde::{Deserialize, Serialize};
use sky_common::WorldMapping;

/// Ticks placed along each axis
pub const TICK_COUNT: usize = 5;

/// A labelled position on one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// 0-based data pixel coordinate along the axis
    pub pixel: f64,
    pub label: String,
}

/// Tick labels for both image axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x_title: String,
    pub y_title: String,
    pub x: Vec<Tick>,
    pub y: Vec<Tick>,
}

/// How the values along an axis are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickFormat {
    Hours,
    Degrees,
    Pixel,
}

impl TickFormat {
    fn format(self, value: f64) -> String {
        match self {
            TickFormat::Hours => format_hms(value),
            TickFormat::Degrees => format_dms(value),
            TickFormat::Pixel => format!("{:.0}", value),
        }
    }
}

impl AxisLabels {
    /// Compute tick labels for an image of `rows` x `cols` samples.
    ///
    /// X ticks are sampled along the middle row and Y ticks along the middle
    /// column. Positions where the mapping is undefined are skipped.
    pub fn compute(mapping: &WorldMapping, rows: usize, cols: usize) -> Self {
        let mid_x = (cols.saturating_sub(1)) as f64 / 2.0;
        let mid_y = (rows.saturating_sub(1)) as f64 / 2.0;

        if !mapping.is_celestial() {
            return Self {
                x_title: "X (pixel)".to_string(),
                y_title: "Y (pixel)".to_string(),
                x: tick_positions(cols)
                    .map(|p| tick(p, TickFormat::Pixel, p + 1.0))
                    .collect(),
                y: tick_positions(rows)
                    .map(|p| tick(p, TickFormat::Pixel, p + 1.0))
                    .collect(),
            };
        }

        let (x_format, x_title, y_title) = if mapping.is_equatorial() {
            (TickFormat::Hours, "RA".to_string(), "Dec".to_string())
        } else {
            let [lon, lat] = mapping.ctype();
            (
                TickFormat::Degrees,
                axis_name(lon),
                axis_name(lat),
            )
        };

        let x = tick_positions(cols)
            .filter_map(|p| {
                let (lon, _) = mapping.pixel_to_world(p, mid_y)?;
                Some(tick(p, x_format, lon))
            })
            .collect();
        let y = tick_positions(rows)
            .filter_map(|p| {
                let (_, lat) = mapping.pixel_to_world(mid_x, p)?;
                Some(tick(p, TickFormat::Degrees, lat))
            })
            .collect();

        Self {
            x_title,
            y_title,
            x,
            y,
        }
    }
}

fn tick(pixel: f64, format: TickFormat, value: f64) -> Tick {
    Tick {
        pixel,
        label: format.format(value),
    }
}

/// "GLON-CAR" -> "GLON"
fn axis_name(ctype: &str) -> String {
    ctype.split('-').next().unwrap_or(ctype).to_string()
}

/// Evenly spaced positions covering the first and last pixel.
fn tick_positions(len: usize) -> impl Iterator<Item = f64> {
    let count = TICK_COUNT.min(len);
    let span = len.saturating_sub(1) as f64;
    (0..count).map(move |i| {
        if count <= 1 {
            0.0
        } else {
            (span * i as f64 / (count - 1) as f64).round()
        }
    })
}

/// Split a non-negative quantity into whole units, minutes and seconds,
/// rounding to the nearest second with carry.
fn sexagesimal(value: f64) -> (u64, u64, u64) {
    let total = (value * 3600.0).round() as u64;
    (total / 3600, (total / 60) % 60, total % 60)
}

/// Format an angle in degrees as hours of right ascension, `hh:mm:ss`.
///
/// The angle is wrapped into [0, 360) first, so 360 degrees reads as
/// `00:00:00`.
pub fn format_hms(degrees: f64) -> String {
    if !degrees.is_finite() {
        return "--:--:--".to_string();
    }
    let hours = degrees.rem_euclid(360.0) / 15.0;
    let (h, m, s) = sexagesimal(hours);
    format!("{:02}:{:02}:{:02}", h % 24, m, s)
}

/// Format an angle in degrees as signed `dd:mm:ss`.
pub fn format_dms(degrees: f64) -> String {
    if !degrees.is_finite() {
        return "--:--:--".to_string();
    }
    let sign = if degrees < 0.0 { '-' } else { '+' };
    let (d, m, s) = sexagesimal(degrees.abs());
    // Rounding can leave "-00:00:00"
    let sign = if (d, m, s) == (0, 0, 0) { '+' } else { sign };
    format!("{}{:02}:{:02}:{:02}", sign, d, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sky_common::WcsKeywords;

    fn equatorial(ra: f64, dec: f64, scale: f64, size: usize) -> WorldMapping {
        let centre = (size as f64 + 1.0) / 2.0;
        WorldMapping::from_keywords(&WcsKeywords {
            ctype: [Some("RA---TAN".into()), Some("DEC--TAN".into())],
            crpix: [Some(centre), Some(centre)],
            crval: [Some(ra), Some(dec)],
            cdelt: [Some(-scale), Some(scale)],
            ..Default::default()
        })
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0.0), "00:00:00");
        assert_eq!(format_hms(83.8221), "05:35:17");
        assert_eq!(format_hms(360.0), "00:00:00");
        assert_eq!(format_hms(-15.0), "23:00:00");
    }

    #[test]
    fn test_format_hms_rounding_carry() {
        // 59.9996 seconds of time rounds up into the next minute
        let degrees = (59.9996 / 3600.0) * 15.0;
        assert_eq!(format_hms(degrees), "00:01:00");
        assert_eq!(format_hms(359.99999), "00:00:00");
    }

    #[test]
    fn test_format_dms() {
        assert_eq!(format_dms(-5.3911), "-05:23:28");
        assert_eq!(format_dms(41.2692), "+41:16:09");
        assert_eq!(format_dms(-0.00001), "+00:00:00");
        assert_eq!(format_dms(89.99999), "+90:00:00");
        assert_eq!(format_dms(f64::NAN), "--:--:--");
    }

    #[test]
    fn test_pixel_fallback() {
        let axes = AxisLabels::compute(&WorldMapping::pixel(), 3, 101);
        assert_eq!(axes.x.len(), TICK_COUNT);
        assert_eq!(axes.y.len(), 3);
        assert_eq!(axes.x[0].label, "1");
        assert_eq!(axes.x[4].label, "101");
        assert_eq!(axes.x[2].pixel, 50.0);
        assert_eq!(axes.y[2].label, "3");
        assert_eq!(axes.x_title, "X (pixel)");
    }

    #[test]
    fn test_single_pixel_axis() {
        let axes = AxisLabels::compute(&WorldMapping::pixel(), 1, 1);
        assert_eq!(axes.x.len(), 1);
        assert_eq!(axes.x[0].pixel, 0.0);
    }

    #[test]
    fn test_equatorial_labels() {
        let mapping = equatorial(83.8221, -5.3911, 0.001, 101);
        let axes = AxisLabels::compute(&mapping, 101, 101);
        assert_eq!(axes.x_title, "RA");
        assert_eq!(axes.y_title, "Dec");
        assert_eq!(axes.x.len(), TICK_COUNT);
        assert_eq!(axes.x[2].label, "05:35:17");
        assert_eq!(axes.y[2].label, "-05:23:28");
        // RA increases to the left
        assert!(axes.x[0].label > axes.x[4].label);
    }

    #[test]
    fn test_galactic_labels_use_degrees() {
        let mapping = WorldMapping::from_keywords(&WcsKeywords {
            ctype: [Some("GLON-CAR".into()), Some("GLAT-CAR".into())],
            crpix: [Some(1.0), Some(1.0)],
            crval: [Some(10.0), Some(-1.5)],
            cdelt: [Some(-0.5), Some(0.5)],
            ..Default::default()
        });
        let axes = AxisLabels::compute(&mapping, 5, 5);
        assert_eq!(axes.x_title, "GLON");
        assert_eq!(axes.y_title, "GLAT");
        assert_eq!(axes.x[0].label, "+10:00:00");
        assert_eq!(axes.y[0].label, "-01:30:00");
    }
}
