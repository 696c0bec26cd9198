//! World Coordinate System mapping derived from FITS header keywords.
//!
//! Only the pieces needed to label image axes are implemented: the linear
//! pixel-to-intermediate transform (CD, PC/CDELT or CROTA2 forms), the
//! zenithal TAN and SIN projections, and the spherical rotation onto the
//! celestial sphere. Any other projection code is treated as linear.
//!
//! Reference: Calabretta & Greisen 2002, "Representations of celestial
//! coordinates in FITS" (Paper II), sections 2 and 5.1.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// Projection code taken from the last three characters of CTYPEi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Gnomonic (zenithal)
    Tan,
    /// Orthographic/synthesis (zenithal)
    Sin,
    /// No spherical projection; world = CRVAL + intermediate
    Linear,
}

impl Projection {
    fn from_ctype(ctype: &str) -> Self {
        match ctype.get(5..8) {
            Some("TAN") => Projection::Tan,
            Some("SIN") => Projection::Sin,
            _ => Projection::Linear,
        }
    }
}

/// Raw WCS keyword values as read from a header.
///
/// Missing keywords stay `None`; defaults are applied by
/// [`WorldMapping::from_keywords`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WcsKeywords {
    pub ctype: [Option<String>; 2],
    pub crpix: [Option<f64>; 2],
    pub crval: [Option<f64>; 2],
    pub cdelt: [Option<f64>; 2],
    /// CDi_j, indexed [i-1][j-1]
    pub cd: [[Option<f64>; 2]; 2],
    /// PCi_j, indexed [i-1][j-1]
    pub pc: [[Option<f64>; 2]; 2],
    pub crota2: Option<f64>,
}

impl WcsKeywords {
    fn has_any(&self) -> bool {
        self.ctype.iter().any(Option::is_some)
            || self.crval.iter().any(Option::is_some)
            || self.crpix.iter().any(Option::is_some)
            || self.cd.iter().flatten().any(Option::is_some)
    }
}

/// Mapping from 0-based pixel coordinates to world coordinates (degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct WorldMapping {
    ctype: [String; 2],
    crpix: Vector2<f64>,
    crval: Vector2<f64>,
    /// Linear transform from pixel offset to intermediate world coordinates
    matrix: Matrix2<f64>,
    projection: Projection,
}

impl Default for WorldMapping {
    fn default() -> Self {
        Self::pixel()
    }
}

impl WorldMapping {
    /// Identity mapping used when a header carries no WCS.
    ///
    /// World coordinates are 1-based FITS pixel numbers.
    pub fn pixel() -> Self {
        Self {
            ctype: [String::new(), String::new()],
            crpix: Vector2::zeros(),
            crval: Vector2::zeros(),
            matrix: Matrix2::identity(),
            projection: Projection::Linear,
        }
    }

    /// Build a mapping from header keywords, applying the FITS defaults.
    pub fn from_keywords(keywords: &WcsKeywords) -> Self {
        if !keywords.has_any() {
            return Self::pixel();
        }

        let ctype = [
            keywords.ctype[0].clone().unwrap_or_default().to_uppercase(),
            keywords.ctype[1].clone().unwrap_or_default().to_uppercase(),
        ];
        let crpix = Vector2::new(
            keywords.crpix[0].unwrap_or(0.0),
            keywords.crpix[1].unwrap_or(0.0),
        );
        let crval = Vector2::new(
            keywords.crval[0].unwrap_or(0.0),
            keywords.crval[1].unwrap_or(0.0),
        );

        let matrix = if keywords.cd.iter().flatten().any(Option::is_some) {
            let cd = |i: usize, j: usize| keywords.cd[i][j].unwrap_or(0.0);
            Matrix2::new(cd(0, 0), cd(0, 1), cd(1, 0), cd(1, 1))
        } else {
            let cdelt1 = keywords.cdelt[0].unwrap_or(1.0);
            let cdelt2 = keywords.cdelt[1].unwrap_or(1.0);
            let has_pc = keywords.pc.iter().flatten().any(Option::is_some);

            match keywords.crota2 {
                Some(rot) if !has_pc => {
                    let (sin, cos) = rot.to_radians().sin_cos();
                    Matrix2::new(cdelt1 * cos, -cdelt2 * sin, cdelt1 * sin, cdelt2 * cos)
                }
                _ => {
                    let pc = |i: usize, j: usize| {
                        keywords.pc[i][j].unwrap_or(if i == j { 1.0 } else { 0.0 })
                    };
                    let pc = Matrix2::new(pc(0, 0), pc(0, 1), pc(1, 0), pc(1, 1));
                    Matrix2::from_diagonal(&Vector2::new(cdelt1, cdelt2)) * pc
                }
            }
        };

        let projection = if Self::is_celestial_pair(&ctype) {
            Projection::from_ctype(&ctype[0])
        } else {
            Projection::Linear
        };

        Self {
            ctype,
            crpix,
            crval,
            matrix,
            projection,
        }
    }

    fn is_celestial_pair(ctype: &[String; 2]) -> bool {
        let lon = ["RA--", "GLON", "ELON"];
        let lat = ["DEC-", "GLAT", "ELAT"];
        let prefix = |s: &str| s.get(0..4).map(str::to_string).unwrap_or_default();
        lon.contains(&prefix(&ctype[0]).as_str()) && lat.contains(&prefix(&ctype[1]).as_str())
    }

    /// Axis types as given in the header (upper-cased).
    pub fn ctype(&self) -> [&str; 2] {
        [&self.ctype[0], &self.ctype[1]]
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn reference_value(&self) -> (f64, f64) {
        (self.crval.x, self.crval.y)
    }

    /// True when the axes are a longitude/latitude pair on the sky.
    pub fn is_celestial(&self) -> bool {
        Self::is_celestial_pair(&self.ctype)
    }

    /// True when the first axis is right ascension (labelled in hours).
    pub fn is_equatorial(&self) -> bool {
        self.is_celestial() && self.ctype[0].starts_with("RA")
    }

    /// Convert a 0-based pixel position to world coordinates in degrees.
    ///
    /// Returns None when the position falls outside the projection domain.
    pub fn pixel_to_world(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        // FITS pixel numbers are 1-based
        let offset = Vector2::new(x + 1.0, y + 1.0) - self.crpix;
        let intermediate = self.matrix * offset;

        match self.projection {
            Projection::Linear => {
                let world = self.crval + intermediate;
                Some((world.x, world.y))
            }
            Projection::Tan | Projection::Sin => self.zenithal_to_celestial(intermediate),
        }
    }

    fn zenithal_to_celestial(&self, intermediate: Vector2<f64>) -> Option<(f64, f64)> {
        let r_deg = intermediate.norm();
        let phi = intermediate.x.atan2(-intermediate.y);

        let theta = match self.projection {
            Projection::Tan => (180.0 / std::f64::consts::PI).atan2(r_deg),
            Projection::Sin => {
                let r = r_deg.to_radians();
                if r > 1.0 {
                    return None;
                }
                r.acos()
            }
            Projection::Linear => return None,
        };

        // Native longitude of the celestial pole (LONPOLE default for zenithal projections)
        let phi_p = std::f64::consts::PI;
        let alpha_0 = self.crval.x.to_radians();
        let delta_0 = self.crval.y.to_radians();
        let dphi = phi - phi_p;

        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_d0, cos_d0) = delta_0.sin_cos();

        let alpha = alpha_0
            + (-cos_t * dphi.sin()).atan2(sin_t * cos_d0 - cos_t * sin_d0 * dphi.cos());
        let delta = (sin_t * sin_d0 + cos_t * cos_d0 * dphi.cos())
            .clamp(-1.0, 1.0)
            .asin();

        Some((alpha.to_degrees().rem_euclid(360.0), delta.to_degrees()))
    }
}
