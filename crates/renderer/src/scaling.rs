//! Intensity transforms applied before color mapping.

use rayon::prelude::*;
use sky_common::ScalingMode;

/// Minimum samples to benefit from a parallel pass
const PARALLEL_THRESHOLD: usize = 65_536;

/// Apply `mode` to every sample, preserving order.
///
/// Root and Logarithmic are undefined below -1 and produce NaN there; such
/// samples render as transparent rather than being clamped.
pub fn apply_scaling(values: &[f64], mode: ScalingMode) -> Vec<f64> {
    if mode == ScalingMode::Identity {
        return values.to_vec();
    }
    if values.len() >= PARALLEL_THRESHOLD {
        values.par_iter().map(|&v| mode.apply(v)).collect()
    } else {
        values.iter().map(|&v| mode.apply(v)).collect()
    }
}
