//! Named colormaps.
//!
//! A colormap turns a normalized value in [0, 1] into a color. Names are
//! case sensitive; appending `_r` to any name selects the reversed map.

mod data;

use serde::Serialize;
use sky_common::{ViewerError, ViewerResult, REVERSED_SUFFIX};
use std::fmt;

use crate::gradient::{interpolate_color, Color};

/// Entries in the lookup table of a continuous colormap.
pub const LUT_SIZE: usize = 256;

/// Piecewise-linear channel table of (x, y) points with increasing x.
/// A repeated x marks a discontinuity.
pub type Segment = &'static [(f64, f64)];

/// Grouping used when listing colormaps to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    PerceptuallyUniform,
    Sequential,
    Sequential2,
    Diverging,
    Qualitative,
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::PerceptuallyUniform,
        Category::Sequential,
        Category::Sequential2,
        Category::Diverging,
        Category::Qualitative,
        Category::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::PerceptuallyUniform => "Perceptually Uniform Sequential",
            Category::Sequential => "Sequential",
            Category::Sequential2 => "Sequential (2)",
            Category::Diverging => "Diverging",
            Category::Qualitative => "Qualitative",
            Category::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a colormap computes its colors.
#[derive(Clone, Copy)]
pub enum ColormapKind {
    /// Evenly spaced 0xRRGGBB stops, linearly interpolated
    Stops(&'static [u32]),
    /// Stops at explicit positions, unit-interval RGB
    PositionedStops(&'static [(f64, [f64; 3])]),
    /// Independent piecewise-linear red, green and blue channels
    Channels {
        red: Segment,
        green: Segment,
        blue: Segment,
    },
    /// Discrete table, no interpolation
    Listed(&'static [u32]),
    /// Gnuplot formula numbers for red, green and blue
    Gnuplot([u8; 3]),
    /// Closed form, channels clipped to [0, 1]
    Formula(fn(f64) -> [f64; 3]),
}

impl fmt::Debug for ColormapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColormapKind::Stops(s) => write!(f, "Stops({})", s.len()),
            ColormapKind::PositionedStops(s) => write!(f, "PositionedStops({})", s.len()),
            ColormapKind::Channels { .. } => f.write_str("Channels"),
            ColormapKind::Listed(s) => write!(f, "Listed({})", s.len()),
            ColormapKind::Gnuplot(g) => write!(f, "Gnuplot({:?})", g),
            ColormapKind::Formula(_) => f.write_str("Formula"),
        }
    }
}

/// A built-in colormap definition.
#[derive(Debug)]
pub struct ColormapDef {
    pub name: &'static str,
    pub category: Category,
    pub kind: ColormapKind,
}

/// Value of a channel table at `x`.
pub(crate) fn segment_value(table: Segment, x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    for pair in table.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 > x0 {
                return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
            }
            return y1;
        }
    }
    table.last().map(|&(_, y)| y).unwrap_or(0.0)
}

impl ColormapKind {
    fn eval(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        match *self {
            ColormapKind::Stops(stops) => {
                if stops.len() < 2 {
                    return stops.first().map(|&c| Color::from_hex(c)).unwrap_or_else(Color::transparent);
                }
                let pos = t * (stops.len() - 1) as f64;
                let i = (pos.floor() as usize).min(stops.len() - 2);
                interpolate_color(
                    Color::from_hex(stops[i]),
                    Color::from_hex(stops[i + 1]),
                    (pos - i as f64) as f32,
                )
            }
            ColormapKind::PositionedStops(stops) => {
                let channel = |c: usize| {
                    let mut prev = match stops.first() {
                        Some(first) => first,
                        None => return 0.0,
                    };
                    for stop in stops {
                        if t <= stop.0 {
                            let span = stop.0 - prev.0;
                            if span <= 0.0 {
                                return stop.1[c];
                            }
                            return prev.1[c] + (stop.1[c] - prev.1[c]) * (t - prev.0) / span;
                        }
                        prev = stop;
                    }
                    prev.1[c]
                };
                Color::from_unit([channel(0), channel(1), channel(2)])
            }
            ColormapKind::Channels { red, green, blue } => Color::from_unit([
                segment_value(red, t),
                segment_value(green, t),
                segment_value(blue, t),
            ]),
            ColormapKind::Listed(colors) => {
                let idx = listed_index(colors.len(), t);
                colors.get(idx).map(|&c| Color::from_hex(c)).unwrap_or_else(Color::transparent)
            }
            ColormapKind::Gnuplot([r, g, b]) => Color::from_unit([
                data::gnuplot(r, t),
                data::gnuplot(g, t),
                data::gnuplot(b, t),
            ]),
            ColormapKind::Formula(f) => Color::from_unit(f(t)),
        }
    }
}

fn listed_index(n: usize, t: f64) -> usize {
    ((t * n as f64) as usize).min(n.saturating_sub(1))
}

/// A resolved colormap, possibly reversed.
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    def: &'static ColormapDef,
    reversed: bool,
}

impl Colormap {
    /// Base name without the reversal suffix.
    pub fn base_name(&self) -> &'static str {
        self.def.name
    }

    /// Full name, with `_r` when reversed.
    pub fn name(&self) -> String {
        if self.reversed {
            format!("{}{}", self.def.name, REVERSED_SUFFIX)
        } else {
            self.def.name.to_string()
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn category(&self) -> Category {
        self.def.category
    }

    /// The same map traversed in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            def: self.def,
            reversed: !self.reversed,
        }
    }

    /// Color at normalized position `t` (clipped to [0, 1]).
    pub fn sample(&self, t: f64) -> Color {
        match self.def.kind {
            ColormapKind::Listed(colors) if self.reversed => {
                let n = colors.len();
                let idx = n.saturating_sub(1) - listed_index(n, t.clamp(0.0, 1.0));
                colors.get(idx).map(|&c| Color::from_hex(c)).unwrap_or_else(Color::transparent)
            }
            kind if self.reversed => kind.eval(1.0 - t),
            kind => kind.eval(t),
        }
    }

    /// Number of distinct entries when rendered through a lookup table.
    pub fn lut_size(&self) -> usize {
        match self.def.kind {
            ColormapKind::Listed(colors) => colors.len(),
            _ => LUT_SIZE,
        }
    }

    /// Lookup table: entry `i` is the color at `i / (len - 1)`.
    pub fn lut(&self) -> Vec<Color> {
        let forward = Colormap {
            def: self.def,
            reversed: false,
        };
        let n = self.lut_size();
        let mut lut: Vec<Color> = if n == 1 {
            vec![forward.sample(0.0)]
        } else {
            (0..n)
                .map(|i| match self.def.kind {
                    // Sample at bin centres so each listed color appears once
                    ColormapKind::Listed(_) => forward.sample((i as f64 + 0.5) / n as f64),
                    _ => forward.sample(i as f64 / (n - 1) as f64),
                })
                .collect()
        };
        if self.reversed {
            lut.reverse();
        }
        lut
    }
}

/// The palette of colormaps known to the rendering side.
#[derive(Debug, Clone, Copy)]
pub struct ColormapRegistry {
    maps: &'static [ColormapDef],
}

impl Default for ColormapRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColormapRegistry {
    /// The 75 built-in colormaps.
    pub fn builtin() -> Self {
        Self {
            maps: data::COLORMAPS,
        }
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Base names in display order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.maps.iter().map(|m| m.name)
    }

    /// Names grouped by category, in display order.
    pub fn by_category(&self) -> Vec<(Category, Vec<&'static str>)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let names = self
                    .maps
                    .iter()
                    .filter(|m| m.category == category)
                    .map(|m| m.name)
                    .collect();
                (category, names)
            })
            .collect()
    }

    /// Whether `name` is a base colormap name.
    pub fn contains(&self, name: &str) -> bool {
        self.maps.iter().any(|m| m.name == name)
    }

    /// Look up a base name.
    pub fn get(&self, name: &str) -> Option<Colormap> {
        self.maps.iter().find(|m| m.name == name).map(|def| Colormap {
            def,
            reversed: false,
        })
    }

    /// Resolve a full name, honouring the `_r` suffix.
    pub fn resolve(&self, name: &str) -> ViewerResult<Colormap> {
        if let Some(map) = self.get(name) {
            return Ok(map);
        }
        name.strip_suffix(REVERSED_SUFFIX)
            .and_then(|base| self.get(base))
            .map(Colormap::reversed)
            .ok_or_else(|| ViewerError::UnknownColormap(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size_and_categories() {
        let registry = ColormapRegistry::builtin();
        assert_eq!(registry.len(), 75);

        let groups = registry.by_category();
        let counts: Vec<usize> = groups.iter().map(|(_, names)| names.len()).collect();
        assert_eq!(counts, vec![4, 18, 12, 12, 12, 17]);
        assert_eq!(groups[2].1[5], "gist_heat");
    }

    #[test]
    fn test_names_unique() {
        let registry = ColormapRegistry::builtin();
        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 75);
    }

    #[test]
    fn test_no_base_name_carries_suffix() {
        let registry = ColormapRegistry::builtin();
        assert!(registry.names().all(|n| !n.ends_with(REVERSED_SUFFIX)));
    }

    #[test]
    fn test_resolve_reversed() {
        let registry = ColormapRegistry::builtin();
        let map = registry.resolve("viridis_r").unwrap();
        assert!(map.is_reversed());
        assert_eq!(map.base_name(), "viridis");
        assert_eq!(map.name(), "viridis_r");
        assert_eq!(map.sample(0.0), Color::from_hex(0xfde725));
        assert_eq!(map.sample(1.0), Color::from_hex(0x440154));
    }

    #[test]
    fn test_resolve_unknown_and_case_sensitive() {
        let registry = ColormapRegistry::builtin();
        assert!(matches!(
            registry.resolve("not_a_cmap"),
            Err(ViewerError::UnknownColormap(_))
        ));
        assert!(registry.resolve("Viridis").is_err());
        assert!(registry.resolve("viridis_r_r").is_err());
        assert!(!registry.contains("viridis_r"));
    }

    #[test]
    fn test_gist_heat_endpoints() {
        let map = ColormapRegistry::builtin().get("gist_heat").unwrap();
        assert_eq!(map.sample(0.0), Color::new(0, 0, 0, 255));
        assert_eq!(map.sample(1.0), Color::new(255, 255, 255, 255));
        // r = 1.5x, g = 2x - 1, b = 4x - 3
        assert_eq!(map.sample(0.5), Color::new(191, 0, 0, 255));
    }

    #[test]
    fn test_gray_is_linear() {
        let map = ColormapRegistry::builtin().get("gray").unwrap();
        let c = map.sample(0.5);
        assert_eq!((c.r, c.g, c.b), (128, 128, 128));
    }

    #[test]
    fn test_listed_has_no_interpolation() {
        let map = ColormapRegistry::builtin().get("Set1").unwrap();
        assert_eq!(map.lut_size(), 9);
        assert_eq!(map.sample(0.0), Color::from_hex(0xe41a1c));
        assert_eq!(map.sample(0.1), Color::from_hex(0xe41a1c));
        assert_eq!(map.sample(1.0), Color::from_hex(0x999999));

        let reversed = map.reversed();
        assert_eq!(reversed.sample(0.0), Color::from_hex(0x999999));
        assert_eq!(reversed.sample(1.0), Color::from_hex(0xe41a1c));
        assert_eq!(reversed.lut()[0], map.lut()[8]);
    }

    #[test]
    fn test_segment_discontinuity() {
        let table: Segment = &[(0.0, 0.0), (0.5, 1.0), (0.5, 0.0), (1.0, 1.0)];
        assert_eq!(segment_value(table, 0.25), 0.5);
        assert_eq!(segment_value(table, 0.75), 0.5);
    }

    #[test]
    fn test_every_map_samples_opaque() {
        let registry = ColormapRegistry::builtin();
        for name in registry.names() {
            let map = registry.get(name).unwrap();
            let lut = map.lut();
            assert_eq!(lut.len(), map.lut_size());
            assert!(lut.iter().all(|c| c.a == 255), "{} has transparent entries", name);
        }
    }

    #[test]
    fn test_lut_reversal_mirrors() {
        let registry = ColormapRegistry::builtin();
        for name in ["jet", "cubehelix", "hot", "ocean", "bwr"] {
            let forward = registry.resolve(name).unwrap().lut();
            let mut backward = registry.resolve(&format!("{}_r", name)).unwrap().lut();
            backward.reverse();
            assert_eq!(forward, backward, "{}", name);
        }
    }
}
