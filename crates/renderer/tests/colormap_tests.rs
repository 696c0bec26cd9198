//! Tests for the colormap palette.

use renderer::{Category, ColormapRegistry, LUT_SIZE};
use sky_common::ViewerError;

const ALL_NAMES: [&str; 75] = [
    "viridis", "inferno", "plasma", "magma",
    "Blues", "BuGn", "BuPu", "GnBu", "Greens", "Greys", "Oranges", "OrRd", "PuBu",
    "PuBuGn", "PuRd", "Purples", "RdPu", "Reds", "YlGn", "YlGnBu", "YlOrBr", "YlOrRd",
    "afmhot", "autumn", "bone", "cool", "copper", "gist_heat", "gray", "hot", "pink",
    "spring", "summer", "winter",
    "BrBG", "bwr", "coolwarm", "PiYG", "PRGn", "PuOr", "RdBu", "RdGy", "RdYlBu",
    "RdYlGn", "Spectral", "seismic",
    "Accent", "Dark2", "Paired", "Pastel1", "Pastel2", "Set1", "Set2", "Set3",
    "Vega10", "Vega20", "Vega20b", "Vega20c",
    "gist_earth", "terrain", "ocean", "gist_stern", "brg", "CMRmap", "cubehelix",
    "gnuplot", "gnuplot2", "gist_ncar", "nipy_spectral", "jet", "rainbow",
    "gist_rainbow", "hsv", "flag", "prism",
];

// ============================================================================
// Registry contents
// ============================================================================

#[test]
fn test_every_name_resolves_both_ways() {
    let registry = ColormapRegistry::builtin();
    assert_eq!(registry.len(), ALL_NAMES.len());

    for name in ALL_NAMES {
        let forward = registry.resolve(name).unwrap();
        assert_eq!(forward.name(), name);
        assert!(!forward.is_reversed());

        let reversed = registry.resolve(&format!("{}_r", name)).unwrap();
        assert_eq!(reversed.base_name(), name);
        assert_eq!(reversed.name(), format!("{}_r", name));
        assert!(reversed.is_reversed());
    }
}

#[test]
fn test_names_in_display_order() {
    let registry = ColormapRegistry::builtin();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, ALL_NAMES.to_vec());
}

#[test]
fn test_category_sizes() {
    let registry = ColormapRegistry::builtin();
    let sizes: Vec<(Category, usize)> = registry
        .by_category()
        .into_iter()
        .map(|(category, names)| (category, names.len()))
        .collect();
    assert_eq!(
        sizes,
        vec![
            (Category::PerceptuallyUniform, 4),
            (Category::Sequential, 18),
            (Category::Sequential2, 12),
            (Category::Diverging, 12),
            (Category::Qualitative, 12),
            (Category::Miscellaneous, 17),
        ]
    );
}

#[test]
fn test_unknown_names() {
    let registry = ColormapRegistry::builtin();
    for name in ["not_a_cmap", "Viridis", "viridis_r_r", "_r", ""] {
        match registry.resolve(name) {
            Err(ViewerError::UnknownColormap(n)) => assert_eq!(n, name),
            other => panic!("{:?} resolved to {:?}", name, other.map(|m| m.name())),
        }
    }
    assert!(!registry.contains("viridis_r"));
    assert!(registry.contains("viridis"));
}

// ============================================================================
// Lookup tables
// ============================================================================

#[test]
fn test_reversed_lut_mirrors_forward() {
    let registry = ColormapRegistry::builtin();
    for name in ALL_NAMES {
        let forward = registry.resolve(name).unwrap().lut();
        let mut reversed = registry.resolve(&format!("{}_r", name)).unwrap().lut();
        reversed.reverse();
        assert_eq!(forward, reversed, "{}", name);
    }
}

#[test]
fn test_lut_sizes() {
    let registry = ColormapRegistry::builtin();
    assert_eq!(registry.resolve("viridis").unwrap().lut().len(), LUT_SIZE);
    assert_eq!(registry.resolve("Set1").unwrap().lut().len(), 9);
    assert_eq!(registry.resolve("Paired").unwrap().lut().len(), 12);
    assert_eq!(registry.resolve("Vega20").unwrap().lut().len(), 20);
}

#[test]
fn test_known_endpoints() {
    let registry = ColormapRegistry::builtin();
    let ends = |name: &str| {
        let lut = registry.resolve(name).unwrap().lut();
        (lut[0].to_array(), lut[lut.len() - 1].to_array())
    };

    assert_eq!(ends("gray"), ([0, 0, 0, 255], [255, 255, 255, 255]));
    assert_eq!(ends("gray_r"), ([255, 255, 255, 255], [0, 0, 0, 255]));
    assert_eq!(ends("viridis").0, [0x44, 0x01, 0x54, 255]);
    assert_eq!(ends("viridis").1, [0xfd, 0xe7, 0x25, 255]);
    assert_eq!(ends("gist_heat"), ([0, 0, 0, 255], [255, 255, 255, 255]));
    assert_eq!(ends("bwr").0, [0, 0, 255, 255]);
    assert_eq!(ends("bwr").1, [255, 0, 0, 255]);
}
