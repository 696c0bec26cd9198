//! Colormap definitions.
//!
//! Color values follow the matplotlib 2.x palette: ColorBrewer tables for
//! the sequential, diverging and qualitative families, segment tables for
//! the MATLAB-style maps and closed forms where matplotlib uses functions.

use super::{Category, ColormapDef, ColormapKind, Segment};
use std::f64::consts::PI;

use Category::*;
use ColormapKind::*;

// === Perceptually uniform (sampled at 10 evenly spaced points) ===

const VIRIDIS: &[u32] = &[
    0x440154, 0x482878, 0x3e4989, 0x31688e, 0x26828e, 0x1f9e89, 0x35b779, 0x6ece58, 0xb5de2b,
    0xfde725,
];
const INFERNO: &[u32] = &[
    0x000004, 0x1b0c41, 0x4a0c6b, 0x781c6d, 0xa52c60, 0xcf4446, 0xed6925, 0xfb9b06, 0xf7d13d,
    0xfcffa4,
];
const PLASMA: &[u32] = &[
    0x0d0887, 0x47039f, 0x7301a8, 0x9c179e, 0xbd3786, 0xd8576b, 0xed7953, 0xfa9e3b, 0xfdc926,
    0xf0f921,
];
const MAGMA: &[u32] = &[
    0x000004, 0x180f3d, 0x440f76, 0x721f81, 0x9e2f7f, 0xcd4071, 0xf1605d, 0xfd9668, 0xfec98d,
    0xfcfdbf,
];

// === ColorBrewer sequential (9 classes) ===

const BLUES: &[u32] = &[
    0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b,
];
const BUGN: &[u32] = &[
    0xf7fcfd, 0xe5f5f9, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76, 0x238b45, 0x006d2c, 0x00441b,
];
const BUPU: &[u32] = &[
    0xf7fcfd, 0xe0ecf4, 0xbfd3e6, 0x9ebcda, 0x8c96c6, 0x8c6bb1, 0x88419d, 0x810f7c, 0x4d004b,
];
const GNBU: &[u32] = &[
    0xf7fcf0, 0xe0f3db, 0xccebc5, 0xa8ddb5, 0x7bccc4, 0x4eb3d3, 0x2b8cbe, 0x0868ac, 0x084081,
];
const GREENS: &[u32] = &[
    0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b,
];
const GREYS: &[u32] = &[
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
];
const ORANGES: &[u32] = &[
    0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704,
];
const ORRD: &[u32] = &[
    0xfff7ec, 0xfee8c8, 0xfdd49e, 0xfdbb84, 0xfc8d59, 0xef6548, 0xd7301f, 0xb30000, 0x7f0000,
];
const PUBU: &[u32] = &[
    0xfff7fb, 0xece7f2, 0xd0d1e6, 0xa6bddb, 0x74a9cf, 0x3690c0, 0x0570b0, 0x045a8d, 0x023858,
];
const PUBUGN: &[u32] = &[
    0xfff7fb, 0xece2f0, 0xd0d1e6, 0xa6bddb, 0x67a9cf, 0x3690c0, 0x02818a, 0x016c59, 0x014636,
];
const PURD: &[u32] = &[
    0xf7f4f9, 0xe7e1ef, 0xd4b9da, 0xc994c7, 0xdf65b0, 0xe7298a, 0xce1256, 0x980043, 0x67001f,
];
const PURPLES: &[u32] = &[
    0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d,
];
const RDPU: &[u32] = &[
    0xfff7f3, 0xfde0dd, 0xfcc5c0, 0xfa9fb5, 0xf768a1, 0xdd3497, 0xae017e, 0x7a0177, 0x49006a,
];
const REDS: &[u32] = &[
    0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d,
];
const YLGN: &[u32] = &[
    0xffffe5, 0xf7fcb9, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d, 0x238443, 0x006837, 0x004529,
];
const YLGNBU: &[u32] = &[
    0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494, 0x081d58,
];
const YLORBR: &[u32] = &[
    0xffffe5, 0xfff7bc, 0xfee391, 0xfec44f, 0xfe9929, 0xec7014, 0xcc4c02, 0x993404, 0x662506,
];
const YLORRD: &[u32] = &[
    0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026,
];

// === MATLAB-style sequential ===

const AUTUMN: ColormapKind = Channels {
    red: &[(0.0, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (1.0, 0.0)],
};
const BONE: ColormapKind = Channels {
    red: &[(0.0, 0.0), (0.746032, 0.652778), (1.0, 1.0)],
    green: &[(0.0, 0.0), (0.365079, 0.319444), (0.746032, 0.777778), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (0.365079, 0.444444), (1.0, 1.0)],
};
const COOL: ColormapKind = Channels {
    red: &[(0.0, 0.0), (1.0, 1.0)],
    green: &[(0.0, 1.0), (1.0, 0.0)],
    blue: &[(0.0, 1.0), (1.0, 1.0)],
};
const COPPER: ColormapKind = Channels {
    red: &[(0.0, 0.0), (0.809524, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 0.7812)],
    blue: &[(0.0, 0.0), (1.0, 0.4975)],
};
const GRAY: ColormapKind = Channels {
    red: &[(0.0, 0.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (1.0, 1.0)],
};
const HOT_RED: Segment = &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)];
const HOT_GREEN: Segment = &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)];
const HOT_BLUE: Segment = &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)];
const HOT: ColormapKind = Channels {
    red: HOT_RED,
    green: HOT_GREEN,
    blue: HOT_BLUE,
};
const SPRING: ColormapKind = Channels {
    red: &[(0.0, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 1.0), (1.0, 0.0)],
};
const SUMMER: ColormapKind = Channels {
    red: &[(0.0, 0.0), (1.0, 1.0)],
    green: &[(0.0, 0.5), (1.0, 1.0)],
    blue: &[(0.0, 0.4), (1.0, 0.4)],
};
const WINTER: ColormapKind = Channels {
    red: &[(0.0, 0.0), (1.0, 0.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 1.0), (1.0, 0.5)],
};

fn gist_heat(x: f64) -> [f64; 3] {
    [1.5 * x, 2.0 * x - 1.0, 4.0 * x - 3.0]
}

/// sqrt((2 * gray + hot) / 3)
fn pink(x: f64) -> [f64; 3] {
    let mix = |hot: Segment| ((2.0 * x + super::segment_value(hot, x)) / 3.0).sqrt();
    [mix(HOT_RED), mix(HOT_GREEN), mix(HOT_BLUE)]
}

// === Diverging ===

const BRBG: &[u32] = &[
    0x543005, 0x8c510a, 0xbf812d, 0xdfc27d, 0xf6e8c3, 0xf5f5f5, 0xc7eae5, 0x80cdc1, 0x35978f,
    0x01665e, 0x003c30,
];
const PIYG: &[u32] = &[
    0x8e0152, 0xc51b7d, 0xde77ae, 0xf1b6da, 0xfde0ef, 0xf7f7f7, 0xe6f5d0, 0xb8e186, 0x7fbc41,
    0x4d9221, 0x276419,
];
const PRGN: &[u32] = &[
    0x40004b, 0x762a83, 0x9970ab, 0xc2a5cf, 0xe7d4e8, 0xf7f7f7, 0xd9f0d3, 0xa6dba0, 0x5aae61,
    0x1b7837, 0x00441b,
];
const PUOR: &[u32] = &[
    0x7f3b08, 0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xf7f7f7, 0xd8daeb, 0xb2abd2, 0x8073ac,
    0x542788, 0x2d004b,
];
const RDBU: &[u32] = &[
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3,
    0x2166ac, 0x053061,
];
const RDGY: &[u32] = &[
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xffffff, 0xe0e0e0, 0xbababa, 0x878787,
    0x4d4d4d, 0x1a1a1a,
];
const RDYLBU: &[u32] = &[
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee090, 0xffffbf, 0xe0f3f8, 0xabd9e9, 0x74add1,
    0x4575b4, 0x313695,
];
const RDYLGN: &[u32] = &[
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xd9ef8b, 0xa6d96a, 0x66bd63,
    0x1a9850, 0x006837,
];
const SPECTRAL: &[u32] = &[
    0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xe6f598, 0xabdda4, 0x66c2a5,
    0x3288bd, 0x5e4fa2,
];
const COOLWARM: &[u32] = &[
    0x3b4cc0, 0x5977e3, 0x7b9ff9, 0x9ebeff, 0xc0d4f5, 0xdddcdc, 0xf2cbb7, 0xf7ac8e, 0xee8468,
    0xd65244, 0xb40426,
];
const BWR: ColormapKind = PositionedStops(&[
    (0.0, [0.0, 0.0, 1.0]),
    (0.5, [1.0, 1.0, 1.0]),
    (1.0, [1.0, 0.0, 0.0]),
]);
const SEISMIC: ColormapKind = PositionedStops(&[
    (0.0, [0.0, 0.0, 0.3]),
    (0.25, [0.0, 0.0, 1.0]),
    (0.5, [1.0, 1.0, 1.0]),
    (0.75, [1.0, 0.0, 0.0]),
    (1.0, [0.5, 0.0, 0.0]),
]);

// === Qualitative (discrete) ===

const ACCENT: &[u32] = &[
    0x7fc97f, 0xbeaed4, 0xfdc086, 0xffff99, 0x386cb0, 0xf0027f, 0xbf5b17, 0x666666,
];
const DARK2: &[u32] = &[
    0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e, 0xe6ab02, 0xa6761d, 0x666666,
];
const PAIRED: &[u32] = &[
    0xa6cee3, 0x1f78b4, 0xb2df8a, 0x33a02c, 0xfb9a99, 0xe31a1c, 0xfdbf6f, 0xff7f00, 0xcab2d6,
    0x6a3d9a, 0xffff99, 0xb15928,
];
const PASTEL1: &[u32] = &[
    0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6, 0xffffcc, 0xe5d8bd, 0xfddaec, 0xf2f2f2,
];
const PASTEL2: &[u32] = &[
    0xb3e2cd, 0xfdcdac, 0xcbd5e8, 0xf4cae4, 0xe6f5c9, 0xfff2ae, 0xf1e2cc, 0xcccccc,
];
const SET1: &[u32] = &[
    0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00, 0xffff33, 0xa65628, 0xf781bf, 0x999999,
];
const SET2: &[u32] = &[
    0x66c2a5, 0xfc8d62, 0x8da0cb, 0xe78ac3, 0xa6d854, 0xffd92f, 0xe5c494, 0xb3b3b3,
];
const SET3: &[u32] = &[
    0x8dd3c7, 0xffffb3, 0xbebada, 0xfb8072, 0x80b1d3, 0xfdb462, 0xb3de69, 0xfccde5, 0xd9d9d9,
    0xbc80bd, 0xccebc5, 0xffed6f,
];
const VEGA10: &[u32] = &[
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22,
    0x17becf,
];
const VEGA20: &[u32] = &[
    0x1f77b4, 0xaec7e8, 0xff7f0e, 0xffbb78, 0x2ca02c, 0x98df8a, 0xd62728, 0xff9896, 0x9467bd,
    0xc5b0d5, 0x8c564b, 0xc49c94, 0xe377c2, 0xf7b6d2, 0x7f7f7f, 0xc7c7c7, 0xbcbd22, 0xdbdb8d,
    0x17becf, 0x9edae5,
];
const VEGA20B: &[u32] = &[
    0x393b79, 0x5254a3, 0x6b6ecf, 0x9c9ede, 0x637939, 0x8ca252, 0xb5cf6b, 0xcedb9c, 0x8c6d31,
    0xbd9e39, 0xe7ba52, 0xe7cb94, 0x843c39, 0xad494a, 0xd6616b, 0xe7969c, 0x7b4173, 0xa55194,
    0xce6dbd, 0xde9ed6,
];
const VEGA20C: &[u32] = &[
    0x3182bd, 0x6baed6, 0x9ecae1, 0xc6dbef, 0xe6550d, 0xfd8d3c, 0xfdae6b, 0xfdd0a2, 0x31a354,
    0x74c476, 0xa1d99b, 0xc7e9c0, 0x756bb1, 0x9e9ac8, 0xbcbddc, 0xdadaeb, 0x636363, 0x969696,
    0xbdbdbd, 0xd9d9d9,
];

// === Miscellaneous ===

const GIST_EARTH: &[u32] = &[
    0x000000, 0x1a3b78, 0x2f6f85, 0x3d8d6b, 0x5a9c4b, 0x8fab50, 0xb9b15d, 0xd2ad97, 0xfdfbfb,
];
const TERRAIN: ColormapKind = PositionedStops(&[
    (0.0, [0.2, 0.2, 0.6]),
    (0.15, [0.0, 0.6, 1.0]),
    (0.25, [0.0, 0.8, 0.4]),
    (0.5, [1.0, 1.0, 0.6]),
    (0.75, [0.5, 0.36, 0.33]),
    (1.0, [1.0, 1.0, 1.0]),
]);
const GIST_STERN: ColormapKind = Channels {
    red: &[(0.0, 0.0), (0.0547, 1.0), (0.25, 0.027), (0.25, 0.25), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (0.5, 1.0), (0.735, 0.0), (1.0, 0.0)],
};
const BRG: ColormapKind = Channels {
    red: &[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)],
    green: &[(0.0, 0.0), (0.5, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 1.0), (0.5, 0.0), (1.0, 0.0)],
};
const CMRMAP: ColormapKind = PositionedStops(&[
    (0.0, [0.0, 0.0, 0.0]),
    (0.125, [0.15, 0.15, 0.5]),
    (0.25, [0.3, 0.15, 0.75]),
    (0.375, [0.6, 0.2, 0.5]),
    (0.5, [1.0, 0.25, 0.15]),
    (0.625, [0.9, 0.5, 0.0]),
    (0.75, [0.9, 0.75, 0.1]),
    (0.875, [0.9, 0.9, 0.5]),
    (1.0, [1.0, 1.0, 1.0]),
]);
const GIST_NCAR: ColormapKind = Channels {
    red: &[
        (0.0, 0.0),
        (0.3098, 0.0),
        (0.3725, 0.3993),
        (0.4235, 0.5003),
        (0.5333, 1.0),
        (0.7922, 1.0),
        (0.8471, 0.6218),
        (0.898, 0.9235),
        (1.0, 0.9961),
    ],
    green: &[
        (0.0, 0.0),
        (0.051, 0.3722),
        (0.1059, 1.0),
        (0.1569, 0.7202),
        (0.1608, 0.7537),
        (0.1647, 0.7752),
        (0.2157, 1.0),
        (0.2588, 0.9804),
        (0.2706, 0.9804),
        (0.3176, 1.0),
        (0.3686, 0.8081),
        (0.4275, 1.0),
        (0.5216, 1.0),
        (0.6314, 0.7292),
        (0.6863, 0.2796),
        (0.7451, 0.0),
        (0.7922, 0.0),
        (0.8431, 0.1753),
        (0.898, 0.5),
        (1.0, 0.9725),
    ],
    blue: &[
        (0.0, 0.502),
        (0.051, 0.0222),
        (0.1098, 1.0),
        (0.2039, 1.0),
        (0.2627, 0.6145),
        (0.3216, 0.0),
        (0.4157, 0.0),
        (0.4745, 0.2342),
        (0.5333, 0.0),
        (0.5804, 0.0),
        (0.6314, 0.0549),
        (0.6902, 0.0),
        (0.7373, 0.0),
        (0.7922, 0.9738),
        (0.8, 1.0),
        (0.8431, 1.0),
        (0.898, 0.9341),
        (1.0, 0.9961),
    ],
};
const NIPY_SPECTRAL: ColormapKind = Channels {
    red: &[
        (0.0, 0.0),
        (0.05, 0.4667),
        (0.1, 0.5333),
        (0.15, 0.0),
        (0.6, 0.0),
        (0.65, 0.7333),
        (0.7, 0.9333),
        (0.75, 1.0),
        (0.85, 1.0),
        (0.9, 0.8667),
        (0.95, 0.8),
        (1.0, 0.8),
    ],
    green: &[
        (0.0, 0.0),
        (0.2, 0.0),
        (0.25, 0.4667),
        (0.3, 0.6),
        (0.35, 0.6667),
        (0.4, 0.6667),
        (0.45, 0.6),
        (0.5, 0.7333),
        (0.55, 0.8667),
        (0.6, 1.0),
        (0.65, 1.0),
        (0.7, 0.9333),
        (0.75, 0.8),
        (0.8, 0.6),
        (0.85, 0.0),
        (0.95, 0.0),
        (1.0, 0.8),
    ],
    blue: &[
        (0.0, 0.0),
        (0.05, 0.5333),
        (0.1, 0.6),
        (0.15, 0.6667),
        (0.2, 0.8667),
        (0.3, 0.8667),
        (0.35, 0.6667),
        (0.4, 0.5333),
        (0.45, 0.0),
        (0.95, 0.0),
        (1.0, 0.8),
    ],
};
const JET: ColormapKind = Channels {
    red: &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    green: &[
        (0.0, 0.0),
        (0.125, 0.0),
        (0.375, 1.0),
        (0.64, 1.0),
        (0.91, 0.0),
        (1.0, 0.0),
    ],
    blue: &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
};
const GIST_RAINBOW: ColormapKind = Channels {
    red: &[
        (0.0, 1.0),
        (0.03, 1.0),
        (0.215, 1.0),
        (0.4, 0.0),
        (0.586, 0.0),
        (0.77, 0.0),
        (0.954, 1.0),
        (1.0, 1.0),
    ],
    green: &[
        (0.0, 0.0),
        (0.03, 0.0),
        (0.215, 1.0),
        (0.4, 1.0),
        (0.586, 1.0),
        (0.77, 0.0),
        (0.954, 0.0),
        (1.0, 0.0),
    ],
    blue: &[
        (0.0, 0.16),
        (0.03, 0.0),
        (0.215, 0.0),
        (0.4, 0.0),
        (0.586, 1.0),
        (0.77, 1.0),
        (0.954, 1.0),
        (1.0, 0.75),
    ],
};
const HSV: ColormapKind = Channels {
    red: &[
        (0.0, 1.0),
        (0.15873, 1.0),
        (0.174603, 0.96875),
        (0.333333, 0.03125),
        (0.349206, 0.0),
        (0.666667, 0.0),
        (0.68254, 0.03125),
        (0.84127, 0.96875),
        (0.857143, 1.0),
        (1.0, 1.0),
    ],
    green: &[
        (0.0, 0.0),
        (0.15873, 0.9375),
        (0.174603, 1.0),
        (0.507937, 1.0),
        (0.666667, 0.0625),
        (0.68254, 0.0),
        (1.0, 0.0),
    ],
    blue: &[
        (0.0, 0.0),
        (0.333333, 0.0),
        (0.349206, 0.0625),
        (0.507937, 1.0),
        (0.84127, 1.0),
        (0.857143, 0.9375),
        (1.0, 0.09375),
    ],
};

/// cubehelix with gamma = 1, start = 0.5, rotations = -1.5, hue = 1
fn cubehelix(x: f64) -> [f64; 3] {
    let (gamma, start, rotation, hue) = (1.0, 0.5, -1.5, 1.0);
    let xg = x.powf(gamma);
    let amp = hue * xg * (1.0 - xg) / 2.0;
    let phi = 2.0 * PI * (start / 3.0 + rotation * x);
    let (sin, cos) = phi.sin_cos();
    [
        xg + amp * (-0.14861 * cos + 1.78277 * sin),
        xg + amp * (-0.29227 * cos - 0.90649 * sin),
        xg + amp * (1.97294 * cos),
    ]
}

fn flag(x: f64) -> [f64; 3] {
    [
        0.75 * ((31.5 * x + 0.25) * PI).sin() + 0.5,
        (31.5 * x * PI).sin(),
        0.75 * ((31.5 * x - 0.25) * PI).sin() + 0.5,
    ]
}

fn prism(x: f64) -> [f64; 3] {
    [
        0.75 * ((20.9 * x + 0.25) * PI).sin() + 0.67,
        0.75 * ((20.9 * x - 0.25) * PI).sin() + 0.33,
        -1.1 * (20.9 * x * PI).sin(),
    ]
}

macro_rules! cmap {
    ($name:literal, $category:expr, $kind:expr) => {
        ColormapDef {
            name: $name,
            category: $category,
            kind: $kind,
        }
    };
}

/// Every built-in colormap, grouped by category in display order.
pub(super) static COLORMAPS: &[ColormapDef] = &[
    cmap!("viridis", PerceptuallyUniform, Stops(VIRIDIS)),
    cmap!("inferno", PerceptuallyUniform, Stops(INFERNO)),
    cmap!("plasma", PerceptuallyUniform, Stops(PLASMA)),
    cmap!("magma", PerceptuallyUniform, Stops(MAGMA)),
    cmap!("Blues", Sequential, Stops(BLUES)),
    cmap!("BuGn", Sequential, Stops(BUGN)),
    cmap!("BuPu", Sequential, Stops(BUPU)),
    cmap!("GnBu", Sequential, Stops(GNBU)),
    cmap!("Greens", Sequential, Stops(GREENS)),
    cmap!("Greys", Sequential, Stops(GREYS)),
    cmap!("Oranges", Sequential, Stops(ORANGES)),
    cmap!("OrRd", Sequential, Stops(ORRD)),
    cmap!("PuBu", Sequential, Stops(PUBU)),
    cmap!("PuBuGn", Sequential, Stops(PUBUGN)),
    cmap!("PuRd", Sequential, Stops(PURD)),
    cmap!("Purples", Sequential, Stops(PURPLES)),
    cmap!("RdPu", Sequential, Stops(RDPU)),
    cmap!("Reds", Sequential, Stops(REDS)),
    cmap!("YlGn", Sequential, Stops(YLGN)),
    cmap!("YlGnBu", Sequential, Stops(YLGNBU)),
    cmap!("YlOrBr", Sequential, Stops(YLORBR)),
    cmap!("YlOrRd", Sequential, Stops(YLORRD)),
    cmap!("afmhot", Sequential2, Gnuplot([34, 35, 36])),
    cmap!("autumn", Sequential2, AUTUMN),
    cmap!("bone", Sequential2, BONE),
    cmap!("cool", Sequential2, COOL),
    cmap!("copper", Sequential2, COPPER),
    cmap!("gist_heat", Sequential2, Formula(gist_heat)),
    cmap!("gray", Sequential2, GRAY),
    cmap!("hot", Sequential2, HOT),
    cmap!("pink", Sequential2, Formula(pink)),
    cmap!("spring", Sequential2, SPRING),
    cmap!("summer", Sequential2, SUMMER),
    cmap!("winter", Sequential2, WINTER),
    cmap!("BrBG", Diverging, Stops(BRBG)),
    cmap!("bwr", Diverging, BWR),
    cmap!("coolwarm", Diverging, Stops(COOLWARM)),
    cmap!("PiYG", Diverging, Stops(PIYG)),
    cmap!("PRGn", Diverging, Stops(PRGN)),
    cmap!("PuOr", Diverging, Stops(PUOR)),
    cmap!("RdBu", Diverging, Stops(RDBU)),
    cmap!("RdGy", Diverging, Stops(RDGY)),
    cmap!("RdYlBu", Diverging, Stops(RDYLBU)),
    cmap!("RdYlGn", Diverging, Stops(RDYLGN)),
    cmap!("Spectral", Diverging, Stops(SPECTRAL)),
    cmap!("seismic", Diverging, SEISMIC),
    cmap!("Accent", Qualitative, Listed(ACCENT)),
    cmap!("Dark2", Qualitative, Listed(DARK2)),
    cmap!("Paired", Qualitative, Listed(PAIRED)),
    cmap!("Pastel1", Qualitative, Listed(PASTEL1)),
    cmap!("Pastel2", Qualitative, Listed(PASTEL2)),
    cmap!("Set1", Qualitative, Listed(SET1)),
    cmap!("Set2", Qualitative, Listed(SET2)),
    cmap!("Set3", Qualitative, Listed(SET3)),
    cmap!("Vega10", Qualitative, Listed(VEGA10)),
    cmap!("Vega20", Qualitative, Listed(VEGA20)),
    cmap!("Vega20b", Qualitative, Listed(VEGA20B)),
    cmap!("Vega20c", Qualitative, Listed(VEGA20C)),
    cmap!("gist_earth", Miscellaneous, Stops(GIST_EARTH)),
    cmap!("terrain", Miscellaneous, TERRAIN),
    cmap!("ocean", Miscellaneous, Gnuplot([23, 28, 3])),
    cmap!("gist_stern", Miscellaneous, GIST_STERN),
    cmap!("brg", Miscellaneous, BRG),
    cmap!("CMRmap", Miscellaneous, CMRMAP),
    cmap!("cubehelix", Miscellaneous, Formula(cubehelix)),
    cmap!("gnuplot", Miscellaneous, Gnuplot([7, 5, 15])),
    cmap!("gnuplot2", Miscellaneous, Gnuplot([30, 31, 32])),
    cmap!("gist_ncar", Miscellaneous, GIST_NCAR),
    cmap!("nipy_spectral", Miscellaneous, NIPY_SPECTRAL),
    cmap!("jet", Miscellaneous, JET),
    cmap!("rainbow", Miscellaneous, Gnuplot([33, 13, 10])),
    cmap!("gist_rainbow", Miscellaneous, GIST_RAINBOW),
    cmap!("hsv", Miscellaneous, HSV),
    cmap!("flag", Miscellaneous, Formula(flag)),
    cmap!("prism", Miscellaneous, Formula(prism)),
];

/// Gnuplot palette formulae, indexed as in `set palette rgbformulae`.
pub(super) fn gnuplot(formula: u8, x: f64) -> f64 {
    match formula {
        0 => 0.0,
        1 => 0.5,
        2 => 1.0,
        3 => x,
        4 => x.powi(2),
        5 => x.powi(3),
        6 => x.powi(4),
        7 => x.sqrt(),
        8 => x.sqrt().sqrt(),
        9 => (x * PI / 2.0).sin(),
        10 => (x * PI / 2.0).cos(),
        11 => (x - 0.5).abs(),
        12 => (2.0 * x - 1.0).powi(2),
        13 => (x * PI).sin(),
        14 => (x * PI).cos().abs(),
        15 => (x * 2.0 * PI).sin(),
        16 => (x * 2.0 * PI).cos(),
        17 => (x * 2.0 * PI).sin().abs(),
        18 => (x * 2.0 * PI).cos().abs(),
        19 => (x * 4.0 * PI).sin().abs(),
        20 => (x * 4.0 * PI).cos().abs(),
        21 => 3.0 * x,
        22 => 3.0 * x - 1.0,
        23 => 3.0 * x - 2.0,
        24 => (3.0 * x - 1.0).abs(),
        25 => (3.0 * x - 2.0).abs(),
        26 => (3.0 * x - 1.0) / 2.0,
        27 => (3.0 * x - 2.0) / 2.0,
        28 => ((3.0 * x - 1.0) / 2.0).abs(),
        29 => ((3.0 * x - 2.0) / 2.0).abs(),
        30 => x / 0.32 - 0.78125,
        31 => 2.0 * x - 0.84,
        32 => {
            if x < 0.25 {
                4.0 * x
            } else if x < 0.92 {
                -2.0 * x + 1.84
            } else {
                x / 0.08 - 11.5
            }
        }
        33 => (2.0 * x - 0.5).abs(),
        34 => 2.0 * x,
        35 => 2.0 * x - 0.5,
        36 => 2.0 * x - 1.0,
        _ => 0.0,
    }
}
