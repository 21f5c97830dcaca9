use image::Rgba;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Linear-gradient backdrop; a solid fill is the degenerate case of two
/// equal colors.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundPreset {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub color1: Rgba<u8>,
    pub color2: Rgba<u8>,
    pub angle: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct BackgroundSection {
    pub id: &'static str,
    pub label: &'static str,
    pub presets: &'static [BackgroundPreset],
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

const fn bg(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    color1: Rgba<u8>,
    color2: Rgba<u8>,
    angle: f64,
) -> BackgroundPreset {
    BackgroundPreset {
        id,
        label,
        description,
        color1,
        color2,
        angle,
    }
}

pub static BACKGROUND_SECTIONS: &[BackgroundSection] = &[
    BackgroundSection {
        id: "vibrant",
        label: "Vibrant",
        presets: &[
            bg("pink-purple", "Pink Purple", "Default gradient", rgb(0xec, 0x48, 0x99), rgb(0x8b, 0x5c, 0xf6), 135.0),
            bg("orange-pink", "Orange Pink", "Warm sunset", rgb(0xf9, 0x73, 0x16), rgb(0xec, 0x48, 0x99), 135.0),
            bg("cyan-blue", "Cyan Blue", "Ocean wave", rgb(0x06, 0xb6, 0xd4), rgb(0x3b, 0x82, 0xf6), 135.0),
            bg("green-cyan", "Green Cyan", "Tropical", rgb(0x10, 0xb9, 0x81), rgb(0x06, 0xb6, 0xd4), 135.0),
            bg("yellow-orange", "Yellow Orange", "Sunshine", rgb(0xfa, 0xcc, 0x15), rgb(0xf9, 0x73, 0x16), 135.0),
            bg("red-pink", "Red Pink", "Rose", rgb(0xef, 0x44, 0x44), rgb(0xec, 0x48, 0x99), 135.0),
        ],
    },
    BackgroundSection {
        id: "pastel",
        label: "Pastel",
        presets: &[
            bg("pastel-pink", "Soft Pink", "Light pink gradient", rgb(0xfc, 0xe7, 0xf3), rgb(0xfb, 0xcf, 0xe8), 135.0),
            bg("pastel-blue", "Soft Blue", "Light blue gradient", rgb(0xdb, 0xea, 0xfe), rgb(0xbf, 0xdb, 0xfe), 135.0),
            bg("pastel-green", "Soft Green", "Light green gradient", rgb(0xdc, 0xfc, 0xe7), rgb(0xbb, 0xf7, 0xd0), 135.0),
            bg("pastel-purple", "Soft Purple", "Light purple gradient", rgb(0xf3, 0xe8, 0xff), rgb(0xe9, 0xd5, 0xff), 135.0),
            bg("pastel-peach", "Soft Peach", "Light peach gradient", rgb(0xff, 0xed, 0xd5), rgb(0xfe, 0xd7, 0xaa), 135.0),
            bg("pastel-mint", "Soft Mint", "Light mint gradient", rgb(0xd1, 0xfa, 0xe5), rgb(0xa7, 0xf3, 0xd0), 135.0),
        ],
    },
    BackgroundSection {
        id: "dark",
        label: "Dark",
        presets: &[
            bg("dark-purple", "Dark Purple", "Deep purple", rgb(0x1e, 0x1b, 0x4b), rgb(0x31, 0x2e, 0x81), 135.0),
            bg("dark-blue", "Dark Blue", "Deep blue", rgb(0x0c, 0x19, 0x29), rgb(0x1e, 0x3a, 0x5f), 135.0),
            bg("dark-green", "Dark Green", "Deep green", rgb(0x02, 0x2c, 0x22), rgb(0x06, 0x4e, 0x3b), 135.0),
            bg("dark-red", "Dark Red", "Deep red", rgb(0x45, 0x0a, 0x0a), rgb(0x7f, 0x1d, 0x1d), 135.0),
            bg("charcoal", "Charcoal", "Dark gray", rgb(0x17, 0x17, 0x17), rgb(0x26, 0x26, 0x26), 135.0),
            bg("midnight", "Midnight", "Black to dark blue", rgb(0x00, 0x00, 0x00), rgb(0x1e, 0x3a, 0x5f), 135.0),
        ],
    },
    BackgroundSection {
        id: "sunset",
        label: "Sunset",
        presets: &[
            bg("sunset-orange", "Golden Hour", "Warm sunset", rgb(0xfb, 0xbf, 0x24), rgb(0xf9, 0x73, 0x16), 180.0),
            bg("sunset-pink", "Dusk", "Pink evening", rgb(0xf4, 0x72, 0xb6), rgb(0x93, 0x33, 0xea), 180.0),
            bg("sunset-fire", "Fire Sky", "Red orange", rgb(0xef, 0x44, 0x44), rgb(0xf9, 0x73, 0x16), 180.0),
            bg("sunset-mango", "Mango", "Yellow red", rgb(0xfd, 0xe0, 0x47), rgb(0xef, 0x44, 0x44), 180.0),
            bg("sunset-purple", "Twilight", "Purple pink", rgb(0xa8, 0x55, 0xf7), rgb(0xec, 0x48, 0x99), 180.0),
        ],
    },
    BackgroundSection {
        id: "ocean",
        label: "Ocean",
        presets: &[
            bg("ocean-deep", "Deep Ocean", "Dark blue", rgb(0x03, 0x69, 0xa1), rgb(0x0c, 0x4a, 0x6e), 180.0),
            bg("ocean-tropical", "Tropical", "Teal cyan", rgb(0x14, 0xb8, 0xa6), rgb(0x08, 0x91, 0xb2), 135.0),
            bg("ocean-wave", "Wave", "Blue cyan", rgb(0x3b, 0x82, 0xf6), rgb(0x06, 0xb6, 0xd4), 135.0),
            bg("ocean-lagoon", "Lagoon", "Light teal", rgb(0x2d, 0xd4, 0xbf), rgb(0x22, 0xd3, 0xee), 135.0),
            bg("ocean-midnight", "Midnight Sea", "Dark teal", rgb(0x13, 0x4e, 0x4a), rgb(0x16, 0x4e, 0x63), 180.0),
        ],
    },
    BackgroundSection {
        id: "nature",
        label: "Nature",
        presets: &[
            bg("forest", "Forest", "Green gradient", rgb(0x16, 0x65, 0x34), rgb(0x15, 0x80, 0x3d), 135.0),
            bg("spring", "Spring", "Fresh green", rgb(0x84, 0xcc, 0x16), rgb(0x22, 0xc5, 0x5e), 135.0),
            bg("autumn", "Autumn", "Fall colors", rgb(0xea, 0x58, 0x0c), rgb(0xca, 0x8a, 0x04), 135.0),
            bg("lavender", "Lavender", "Purple field", rgb(0xa7, 0x8b, 0xfa), rgb(0xc4, 0xb5, 0xfd), 135.0),
            bg("cherry", "Cherry Blossom", "Soft pink", rgb(0xf9, 0xa8, 0xd4), rgb(0xf4, 0x72, 0xb6), 135.0),
        ],
    },
    BackgroundSection {
        id: "gradient-mesh",
        label: "Modern",
        presets: &[
            bg("mesh-purple", "Purple Haze", "Purple to pink", rgb(0x7c, 0x3a, 0xed), rgb(0xdb, 0x27, 0x77), 45.0),
            bg("mesh-blue", "Blue Shift", "Blue to purple", rgb(0x25, 0x63, 0xeb), rgb(0x7c, 0x3a, 0xed), 45.0),
            bg("mesh-green", "Northern Lights", "Green to blue", rgb(0x05, 0x96, 0x69), rgb(0x02, 0x84, 0xc7), 45.0),
            bg("mesh-orange", "Lava", "Orange to red", rgb(0xea, 0x58, 0x0c), rgb(0xdc, 0x26, 0x26), 45.0),
            bg("mesh-pink", "Cotton Candy", "Pink to blue", rgb(0xec, 0x48, 0x99), rgb(0x8b, 0x5c, 0xf6), 90.0),
        ],
    },
    BackgroundSection {
        id: "solid",
        label: "Solid",
        presets: &[
            bg("solid-white", "White", "Pure white", rgb(0xff, 0xff, 0xff), rgb(0xff, 0xff, 0xff), 0.0),
            bg("solid-black", "Black", "Pure black", rgb(0x00, 0x00, 0x00), rgb(0x00, 0x00, 0x00), 0.0),
            bg("solid-gray", "Gray", "Neutral gray", rgb(0x6b, 0x72, 0x80), rgb(0x6b, 0x72, 0x80), 0.0),
            bg("solid-blue", "Blue", "Solid blue", rgb(0x3b, 0x82, 0xf6), rgb(0x3b, 0x82, 0xf6), 0.0),
            bg("solid-green", "Green", "Solid green", rgb(0x22, 0xc5, 0x5e), rgb(0x22, 0xc5, 0x5e), 0.0),
            bg("solid-red", "Red", "Solid red", rgb(0xef, 0x44, 0x44), rgb(0xef, 0x44, 0x44), 0.0),
        ],
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static BackgroundPreset>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for section in BACKGROUND_SECTIONS {
        for preset in section.presets {
            map.insert(preset.id, preset);
        }
    }
    map
});

pub fn background_by_id(id: &str) -> Option<&'static BackgroundPreset> {
    INDEX.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn default_preset_resolves() {
        let preset = background_by_id("pink-purple").expect("pink-purple");
        assert_eq!(preset.color1, Rgba([0xec, 0x48, 0x99, 255]));
        assert_eq!(preset.color2, Rgba([0x8b, 0x5c, 0xf6, 255]));
        assert_eq!(preset.angle, 135.0);
    }

    #[test]
    fn solids_use_equal_colors() {
        for preset in BACKGROUND_SECTIONS
            .iter()
            .find(|s| s.id == "solid")
            .expect("solid section")
            .presets
        {
            assert_eq!(preset.color1, preset.color2, "{} is not solid", preset.id);
        }
    }

    #[test]
    fn unknown_id_yields_none() {
        assert!(background_by_id("plaid").is_none());
    }
}
