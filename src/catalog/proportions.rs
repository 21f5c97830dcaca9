use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Target width:height ratio for the output canvas. `ratio` is `None` for
/// "auto": fit the canvas to the image content with no forced aspect.
#[derive(Debug, Clone, Copy)]
pub struct ProportionPreset {
    pub id: &'static str,
    pub label: &'static str,
    pub ratio: Option<f64>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ProportionSection {
    pub id: &'static str,
    pub label: &'static str,
    pub presets: &'static [ProportionPreset],
}

const fn p(
    id: &'static str,
    label: &'static str,
    ratio: Option<f64>,
    description: &'static str,
) -> ProportionPreset {
    ProportionPreset {
        id,
        label,
        ratio,
        description,
    }
}

pub static PROPORTION_SECTIONS: &[ProportionSection] = &[
    ProportionSection {
        id: "common",
        label: "Common",
        presets: &[
            p("auto", "Auto", None, "Fit to image"),
            p("1:1", "1:1", Some(1.0), "Square"),
            p("16:9", "16:9", Some(16.0 / 9.0), "Widescreen"),
            p("9:16", "9:16", Some(9.0 / 16.0), "Vertical"),
            p("4:3", "4:3", Some(4.0 / 3.0), "Standard"),
            p("3:2", "3:2", Some(3.0 / 2.0), "Classic Photo"),
            p("21:9", "21:9", Some(21.0 / 9.0), "Ultrawide"),
            p("2:1", "2:1", Some(2.0), "Panoramic"),
        ],
    },
    ProportionSection {
        id: "facebook",
        label: "Facebook",
        presets: &[
            p("fb-post", "Feed Post", Some(1.91), "1200x630"),
            p("fb-square", "Square Post", Some(1.0), "1200x1200"),
            p("fb-story", "Story", Some(9.0 / 16.0), "1080x1920"),
            p("fb-cover", "Cover Photo", Some(820.0 / 312.0), "820x312"),
            p("fb-event", "Event Cover", Some(16.0 / 9.0), "1920x1080"),
            p("fb-group", "Group Cover", Some(1640.0 / 856.0), "1640x856"),
            p("fb-profile", "Profile Photo", Some(1.0), "170x170"),
        ],
    },
    ProportionSection {
        id: "instagram",
        label: "Instagram",
        presets: &[
            p("ig-square", "Square Post", Some(1.0), "1080x1080"),
            p("ig-portrait", "Portrait Post", Some(4.0 / 5.0), "1080x1350"),
            p("ig-landscape", "Landscape Post", Some(1.91), "1080x566"),
            p("ig-story", "Story/Reels", Some(9.0 / 16.0), "1080x1920"),
            p("ig-profile", "Profile Photo", Some(1.0), "320x320"),
        ],
    },
    ProportionSection {
        id: "twitter",
        label: "Twitter / X",
        presets: &[
            p("tw-post", "Feed Image", Some(16.0 / 9.0), "1200x675"),
            p("tw-header", "Header Photo", Some(3.0), "1500x500"),
            p("tw-card", "Card Image", Some(1.91), "800x418"),
            p("tw-profile", "Profile Photo", Some(1.0), "400x400"),
        ],
    },
    ProportionSection {
        id: "linkedin",
        label: "LinkedIn",
        presets: &[
            p("li-post", "Feed Image", Some(1.91), "1200x627"),
            p("li-cover", "Cover Photo", Some(4.0), "1584x396"),
            p("li-profile", "Profile Photo", Some(1.0), "400x400"),
            p("li-logo", "Company Logo", Some(1.0), "300x300"),
        ],
    },
    ProportionSection {
        id: "youtube",
        label: "YouTube",
        presets: &[
            p("yt-thumbnail", "Thumbnail", Some(16.0 / 9.0), "1280x720"),
            p("yt-banner", "Channel Banner", Some(16.0 / 9.0), "2560x1440"),
            p("yt-icon", "Channel Icon", Some(1.0), "800x800"),
            p("yt-shorts", "Shorts", Some(9.0 / 16.0), "1080x1920"),
        ],
    },
    ProportionSection {
        id: "tiktok",
        label: "TikTok",
        presets: &[
            p("tt-video", "Video", Some(9.0 / 16.0), "1080x1920"),
            p("tt-profile", "Profile Photo", Some(1.0), "200x200"),
        ],
    },
    ProportionSection {
        id: "pinterest",
        label: "Pinterest",
        presets: &[
            p("pin-standard", "Standard Pin", Some(2.0 / 3.0), "1000x1500"),
            p("pin-long", "Long Pin", Some(1.0 / 2.1), "1000x2100"),
            p("pin-square", "Square Pin", Some(1.0), "1000x1000"),
            p("pin-profile", "Profile Photo", Some(1.0), "165x165"),
        ],
    },
    ProportionSection {
        id: "appstore",
        label: "App Store (iOS)",
        presets: &[
            p("ios-67", "iPhone 6.7\"", Some(1290.0 / 2796.0), "1290x2796"),
            p("ios-65", "iPhone 6.5\"", Some(1242.0 / 2688.0), "1242x2688"),
            p("ios-55", "iPhone 5.5\"", Some(1242.0 / 2208.0), "1242x2208"),
            p("ios-ipad-129", "iPad Pro 12.9\"", Some(2048.0 / 2732.0), "2048x2732"),
            p("ios-ipad-11", "iPad Pro 11\"", Some(1668.0 / 2388.0), "1668x2388"),
        ],
    },
    ProportionSection {
        id: "playstore",
        label: "Play Store (Android)",
        presets: &[
            p("android-phone", "Phone", Some(9.0 / 16.0), "1080x1920"),
            p("android-7", "7\" Tablet", Some(1200.0 / 1920.0), "1200x1920"),
            p("android-10", "10\" Tablet", Some(1920.0 / 1200.0), "1920x1200"),
            p("android-feature", "Feature Graphic", Some(1024.0 / 500.0), "1024x500"),
            p("android-icon", "App Icon", Some(1.0), "512x512"),
        ],
    },
    ProportionSection {
        id: "chromestore",
        label: "Chrome Web Store",
        presets: &[
            p("chrome-screenshot", "Screenshot", Some(1280.0 / 800.0), "1280x800"),
            p("chrome-tile", "Small Tile", Some(440.0 / 280.0), "440x280"),
            p("chrome-marquee", "Marquee", Some(1400.0 / 560.0), "1400x560"),
            p("chrome-icon", "Store Icon", Some(1.0), "128x128"),
        ],
    },
    ProportionSection {
        id: "msstore",
        label: "Microsoft Store",
        presets: &[
            p("ms-screenshot", "Screenshot", Some(1366.0 / 768.0), "1366x768"),
            p("ms-poster", "Poster Art", Some(720.0 / 1080.0), "720x1080"),
            p("ms-hero", "Hero Art", Some(1920.0 / 1080.0), "1920x1080"),
            p("ms-icon", "App Icon", Some(1.0), "300x300"),
        ],
    },
    ProportionSection {
        id: "dribbble",
        label: "Dribbble",
        presets: &[
            p("dribbble-shot", "Shot", Some(4.0 / 3.0), "1600x1200"),
            p("dribbble-hd", "HD Shot", Some(16.0 / 9.0), "1920x1080"),
        ],
    },
    ProportionSection {
        id: "behance",
        label: "Behance",
        presets: &[
            p("behance-project", "Project Cover", Some(808.0 / 632.0), "808x632"),
            p("behance-module", "Module", Some(1400.0 / 788.0), "1400x788"),
        ],
    },
    ProportionSection {
        id: "presentation",
        label: "Presentations",
        presets: &[
            p("pres-16-9", "Widescreen (16:9)", Some(16.0 / 9.0), "1920x1080"),
            p("pres-4-3", "Standard (4:3)", Some(4.0 / 3.0), "1024x768"),
            p("pres-16-10", "Wide (16:10)", Some(16.0 / 10.0), "1920x1200"),
        ],
    },
    ProportionSection {
        id: "wallpaper",
        label: "Wallpapers",
        presets: &[
            p("wall-fhd", "Full HD", Some(16.0 / 9.0), "1920x1080"),
            p("wall-2k", "2K / QHD", Some(16.0 / 9.0), "2560x1440"),
            p("wall-4k", "4K / UHD", Some(16.0 / 9.0), "3840x2160"),
            p("wall-ultra", "Ultrawide", Some(21.0 / 9.0), "3440x1440"),
            p("wall-mobile", "Mobile", Some(9.0 / 19.5), "1080x2340"),
        ],
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static ProportionPreset>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for section in PROPORTION_SECTIONS {
        for preset in section.presets {
            map.insert(preset.id, preset);
        }
    }
    map
});

pub fn proportion_by_id(id: &str) -> Option<&'static ProportionPreset> {
    INDEX.get(id).copied()
}
