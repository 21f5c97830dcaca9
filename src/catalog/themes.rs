use image::Rgba;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Simulated window-chrome top bar: a colored strip of `bar_height` pixels
/// with decorative controls rendered in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct ChromeFrame {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub bar_height: f64,
    pub bar_color: Rgba<u8>,
    pub controls_side: ControlSide,
    pub controls: &'static [Control],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Control {
    pub kind: ControlKind,
    pub color: Rgba<u8>,
    /// Diameter for circles, glyph bounding-box size for icons.
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Circle,
    Icon,
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeSection {
    pub id: &'static str,
    pub label: &'static str,
    pub frames: &'static [ChromeFrame],
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

const fn circle(color: Rgba<u8>, size: f64) -> Control {
    Control {
        kind: ControlKind::Circle,
        color,
        size,
    }
}

const fn icon(color: Rgba<u8>, size: f64) -> Control {
    Control {
        kind: ControlKind::Icon,
        color,
        size,
    }
}

/// macOS-style traffic lights shared by several frames.
const TRAFFIC_LIGHTS: &[Control] = &[
    circle(rgb(0xff, 0x5f, 0x56), 12.0),
    circle(rgb(0xff, 0xbd, 0x2e), 12.0),
    circle(rgb(0x27, 0xca, 0x40), 12.0),
];

const fn window_icons(color: Rgba<u8>) -> [Control; 3] {
    [icon(color, 10.0), icon(color, 10.0), icon(color, 10.0)]
}

const WHITE_ICONS: [Control; 3] = window_icons(rgb(0xff, 0xff, 0xff));
const BLACK_ICONS: [Control; 3] = window_icons(rgb(0x00, 0x00, 0x00));
const VSCODE_ICONS: [Control; 3] = window_icons(rgb(0x85, 0x85, 0x85));
const VSCODE_LIGHT_ICONS: [Control; 3] = window_icons(rgb(0x44, 0x44, 0x44));

pub static THEME_SECTIONS: &[ThemeSection] = &[
    ThemeSection {
        id: "none",
        label: "None",
        frames: &[ChromeFrame {
            id: "none",
            label: "None",
            description: "No frame",
            bar_height: 0.0,
            bar_color: Rgba([0, 0, 0, 0]),
            controls_side: ControlSide::Left,
            controls: &[],
        }],
    },
    ThemeSection {
        id: "browser",
        label: "Browser",
        frames: &[
            ChromeFrame {
                id: "browser-light",
                label: "Light",
                description: "Light browser chrome",
                bar_height: 36.0,
                bar_color: rgb(0xf1, 0xf3, 0xf4),
                controls_side: ControlSide::Left,
                controls: TRAFFIC_LIGHTS,
            },
            ChromeFrame {
                id: "browser-dark",
                label: "Dark",
                description: "Dark browser chrome",
                bar_height: 36.0,
                bar_color: rgb(0x20, 0x21, 0x24),
                controls_side: ControlSide::Left,
                controls: TRAFFIC_LIGHTS,
            },
        ],
    },
    ThemeSection {
        id: "macos",
        label: "macOS",
        frames: &[
            ChromeFrame {
                id: "macos-light",
                label: "Light",
                description: "macOS window light",
                bar_height: 28.0,
                bar_color: rgb(0xe8, 0xe8, 0xe8),
                controls_side: ControlSide::Left,
                controls: TRAFFIC_LIGHTS,
            },
            ChromeFrame {
                id: "macos-dark",
                label: "Dark",
                description: "macOS window dark",
                bar_height: 28.0,
                bar_color: rgb(0x3a, 0x3a, 0x3c),
                controls_side: ControlSide::Left,
                controls: TRAFFIC_LIGHTS,
            },
        ],
    },
    ThemeSection {
        id: "windows",
        label: "Windows",
        frames: &[
            ChromeFrame {
                id: "windows-light",
                label: "Light",
                description: "Windows 11 light",
                bar_height: 32.0,
                bar_color: rgb(0xf3, 0xf3, 0xf3),
                controls_side: ControlSide::Right,
                controls: &BLACK_ICONS,
            },
            ChromeFrame {
                id: "windows-dark",
                label: "Dark",
                description: "Windows 11 dark",
                bar_height: 32.0,
                bar_color: rgb(0x20, 0x20, 0x20),
                controls_side: ControlSide::Right,
                controls: &WHITE_ICONS,
            },
        ],
    },
    ThemeSection {
        id: "terminal",
        label: "Terminal",
        frames: &[
            ChromeFrame {
                id: "terminal-macos",
                label: "macOS",
                description: "macOS Terminal",
                bar_height: 28.0,
                bar_color: rgb(0xe8, 0xe8, 0xe8),
                controls_side: ControlSide::Left,
                controls: TRAFFIC_LIGHTS,
            },
            ChromeFrame {
                id: "terminal-ubuntu",
                label: "Ubuntu",
                description: "Ubuntu Terminal",
                bar_height: 32.0,
                bar_color: rgb(0x30, 0x0a, 0x24),
                controls_side: ControlSide::Right,
                controls: &[
                    circle(rgb(0xf4, 0x6c, 0x6c), 12.0),
                    circle(rgb(0xf4, 0xc6, 0x6c), 12.0),
                    circle(rgb(0x6c, 0xf4, 0x6c), 12.0),
                ],
            },
            ChromeFrame {
                id: "terminal-windows",
                label: "Windows",
                description: "Windows Terminal",
                bar_height: 32.0,
                bar_color: rgb(0x0c, 0x0c, 0x0c),
                controls_side: ControlSide::Right,
                controls: &WHITE_ICONS,
            },
            ChromeFrame {
                id: "terminal-vscode",
                label: "VS Code",
                description: "VS Code integrated terminal",
                bar_height: 32.0,
                bar_color: rgb(0x1e, 0x1e, 0x1e),
                controls_side: ControlSide::Right,
                controls: &VSCODE_ICONS,
            },
        ],
    },
    ThemeSection {
        id: "code-editor",
        label: "Code Editor",
        frames: &[
            ChromeFrame {
                id: "vscode-dark",
                label: "VS Code Dark",
                description: "Visual Studio Code dark",
                bar_height: 32.0,
                bar_color: rgb(0x32, 0x32, 0x33),
                controls_side: ControlSide::Right,
                controls: &VSCODE_ICONS,
            },
            ChromeFrame {
                id: "vscode-light",
                label: "VS Code Light",
                description: "Visual Studio Code light",
                bar_height: 32.0,
                bar_color: rgb(0xdd, 0xdd, 0xdd),
                controls_side: ControlSide::Right,
                controls: &VSCODE_LIGHT_ICONS,
            },
            ChromeFrame {
                id: "sublime",
                label: "Sublime Text",
                description: "Sublime Text editor",
                bar_height: 28.0,
                bar_color: rgb(0x3c, 0x3c, 0x3c),
                controls_side: ControlSide::Left,
                controls: TRAFFIC_LIGHTS,
            },
        ],
    },
    ThemeSection {
        id: "mobile",
        label: "Mobile",
        frames: &[
            ChromeFrame {
                id: "ios-status",
                label: "iOS Status Bar",
                description: "iPhone status bar",
                bar_height: 44.0,
                bar_color: rgb(0x00, 0x00, 0x00),
                controls_side: ControlSide::Left,
                controls: &[],
            },
            ChromeFrame {
                id: "android-status",
                label: "Android Status",
                description: "Android status bar",
                bar_height: 24.0,
                bar_color: rgb(0x00, 0x00, 0x00),
                controls_side: ControlSide::Left,
                controls: &[],
            },
        ],
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static ChromeFrame>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for section in THEME_SECTIONS {
        for frame in section.frames {
            map.insert(frame.id, frame);
        }
    }
    map
});

pub fn frame_by_id(id: &str) -> Option<&'static ChromeFrame> {
    INDEX.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_frame_has_zero_bar() {
        let none = frame_by_id("none").expect("none frame");
        assert_eq!(none.bar_height, 0.0);
        assert!(none.controls.is_empty());
    }

    #[test]
    fn browser_light_uses_traffic_lights() {
        let frame = frame_by_id("browser-light").expect("browser-light");
        assert_eq!(frame.bar_height, 36.0);
        assert_eq!(frame.controls_side, ControlSide::Left);
        assert_eq!(frame.controls.len(), 3);
        assert!(frame
            .controls
            .iter()
            .all(|c| c.kind == ControlKind::Circle && c.size == 12.0));
    }

    #[test]
    fn windows_frames_align_icons_right() {
        for id in ["windows-light", "windows-dark", "terminal-windows"] {
            let frame = frame_by_id(id).expect(id);
            assert_eq!(frame.controls_side, ControlSide::Right);
            assert!(frame.controls.iter().all(|c| c.kind == ControlKind::Icon));
        }
    }

    #[test]
    fn status_bars_have_no_controls() {
        assert!(frame_by_id("ios-status").unwrap().controls.is_empty());
        assert!(frame_by_id("android-status").unwrap().controls.is_empty());
    }

    #[test]
    fn unknown_id_yields_none() {
        assert!(frame_by_id("beos").is_none());
    }
}
