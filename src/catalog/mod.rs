//! Static preset catalogs: canvas proportions, window-chrome frames, and
//! background gradients. Each catalog is a read-only table grouped into
//! labeled sections with a by-id index built once on first lookup.

pub mod backgrounds;
pub mod proportions;
pub mod themes;

pub use backgrounds::{background_by_id, BackgroundPreset, BackgroundSection, BACKGROUND_SECTIONS};
pub use proportions::{proportion_by_id, ProportionPreset, ProportionSection, PROPORTION_SECTIONS};
pub use themes::{
    frame_by_id, ChromeFrame, Control, ControlKind, ControlSide, ThemeSection, THEME_SECTIONS,
};
