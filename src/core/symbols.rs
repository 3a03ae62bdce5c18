/// Glyphs drawn by the prompt. These come from the Powerline private-use area, so a
/// patched font is required for them to display correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub lock: &'static str,
    pub network: &'static str,
    pub separator: &'static str,
    pub separator_thin: &'static str,
    pub ellipsis: &'static str,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            lock: "\u{E0A2}",
            network: "\u{E0A2}",
            separator: "\u{E0B0}",
            separator_thin: "\u{E0B1}",
            ellipsis: "\u{2026}",
        }
    }
}

/// Sentinel component standing in for the user's home directory
pub const HOME_SENTINEL: &str = "~";

/// Marker shown for the filesystem root
pub const ROOT_MARKER: &str = "/";

pub const AHEAD_GLYPH: &str = "\u{21E1}";
pub const BEHIND_GLYPH: &str = "\u{21E3}";
