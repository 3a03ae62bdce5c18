//! Fixed color tables for every prompt segment role.
//!
//! A [`Theme`] maps each semantic role (host, home, path, git clean/dirty, lock, error)
//! to a foreground/background pair from the ANSI 256-color palette. Themes are plain
//! data: one is picked at startup from a [`ThemePreset`] and then passed by reference
//! to every segment builder and to the renderer.
//!
//! # Public API
//! - [`Color`]: ANSI 256-color palette index
//! - [`ColorPair`]: Foreground/background pair for a role
//! - [`PathColors`]: Path role colors, including the thin separator color
//! - [`Theme`]: Complete role table plus the shell background
//! - [`ThemePreset`]: Named presets selectable through configuration

use std::fmt;
use std::str::FromStr;

/// ANSI 256-color palette index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    pub const fn new(fg: u8, bg: u8) -> Self {
        Self {
            fg: Color(fg),
            bg: Color(bg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathColors {
    pub fg: Color,
    pub bg: Color,
    /// Foreground of the thin separator drawn between path components
    pub separator_fg: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Background the terminal returns to after the last segment
    pub shell_bg: Color,
    pub host: ColorPair,
    pub home: ColorPair,
    pub path: PathColors,
    pub git_clean: ColorPair,
    pub git_dirty: ColorPair,
    pub lock: ColorPair,
    pub error: ColorPair,
}

impl Theme {
    pub fn solarized_dark() -> Self {
        Self {
            shell_bg: Color(8),
            host: ColorPair::new(15, 13),
            home: ColorPair::new(0, 10),
            path: PathColors {
                fg: Color(12),
                bg: Color(0),
                separator_fg: Color(8),
            },
            git_clean: ColorPair::new(0, 14),
            git_dirty: ColorPair::new(0, 2),
            lock: ColorPair::new(7, 4),
            error: ColorPair::new(7, 1),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            shell_bg: Color(0),
            host: ColorPair::new(250, 238),
            home: ColorPair::new(0, 10),
            path: PathColors {
                fg: Color(12),
                bg: Color(0),
                separator_fg: Color(8),
            },
            git_clean: ColorPair::new(0, 14),
            git_dirty: ColorPair::new(0, 2),
            lock: ColorPair::new(254, 124),
            error: ColorPair::new(15, 1),
        }
    }

    pub fn from_preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::SolarizedDark => Self::solarized_dark(),
            ThemePreset::DefaultDark => Self::default_dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::solarized_dark()
    }
}

/// Named theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreset {
    #[default]
    SolarizedDark,
    DefaultDark,
}

impl ThemePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreset::SolarizedDark => "solarized-dark",
            ThemePreset::DefaultDark => "default-dark",
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "solarized-dark" => Ok(ThemePreset::SolarizedDark),
            "default-dark" => Ok(ThemePreset::DefaultDark),
            other => Err(format!("unknown theme preset '{other}'")),
        }
    }
}
