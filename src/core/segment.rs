//! The [`Segment`] type: one colored unit of the prompt line.
//!
//! A segment always has at least one part. Builders that have nothing to show return
//! `None` instead of an empty segment, so absence is decided before rendering and the
//! renderer can rely on non-empty part lists.

use crate::core::theme::{Color, ColorPair, PathColors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    fg: Color,
    bg: Color,
    separator_fg: Color,
    parts: Vec<String>,
}

impl Segment {
    /// Build a segment from a role's colors. Returns `None` when `parts` is empty.
    ///
    /// The thin separator between parts uses the segment foreground.
    pub fn new(colors: ColorPair, parts: Vec<String>) -> Option<Self> {
        Self::with_separator(colors, colors.fg, parts)
    }

    /// Build a path-colored segment whose parts are divided by the path separator color.
    pub fn path(colors: PathColors, parts: Vec<String>) -> Option<Self> {
        Self::with_separator(
            ColorPair {
                fg: colors.fg,
                bg: colors.bg,
            },
            colors.separator_fg,
            parts,
        )
    }

    /// Single-part convenience constructor. Empty text yields no segment.
    pub fn single(colors: ColorPair, text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        Self::new(colors, vec![text])
    }

    fn with_separator(colors: ColorPair, separator_fg: Color, parts: Vec<String>) -> Option<Self> {
        if parts.is_empty() {
            return None;
        }
        Some(Self {
            fg: colors.fg,
            bg: colors.bg,
            separator_fg,
            parts,
        })
    }

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn bg(&self) -> Color {
        self.bg
    }

    pub fn separator_fg(&self) -> Color {
        self.separator_fg
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}
