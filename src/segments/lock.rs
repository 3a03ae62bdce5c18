use crate::core::{segment::Segment, symbols::Symbols, theme::Theme};

/// Lock glyph, shown when the working directory is not writable
pub fn lock_segment(writable: bool, theme: &Theme, symbols: &Symbols) -> Option<Segment> {
    if writable {
        return None;
    }
    Segment::single(theme.lock, symbols.lock)
}
