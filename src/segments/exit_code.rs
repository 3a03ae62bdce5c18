use crate::core::{segment::Segment, theme::Theme};

/// Exit code of the previous command, shown verbatim when it parses to a non-zero integer
pub fn exit_code_segment(code: &str, theme: &Theme) -> Option<Segment> {
    match code.parse::<i64>() {
        Ok(value) if value != 0 => Segment::single(theme.error, code),
        _ => None,
    }
}
