use crate::core::{git_status::VcsStatus, segment::Segment, theme::Theme};

/// Branch summary, colored by whether the working tree is dirty
pub fn vcs_segment(status: Option<&VcsStatus>, theme: &Theme) -> Option<Segment> {
    let status = status?;
    let colors = if status.dirty {
        theme.git_dirty
    } else {
        theme.git_clean
    };
    Segment::single(colors, status.summary())
}
