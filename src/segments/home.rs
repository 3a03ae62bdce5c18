use crate::core::{
    segment::Segment, symbols::HOME_SENTINEL, theme::Theme, workdir::WorkingDirectoryInfo,
};

/// `~` badge, shown only when the working directory is inside the home directory
pub fn home_segment(cwd: &WorkingDirectoryInfo, theme: &Theme) -> Option<Segment> {
    if !cwd.is_home_relative() {
        return None;
    }
    Segment::single(theme.home, HOME_SENTINEL)
}
