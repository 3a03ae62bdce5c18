use crate::core::{
    segment::Segment,
    symbols::{Symbols, HOME_SENTINEL, ROOT_MARKER},
    theme::Theme,
    workdir::WorkingDirectoryInfo,
};

/// Longest component list shown before the middle is elided
const MAX_PATH_PARTS: usize = 4;

/// Directory breadcrumbs.
///
/// The home sentinel is dropped (the home segment shows it) and the root component
/// becomes `/`. Paths deeper than four components keep the first, the last two and an
/// ellipsis in between. Absent when sitting in the home directory itself.
pub fn path_segment(
    cwd: &WorkingDirectoryInfo,
    theme: &Theme,
    symbols: &Symbols,
) -> Option<Segment> {
    let mut parts: Vec<String> = match cwd.components.split_first() {
        Some((first, rest)) if first == HOME_SENTINEL => rest.to_vec(),
        Some((_, rest)) => std::iter::once(ROOT_MARKER.to_string())
            .chain(rest.iter().cloned())
            .collect(),
        None => return None,
    };

    let len = parts.len();
    if len > MAX_PATH_PARTS {
        parts = vec![
            parts[0].clone(),
            symbols.ellipsis.to_string(),
            parts[len - 2].clone(),
            parts[len - 1].clone(),
        ];
    }

    Segment::path(theme.path, parts)
}
