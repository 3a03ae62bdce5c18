use crate::core::{segment::Segment, theme::Theme};

/// Local hostname. Always present; an unknown hostname renders as an empty part.
pub fn host_segment(hostname: &str, theme: &Theme) -> Option<Segment> {
    Segment::new(theme.host, vec![hostname.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_segment_uses_host_colors() {
        let theme = Theme::default();
        let segment = host_segment("devbox", &theme).unwrap();
        assert_eq!(segment.parts(), ["devbox"]);
        assert_eq!(segment.bg(), theme.host.bg);
        assert_eq!(segment.fg(), theme.host.fg);
    }

    #[test]
    fn test_unknown_hostname_still_renders() {
        let theme = Theme::default();
        let segment = host_segment("", &theme).unwrap();
        assert_eq!(segment.parts(), [""]);
        assert_eq!(segment.bg(), theme.host.bg);
    }
}
