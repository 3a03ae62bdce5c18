//! Single-pass renderer turning segments into an escape-coded prompt line.
//!
//! For every segment the background is set once, then each part is drawn in the
//! segment foreground. Between parts of the same segment a thin separator is drawn in
//! the segment's separator color. After the last part the thick separator is drawn with
//! the outgoing background as foreground over the incoming background, so adjacent
//! segments appear to flow into each other. The last segment flows into the shell
//! background.

use crate::core::{segment::Segment, symbols::Symbols, templates::ShellFlavor, theme::Color};

pub struct Renderer<'a> {
    flavor: ShellFlavor,
    symbols: &'a Symbols,
    shell_bg: Color,
}

impl<'a> Renderer<'a> {
    pub fn new(flavor: ShellFlavor, symbols: &'a Symbols, shell_bg: Color) -> Self {
        Self {
            flavor,
            symbols,
            shell_bg,
        }
    }

    /// Render the segments in order. An empty slice renders as the empty string.
    pub fn render(&self, segments: &[Segment]) -> String {
        if segments.is_empty() {
            return String::new();
        }

        let mut buffer = String::with_capacity(segments.len() * 64);

        for (i, segment) in segments.iter().enumerate() {
            let next_bg = segments
                .get(i + 1)
                .map(Segment::bg)
                .unwrap_or(self.shell_bg);

            buffer.push_str(&self.flavor.bg(segment.bg()));

            let parts = segment.parts();
            for (j, part) in parts.iter().enumerate() {
                buffer.push_str(&self.flavor.fg(segment.fg()));
                buffer.push(' ');
                buffer.push_str(part);
                buffer.push(' ');

                if j + 1 == parts.len() {
                    buffer.push_str(&self.flavor.fg(segment.bg()));
                    buffer.push_str(&self.flavor.bg(next_bg));
                    buffer.push_str(self.symbols.separator);
                } else {
                    buffer.push_str(&self.flavor.fg(segment.separator_fg()));
                    buffer.push_str(self.symbols.separator_thin);
                }
            }
        }

        buffer.push_str(self.flavor.reset());
        buffer.push(' ');
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{ColorPair, PathColors};

    fn bash_renderer(symbols: &Symbols) -> Renderer<'_> {
        Renderer::new(ShellFlavor::Bash, symbols, Color(8))
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        let symbols = Symbols::default();
        assert_eq!(bash_renderer(&symbols).render(&[]), "");
    }

    #[test]
    fn test_single_segment_single_part() {
        let symbols = Symbols::default();
        let segment = Segment::single(ColorPair::new(7, 1), "1").unwrap();

        let rendered = bash_renderer(&symbols).render(&[segment]);

        let expected = format!(
            "{}{} 1 {}{}{}{} ",
            "\\[\\e[48;5;1m\\]",
            "\\[\\e[38;5;7m\\]",
            "\\[\\e[38;5;1m\\]",
            "\\[\\e[48;5;8m\\]",
            symbols.separator,
            "\\[\\e[0m\\]",
        );
        assert_eq!(rendered, expected);
        assert!(!rendered.contains(symbols.separator_thin));
    }

    #[test]
    fn test_separator_takes_next_segment_background() {
        let symbols = Symbols::default();
        let host = Segment::single(ColorPair::new(15, 13), "box").unwrap();
        let home = Segment::single(ColorPair::new(0, 10), "~").unwrap();

        let rendered = bash_renderer(&symbols).render(&[host, home]);

        // host ends by drawing its own bg as fg over home's bg
        let transition = format!(
            "\\[\\e[38;5;13m\\]\\[\\e[48;5;10m\\]{}",
            symbols.separator
        );
        assert!(rendered.contains(&transition));
        // home is last, so it flows into the shell background
        let tail = format!(
            "\\[\\e[38;5;10m\\]\\[\\e[48;5;8m\\]{}\\[\\e[0m\\] ",
            symbols.separator
        );
        assert!(rendered.ends_with(&tail));
    }

    #[test]
    fn test_thin_separator_between_parts() {
        let symbols = Symbols::default();
        let colors = PathColors {
            fg: Color(12),
            bg: Color(0),
            separator_fg: Color(8),
        };
        let path = Segment::path(colors, vec!["/".into(), "usr".into(), "lib".into()]).unwrap();

        let rendered = bash_renderer(&symbols).render(&[path]);

        assert_eq!(rendered.matches(symbols.separator_thin).count(), 2);
        assert_eq!(rendered.matches(symbols.separator).count(), 1);
        let thin = format!("\\[\\e[38;5;8m\\]{}", symbols.separator_thin);
        assert_eq!(rendered.matches(&thin).count(), 2);
        assert!(rendered.contains(" usr "));
    }

    #[test]
    fn test_flavors_differ_only_in_wrapping() {
        let symbols = Symbols::default();
        let segments = vec![
            Segment::single(ColorPair::new(15, 13), "box").unwrap(),
            Segment::single(ColorPair::new(7, 1), "2").unwrap(),
        ];

        let bash = Renderer::new(ShellFlavor::Bash, &symbols, Color(8)).render(&segments);
        let zsh = Renderer::new(ShellFlavor::Zsh, &symbols, Color(8)).render(&segments);

        let unwrap_bash = bash
            .replace("\\[\\e[", "<")
            .replace("m\\]", ">")
            .replace("<0>", "<reset>");
        let unwrap_zsh = zsh
            .replace("%{\x1b[", "<")
            .replace("m%}", ">")
            .replace("%{$reset_color%}", "<reset>");
        assert_eq!(unwrap_bash, unwrap_zsh);
        assert_ne!(bash, zsh);
    }
}
