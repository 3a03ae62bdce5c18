use crate::core::{dirs::get_home_directory, templates::ShellFlavor, theme::ThemePreset};
use log::warn;
use std::path::PathBuf;

/// Environment variable selecting the theme preset
pub const THEME_ENV: &str = "POWERLINE_THEME";

pub const DEFAULT_EXIT_CODE: &str = "0";

/// Startup configuration, resolved once from the command line and the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub flavor: ShellFlavor,
    /// Exit code text of the previous command, kept verbatim for display
    pub exit_code: String,
    pub theme: ThemePreset,
    pub home: Option<PathBuf>,
}

impl PromptConfig {
    pub fn resolve(shell: &str, exit_code: impl Into<String>) -> Self {
        Self {
            flavor: parse_flavor(shell),
            exit_code: exit_code.into(),
            theme: parse_theme(std::env::var(THEME_ENV).ok().as_deref()),
            home: get_home_directory(),
        }
    }
}

fn parse_flavor(shell: &str) -> ShellFlavor {
    shell.parse().unwrap_or_else(|e| {
        warn!("{e}, falling back to {}", ShellFlavor::default());
        ShellFlavor::default()
    })
}

fn parse_theme(name: Option<&str>) -> ThemePreset {
    match name {
        None | Some("") => ThemePreset::default(),
        Some(name) => name.parse().unwrap_or_else(|e| {
            warn!("{e}, falling back to {}", ThemePreset::default());
            ThemePreset::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_flavor_falls_back_to_bash() {
        assert_eq!(parse_flavor("zsh"), ShellFlavor::Zsh);
        assert_eq!(parse_flavor("bash"), ShellFlavor::Bash);
        assert_eq!(parse_flavor("fish"), ShellFlavor::Bash);
    }

    #[test]
    fn test_theme_selection() {
        assert_eq!(parse_theme(None), ThemePreset::SolarizedDark);
        assert_eq!(parse_theme(Some("")), ThemePreset::SolarizedDark);
        assert_eq!(parse_theme(Some("default-dark")), ThemePreset::DefaultDark);
        assert_eq!(parse_theme(Some("neon")), ThemePreset::SolarizedDark);
    }

    #[test]
    fn test_exit_code_kept_verbatim() {
        let config = PromptConfig::resolve("zsh", "137");
        assert_eq!(config.flavor, ShellFlavor::Zsh);
        assert_eq!(config.exit_code, "137");
    }
}
