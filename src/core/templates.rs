//! Shell-specific escape templates.
//!
//! Prompt strings must tell the shell which bytes are non-printing, otherwise line
//! editing miscounts the prompt width. Bash and zsh spell that differently, so each
//! raw SGR sequence is wrapped according to the [`ShellFlavor`] picked at startup.
//! Color selection never depends on the flavor; only the wrapping does.
//!
//! # Templates
//! - **bash**: `\[\e[<code>m\]`, reset `\[\e[0m\]` (backslashes are literal, bash expands them)
//! - **zsh**: `%{ESC[<code>m%}`, reset `%{$reset_color%}`

use crate::core::theme::Color;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellFlavor {
    #[default]
    Bash,
    Zsh,
}

impl ShellFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellFlavor::Bash => "bash",
            ShellFlavor::Zsh => "zsh",
        }
    }

    /// Wrap a raw SGR parameter string (e.g. `38;5;12`) for this shell
    pub fn escape(&self, code: &str) -> String {
        match self {
            ShellFlavor::Bash => format!("\\[\\e[{code}m\\]"),
            ShellFlavor::Zsh => format!("%{{\x1b[{code}m%}}"),
        }
    }

    pub fn fg(&self, color: Color) -> String {
        self.escape(&format!("38;5;{color}"))
    }

    pub fn bg(&self, color: Color) -> String {
        self.escape(&format!("48;5;{color}"))
    }

    /// Full style reset
    pub fn reset(&self) -> &'static str {
        match self {
            ShellFlavor::Bash => "\\[\\e[0m\\]",
            ShellFlavor::Zsh => "%{$reset_color%}",
        }
    }
}

impl fmt::Display for ShellFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShellFlavor {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "bash" => Ok(ShellFlavor::Bash),
            "zsh" => Ok(ShellFlavor::Zsh),
            other => Err(format!("unknown shell flavor '{other}'")),
        }
    }
}
