//! Powerline Prompt - renders a powerline-style shell prompt for bash and zsh.
//!
//! A prompt is built in three steps: environment facts are gathered once (working
//! directory, writability, git status), pure segment builders turn those facts into
//! colored [`Segment`]s, and the [`Renderer`] joins the segments into a single
//! escape-coded line with chained separator colors.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, with segment
//! builders in [`segments`] and the top-level render pipeline in [`commands`].

pub mod commands;
pub mod core;
pub mod segments;

pub use crate::commands::{build_prompt, execute_prompt, render_facts};
pub use crate::core::{
    GitCli, PromptConfig, PromptError, PromptFacts, Renderer, Result, Segment, ShellFlavor,
    Symbols, Theme, ThemePreset, VcsProbe, VcsStatus, WorkingDirectoryInfo,
};
pub use crate::segments::assemble;
