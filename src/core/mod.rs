//! Core functionality for powerline-prompt.
//!
//! This module provides fact gathering, the fixed theme and symbol tables, the
//! segment type, and the shell-aware renderer.

pub mod config;
pub mod dirs;
pub mod error;
pub mod facts;
pub mod git;
pub mod git_status;
pub mod output;
pub mod renderer;
pub mod segment;
pub mod symbols;
pub mod templates;
pub mod theme;
pub mod workdir;

// === Error handling ===
pub use error::{PromptError, Result};

// === Configuration ===
pub use config::PromptConfig;

// === Environment facts ===
// Working directory, writability probe and version-control state
pub use facts::PromptFacts;
pub use git::{is_version_controlled, vcs_state, GitCli, VcsProbe};
pub use git_status::{Direction, Divergence, VcsStatus};
pub use workdir::{current_directory_info, is_writable, WorkingDirectoryInfo};

// === Theme and symbols ===
pub use symbols::{Symbols, HOME_SENTINEL, ROOT_MARKER};
pub use theme::{Color, ColorPair, PathColors, Theme, ThemePreset};

// === Rendering ===
pub use renderer::Renderer;
pub use segment::Segment;
pub use templates::ShellFlavor;

// === Output formatting ===
pub use output::print_error;
