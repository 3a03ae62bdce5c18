//! Segment builders, one per prompt role.
//!
//! Each builder is a pure function of gathered facts, the theme and the symbol table,
//! returning `None` when its segment has nothing to show. [`assemble`] applies the fixed
//! left-to-right order: host, home, path, version control, lock, exit code.

pub mod exit_code;
pub mod home;
pub mod host;
pub mod lock;
pub mod path;
pub mod vcs;

pub use exit_code::*;
pub use home::*;
pub use host::*;
pub use lock::*;
pub use path::*;
pub use vcs::*;

use crate::core::{facts::PromptFacts, segment::Segment, symbols::Symbols, theme::Theme};

/// Build every segment in display order, dropping the absent ones
pub fn assemble(
    facts: &PromptFacts,
    exit_code: &str,
    theme: &Theme,
    symbols: &Symbols,
) -> Vec<Segment> {
    [
        host_segment(&facts.hostname, theme),
        home_segment(&facts.cwd, theme),
        path_segment(&facts.cwd, theme, symbols),
        vcs_segment(facts.vcs.as_ref(), theme),
        lock_segment(facts.writable, theme, symbols),
        exit_code_segment(exit_code, theme),
    ]
    .into_iter()
    .flatten()
    .collect()
}
