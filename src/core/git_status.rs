//! Best-effort extraction of version-control status from `git status` text.
//!
//! This is deliberately not a parser for git's porcelain format. It scans the
//! human-readable output for a handful of well-known phrases, the same way a person
//! glancing at the output would:
//! - `On branch X` / `HEAD detached at X` / `HEAD detached from X` give the branch
//! - `Your branch is ahead|behind ... N commit` gives one divergence count
//! - anything other than `nothing to commit` means the tree is dirty
//! - `Untracked files` appends a ` +` marker
//!
//! Only one of ahead/behind is captured per run, even when git reports that the branch
//! has diverged both ways.

use crate::core::symbols::{AHEAD_GLYPH, BEHIND_GLYPH};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static BRANCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:HEAD detached at|HEAD detached from|On branch) (\S+)").unwrap()
});

static DIVERGENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Your branch is (ahead|behind).*?([0-9]+) comm").unwrap());

const CLEAN_PHRASE: &str = "nothing to commit";
const UNTRACKED_PHRASE: &str = "Untracked files";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ahead,
    Behind,
}

impl Direction {
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Ahead => AHEAD_GLYPH,
            Direction::Behind => BEHIND_GLYPH,
        }
    }
}

/// Commits between the local branch and its upstream, in a single direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub direction: Direction,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VcsStatus {
    /// Branch name or detached-head identifier
    pub branch: Option<String>,
    pub divergence: Option<Divergence>,
    /// False only when git reports a perfectly clean working tree
    pub dirty: bool,
    pub untracked: bool,
}

impl VcsStatus {
    pub fn parse(output: &str) -> Self {
        let branch = BRANCH_RE
            .captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        let divergence = DIVERGENCE_RE.captures(output).map(|caps| Divergence {
            direction: if &caps[1] == "behind" {
                Direction::Behind
            } else {
                Direction::Ahead
            },
            count: caps[2].to_string(),
        });

        Self {
            branch,
            divergence,
            dirty: !output.contains(CLEAN_PHRASE),
            untracked: output.contains(UNTRACKED_PHRASE),
        }
    }

    /// Composed status text, e.g. `main 3⇡ +`. May be empty.
    pub fn summary(&self) -> String {
        let mut summary = self.branch.clone().unwrap_or_default();

        if let Some(divergence) = &self.divergence {
            summary.push(' ');
            summary.push_str(&divergence.count);
            summary.push_str(divergence.direction.glyph());
        }

        if self.untracked {
            summary.push_str(" +");
        }

        summary
    }
}

impl fmt::Display for VcsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
