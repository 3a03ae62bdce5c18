//! Version-control discovery and the `git` status probe.
//!
//! The prompt only ever needs the raw text of `git status`; turning that into a
//! [`VcsStatus`] happens in [`crate::core::git_status`]. Keeping the subprocess behind the
//! [`VcsProbe`] trait lets tests substitute canned output.
//!
//! # Public API
//! - [`VcsProbe`]: Source of raw status text for a directory
//! - [`GitCli`]: Probe that runs the `git` binary
//! - [`is_version_controlled`]: Ancestor walk looking for a `.git` entry
//! - [`vcs_state`]: Probe + parse in one step

use crate::core::{
    git_status::VcsStatus,
    symbols::{HOME_SENTINEL, ROOT_MARKER},
};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait VcsProbe {
    /// Raw status output for `dir`, or `None` when no status is available
    fn status_text(&self, dir: &Path) -> Option<String>;
}

/// Runs `git status --ignore-submodules` in the target directory
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsProbe for GitCli {
    fn status_text(&self, dir: &Path) -> Option<String> {
        let mut cmd = Command::new(&self.program);
        // The status phrases matched downstream are only stable in the C locale
        cmd.args(["status", "--ignore-submodules"])
            .current_dir(dir)
            .env("LC_ALL", "C");

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                debug!("failed to run {}: {e}", self.program.display());
                return None;
            }
        };

        if !output.status.success() {
            debug!(
                "git status exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Walk the path components from the root (or home) downwards and report whether any
/// prefix, including the full path, contains a `.git` entry.
pub fn is_version_controlled(components: &[String], home: Option<&Path>) -> bool {
    let mut path = PathBuf::new();

    for (i, component) in components.iter().enumerate() {
        if i == 0 {
            match component.as_str() {
                HOME_SENTINEL => match home {
                    Some(home) => path.push(home),
                    None => return false,
                },
                ROOT_MARKER => path.push(ROOT_MARKER),
                other => path.push(other),
            }
        } else {
            path.push(component);
        }

        if path.join(".git").exists() {
            debug!("found version control metadata in {}", path.display());
            return true;
        }
    }

    false
}

/// Query the probe for `dir` and parse its output
pub fn vcs_state(probe: &dyn VcsProbe, dir: &Path) -> Option<VcsStatus> {
    probe.status_text(dir).map(|text| VcsStatus::parse(&text))
}
