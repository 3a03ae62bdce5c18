//! Snapshot of the environment a prompt is built from.
//!
//! Gathering is the only impure step of rendering. Every check is attempted exactly
//! once; everything except resolving the working directory degrades to an empty fact.

use crate::core::{
    error::Result,
    git::{is_version_controlled, vcs_state, VcsProbe},
    git_status::VcsStatus,
    workdir::{current_directory_info, is_writable, WorkingDirectoryInfo},
};
use log::debug;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptFacts {
    pub hostname: String,
    pub cwd: WorkingDirectoryInfo,
    pub writable: bool,
    /// `None` outside a working tree or when the status query failed
    pub vcs: Option<VcsStatus>,
}

impl PromptFacts {
    /// Gather facts for the process's current directory
    pub fn gather(home: Option<&Path>, probe: &dyn VcsProbe) -> Result<Self> {
        let cwd = current_directory_info(home)?;
        Ok(Self::gather_for(cwd, home, probe))
    }

    /// Gather the remaining facts for an already-resolved directory
    pub fn gather_for(
        cwd: WorkingDirectoryInfo,
        home: Option<&Path>,
        probe: &dyn VcsProbe,
    ) -> Self {
        let writable = is_writable(&cwd.path);

        let vcs = if is_version_controlled(&cwd.components, home) {
            vcs_state(probe, &cwd.path)
        } else {
            debug!("{} is not version controlled", cwd.path.display());
            None
        };

        Self {
            hostname: local_hostname(),
            cwd,
            writable,
            vcs,
        }
    }
}

fn local_hostname() -> String {
    whoami::fallible::hostname().unwrap_or_else(|e| {
        debug!("hostname unavailable: {e}");
        String::new()
    })
}
