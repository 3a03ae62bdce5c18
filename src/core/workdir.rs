//! Working directory facts: location, home collapsing and writability.

use crate::core::{
    error::{PromptError, Result},
    symbols::{HOME_SENTINEL, ROOT_MARKER},
};
use log::debug;
use std::path::{Component, Path, PathBuf};

/// Absolute working directory plus its display components.
///
/// The first component is either [`HOME_SENTINEL`], meaning the home directory itself,
/// or [`ROOT_MARKER`], meaning the filesystem root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectoryInfo {
    pub path: PathBuf,
    pub components: Vec<String>,
}

impl WorkingDirectoryInfo {
    pub fn from_path(path: &Path, home: Option<&Path>) -> Self {
        let (anchor, rest) = match home.and_then(|home| path.strip_prefix(home).ok()) {
            Some(rest) => (HOME_SENTINEL, rest),
            None => (ROOT_MARKER, path),
        };

        let mut components = vec![anchor.to_string()];
        components.extend(rest.components().filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        }));

        Self {
            path: path.to_path_buf(),
            components,
        }
    }

    pub fn is_home_relative(&self) -> bool {
        self.components.first().map(String::as_str) == Some(HOME_SENTINEL)
    }
}

/// Resolve the current directory. Failure here is fatal for the prompt.
///
/// The shell's `PWD` is preferred over the physical path so that directories reached
/// through symlinks are shown the way the user entered them.
pub fn current_directory_info(home: Option<&Path>) -> Result<WorkingDirectoryInfo> {
    let physical = std::env::current_dir().map_err(PromptError::current_directory)?;
    let pwd = std::env::var_os("PWD").map(PathBuf::from);
    let cwd = logical_directory(physical, pwd.as_deref());
    let info = WorkingDirectoryInfo::from_path(&cwd, home);
    debug!("working directory {} -> {:?}", cwd.display(), info.components);
    Ok(info)
}

/// `pwd` when it is absolute and names the same directory as `physical`, else `physical`
pub fn logical_directory(physical: PathBuf, pwd: Option<&Path>) -> PathBuf {
    match pwd {
        Some(pwd) if pwd.is_absolute() && is_same_directory(pwd, &physical) => {
            pwd.to_path_buf()
        }
        _ => physical,
    }
}

#[cfg(unix)]
fn is_same_directory(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::metadata(a), std::fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_directory(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Probe writability by creating and dropping a uniquely named file in `dir`.
///
/// The probe file is removed when the handle drops, on every path out of this function.
pub fn is_writable(dir: &Path) -> bool {
    match tempfile::Builder::new()
        .prefix(".powerline-write-test")
        .tempfile_in(dir)
    {
        Ok(probe) => probe.close().is_ok(),
        Err(e) => {
            debug!("{} is not writable: {e}", dir.display());
            false
        }
    }
}
