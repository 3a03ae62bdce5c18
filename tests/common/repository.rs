//! Scratch directory and git repository setup utilities

#![allow(dead_code)]

use assert_cmd::prelude::*;
use powerline_prompt::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary home directory with a working directory inside it. The TempDir must
/// be kept alive for the duration of the test to prevent cleanup.
pub struct TestHome {
    pub temp_dir: TempDir,
    pub home: PathBuf,
}

impl TestHome {
    pub fn path(&self) -> &Path {
        &self.home
    }

    /// Create (if needed) and return a directory below home
    pub fn subdir(&self, relative: &str) -> Result<PathBuf> {
        let dir = self.home.join(relative);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

pub fn setup_test_home() -> Result<TestHome> {
    let temp_dir = TempDir::new()?;
    let home = temp_dir.path().to_path_buf();
    Ok(TestHome { temp_dir, home })
}

/// Initialise a git repository at `dir` with `main` as the unborn branch
pub fn init_git_repo(dir: &Path) -> Result<()> {
    git(dir, &["init", "--quiet"])?;
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(dir, &["config", "user.name", "Test User"])?;
    git(dir, &["config", "user.email", "test@example.com"])?;
    Ok(())
}

pub fn create_file(dir: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(dir.join(filename), content)?;
    Ok(())
}

/// Run `git` in `dir`, failing when it exits unsuccessfully
pub fn git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        )
        .into());
    }
    Ok(())
}

/// The prompt binary, running in `cwd` with `home` as its home directory
pub fn prompt_command(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("powerline-prompt").expect("binary is built for tests");
    cmd.current_dir(cwd)
        .env("HOME", home)
        .env_remove("POWERLINE_THEME")
        .env_remove("PWD")
        .env_remove("RUST_LOG");
    cmd
}
