use crate::constants::GIT;
use git2::Repository;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// captured result of a status query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOutput {
    /// exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl StatusOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// runs the version-control status query
///
/// the dirty file filter only talks to git through this trait, so tests can
/// substitute canned output
pub trait StatusRunner {
    /// run `git status --short -- <pathspec>`
    ///
    /// returns `Err` only when the command could not be started at all
    fn status(&self, pathspec: &str) -> io::Result<StatusOutput>;
}

/// status runner backed by the git binary
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    /// run git from the given working directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(".")
    }
}

impl StatusRunner for GitCli {
    fn status(&self, pathspec: &str) -> io::Result<StatusOutput> {
        let output = Command::new(GIT)
            .args(["status", "--short", "--", pathspec])
            .current_dir(&self.dir)
            .output()?;

        Ok(StatusOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// pathspec matching every file with the given extension
pub fn pathspec(extension: &str) -> String {
    format!("*.{}", extension.trim_start_matches('.'))
}

/// find the working directory of the repository containing `dir`
///
/// returns None outside a repository or for bare repositories
pub fn discover_root(dir: &Path) -> Option<PathBuf> {
    let repo = Repository::discover(dir).ok()?;
    repo.workdir().map(Path::to_path_buf)
}
