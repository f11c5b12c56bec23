//! restricts test runs to test files with uncommitted changes

use crate::constants::{DEFAULT_EXTENSION, EXIT_CODE_GIT_DUBIOUS_OWNERSHIP};
use crate::error::{FilterError, Result};
use crate::git::{self, GitCli, StatusRunner};
use crate::status::dirty_paths;
use crate::suite::TestSuite;
use std::path::MAIN_SEPARATOR;

/// decides whether a discovered test file takes part in the run
pub trait TestCaseFilter {
    fn accept(&mut self, test_case_filename: &str) -> Result<bool>;
}

/// apply a filter to every candidate, keeping the accepted ones in order
pub fn filter_paths<F, I>(filter: &mut F, candidates: I) -> Result<Vec<String>>
where
    F: TestCaseFilter + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut accepted = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if filter.accept(candidate)? {
            accepted.push(candidate.to_string());
        }
    }
    Ok(accepted)
}

/// accepts only test files reported as changed by `git status`
///
/// the changed file set is queried on first use and cached for the lifetime
/// of the filter. loading mutates the filter, so sharing one between threads
/// needs a `Mutex` or an eager `load()` beforehand.
#[derive(Debug)]
pub struct DirtyFileFilter<R = GitCli> {
    project_root: String,
    suite: TestSuite,
    extension: String,
    runner: R,
    changed_files: Option<Vec<String>>,
}

impl DirtyFileFilter<GitCli> {
    /// filter querying git in the current directory
    pub fn new(project_root: impl Into<String>, suite: TestSuite) -> Self {
        Self::with_runner(project_root, suite, GitCli::default())
    }
}

impl<R: StatusRunner> DirtyFileFilter<R> {
    pub fn with_runner(project_root: impl Into<String>, suite: TestSuite, runner: R) -> Self {
        Self {
            project_root: project_root.into(),
            suite,
            extension: DEFAULT_EXTENSION.to_string(),
            runner,
            changed_files: None,
        }
    }

    /// restrict the status query to another source extension
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn project_root(&self) -> &str {
        &self.project_root
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// the cached changed files, `None` until loaded
    pub fn changed_files(&self) -> Option<&[String]> {
        self.changed_files.as_deref()
    }

    /// load the changed file set if not cached yet and return it
    pub fn load(&mut self) -> Result<&[String]> {
        let files = match self.changed_files.take() {
            Some(files) => files,
            None => self.query_changed_files()?,
        };
        Ok(self.changed_files.insert(files).as_slice())
    }

    /// candidate path relative to the project root, with `/` separators
    pub fn relative_path(&self, candidate: &str) -> String {
        let relative = candidate
            .strip_prefix(self.project_root.as_str())
            .unwrap_or(candidate)
            .replace(['\\', MAIN_SEPARATOR], "/");

        match relative.strip_prefix('/') {
            Some(stripped) => stripped.to_string(),
            None => relative,
        }
    }

    fn query_changed_files(&self) -> Result<Vec<String>> {
        let output = self
            .runner
            .status(&git::pathspec(&self.extension))
            .map_err(|_| FilterError::missing_git())?;

        if !output.success() {
            if output.code == Some(EXIT_CODE_GIT_DUBIOUS_OWNERSHIP) {
                return Err(FilterError::dubious_ownership(&self.project_root));
            }
            return Err(FilterError::missing_git());
        }

        let files = dirty_paths(&output.stdout, self.suite.test_path());
        if files.is_empty() {
            return Err(FilterError::NoDirtyTestsFound);
        }

        Ok(files)
    }
}

impl<R: StatusRunner> TestCaseFilter for DirtyFileFilter<R> {
    fn accept(&mut self, test_case_filename: &str) -> Result<bool> {
        let relative = self.relative_path(test_case_filename);
        Ok(self.load()?.contains(&relative))
    }
}
