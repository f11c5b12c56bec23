use crate::constants::{
    EXIT_INVALID_CONFIGURATION, EXIT_MISSING_DEPENDENCY, EXIT_NO_DIRTY_TESTS, FEATURE_NAME, GIT,
};

/// errors raised while loading the dirty file set
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// git refused to run against the working directory (ownership check)
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// git failed for any other reason, usually not installed or not a repository
    #[error("{feature} requires {dependency} to be installed")]
    MissingDependency {
        feature: &'static str,
        dependency: &'static str,
    },

    /// nothing left after filtering; the run should stop here
    #[error("no dirty test files found")]
    NoDirtyTestsFound,
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    pub fn dubious_ownership(dir: &str) -> Self {
        Self::InvalidConfiguration {
            message: format!(
                "dubious folder ownership, mark it as safe with `git config --global --add safe.directory {dir}`"
            ),
        }
    }

    pub fn missing_git() -> Self {
        Self::MissingDependency {
            feature: FEATURE_NAME,
            dependency: GIT,
        }
    }

    /// whether the error should end the whole run rather than be handled
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoDirtyTestsFound)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoDirtyTestsFound => EXIT_NO_DIRTY_TESTS,
            Self::InvalidConfiguration { .. } => EXIT_INVALID_CONFIGURATION,
            Self::MissingDependency { .. } => EXIT_MISSING_DEPENDENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let ownership = FilterError::dubious_ownership("/srv/app").to_string();
        let missing = FilterError::missing_git().to_string();
        let empty = FilterError::NoDirtyTestsFound.to_string();

        assert!(ownership.contains("safe.directory /srv/app"));
        assert_eq!(missing, "filter by dirty files requires git to be installed");
        assert_eq!(empty, "no dirty test files found");
    }

    #[test]
    fn test_only_no_dirty_tests_is_fatal() {
        assert!(FilterError::NoDirtyTestsFound.is_fatal());
        assert!(!FilterError::missing_git().is_fatal());
        assert!(!FilterError::dubious_ownership(".").is_fatal());
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            FilterError::NoDirtyTestsFound.exit_code(),
            FilterError::dubious_ownership(".").exit_code(),
            FilterError::missing_git().exit_code(),
        ];
        assert_eq!(codes, [4, 2, 3]);
    }
}
