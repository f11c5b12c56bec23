use crate::constants::DEFAULT_TEST_PATH;

/// test-suite configuration consumed by the dirty file filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    /// prefix every dirty test file must start with, used exactly as given
    test_path: String,
}

impl TestSuite {
    /// create a suite rooted at the given test path
    pub fn new(test_path: impl Into<String>) -> Self {
        Self {
            test_path: test_path.into(),
        }
    }

    pub fn test_path(&self) -> &str {
        &self.test_path
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new(DEFAULT_TEST_PATH)
    }
}
