// git
pub const GIT: &str = "git";
pub const EXIT_CODE_GIT_DUBIOUS_OWNERSHIP: i32 = 128;
pub const RENAME_SEPARATOR: &str = " -> ";

// status codes
pub const STATUS_DELETED: &str = "D";
pub const RENAME_STATUSES: [&str; 2] = ["R", "RM"];

// defaults
pub const DEFAULT_EXTENSION: &str = "php";
pub const DEFAULT_TEST_PATH: &str = "tests";

// errors
pub const FEATURE_NAME: &str = "filter by dirty files";

// process exit codes
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INVALID_CONFIGURATION: i32 = 2;
pub const EXIT_MISSING_DEPENDENCY: i32 = 3;
pub const EXIT_NO_DIRTY_TESTS: i32 = 4;
