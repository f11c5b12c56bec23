use clap::Parser;
use git_dirty_tests::constants::{DEFAULT_EXTENSION, DEFAULT_TEST_PATH};
use std::path::PathBuf;

/// git-dirty-tests: keep only the test files git reports as changed
#[derive(Parser, Debug)]
#[command(name = "git-dirty-tests", about, long_about = None)]
pub struct Cli {
    /// candidate test files, read one per line from stdin when omitted
    pub paths: Vec<String>,

    /// prefix dirty test files must start with
    #[arg(long, default_value = DEFAULT_TEST_PATH)]
    pub test_path: String,

    /// source file extension passed to git status
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// project root, defaults to the enclosing git repository
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// print the dirty test files instead of filtering candidates
    #[arg(long, conflicts_with = "paths")]
    pub list: bool,

    /// print the list as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// print diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
