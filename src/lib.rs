//! filter test files down to the ones git reports as changed

pub mod constants;
pub mod error;
pub mod filter;
pub mod git;
pub mod status;
pub mod suite;
mod ui;

pub use error::{FilterError, Result};
pub use filter::{DirtyFileFilter, TestCaseFilter, filter_paths};
pub use git::{GitCli, StatusOutput, StatusRunner};
pub use suite::TestSuite;
