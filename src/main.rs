mod cli;

use anyhow::{Context, Result};
use cli::Cli;
use git_dirty_tests::constants::EXIT_FAILURE;
use git_dirty_tests::{
    DirtyFileFilter, FilterError, TestSuite, error, filter_paths, git, info, status,
    warning,
};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// `--list --json` payload
#[derive(Serialize)]
struct DirtyTests<'a> {
    project_root: &'a str,
    test_path: &'a str,
    files: &'a [String],
}

fn main() {
    let cli = Cli::parse_args();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        let code = e
            .downcast_ref::<FilterError>()
            .map_or(EXIT_FAILURE, FilterError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let project_root = resolve_project_root(cli.project_root.as_deref())?;
    let suite = TestSuite::new(cli.test_path.as_str());
    // git runs in the current directory, its short paths are relative to it
    let mut filter = DirtyFileFilter::new(project_root.to_string_lossy(), suite)
        .with_extension(cli.extension.as_str());

    if git::discover_root(Path::new(".")).is_none() {
        warning!("not inside a git repository");
    }

    if cli.verbose {
        status!("project root: {}", filter.project_root());
        status!("test path: {}", filter.suite().test_path());
    }

    // load eagerly so git runs before any candidate is read
    let file_count = filter.load()?.len();
    if cli.verbose {
        let file_word = if file_count == 1 { "file" } else { "files" };
        status!("{} dirty test {}", file_count, file_word);
    }

    if cli.list {
        return print_list(&filter, cli.json);
    }

    let candidates = if cli.paths.is_empty() {
        read_candidates(io::stdin().lock())?
    } else {
        cli.paths.clone()
    };

    for path in filter_paths(&mut filter, &candidates)? {
        info!(path);
    }

    Ok(())
}

/// explicit root, else the current directory, canonicalized either way
fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    root.canonicalize()
        .with_context(|| format!("invalid project root: {}", root.display()))
}

fn print_list(filter: &DirtyFileFilter, json: bool) -> Result<()> {
    let files = filter.changed_files().unwrap_or_default();

    if json {
        let payload = DirtyTests {
            project_root: filter.project_root(),
            test_path: filter.suite().test_path(),
            files,
        };
        let output = serde_json::to_string_pretty(&payload).context("failed to serialise list")?;
        info!(output);
    } else {
        for file in files {
            info!(file);
        }
    }

    Ok(())
}

/// one candidate per non-blank line
fn read_candidates(reader: impl BufRead) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read candidate paths from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_candidates_skips_blank_lines() {
        let input = "tests/FooTest.php\n\n  \ntests/BarTest.php\r\n";
        let candidates = read_candidates(input.as_bytes()).unwrap();
        assert_eq!(candidates, ["tests/FooTest.php", "tests/BarTest.php"]);
    }

    #[test]
    fn test_explicit_project_root_is_canonicalized() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let nested = temp_dir.path().join("app");
        std::fs::create_dir(&nested).unwrap();

        let root = resolve_project_root(Some(nested.join("..").join("app").as_path())).unwrap();
        assert_eq!(root, nested.canonicalize().unwrap());
    }

    #[test]
    fn test_default_project_root_is_current_directory() {
        let root = resolve_project_root(None).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_project_root_is_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = resolve_project_root(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("invalid project root"));
    }
}
