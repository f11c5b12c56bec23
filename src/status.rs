//! parsing of `git status --short` output into dirty file paths

use crate::constants::{RENAME_SEPARATOR, RENAME_STATUSES, STATUS_DELETED};
use std::collections::HashMap;

/// width of the status column, including the separating space
const STATUS_WIDTH: usize = 3;

/// a single entry of short-format status output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub code: &'a str, // e.g. "M", "D", "R", "RM", "??"
    pub path: &'a str, // "old -> new" for renames
}

impl<'a> StatusLine<'a> {
    /// split a raw line into its trimmed status code and path payload
    pub fn parse(line: &'a str) -> Self {
        let split = line
            .char_indices()
            .nth(STATUS_WIDTH)
            .map_or(line.len(), |(idx, _)| idx);
        let (code, path) = line.split_at(split);
        Self {
            code: code.trim(),
            path,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.code == STATUS_DELETED
    }

    pub fn is_rename(&self) -> bool {
        RENAME_STATUSES.contains(&self.code)
    }

    /// the path the file lives at now (the new side of a rename)
    pub fn current_path(&self) -> &'a str {
        if self.is_rename() {
            self.path
                .split_once(RENAME_SEPARATOR)
                .map_or(self.path, |(_, new)| new)
        } else {
            self.path
        }
    }
}

/// split output on any run of line breaks, dropping empty lines
fn lines(output: &str) -> impl Iterator<Item = &str> {
    output
        .split(|c: char| {
            matches!(
                c,
                '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
            )
        })
        .filter(|line| !line.is_empty())
}

/// parse status output into entries keyed by path payload
///
/// a path reported twice keeps the position of its first line and the
/// status code of its last line
pub fn parse_status_output(output: &str) -> Vec<StatusLine<'_>> {
    let mut entries: Vec<StatusLine<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for line in lines(output) {
        let entry = StatusLine::parse(line);
        if let Some(&idx) = positions.get(entry.path) {
            entries[idx] = entry;
        } else {
            positions.insert(entry.path, entries.len());
            entries.push(entry);
        }
    }

    entries
}

/// current paths of every non-deleted entry, in output order
pub fn changed_paths(output: &str) -> Vec<String> {
    parse_status_output(output)
        .iter()
        .filter(|entry| !entry.is_deleted())
        .map(|entry| entry.current_path().to_string())
        .collect()
}

/// whether a repository-relative path lies under the test root
///
/// plain string prefix match, tried with and without a leading "./"
pub fn is_under_test_path(path: &str, test_path: &str) -> bool {
    format!("./{path}").starts_with(test_path) || path.starts_with(test_path)
}

/// changed paths restricted to the test root
pub fn dirty_paths(output: &str, test_path: &str) -> Vec<String> {
    changed_paths(output)
        .into_iter()
        .filter(|path| is_under_test_path(path, test_path))
        .collect()
}

#[cfg(test)]
mod tests;
