use super::*;

const SCENARIO: &str = "M  tests/FooTest.php\nD  tests/BarTest.php\nR  tests/OldTest.php -> tests/NewTest.php\nM  src/App.php\n";

#[test]
fn test_parse_line_trims_status_code() {
    let line = StatusLine::parse(" M tests/FooTest.php");
    assert_eq!(line.code, "M");
    assert_eq!(line.path, "tests/FooTest.php");

    let line = StatusLine::parse("?? tests/NewTest.php");
    assert_eq!(line.code, "??");
    assert_eq!(line.path, "tests/NewTest.php");
}

#[test]
fn test_parse_short_line() {
    let line = StatusLine::parse("M");
    assert_eq!(line.code, "M");
    assert_eq!(line.path, "");
}

#[test]
fn test_rename_uses_new_path() {
    let line = StatusLine::parse("R  tests/OldTest.php -> tests/NewTest.php");
    assert!(line.is_rename());
    assert_eq!(line.current_path(), "tests/NewTest.php");

    let line = StatusLine::parse("RM tests/OldTest.php -> tests/NewTest.php");
    assert!(line.is_rename());
    assert_eq!(line.current_path(), "tests/NewTest.php");
}

#[test]
fn test_other_codes_keep_arrow_in_path() {
    // only R and RM are treated as renames
    let line = StatusLine::parse("C  tests/A.php -> tests/B.php");
    assert!(!line.is_rename());
    assert_eq!(line.current_path(), "tests/A.php -> tests/B.php");
}

#[test]
fn test_scenario_changed_paths() {
    assert_eq!(
        changed_paths(SCENARIO),
        vec!["tests/FooTest.php", "tests/NewTest.php", "src/App.php"]
    );
}

#[test]
fn test_scenario_dirty_paths() {
    assert_eq!(
        dirty_paths(SCENARIO, "tests/"),
        vec!["tests/FooTest.php", "tests/NewTest.php"]
    );
}

#[test]
fn test_deleted_never_included() {
    let output = "D  tests/GoneTest.php\n M tests/KeptTest.php\n";
    let paths = dirty_paths(output, "tests");
    assert_eq!(paths, vec!["tests/KeptTest.php"]);
}

#[test]
fn test_splits_on_any_line_break_run() {
    let output = "M  tests/ATest.php\r\n\r\nA  tests/BTest.php\r\rM  tests/CTest.php";
    assert_eq!(
        changed_paths(output),
        vec!["tests/ATest.php", "tests/BTest.php", "tests/CTest.php"]
    );
}

#[test]
fn test_duplicate_path_last_status_wins() {
    // first seen as modified, later reported deleted
    let output = "M  tests/FooTest.php\nA  tests/BarTest.php\nD  tests/FooTest.php\n";
    let entries = parse_status_output(output);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].path, "tests/FooTest.php");
    assert_eq!(entries[0].code, "D");
    assert_eq!(changed_paths(output), vec!["tests/BarTest.php"]);
}

#[test]
fn test_duplicate_path_keeps_first_position() {
    let output = "M  tests/ATest.php\nM  tests/BTest.php\nA  tests/ATest.php\n";
    assert_eq!(
        changed_paths(output),
        vec!["tests/ATest.php", "tests/BTest.php"]
    );
}

#[test]
fn test_test_path_with_dot_slash_prefix() {
    assert!(is_under_test_path("tests/FooTest.php", "./tests"));
    assert!(is_under_test_path("tests/FooTest.php", "tests"));
    assert!(!is_under_test_path("src/App.php", "./tests"));
}

#[test]
fn test_test_path_is_plain_string_prefix() {
    // not segment aware: "tests" also matches "tests-old/"
    assert!(is_under_test_path("tests-old/FooTest.php", "tests"));
    assert!(!is_under_test_path("tests-old/FooTest.php", "tests/"));
    // case sensitive
    assert!(!is_under_test_path("Tests/FooTest.php", "tests"));
}

#[test]
fn test_empty_output() {
    assert!(changed_paths("").is_empty());
    assert!(dirty_paths("\n\n", "tests").is_empty());
}
