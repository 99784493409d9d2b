//! End-to-end tests of the `psi-fixture-generator` binary.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use std::{
    collections::HashSet,
    fs,
    path::Path,
    process::{Command, Output},
};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_psi-fixture-generator"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to launch the generator.")
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["10", "5", "3", "-i", "4"]);
    assert!(output.status.success(), "{:?}", output);

    let db = lines(&dir.path().join("db.csv"));
    let query = lines(&dir.path().join("query.csv"));
    assert_eq!(db.len(), 10);
    assert_eq!(query.len(), 5);
    assert!(db.iter().chain(query.iter()).all(|l| l.len() == 4));

    let db_set: HashSet<&String> = db.iter().collect();
    assert_eq!(query.iter().collect::<HashSet<_>>().len(), 5);
    assert_eq!(query.iter().filter(|q| db_set.contains(q)).count(), 3);
}

#[test]
fn test_cli_long_flags_and_labels() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &[
            "12",
            "6",
            "2",
            "--label_byte_count",
            "2",
            "--item_byte_count",
            "4",
        ],
    );
    assert!(output.status.success(), "{:?}", output);

    for line in lines(&dir.path().join("db.csv")) {
        assert_eq!(line.len(), 7);
        assert_eq!(line.as_bytes()[4], b',');
    }
    assert!(lines(&dir.path().join("query.csv"))
        .iter()
        .all(|l| l.len() == 4 && !l.contains(',')));
}

#[test]
fn test_cli_seed_is_reproducible() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let args = ["25", "10", "4", "-l", "3", "-s", "99"];

    assert!(run_in(first.path(), &args).status.success());
    assert!(run_in(second.path(), &args).status.success());

    for name in ["db.csv", "query.csv"].iter() {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap()
        );
    }
}

#[test]
fn test_cli_missing_argument_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["10", "5"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert!(!dir.path().join("db.csv").exists());
}

#[test]
fn test_cli_non_integer_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(run_in(dir.path(), &["ten", "5", "3"]).status.code(), Some(2));
    assert_eq!(run_in(dir.path(), &["10", "-5", "3"]).status.code(), Some(2));
}

#[test]
fn test_cli_capacity_error_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["60", "5", "1", "-i", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot generate"));
    assert!(!dir.path().join("db.csv").exists());
    assert!(!dir.path().join("query.csv").exists());
}
