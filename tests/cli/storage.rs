//! Tests for `dataxi path`, `clean` and `reset`, and the storage directory
//! override.

use crate::support::*;
use tempfile::TempDir;

#[test]
fn test_path_defaults_to_home() {
    let t = Test::new();

    let output = t.run(&["path"]);

    assert_success(&output);
    assert_eq!(stdout(&output).trim(), t.dir().display().to_string());
}

#[test]
fn test_dir_flag_overrides_home() {
    let t = Test::new();
    let other = TempDir::new().unwrap();
    let dir = other.path().join("vault");
    let dir_arg = dir.display().to_string();

    assert_success(&t.run_with_stdin(
        &["--dir", &dir_arg, "add", "api", "--kind", "token"],
        "tok\n",
    ));

    assert!(dir.join("creds.json").exists());
    assert!(!t.creds_path().exists());

    let output = t.cmd().env("DATAXI_DIR", &dir).arg("list").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "api");
}

#[test]
fn test_reset_empties_store() {
    let t = Test::with_credentials(&[("api", token("t")), ("db1", database("pw"))]);

    let output = t.run(&["reset", "--yes"]);

    assert_success(&output);
    assert_eq!(t.creds_raw(), "{}");
    assert_eq!(stdout(&t.list()).lines().next(), Some("no credentials stored"));
}

#[test]
fn test_reset_twice() {
    let t = Test::new();

    assert_success(&t.run(&["reset", "--yes"]));
    assert_success(&t.run(&["reset", "--yes"]));

    assert_eq!(t.creds_raw(), "{}");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(t.creds_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn test_reset_requires_confirmation() {
    let t = Test::with_credentials(&[("api", token("t"))]);

    let output = t.run(&["reset"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "reset requires confirmation");
    assert_eq!(t.creds()["api"]["token"], "t");
}

#[test]
fn test_clean_removes_directory() {
    let t = Test::with_credentials(&[("api", token("t"))]);
    assert_success(&t.run(&["region", "eu"]));

    let output = t.run(&["clean", "--yes"]);

    assert_success(&output);
    assert!(!t.dir().exists());
}

#[test]
fn test_clean_missing_directory_is_ok() {
    let t = Test::new();

    assert_success(&t.run(&["clean", "-y"]));
    assert!(!t.dir().exists());
}

#[test]
fn test_clean_requires_confirmation() {
    let t = Test::with_credentials(&[("api", token("t"))]);

    let output = t.run(&["clean"]);

    assert_failure(&output);
    assert!(t.creds_path().exists());
}
