//! Tests for `dataxi region`.

use crate::support::*;

#[test]
fn test_region_defaults_to_us() {
    let t = Test::new();

    let output = t.run(&["region"]);

    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "us");
    let config = std::fs::read_to_string(t.dir().join("config.ini")).unwrap();
    assert!(config.contains("[sender]"));
    assert!(config.contains("secret_send_region"));
}

#[test]
fn test_region_persists() {
    let t = Test::new();

    let output = t.run(&["region", "eu"]);
    assert_success(&output);
    assert_stdout_contains(&output, "region set to eu");

    let output = t.run(&["region"]);
    assert_eq!(stdout(&output).trim(), "eu");
}

#[test]
fn test_region_default_means_us() {
    let t = Test::new();
    assert_success(&t.run(&["region", "eu"]));

    assert_success(&t.run(&["region", "default"]));

    assert_eq!(stdout(&t.run(&["region"])).trim(), "us");
}

#[test]
fn test_region_rejects_unknown() {
    let t = Test::new();

    let output = t.run(&["region", "ap"]);

    assert_failure(&output);
}

#[test]
fn test_invalid_region_in_config() {
    let t = Test::new();
    std::fs::create_dir_all(t.dir()).unwrap();
    std::fs::write(
        t.dir().join("config.ini"),
        "[sender]\nsecret_send_region=mars\n",
    )
    .unwrap();

    let output = t.run(&["region"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid secret_send_region 'mars'");
}
