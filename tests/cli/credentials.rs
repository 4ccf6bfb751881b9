//! Tests for `dataxi list`, `load` and `delete`.

use crate::support::*;

fn seeded() -> Test {
    Test::with_credentials(&[
        ("db1", database("hunter22")),
        ("api", token("tok-123")),
        ("svc", secret("svc_user", "pw")),
    ])
}

#[test]
fn test_list_sorted_with_count() {
    let t = seeded();

    let output = t.list();

    assert_success(&output);
    let out = stdout(&output);
    let ids: Vec<&str> = out.lines().take(3).collect();
    assert_eq!(ids, ["api", "db1", "svc"]);
    assert_stdout_contains(&output, "3 records retrieved");
}

#[test]
fn test_list_empty() {
    let t = Test::new();

    let output = t.run(&["ls"]);

    assert_success(&output);
    assert_stdout_contains(&output, "no credentials stored");
    assert_stdout_contains(&output, "0 records retrieved");
    assert_eq!(t.creds_raw(), "{}");
}

#[test]
fn test_list_json() {
    let t = seeded();

    let output = t.run(&["list", "--json"]);

    assert_success(&output);
    let ids: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(ids, ["api", "db1", "svc"]);
}

#[test]
fn test_reveal_prints_password() {
    let t = seeded();

    let output = t.reveal("db1");

    assert_success(&output);
    let record: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(record, database("hunter22"));
}

#[test]
fn test_reveal_requires_confirmation() {
    let t = seeded();

    let output = t.run(&["load", "--conn-id", "db1"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "requires confirmation");
    assert_stdout_excludes(&output, "hunter22");
}

#[test]
fn test_reveal_missing() {
    let t = seeded();

    let output = t.reveal("nope");

    assert_failure(&output);
    assert_stderr_contains(&output, "conn_id 'nope' does not exist");
    assert_stderr_contains(&output, "run: dataxi list");
}

#[test]
fn test_load_all_masks_passwords() {
    let t = seeded();

    let output = t.run(&["load", "--all"]);

    assert_success(&output);
    assert_stdout_contains(&output, "conn_id");
    assert_stdout_contains(&output, "\"password\":\"********\"");
    assert_stdout_contains(&output, "\"password\":\"**\"");
    assert_stdout_contains(&output, "tok-123");
    assert_stdout_excludes(&output, "hunter22");
    assert_stdout_contains(&output, "3 records retrieved");
}

#[test]
fn test_load_needs_a_target() {
    let t = seeded();

    let output = t.run(&["load"]);

    assert_failure(&output);
}

#[test]
fn test_delete() {
    let t = seeded();

    let output = t.run(&["delete", "api", "--yes"]);

    assert_success(&output);
    assert_stdout_contains(&output, "✓ deleted api");
    assert!(t.creds().get("api").is_none());
    assert!(t.creds().get("db1").is_some());
}

#[test]
fn test_delete_aliases() {
    let t = seeded();

    assert_success(&t.run(&["rm", "api", "-y"]));
    assert_success(&t.run(&["D", "svc", "-y"]));

    let creds = t.creds();
    let ids: Vec<&String> = creds.as_object().unwrap().keys().collect();
    assert_eq!(ids, ["db1"]);
}

#[test]
fn test_delete_missing_leaves_file() {
    let t = seeded();
    let before = t.creds_raw();

    let output = t.run(&["delete", "nope", "--yes"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "conn_id 'nope' does not exist");
    assert_eq!(t.creds_raw(), before);
}

#[test]
fn test_delete_requires_confirmation() {
    let t = seeded();

    let output = t.run(&["delete", "api"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "rerun with --yes");
    assert!(t.creds().get("api").is_some());
}

#[test]
fn test_reads_legacy_records() {
    let t = Test::new();
    t.write_creds(&serde_json::json!({
        "old_db": {
            "db_type": "mysql",
            "host": "h",
            "port": "3306",
            "user": "u",
            "password": "pw",
            "database": null
        },
        "old_tok": {"token": "t"}
    }));

    let output = t.reveal("old_db");

    assert_success(&output);
    assert_stdout_contains(&output, "\"kind\": \"database\"");
    assert_stdout_contains(&output, "\"port\": 3306");
}
