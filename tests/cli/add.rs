//! Tests for `dataxi add`.

use crate::support::*;
use serde_json::json;

#[test]
fn test_add_database_from_flags_and_stdin() {
    let t = Test::new();

    let output = t.run_with_stdin(
        &[
            "add", "db1", "--db-type", "mysql", "--host", "localhost", "--port", "3306", "--user",
            "root",
        ],
        "hunter22\n",
    );

    assert_success(&output);
    assert_stdout_contains(&output, "✓ added db1 (database)");
    assert_eq!(
        t.creds()["db1"],
        json!({
            "kind": "database",
            "db_type": "mysql",
            "host": "localhost",
            "port": 3306,
            "user": "root",
            "password": "hunter22",
        })
    );
}

#[test]
fn test_add_database_fully_piped() {
    let t = Test::new();

    let output = t.run_with_stdin(
        &["add", "pg", "--kind", "database", "--database", "orders"],
        "Postgres\npg.local\n5432\napp\ns3cret\n",
    );

    assert_success(&output);
    let record = &t.creds()["pg"];
    assert_eq!(record["db_type"], "postgres");
    assert_eq!(record["port"], 5432);
    assert_eq!(record["database"], "orders");
    assert_eq!(record["password"], "s3cret");
}

#[test]
fn test_add_secret_and_token() {
    let t = Test::new();

    assert_success(&t.add_secret("svc", "svc_user", "pw"));
    assert_success(&t.add_token("api", "tok-123"));

    let creds = t.creds();
    assert_eq!(creds["svc"], json!({"kind": "secret", "user": "svc_user", "password": "pw"}));
    assert_eq!(creds["api"], json!({"kind": "token", "token": "tok-123"}));
}

#[test]
fn test_add_infers_secret_from_user_flag() {
    let t = Test::new();

    let output = t.run_with_stdin(&["add", "svc", "--user", "u"], "pw\n");

    assert_success(&output);
    assert_eq!(t.creds()["svc"]["kind"], "secret");
}

#[test]
fn test_add_existing_keeps_original() {
    let t = Test::new();
    assert_success(&t.add_token("api", "first"));

    let output = t.add_token("api", "second");

    assert_failure(&output);
    assert_stderr_contains(&output, "conn_id 'api' already exists");
    assert_eq!(t.creds()["api"]["token"], "first");
}

#[test]
fn test_add_empty_password_fails() {
    let t = Test::new();

    let output = t.add_secret("svc", "u", "");

    assert_failure(&output);
    assert_stderr_contains(&output, "password cannot be empty");
    assert_eq!(t.creds(), json!({}));
}

#[test]
fn test_add_invalid_port_fails() {
    let t = Test::new();

    let output = t.run_with_stdin(
        &["add", "db", "--db-type", "mysql", "--host", "h"],
        "not-a-port\n",
    );

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid port 'not-a-port'");
}

#[test]
fn test_add_port_zero_rejected_from_flag_and_prompt() {
    let t = Test::new();

    let flag = t.run_with_stdin(
        &["add", "db", "--db-type", "mysql", "--host", "h", "--port", "0", "--user", "u"],
        "pw\n",
    );
    assert_failure(&flag);
    assert_stderr_contains(&flag, "--port");

    let prompted = t.run_with_stdin(&["add", "db", "--db-type", "mysql", "--host", "h"], "0\n");
    assert_failure(&prompted);
    assert_stderr_contains(&prompted, "invalid port '0'");

    assert_eq!(t.creds(), json!({}));
}

#[test]
fn test_add_unknown_db_type_fails() {
    let t = Test::new();

    let output = t.run(&["add", "db", "--db-type", "oracle"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "unknown database type 'oracle'");
}

#[test]
fn test_add_accepts_db_type_aliases() {
    let t = Test::new();

    for (id, alias) in [("a", "sql_server"), ("b", "CH"), ("c", "postgresql")] {
        let output = t.run_with_stdin(
            &["add", id, "--db-type", alias, "--host", "h", "--port", "1", "--user", "u"],
            "pw\n",
        );
        assert_success(&output);
    }

    let creds = t.creds();
    assert_eq!(creds["a"]["db_type"], "sql_server");
    assert_eq!(creds["b"]["db_type"], "ch");
    assert_eq!(creds["c"]["db_type"], "postgresql");
}
