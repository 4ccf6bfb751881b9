//! Credential records used across tests.

use serde_json::{json, Map, Value};

/// A tagged database record.
pub fn database(password: &str) -> Value {
    json!({
        "kind": "database",
        "db_type": "mysql",
        "host": "localhost",
        "port": 3306,
        "user": "root",
        "password": password,
    })
}

/// A tagged user/password record.
pub fn secret(user: &str, password: &str) -> Value {
    json!({ "kind": "secret", "user": user, "password": password })
}

/// A tagged token record.
pub fn token(token: &str) -> Value {
    json!({ "kind": "token", "token": token })
}

/// JSON object from ordered pairs.
pub fn object(records: &[(&str, Value)]) -> Value {
    let mut map = Map::new();
    for (id, record) in records {
        map.insert(id.to_string(), record.clone());
    }
    Value::Object(map)
}
