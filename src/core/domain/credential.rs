//! Credential record model.
//!
//! A stored credential is one of three shapes: a database login, a generic
//! user/password secret, or a bare token. Records are written with an explicit
//! `kind` tag. Records from older files carry no tag; their shape is inferred
//! from the keys present.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Accepted database type spellings.
///
/// Aliases are kept distinct so a stored record reads back exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbType {
    Mysql,
    Mssql,
    SqlServer,
    Clickhouse,
    Ch,
    Postgresql,
    Postgres,
}

/// Database engine behind a [`DbType`] spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    MySql,
    SqlServer,
    ClickHouse,
    Postgres,
}

impl DbType {
    /// Every accepted spelling, in prompt order.
    pub const ALL: [DbType; 7] = [
        DbType::Mysql,
        DbType::Mssql,
        DbType::SqlServer,
        DbType::Clickhouse,
        DbType::Ch,
        DbType::Postgresql,
        DbType::Postgres,
    ];

    /// Stored spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DbType::Mysql => "mysql",
            DbType::Mssql => "mssql",
            DbType::SqlServer => "sql_server",
            DbType::Clickhouse => "clickhouse",
            DbType::Ch => "ch",
            DbType::Postgresql => "postgresql",
            DbType::Postgres => "postgres",
        }
    }

    /// Engine this spelling refers to.
    pub fn engine(&self) -> Engine {
        match self {
            DbType::Mysql => Engine::MySql,
            DbType::Mssql | DbType::SqlServer => Engine::SqlServer,
            DbType::Clickhouse | DbType::Ch => Engine::ClickHouse,
            DbType::Postgresql | DbType::Postgres => Engine::Postgres,
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DbType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownDbType(s.to_string()))
    }
}

/// Discriminant of a [`Credential`], as written in the `kind` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Database,
    Secret,
    Token,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::Database => "database",
            Kind::Secret => "secret",
            Kind::Token => "token",
        };
        f.write_str(s)
    }
}

/// One stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Credential {
    /// Database login.
    Database {
        db_type: DbType,
        host: String,
        port: u16,
        user: String,
        password: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        database: Option<String>,
    },
    /// Generic user/password pair.
    Secret { user: String, password: String },
    /// Bare token.
    Token { token: String },
}

impl Credential {
    /// Shape of this record.
    pub fn kind(&self) -> Kind {
        match self {
            Credential::Database { .. } => Kind::Database,
            Credential::Secret { .. } => Kind::Secret,
            Credential::Token { .. } => Kind::Token,
        }
    }

    /// Password, for shapes that have one.
    pub fn password(&self) -> Option<&str> {
        match self {
            Credential::Database { password, .. } | Credential::Secret { password, .. } => {
                Some(password.as_str())
            }
            Credential::Token { .. } => None,
        }
    }

    /// Copy with a non-empty password replaced by one `*` per character.
    ///
    /// The password length stays visible.
    pub fn redacted(&self) -> Credential {
        let mut copy = self.clone();
        match &mut copy {
            Credential::Database { password, .. } | Credential::Secret { password, .. }
                if !password.is_empty() =>
            {
                *password = "*".repeat(password.chars().count());
            }
            _ => {}
        }
        copy
    }

    /// Field names and display values, in storage order, without the tag.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Credential::Database {
                db_type,
                host,
                port,
                user,
                password,
                database,
            } => {
                let mut fields = vec![
                    ("db_type", db_type.to_string()),
                    ("host", host.clone()),
                    ("port", port.to_string()),
                    ("user", user.clone()),
                    ("password", password.clone()),
                ];
                if let Some(db) = database {
                    fields.push(("database", db.clone()));
                }
                fields
            }
            Credential::Secret { user, password } => {
                vec![("user", user.clone()), ("password", password.clone())]
            }
            Credential::Token { token } => vec![("token", token.clone())],
        }
    }
}

/// Port as found on disk. Older writers stored it as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

/// Every field any shape can carry, all optional.
#[derive(Deserialize)]
struct RawCredential {
    kind: Option<Kind>,
    db_type: Option<String>,
    host: Option<String>,
    port: Option<PortValue>,
    user: Option<String>,
    password: Option<String>,
    database: Option<String>,
    token: Option<String>,
}

impl RawCredential {
    /// Shape of an untagged record: token, then db_type, then secret.
    fn infer_kind(&self) -> Kind {
        if self.token.is_some() {
            Kind::Token
        } else if self.db_type.is_some() {
            Kind::Database
        } else {
            Kind::Secret
        }
    }
}

fn required<T>(value: Option<T>, field: &str, kind: Kind) -> Result<T, String> {
    value.ok_or_else(|| format!("missing field `{}` for {} credential", field, kind))
}

impl TryFrom<RawCredential> for Credential {
    type Error = String;

    fn try_from(raw: RawCredential) -> Result<Self, Self::Error> {
        let kind = raw.kind.unwrap_or_else(|| raw.infer_kind());

        match kind {
            Kind::Token => Ok(Credential::Token {
                token: required(raw.token, "token", kind)?,
            }),
            Kind::Secret => Ok(Credential::Secret {
                user: required(raw.user, "user", kind)?,
                password: required(raw.password, "password", kind)?,
            }),
            Kind::Database => {
                let port = match required(raw.port, "port", kind)? {
                    PortValue::Number(p) => p,
                    PortValue::Text(s) => s
                        .trim()
                        .parse()
                        .map_err(|_| format!("invalid port '{}'", s))?,
                };
                Ok(Credential::Database {
                    db_type: required(raw.db_type, "db_type", kind)?
                        .parse()
                        .map_err(|e: ValidationError| e.to_string())?,
                    host: required(raw.host, "host", kind)?,
                    port,
                    user: required(raw.user, "user", kind)?,
                    password: required(raw.password, "password", kind)?,
                    database: raw.database,
                })
            }
        }
    }
}

impl<'de> Deserialize<'de> for Credential {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCredential::deserialize(deserializer)?;
        Credential::try_from(raw).map_err(serde::de::Error::custom)
    }
}
