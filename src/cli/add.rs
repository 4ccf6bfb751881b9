//! Add command.
//!
//! Fields not given as flags are prompted for. With piped stdin each missing
//! field is read as one line, in storage order.

use std::path::Path;

use dialoguer::{Input, Select};
use tracing::info;

use crate::cli::{output, prompt, AddArgs};
use crate::core::domain::{Credential, DbType, Kind};
use crate::core::store::CredentialStore;
use crate::error::{Result, StoreError, ValidationError};

/// Add a credential.
pub fn execute(dir: &Path, args: AddArgs) -> Result<()> {
    info!(conn_id = %args.conn_id, "adding credential");

    if args.conn_id.trim().is_empty() {
        return Err(ValidationError::EmptyConnId.into());
    }

    let store = CredentialStore::open(dir)?;
    if store.list_ids()?.iter().any(|id| id == &args.conn_id) {
        return Err(StoreError::AlreadyExists(args.conn_id).into());
    }

    let kind = match args.kind {
        Some(kind) => kind.into(),
        None => choose_kind(&args)?,
    };
    let credential = build(kind, &args)?;

    let entry = store.add(&args.conn_id, credential)?;
    output::success(&format!("added {}", output::key(&entry.to_string())));
    Ok(())
}

/// Kind from flags when stdin is piped, otherwise a menu.
fn choose_kind(args: &AddArgs) -> Result<Kind> {
    if !prompt::interactive() {
        return Ok(infer_kind(args));
    }

    let kinds = [Kind::Database, Kind::Secret, Kind::Token];
    let labels: Vec<String> = kinds.iter().map(Kind::to_string).collect();
    let index = Select::new()
        .with_prompt("Credential kind")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(kinds[index])
}

fn infer_kind(args: &AddArgs) -> Kind {
    if args.db_type.is_some()
        || args.host.is_some()
        || args.port.is_some()
        || args.database.is_some()
    {
        Kind::Database
    } else if args.user.is_some() {
        Kind::Secret
    } else {
        Kind::Token
    }
}

fn build(kind: Kind, args: &AddArgs) -> Result<Credential> {
    let credential = match kind {
        Kind::Database => {
            let db_type = match args.db_type {
                Some(db_type) => db_type,
                None => choose_db_type()?,
            };
            let host = field(&args.host, "host")?;
            let port = match args.port {
                Some(port) => port,
                None => read_port()?,
            };
            let user = field(&args.user, "user")?;
            let password = non_empty(prompt::secret("password")?.to_string(), "password")?;
            let database = match &args.database {
                Some(db) => Some(db.clone()),
                None if prompt::interactive() => {
                    let db: String = Input::new()
                        .with_prompt("database (optional)")
                        .allow_empty(true)
                        .interact_text()?;
                    Some(db).filter(|d| !d.is_empty())
                }
                None => None,
            };
            Credential::Database {
                db_type,
                host,
                port,
                user,
                password,
                database,
            }
        }
        Kind::Secret => {
            let user = field(&args.user, "user")?;
            let password = non_empty(prompt::secret("password")?.to_string(), "password")?;
            Credential::Secret { user, password }
        }
        Kind::Token => {
            let token = non_empty(prompt::secret("token")?.to_string(), "token")?;
            Credential::Token { token }
        }
    };
    Ok(credential)
}

fn choose_db_type() -> Result<DbType> {
    if !prompt::interactive() {
        return Ok(prompt::text("db_type")?.parse()?);
    }

    let labels: Vec<&str> = DbType::ALL.iter().map(DbType::as_str).collect();
    let index = Select::new()
        .with_prompt("Database type")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(DbType::ALL[index])
}

fn read_port() -> Result<u16> {
    let raw = prompt::text("port")?;
    parse_port(&raw)
}

fn parse_port(raw: &str) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ValidationError::InvalidPort(raw.trim().to_string()).into()),
    }
}

fn field(given: &Option<String>, label: &'static str) -> Result<String> {
    match given {
        Some(value) => non_empty(value.clone(), label),
        None => non_empty(prompt::text(label)?, label),
    }
}

fn non_empty(value: String, label: &'static str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyValue(label).into());
    }
    Ok(value)
}
