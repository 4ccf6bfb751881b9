//! Command-line interface.

pub mod add;
pub mod completions;
pub mod credentials;
pub mod generate;
pub mod output;
pub mod prompt;
pub mod send;
pub mod storage;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::config;
use crate::core::domain::{DbType, Kind};
use crate::core::password::DEFAULT_LENGTH;
use crate::core::store;
use crate::error::Result;

/// dataxi - A local credential vault.
#[derive(Parser)]
#[command(
    name = "dataxi",
    about = "Local credential vault for database logins, secrets and tokens",
    version
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage directory (defaults to ~/.dataxi)
    #[arg(long, global = true, env = "DATAXI_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a new credential (missing fields are prompted)
    Add(AddArgs),

    /// List all conn_ids
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one credential in clear, or all credentials with passwords masked
    Load {
        /// Connection ID to reveal
        #[arg(long = "conn-id", visible_alias = "id", conflicts_with = "all", required_unless_present = "all")]
        conn_id: Option<String>,
        /// Show every credential with passwords masked
        #[arg(short, long)]
        all: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a credential
    #[command(visible_aliases = ["D", "rm"])]
    Delete {
        /// Connection ID to delete
        conn_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate a random password
    Generate(GenerateArgs),

    /// Share a credential or text through a one-time secret link
    Send(SendArgs),

    /// Show or set the one-time secret region
    Region {
        /// New region
        #[arg(value_enum)]
        region: Option<RegionArg>,
    },

    /// Print the storage directory
    Path,

    /// Delete the storage directory
    Clean {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all credentials and start with an empty store
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for `add`.
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Connection ID to add
    pub conn_id: String,
    /// Credential kind
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
    /// Database type (mysql, mssql/sql_server, clickhouse/ch, postgresql/postgres)
    #[arg(long)]
    pub db_type: Option<DbType>,
    /// Database host
    #[arg(long)]
    pub host: Option<String>,
    /// Database port (1-65535)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,
    /// Username
    #[arg(long)]
    pub user: Option<String>,
    /// Database name
    #[arg(long)]
    pub database: Option<String>,
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Password length (6-50)
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,
    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,
    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,
    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,
    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,
    /// Characters to leave out
    #[arg(short, long, value_name = "CHARS")]
    pub exclude: Option<String>,
    /// Leave out l, I, 1, O, o and 0
    #[arg(long)]
    pub avoid_ambiguous: bool,
}

/// Arguments for `send`.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Connection ID to send
    #[arg(long = "conn-id", visible_alias = "id", conflicts_with = "secret", required_unless_present = "secret")]
    pub conn_id: Option<String>,
    /// Text to send
    #[arg(short, long)]
    pub secret: Option<String>,
    /// Passphrase the recipient must enter
    #[arg(short, long)]
    pub passphrase: Option<String>,
    /// Time-to-live in seconds (default 3600)
    #[arg(long)]
    pub ttl: Option<u64>,
    /// Switch region before sending (persisted)
    #[arg(long, value_enum)]
    pub region: Option<RegionArg>,
    /// Network timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// Secret service base URL
    #[arg(long, env = "DATAXI_SECRET_ENDPOINT", hide = true)]
    pub endpoint: Option<String>,
}

/// Credential kinds accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Database,
    Secret,
    Token,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Database => Kind::Database,
            KindArg::Secret => Kind::Secret,
            KindArg::Token => Kind::Token,
        }
    }
}

/// Regions accepted on the command line. `default` is `us`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionArg {
    Us,
    Eu,
    Default,
}

impl From<RegionArg> for config::Region {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::Us | RegionArg::Default => config::Region::Us,
            RegionArg::Eu => config::Region::Eu,
        }
    }
}

/// Execute a command.
pub fn execute(command: Command, dir: Option<PathBuf>) -> Result<()> {
    use Command::*;

    if let Completions { shell } = command {
        return completions::execute(shell);
    }

    let dir = store::resolve_dir(dir)?;

    match command {
        Add(args) => add::execute(&dir, args),
        List { json } => credentials::list(&dir, json),
        Load { conn_id, all, yes } => match conn_id {
            Some(conn_id) if !all => credentials::reveal(&dir, &conn_id, yes),
            _ => credentials::show_all(&dir),
        },
        Delete { conn_id, yes } => credentials::delete(&dir, &conn_id, yes),
        Generate(args) => generate::execute(args),
        Send(args) => send::execute(&dir, args),
        Region { region } => send::region(&dir, region),
        Path => storage::path(&dir),
        Clean { yes } => storage::clean(&dir, yes),
        Reset { yes } => storage::reset(&dir, yes),
        Completions { .. } => Ok(()),
    }
}
