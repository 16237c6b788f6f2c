//! Database console launcher.
//!
//! Opens the native command-line client (mysql, psql, sqlite3, sqlplus)
//! for the database configured in the active environment. The client
//! replaces this process and takes over the terminal.
//!
//! # Security Guarantees
//! - Passwords are only handed to the client with `--include-password`
//! - Credentials are redacted in every log line
//! - `DATABASE_URL` is never echoed in `--help` output

use anyhow::Context;
use clap::{Args, Parser};
use dbconsole_core::{
    ConnectionConfig, DatabaseConfiguration, DbConsole, FlagSet, Launcher,
    current_environment, error::redact_database_url, init_logging,
};
use std::convert::Infallible;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "dbconsole")]
#[command(about = "Open the native database console for the configured environment")]
#[command(version)]
#[command(long_about = "
dbconsole - open the command-line client for your application database

Reads the connection settings for the active environment and replaces
itself with the matching native client, passing host, port, user and
character set in that client's own conventions.

SUPPORTED ADAPTERS:
- mysql, mysql2                  (mysql, then mysql5)
- postgresql, postgres, postgis  (psql, credentials via PG* variables)
- sqlite, sqlite3                (sqlite / sqlite3)
- oracle, oracle_enhanced        (sqlplus)

ENVIRONMENT:
  The ENVIRONMENT argument wins, then RAILS_ENV, then RACK_ENV,
  then 'development'.

SECURITY:
  Passwords are never placed on the client command line or in PGPASSWORD
  unless --include-password is given; the client prompts instead.

EXAMPLES:
  dbconsole
  dbconsole production -p
  dbconsole test --mode column --header
  dbconsole -- --no-psqlrc
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Environment to open
    #[arg(help = "Environment to open (defaults to RAILS_ENV, RACK_ENV, then development)")]
    pub environment: Option<String>,

    /// Hand the configured password to the client
    #[arg(
        short = 'p',
        long,
        help = "Automatically provide the password from the configuration"
    )]
    pub include_password: bool,

    /// sqlite3 output mode
    #[arg(
        long,
        value_parser = ["html", "list", "line", "column"],
        help = "Put the sqlite3 console in the specified mode"
    )]
    pub mode: Option<String>,

    /// sqlite3 column headers
    #[arg(long, help = "Turn on column headers in the sqlite3 console")]
    pub header: bool,

    /// Configuration file
    #[arg(
        short,
        long,
        env = "DBCONSOLE_CONFIG",
        default_value = "config/database.json",
        help = "Database configuration file (JSON, keyed by environment)"
    )]
    pub config: PathBuf,

    /// Database URL overriding the configuration file
    #[arg(
        long,
        env = "DATABASE_URL",
        hide_env_values = true,
        help = "Database URL used instead of the configuration file (credentials are redacted in logs)"
    )]
    pub database_url: Option<String>,

    /// Extra arguments for the native client
    #[arg(last = true, help = "Arguments forwarded to the native client")]
    pub client_args: Vec<String>,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, help = "Suppress all output except errors")]
    pub quiet: bool,
}

impl Cli {
    /// Rebuilds the passthrough flag set from the parsed options.
    fn flag_set(&self) -> dbconsole_core::Result<FlagSet> {
        let mut flags = FlagSet::new().with_include_password(self.include_password);
        if let Some(mode) = &self.mode {
            flags = flags.with_mode(mode.parse()?);
        }
        if self.header {
            flags = flags.with_header();
        }
        Ok(flags.with_raw(self.client_args.iter().cloned()))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(never) => match never {},
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolves the console for the active environment and hands off to it.
fn run(cli: &Cli) -> anyhow::Result<Infallible> {
    let environment = current_environment(cli.environment.as_deref());
    debug!("Environment: {}", environment);

    let configuration = load_configuration(cli, &environment)?;
    let flags = cli.flag_set()?;

    let console = DbConsole::with_launcher(configuration, environment, Launcher::new());
    Ok(console.start(&flags)?)
}

/// Loads the configuration source: `--database-url` if given, else the file.
fn load_configuration(cli: &Cli, environment: &str) -> anyhow::Result<DatabaseConfiguration> {
    if let Some(database_url) = &cli.database_url {
        debug!("Using database URL {}", redact_database_url(database_url));
        let config = ConnectionConfig::from_url(database_url)?;
        return Ok(DatabaseConfiguration::new().with_environment(environment, config));
    }

    debug!("Reading {}", cli.config.display());
    DatabaseConfiguration::from_path(&cli.config).with_context(|| {
        format!(
            "Failed to load database configuration from {}",
            cli.config.display()
        )
    })
}
