//! Adapter dialects for the native database consoles.
//!
//! Each supported adapter is one [`Adapter`] variant. A variant knows which
//! client binaries to try and how to turn a [`ConnectionConfig`] plus a
//! [`FlagSet`] into that client's argument vector and environment overlay.
//! Adding an adapter is a new variant and a new match arm, nothing else.
//!
//! # Module Structure
//! - `mysql`: `--opt=value` arguments, three-way password rule
//! - `postgresql`: credentials through `PG*` environment variables
//! - `sqlite`: single-dash console options, database path last
//! - `oracle`: one `user[/password]@database` logon argument

use crate::config::ConnectionConfig;
use crate::flags::{FlagSet, Passthrough};
use std::collections::BTreeMap;
use tracing::warn;

mod mysql;
mod oracle;
mod postgresql;
mod sqlite;

/// Known database adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adapter {
    /// `mysql`, `mysql2`
    Mysql,
    /// `postgresql`, `postgres`, `postgis`
    Postgresql,
    /// `sqlite` (version 2 console)
    Sqlite,
    /// `sqlite3`
    Sqlite3,
    /// `oracle`, `oracle_enhanced`
    Oracle,
}

impl Adapter {
    /// Every known adapter.
    pub const ALL: [Self; 5] = [
        Self::Mysql,
        Self::Postgresql,
        Self::Sqlite,
        Self::Sqlite3,
        Self::Oracle,
    ];

    /// Maps a configured adapter name to a variant. Matching is case-sensitive.
    ///
    /// # Example
    /// ```rust
    /// use dbconsole_core::adapters::Adapter;
    ///
    /// assert_eq!(Adapter::from_name("mysql2"), Some(Adapter::Mysql));
    /// assert_eq!(Adapter::from_name("MySQL"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mysql" | "mysql2" => Some(Self::Mysql),
            "postgresql" | "postgres" | "postgis" => Some(Self::Postgresql),
            "sqlite" => Some(Self::Sqlite),
            "sqlite3" => Some(Self::Sqlite3),
            "oracle" | "oracle_enhanced" => Some(Self::Oracle),
            _ => None,
        }
    }

    /// Client executable names, in the order they are tried.
    pub const fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::Mysql => &["mysql", "mysql5"],
            Self::Postgresql => &["psql"],
            Self::Sqlite => &["sqlite"],
            Self::Sqlite3 => &["sqlite3"],
            Self::Oracle => &["sqlplus"],
        }
    }

    /// Canonical adapter name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::Sqlite3 => "sqlite3",
            Self::Oracle => "oracle",
        }
    }

    /// Builds the client arguments (after the program name) and the
    /// environment overlay for this dialect.
    pub fn build_args(self, config: &ConnectionConfig, flags: &FlagSet) -> ClientArgs {
        match self {
            Self::Mysql => mysql::build_args(config, flags),
            Self::Postgresql => postgresql::build_args(config, flags),
            Self::Sqlite | Self::Sqlite3 => sqlite::build_args(config, flags),
            Self::Oracle => oracle::build_args(config, flags),
        }
    }
}

impl std::fmt::Display for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Argument vector and environment overlay produced by a dialect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientArgs {
    /// Arguments following the program name
    pub args: Vec<String>,
    /// Variables set on the client process only
    pub env: BTreeMap<String, String>,
}

/// Raw passthrough tokens for clients that do not speak the sqlite options.
fn forward_raw(adapter: Adapter, flags: &FlagSet) -> impl Iterator<Item = String> + '_ {
    flags.passthrough().iter().filter_map(move |item| {
        if item.is_sqlite_only() {
            warn!("Ignoring {:?}: not supported by the {} console", item, adapter);
            return None;
        }
        match item {
            Passthrough::Raw(token) => Some(token.clone()),
            Passthrough::Mode(_) | Passthrough::Header => None,
        }
    })
}
