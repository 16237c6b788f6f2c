//! Core of dbconsole: open the native database console for a configuration.
//!
//! Given a resolved connection config and the passthrough flags from the
//! CLI, this crate picks the native client binary for the adapter, builds
//! its argument vector and environment overlay in that client's dialect,
//! and replaces the current process with it.
//!
//! # Security Guarantees
//! - Passwords reach argv (mysql, oracle) or `PGPASSWORD` (postgresql) only
//!   with the include-password flag
//! - Passwords are held in zeroizing containers and redacted from logs,
//!   `Debug` output and error messages
//! - The environment overlay is applied to the client process only
//!
//! # Architecture
//! - `adapters`: one enum variant per supported dialect
//! - `launcher`: client lookup, planning and process handoff
//! - `console`: configuration source plus environment, as used by the CLI

pub mod adapters;
pub mod config;
pub mod console;
pub mod environment;
pub mod error;
pub mod flags;
pub mod invocation;
pub mod launcher;
pub mod locator;
pub mod logging;
pub mod security;

// Re-export commonly used types
pub use adapters::{Adapter, ClientArgs};
pub use config::{ConnectionConfig, DatabaseConfiguration, Port};
pub use console::DbConsole;
pub use environment::current_environment;
pub use error::{DbConsoleError, Result};
pub use flags::{FlagSet, Passthrough, SqliteMode};
pub use invocation::ClientInvocation;
pub use launcher::Launcher;
pub use locator::{ClientLocator, PathLocator};
pub use logging::init_logging;
