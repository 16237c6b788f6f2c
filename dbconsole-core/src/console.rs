//! Console facade used by the CLI.
//!
//! Bundles the configuration source, the active environment and a
//! launcher, and exposes the read accessors the CLI needs.

use crate::config::{ConnectionConfig, DatabaseConfiguration};
use crate::environment::current_environment;
use crate::flags::FlagSet;
use crate::invocation::ClientInvocation;
use crate::launcher::Launcher;
use crate::locator::{ClientLocator, PathLocator};
use crate::Result;
use std::convert::Infallible;

/// Database console for one environment.
///
/// # Example
/// ```rust
/// use dbconsole_core::{ConnectionConfig, DatabaseConfiguration, DbConsole};
///
/// let configuration = DatabaseConfiguration::new()
///     .with_environment("test", ConnectionConfig::new("sqlite3", "db/test.sqlite3"));
/// let console = DbConsole::new(configuration, Some("test"));
///
/// assert_eq!(console.environment(), "test");
/// assert_eq!(console.config()?.database, "db/test.sqlite3");
/// # Ok::<(), dbconsole_core::DbConsoleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DbConsole<L = PathLocator> {
    configuration: DatabaseConfiguration,
    environment: String,
    launcher: Launcher<L>,
}

impl DbConsole<PathLocator> {
    /// Creates a console for the environment resolved from `explicit`,
    /// `RAILS_ENV`, `RACK_ENV`, then `development`.
    pub fn new(configuration: DatabaseConfiguration, explicit: Option<&str>) -> Self {
        Self::with_launcher(configuration, current_environment(explicit), Launcher::new())
    }
}

impl<L: ClientLocator> DbConsole<L> {
    /// Creates a console for a fixed environment and launcher.
    pub fn with_launcher(
        configuration: DatabaseConfiguration,
        environment: impl Into<String>,
        launcher: Launcher<L>,
    ) -> Self {
        Self {
            configuration,
            environment: environment.into(),
            launcher,
        }
    }

    /// Active environment name.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Effective connection config for the active environment.
    ///
    /// # Errors
    /// Returns [`crate::DbConsoleError::NoDatabaseConfigured`] naming the
    /// environment when the configuration source has no entry for it
    pub fn config(&self) -> Result<ConnectionConfig> {
        self.configuration.resolve(&self.environment)
    }

    /// Plans the launch for the active environment.
    ///
    /// # Errors
    /// See [`DbConsole::config`] and [`Launcher::invocation`]
    pub fn invocation(&self, flags: &FlagSet) -> Result<ClientInvocation> {
        self.launcher.invocation(&self.config()?, flags)
    }

    /// Replaces the current process with the console for the active
    /// environment.
    ///
    /// # Errors
    /// See [`DbConsole::config`] and [`Launcher::start`]
    pub fn start(&self, flags: &FlagSet) -> Result<Infallible> {
        self.launcher.start(&self.config()?, flags)
    }
}
