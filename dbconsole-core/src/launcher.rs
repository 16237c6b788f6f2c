//! Client resolution, argument assembly and process handoff.
//!
//! [`Launcher::invocation`] is the pure planning step. [`Launcher::start`]
//! plans and then replaces the current process with the client.
//!
//! The environment overlay is attached to the client's `Command`, so the
//! launcher never mutates its own environment. If the handoff fails nothing
//! needs to be rolled back.

use crate::adapters::{Adapter, ClientArgs};
use crate::config::ConnectionConfig;
use crate::error::DbConsoleError;
use crate::flags::FlagSet;
use crate::invocation::ClientInvocation;
use crate::locator::{ClientLocator, PathLocator};
use crate::Result;
use std::convert::Infallible;
use std::path::PathBuf;
use tracing::{debug, error, warn};

/// Launches native database consoles.
///
/// # Example
/// ```rust,no_run
/// use dbconsole_core::{ConnectionConfig, FlagSet, Launcher};
///
/// let config = ConnectionConfig::new("sqlite3", "db/development.sqlite3");
/// let error = match Launcher::new().start(&config, &FlagSet::new()) {
///     Ok(never) => match never {},
///     Err(error) => error,
/// };
/// eprintln!("{}", error);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Launcher<L = PathLocator> {
    locator: L,
}

impl Launcher<PathLocator> {
    /// Creates a launcher that searches the process `PATH`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: ClientLocator> Launcher<L> {
    /// Creates a launcher with a custom client locator.
    pub const fn with_locator(locator: L) -> Self {
        Self { locator }
    }

    /// Returns the first candidate client for `adapter` that is installed.
    pub fn resolve_client(&self, adapter: Adapter) -> Option<PathBuf> {
        adapter
            .candidates()
            .iter()
            .find_map(|candidate| self.locator.locate(candidate))
    }

    /// Plans a launch without performing it.
    ///
    /// # Errors
    /// - [`DbConsoleError::UnknownClient`] if the adapter is missing or
    ///   unrecognized, or none of its clients is installed
    /// - [`DbConsoleError::Configuration`] if the config fails validation
    pub fn invocation(
        &self,
        config: &ConnectionConfig,
        flags: &FlagSet,
    ) -> Result<ClientInvocation> {
        let Some(adapter) = config.adapter.as_deref().and_then(Adapter::from_name) else {
            warn!(
                "No console client known for adapter {:?}",
                config.adapter.as_deref().unwrap_or("<none>")
            );
            return Err(DbConsoleError::unknown_client(&config.database));
        };

        config.validate()?;

        let Some(program) = self.resolve_client(adapter) else {
            warn!(
                "Couldn't find database client: {}. Check your $PATH and try again.",
                adapter.candidates().join(", ")
            );
            return Err(DbConsoleError::unknown_client(&config.database));
        };
        debug!("Resolved {} client to {}", adapter, program.display());

        let ClientArgs { args, env } = adapter.build_args(config, flags);

        Ok(ClientInvocation {
            adapter,
            program,
            args,
            env,
            database: config.database.clone(),
            password: config.password.clone(),
        })
    }

    /// Replaces the current process with the database console.
    ///
    /// Never returns on success: the calling process becomes the client and
    /// its exit status is the client's.
    ///
    /// # Errors
    /// Everything [`Launcher::invocation`] returns, plus
    /// [`DbConsoleError::UnknownClient`] if the exec itself fails
    pub fn start(&self, config: &ConnectionConfig, flags: &FlagSet) -> Result<Infallible> {
        let invocation = self.invocation(config, flags)?;

        debug!("Opening {} console for {}", invocation.adapter(), config);
        debug!("Executing: {}", invocation);

        let exec_error = invocation.exec();
        error!(
            "Failed to execute {}: {}",
            invocation.program().display(),
            exec_error
        );
        Err(DbConsoleError::client_exec_failed(
            invocation.database(),
            exec_error,
        ))
    }
}
