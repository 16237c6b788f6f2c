//! The planned client launch and the process handoff.
//!
//! # Security
//! `Display` renders the command with the password replaced by `****`,
//! both in argv and in the environment overlay. Only `Display` output is
//! ever logged.

use crate::adapters::Adapter;
use crate::security::Password;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolved program, argument vector and environment overlay for one launch.
#[derive(Debug, Clone)]
pub struct ClientInvocation {
    pub(crate) adapter: Adapter,
    pub(crate) program: PathBuf,
    pub(crate) args: Vec<String>,
    pub(crate) env: BTreeMap<String, String>,
    pub(crate) database: String,
    pub(crate) password: Option<Password>,
}

impl ClientInvocation {
    /// Adapter the invocation was built for.
    pub const fn adapter(&self) -> Adapter {
        self.adapter
    }

    /// Full path of the resolved client binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments following the program name.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Variables overlaid on the inherited environment of the client.
    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Database the client is opened on.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Program name (as found on the search path) followed by the arguments.
    pub fn argv(&self) -> Vec<String> {
        let program = self
            .program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned();
        std::iter::once(program)
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Builds the command with the overlay attached to the child only.
    ///
    /// The current process environment is never modified; the child inherits
    /// it and sees the overlay on top.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).envs(&self.env);
        command
    }

    /// Replaces the current process with the client.
    ///
    /// Returns only if the handoff failed.
    #[cfg(unix)]
    pub fn exec(&self) -> std::io::Error {
        use std::os::unix::process::CommandExt;

        self.command().exec()
    }

    /// Runs the client with inherited stdio and exits with its status.
    ///
    /// Returns only if the client could not be started.
    #[cfg(not(unix))]
    pub fn exec(&self) -> std::io::Error {
        match self.command().status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(e) => e,
        }
    }

    fn redact(&self, text: &str) -> String {
        match &self.password {
            Some(password) => password.redact(text),
            None => text.to_string(),
        }
    }
}

impl std::fmt::Display for ClientInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, self.redact(value))?;
        }
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", self.redact(arg))?;
        }
        Ok(())
    }
}
