//! Client binary lookup on the search path.

use std::ffi::OsString;
use std::path::PathBuf;
use tracing::trace;

/// Finds an executable by name.
///
/// The launcher only asks for names from an adapter's candidate list, in
/// order, and stops at the first hit.
pub trait ClientLocator {
    /// Returns the full path of `program`, or `None` if it is not installed.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Looks executables up on `PATH` (or an explicit search path).
///
/// Platform executable suffixes such as `.exe` are handled by `which`.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    search_path: Option<OsString>,
}

impl PathLocator {
    /// Searches the process `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches `search_path` (same syntax as `PATH`) instead of the
    /// process `PATH`.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl ClientLocator for PathLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(search_path) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(program, Some(search_path), cwd)
            }
            None => which::which(program),
        };

        match found {
            Ok(path) => {
                trace!("Found {} at {}", program, path.display());
                Some(path)
            }
            Err(e) => {
                trace!("{} not found: {}", program, e);
                None
            }
        }
    }
}
