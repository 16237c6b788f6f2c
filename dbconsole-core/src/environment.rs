//! Active environment resolution.
//!
//! Precedence, first match wins:
//! 1. an explicit environment reported by the caller (CLI argument)
//! 2. `RAILS_ENV`
//! 3. `RACK_ENV`
//! 4. `development`
//!
//! Empty variables count as unset.

/// Framework-level environment variable, preferred over [`RACK_ENV`].
pub const RAILS_ENV: &str = "RAILS_ENV";

/// Rack-level environment variable.
pub const RACK_ENV: &str = "RACK_ENV";

/// Environment used when nothing else is set.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Resolves the environment name from the process environment.
///
/// # Example
/// ```rust
/// use dbconsole_core::environment::current_environment;
///
/// assert_eq!(current_environment(Some("test")), "test");
/// ```
pub fn current_environment(explicit: Option<&str>) -> String {
    resolve_environment(explicit, |key| std::env::var(key).ok())
}

/// Resolves the environment name using `lookup` for variable reads.
pub fn resolve_environment<F>(explicit: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(environment) = explicit.filter(|e| !e.is_empty()) {
        return environment.to_string();
    }

    [RAILS_ENV, RACK_ENV]
        .into_iter()
        .filter_map(|key| lookup(key).filter(|value| !value.is_empty()))
        .next()
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}
