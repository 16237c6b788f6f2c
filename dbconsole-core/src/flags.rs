//! Passthrough flags handed over by the invoking CLI.
//!
//! The include-password flag is consumed here and never forwarded. The
//! sqlite console options (`--mode`, `--header`) are recognized so each
//! adapter can render them in its own dash convention; every other token is
//! forwarded verbatim.

use crate::error::DbConsoleError;
use crate::Result;
use std::str::FromStr;

/// Short form of the include-password flag.
pub const INCLUDE_PASSWORD_SHORT: &str = "-p";

/// Long form of the include-password flag.
pub const INCLUDE_PASSWORD_LONG: &str = "--include-password";

/// Output modes understood by the sqlite console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqliteMode {
    /// HTML table rows
    Html,
    /// Values delimited by the separator string
    List,
    /// One value per line
    Line,
    /// Left-aligned columns
    Column,
}

impl SqliteMode {
    /// All accepted modes, in help order.
    pub const ALL: [Self; 4] = [Self::Html, Self::List, Self::Line, Self::Column];

    /// Name as accepted on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::List => "list",
            Self::Line => "line",
            Self::Column => "column",
        }
    }
}

impl std::fmt::Display for SqliteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SqliteMode {
    type Err = DbConsoleError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| {
                DbConsoleError::invalid_arguments(format!(
                    "invalid mode '{}' (expected one of: html, list, line, column)",
                    value
                ))
            })
    }
}

/// One passthrough item, in the order it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Passthrough {
    /// `--mode <m>`; sqlite only
    Mode(SqliteMode),
    /// `--header`; sqlite only
    Header,
    /// Any other token, forwarded as-is
    Raw(String),
}

impl Passthrough {
    /// True for options only the sqlite consoles understand.
    pub const fn is_sqlite_only(&self) -> bool {
        matches!(self, Self::Mode(_) | Self::Header)
    }
}

/// Ordered passthrough flags plus the include-password switch.
///
/// # Example
/// ```rust
/// use dbconsole_core::flags::{FlagSet, Passthrough, SqliteMode};
///
/// let flags = FlagSet::parse(["-p", "--mode", "html", "--header"])?;
/// assert!(flags.include_password());
/// assert_eq!(
///     flags.passthrough(),
///     &[Passthrough::Mode(SqliteMode::Html), Passthrough::Header]
/// );
/// # Ok::<(), dbconsole_core::DbConsoleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    include_password: bool,
    passthrough: Vec<Passthrough>,
}

impl FlagSet {
    /// Creates an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw command-line tokens.
    ///
    /// # Errors
    /// Returns [`DbConsoleError::InvalidArguments`] when `--mode` has no
    /// value or an unknown one
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut flags = Self::new();
        let mut tokens = tokens.into_iter().map(Into::into);

        while let Some(token) = tokens.next() {
            match token.as_str() {
                INCLUDE_PASSWORD_SHORT | INCLUDE_PASSWORD_LONG => flags.include_password = true,
                "--header" => flags.passthrough.push(Passthrough::Header),
                "--mode" => {
                    let value = tokens.next().ok_or_else(|| {
                        DbConsoleError::invalid_arguments("--mode requires a value")
                    })?;
                    flags.passthrough.push(Passthrough::Mode(value.parse()?));
                }
                _ => {
                    if let Some(value) = token.strip_prefix("--mode=") {
                        flags.passthrough.push(Passthrough::Mode(value.parse()?));
                    } else {
                        flags.passthrough.push(Passthrough::Raw(token));
                    }
                }
            }
        }

        Ok(flags)
    }

    /// Builder method to set the include-password switch.
    pub fn with_include_password(mut self, include: bool) -> Self {
        self.include_password = include;
        self
    }

    /// Builder method to append a sqlite mode option.
    pub fn with_mode(mut self, mode: SqliteMode) -> Self {
        self.passthrough.push(Passthrough::Mode(mode));
        self
    }

    /// Builder method to append the sqlite header option.
    pub fn with_header(mut self) -> Self {
        self.passthrough.push(Passthrough::Header);
        self
    }

    /// Builder method to append raw tokens forwarded verbatim.
    pub fn with_raw<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.passthrough
            .extend(tokens.into_iter().map(|t| Passthrough::Raw(t.into())));
        self
    }

    /// Whether the user consented to handing the password to the client.
    pub const fn include_password(&self) -> bool {
        self.include_password
    }

    /// Passthrough items in their original order.
    pub fn passthrough(&self) -> &[Passthrough] {
        &self.passthrough
    }
}
