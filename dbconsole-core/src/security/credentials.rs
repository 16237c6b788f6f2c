//! Secure password container with automatic memory zeroing.
//!
//! # Security
//! - The password is stored in a `Zeroizing<String>`
//! - Memory is cleared when the container goes out of scope
//! - `Debug` output never shows the value

use serde::{Deserialize, Deserializer};
use zeroize::Zeroizing;

/// Database password loaded from the configuration source.
///
/// # Example
///
/// ```rust
/// use dbconsole_core::security::Password;
///
/// let password = Password::new("qwerty");
/// assert!(password.is_present());
/// assert_eq!(format!("{:?}", password), "Password(****)");
/// ```
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wraps a password value in a zeroizing container.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Returns the raw password.
    ///
    /// Only the adapter dialects call this, and only when the user asked for
    /// the password to be handed to the client.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// A password counts as present only when it is non-empty.
    pub fn is_present(&self) -> bool {
        !self.0.is_empty()
    }

    /// Replaces every occurrence of the password in `text` with `****`.
    pub fn redact(&self, text: &str) -> String {
        if self.is_present() {
            text.replace(self.expose_secret(), "****")
        } else {
            text.to_string()
        }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(****)")
    }
}

/// YAML-born configs often carry numeric passwords; accept both forms.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPassword {
    Text(String),
    Integer(i64),
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPassword::deserialize(deserializer)? {
            RawPassword::Text(value) => Self::new(value),
            RawPassword::Integer(value) => Self::new(value.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("super_secret_password_123");
        let debug = format!("{:?}", password);
        assert!(!debug.contains("super_secret"));
        assert_eq!(debug, "Password(****)");
    }

    #[test]
    fn test_empty_password_is_absent() {
        assert!(!Password::new("").is_present());
        assert!(Password::new("x").is_present());
    }

    #[test]
    fn test_redact_replaces_every_occurrence() {
        let password = Password::new("secret");
        assert_eq!(password.redact("user/secret@db"), "user/****@db");
        assert_eq!(password.redact("secret secret"), "**** ****");
        assert_eq!(Password::new("").redact("user@db"), "user@db");
    }

    #[test]
    fn test_password_deserializes_from_string_or_number() {
        let text: Password = serde_json::from_str("\"qwerty\"").unwrap();
        assert_eq!(text.expose_secret(), "qwerty");

        let number: Password = serde_json::from_str("123456").unwrap();
        assert_eq!(number.expose_secret(), "123456");
    }
}
