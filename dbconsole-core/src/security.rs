//! Security utilities for credential protection.
//!
//! # Security Guarantees
//! - Passwords are stored in `Zeroizing` containers for automatic memory clearing
//! - Passwords are redacted from `Debug` output and launch logs
//!
//! # Module Structure
//! - `credentials`: Secure password container with automatic memory zeroing

mod credentials;

pub use credentials::Password;
