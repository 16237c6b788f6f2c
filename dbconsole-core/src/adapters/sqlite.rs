//! sqlite / sqlite3 console arguments.
//!
//! The sqlite consoles take single-dash options, so `--mode html` becomes
//! `-html` and `--header` becomes `-header`. Raw tokens pass through as
//! given. The database file path is always last. No credentials apply.

use super::ClientArgs;
use crate::config::ConnectionConfig;
use crate::flags::{FlagSet, Passthrough};

pub(super) fn build_args(config: &ConnectionConfig, flags: &FlagSet) -> ClientArgs {
    let mut args: Vec<String> = flags
        .passthrough()
        .iter()
        .map(|item| match item {
            Passthrough::Mode(mode) => format!("-{}", mode),
            Passthrough::Header => "-header".to_string(),
            Passthrough::Raw(token) => token.clone(),
        })
        .collect();
    args.push(config.database.clone());

    ClientArgs {
        args,
        env: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite3_mode() {
        let flags = FlagSet::parse(["--mode", "html"]).unwrap();
        let built = build_args(&ConnectionConfig::new("sqlite3", "db"), &flags);
        assert_eq!(built.args, vec!["-html", "db"]);
    }

    #[test]
    fn test_sqlite3_header() {
        let flags = FlagSet::parse(["--header"]).unwrap();
        let built = build_args(&ConnectionConfig::new("sqlite3", "db"), &flags);
        assert_eq!(built.args, vec!["-header", "db"]);
    }

    #[test]
    fn test_sqlite_mixed_flags_keep_order() {
        let flags = FlagSet::parse(["--header", "-bail", "--mode=column"]).unwrap();
        let built = build_args(&ConnectionConfig::new("sqlite", "db/development.sqlite"), &flags);
        assert_eq!(
            built.args,
            vec!["-header", "-bail", "-column", "db/development.sqlite"]
        );
    }

    #[test]
    fn test_sqlite_ignores_credentials() {
        let config = ConnectionConfig::new("sqlite3", "db")
            .with_username("user")
            .with_password("secret");
        let built = build_args(&config, &FlagSet::new().with_include_password(true));
        assert_eq!(built.args, vec!["db"]);
        assert!(built.env.is_empty());
    }
}
