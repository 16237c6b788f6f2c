//! sqlplus console arguments.
//!
//! sqlplus takes a single logon argument: `user@database`, or
//! `user/password@database` with the include-password flag. Without a
//! username the database alone is passed. Passthrough flags are not
//! forwarded.

use super::ClientArgs;
use crate::config::ConnectionConfig;
use crate::flags::FlagSet;
use tracing::warn;

pub(super) fn build_args(config: &ConnectionConfig, flags: &FlagSet) -> ClientArgs {
    if !flags.passthrough().is_empty() {
        warn!(
            "Ignoring {} passthrough flag(s): not supported by the oracle console",
            flags.passthrough().len()
        );
    }

    let logon = match &config.username {
        Some(username) => match config.present_password() {
            Some(password) if flags.include_password() => {
                format!("{}/{}@{}", username, password.expose_secret(), config.database)
            }
            _ => format!("{}@{}", username, config.database),
        },
        None => config.database.clone(),
    };

    ClientArgs {
        args: vec![logon],
        env: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConnectionConfig {
        ConnectionConfig::new("oracle", "db")
            .with_username("user")
            .with_password("secret")
    }

    #[test]
    fn test_oracle_prompts_without_flag() {
        let built = build_args(&config(), &FlagSet::new());
        assert_eq!(built.args, vec!["user@db"]);
    }

    #[test]
    fn test_oracle_include_password() {
        let flags = FlagSet::parse(["-p"]).unwrap();
        let built = build_args(&config(), &flags);
        assert_eq!(built.args, vec!["user/secret@db"]);
    }

    #[test]
    fn test_oracle_without_username() {
        let config = ConnectionConfig::new("oracle", "db").with_password("secret");
        let built = build_args(&config, &FlagSet::new().with_include_password(true));
        assert_eq!(built.args, vec!["db"]);
    }

    #[test]
    fn test_oracle_drops_passthrough() {
        let flags = FlagSet::parse(["-S", "--header"]).unwrap();
        let built = build_args(&config(), &flags);
        assert_eq!(built.args, vec!["user@db"]);
    }
}
