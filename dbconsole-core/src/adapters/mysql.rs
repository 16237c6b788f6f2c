//! mysql / mysql2 console arguments.
//!
//! Connection options use `--opt=value`, emitted only when configured and
//! always in the order host, port, socket, user, character set. The password
//! follows a three-way rule:
//!
//! | password configured | include-password | emitted            |
//! |---------------------|------------------|--------------------|
//! | yes                 | yes              | `--password=<pw>`  |
//! | yes                 | no               | `-p` (prompt)      |
//! | no                  | either           | nothing            |

use super::{Adapter, ClientArgs, forward_raw};
use crate::config::ConnectionConfig;
use crate::flags::FlagSet;

pub(super) fn build_args(config: &ConnectionConfig, flags: &FlagSet) -> ClientArgs {
    let mut args: Vec<String> = [
        ("--host", config.host.clone()),
        ("--port", config.port.as_ref().map(ToString::to_string)),
        ("--socket", config.socket.clone()),
        ("--user", config.username.clone()),
        ("--default-character-set", config.encoding.clone()),
    ]
    .into_iter()
    .filter_map(|(option, value)| value.map(|v| format!("{}={}", option, v)))
    .collect();

    match (config.present_password(), flags.include_password()) {
        (Some(password), true) => {
            args.push(format!("--password={}", password.expose_secret()));
        }
        (Some(_), false) => args.push("-p".to_string()),
        (None, _) => {}
    }

    args.extend(forward_raw(Adapter::Mysql, flags));
    args.push(config.database.clone());

    ClientArgs {
        args,
        env: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> ConnectionConfig {
        ConnectionConfig::new("mysql", "db")
            .with_host("locahost")
            .with_port(1234)
            .with_socket("socket")
            .with_username("user")
            .with_password("qwerty")
            .with_encoding("UTF-8")
    }

    #[test]
    fn test_mysql_minimal() {
        let built = build_args(&ConnectionConfig::new("mysql", "db"), &FlagSet::new());
        assert_eq!(built.args, vec!["db"]);
    }

    #[test]
    fn test_mysql_full_prompts_for_password() {
        let built = build_args(&full_config(), &FlagSet::new());
        assert_eq!(
            built.args,
            vec![
                "--host=locahost",
                "--port=1234",
                "--socket=socket",
                "--user=user",
                "--default-character-set=UTF-8",
                "-p",
                "db",
            ]
        );
        assert!(built.args.iter().all(|arg| !arg.contains("qwerty")));
        assert!(built.env.is_empty());
    }

    #[test]
    fn test_mysql_include_password() {
        let config = ConnectionConfig::new("mysql", "db")
            .with_username("user")
            .with_password("qwerty");
        let flags = FlagSet::new().with_include_password(true);

        let built = build_args(&config, &flags);
        assert_eq!(built.args, vec!["--user=user", "--password=qwerty", "db"]);
    }

    #[test]
    fn test_mysql_include_password_without_password() {
        let config = ConnectionConfig::new("mysql", "db").with_username("user");
        let flags = FlagSet::new().with_include_password(true);

        let built = build_args(&config, &flags);
        assert_eq!(built.args, vec!["--user=user", "db"]);
    }

    #[test]
    fn test_mysql_empty_password_emits_nothing() {
        let config = ConnectionConfig::new("mysql2", "db").with_password("");
        assert_eq!(build_args(&config, &FlagSet::new()).args, vec!["db"]);
        assert_eq!(
            build_args(&config, &FlagSet::new().with_include_password(true)).args,
            vec!["db"]
        );
    }

    #[test]
    fn test_mysql_passthrough_before_database() {
        let config = ConnectionConfig::new("mysql", "db").with_username("user");
        let flags = FlagSet::parse(["--html", "-p", "--safe-updates"]).unwrap();

        let built = build_args(&config, &flags);
        assert_eq!(
            built.args,
            vec!["--user=user", "--html", "--safe-updates", "db"]
        );
    }

    #[test]
    fn test_mysql_string_port() {
        let config = ConnectionConfig::new("mysql", "db").with_port("3307");
        assert_eq!(
            build_args(&config, &FlagSet::new()).args,
            vec!["--port=3307", "db"]
        );
    }
}
