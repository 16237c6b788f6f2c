//! psql console arguments.
//!
//! Host, port, user and password never go on the command line. They reach
//! psql through its own `PG*` environment variables, set on the child only.
//! `PGPASSWORD` is set only with the include-password flag; otherwise psql
//! prompts or fails on its own.

use super::{Adapter, ClientArgs, forward_raw};
use crate::config::ConnectionConfig;
use crate::flags::FlagSet;
use std::collections::BTreeMap;

const PGUSER: &str = "PGUSER";
const PGHOST: &str = "PGHOST";
const PGPORT: &str = "PGPORT";
const PGPASSWORD: &str = "PGPASSWORD";

pub(super) fn build_args(config: &ConnectionConfig, flags: &FlagSet) -> ClientArgs {
    let mut env = BTreeMap::new();

    if let Some(username) = &config.username {
        env.insert(PGUSER.to_string(), username.clone());
    }
    if let Some(host) = &config.host {
        env.insert(PGHOST.to_string(), host.clone());
    }
    if let Some(port) = &config.port {
        env.insert(PGPORT.to_string(), port.to_string());
    }
    if flags.include_password()
        && let Some(password) = config.present_password()
    {
        env.insert(PGPASSWORD.to_string(), password.expose_secret().to_string());
    }

    let mut args: Vec<String> = forward_raw(Adapter::Postgresql, flags).collect();
    args.push(config.database.clone());

    ClientArgs { args, env }
}
