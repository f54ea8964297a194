mod database;
pub mod integration;
pub mod log;
mod server;

pub use database::Database;
use figment::Figment;
use figment::providers::{Env, Serialized};
pub use integration::Integration;
pub use log::Log;
use serde::Deserialize;
pub use server::Server;

use crate::constant;

// Unprefixed variables of plain `.env` deployments, with the key each one stands for.
const ALIASES: [(&str, &str); 2] = [("database_dsn", "database.url"), ("port", "server.port")];

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub integration: Integration,
    pub log: Log,
}

fn aliases() -> Env {
    Env::raw().only(&ALIASES.map(|(alias, _)| alias)).map(|key| {
        ALIASES
            .iter()
            .find(|(alias, _)| key.as_str().eq_ignore_ascii_case(alias))
            .map_or_else(|| key.into(), |(_, path)| (*path).into())
    })
}

impl Default for Config {
    fn default() -> Self {
        Figment::new()
            .merge(aliases())
            .merge(Env::prefixed(const_format::concatcp!(constant::SERVER_NAME, "_")).split("__"))
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("integration", Integration::default()))
            .join(Serialized::default("log", Log::default()))
            .extract()
            .expect("Could not parse config")
    }
}
