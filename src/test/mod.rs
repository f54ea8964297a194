#[cfg(database_env)]
mod database;

use axum::Router;
#[cfg(database_env)]
pub use mock::{Mock, mock};

use crate::app::{self, state};
use crate::config;
use crate::database::Database;
use crate::integration::enrichment;

/// A database whose pool can never hand out a connection.
pub fn offline_database() -> Database {
    Database::new(&config::Database { url: "postgres://127.0.0.1:1/offline".to_owned() })
}

pub fn offline_state() -> state::App {
    state::App {
        database: offline_database(),
        enrichment: enrichment::Client::new(&config::integration::Enrichment::default()),
    }
}

pub fn offline_router() -> Router {
    app::router(offline_state())
}

pub fn router(database: Database, enrichment: enrichment::Client) -> Router {
    app::router(state::App { database, enrichment })
}
