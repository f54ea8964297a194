use axum::extract::FromRef;

use crate::config::Config;
use crate::database::Database;
use crate::integration::enrichment;

#[derive(Clone, FromRef)]
pub struct App {
    pub database: Database,
    pub enrichment: enrichment::Client,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            database: Database::new(&config.database),
            enrichment: enrichment::Client::new(&config.integration.enrichment),
        }
    }
}
