use color_eyre::Report;
use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub async fn run(database_url: &str) -> Result<(), Report> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut connection = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)?;
        let applied = connection.run_pending_migrations(MIGRATIONS).map_err(Report::msg)?;
        for version in &applied {
            tracing::info!(applied_migration =% version);
        }
        tracing::info!(count = applied.len(), "migration done");
        Ok::<_, Report>(())
    })
    .await?
}
