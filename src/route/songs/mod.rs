pub mod create;
pub mod delete;
pub mod list;
pub mod update;
pub mod verses;

use axum::Router;
use axum::routing::{get, put};

use crate::app::state::App;

pub fn router() -> Router<App> {
    Router::new()
        .route("/songs", get(list::axum_handler).post(create::axum_handler))
        .route("/songs/{id}", put(update::axum_handler).delete(delete::axum_handler))
        .route("/songs/{id}/verses", get(verses::axum_handler))
}
