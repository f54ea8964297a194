pub mod health;

use axum::Router;
use axum::routing::get;

use crate::app::state::App;

pub fn router() -> Router<App> {
    Router::new().route("/health", get(health::axum_handler))
}
