use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::Error;
use crate::database::Database;

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize, PartialEq, Eq))]
pub struct Response {
    pub status: String,
}

pub async fn handler(database: &Database) -> Result<Response, Error> {
    database.get().await?;
    Ok(Response { status: "ok".to_owned() })
}

pub async fn axum_handler(State(database): State<Database>) -> Result<Json<Response>, Error> {
    handler(&database).await.map(Json)
}
