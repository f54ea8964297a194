use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::database::Database;
use crate::orm::songs;
use crate::{Error, date};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    pub group_name: Option<String>,
    pub song_name: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

pub async fn handler(database: &Database, id: i64, request: Request) -> Result<songs::Song, Error> {
    let Request { group_name, song_name, release_date, text, link } = request;
    // Only validated, a stored release date never changes.
    if let Some(release_date) = release_date.as_deref() {
        date::parse(release_date)?;
    }

    songs::update(
        database,
        id,
        songs::Patch {
            group_name: group_name.map(Into::into),
            song_name: song_name.map(Into::into),
            text: text.map(Into::into),
            link: link.map(Into::into),
        },
    )
    .await
}

pub async fn axum_handler(
    State(database): State<Database>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, Error>,
    WithRejection(Json(request), _): WithRejection<Json<Request>, Error>,
) -> Result<Json<songs::Song>, Error> {
    handler(&database, id, request).await.map(Json)
}
