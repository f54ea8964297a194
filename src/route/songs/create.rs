use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::Error;
use crate::database::Database;
use crate::integration::enrichment;
use crate::orm::songs;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub group: String,
    pub song: String,
}

pub async fn handler(
    database: &Database,
    enrichment: &enrichment::Client,
    request: Request,
) -> Result<songs::Song, Error> {
    let group = request.group.trim();
    if group.is_empty() {
        return Err(Error::InvalidParameter("group"));
    }
    let song = request.song.trim();
    if song.is_empty() {
        return Err(Error::InvalidParameter("song"));
    }

    let enrichment::Enrichment { release_date, text, link } =
        enrichment.fetch(group, song).await?;
    songs::create(
        database,
        songs::Data {
            group_name: group.into(),
            song_name: song.into(),
            release_date,
            text: text.into(),
            link: link.into(),
        },
    )
    .await
}

pub async fn axum_handler(
    State(database): State<Database>,
    State(enrichment): State<enrichment::Client>,
    WithRejection(Json(request), _): WithRejection<Json<Request>, Error>,
) -> Result<(StatusCode, Json<songs::Song>), Error> {
    handler(&database, &enrichment, request).await.map(|song| (StatusCode::CREATED, Json(song)))
}
