use axum::Json;
use axum::extract::State;
use axum_extra::extract::{Query, WithRejection};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::database::Database;
use crate::orm::songs;
use crate::pagination::Pagination;
use crate::{Error, date};

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Request {
    #[serde_as(as = "NoneAsEmptyString")]
    pub id: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub group: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub song: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub text: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub release_date: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub page: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub limit: Option<i64>,
}

pub async fn handler(database: &Database, request: Request) -> Result<Vec<songs::Song>, Error> {
    let Request { id, group, song, text, release_date, page, limit } = request;
    let filter = songs::Filter {
        id,
        group_name: group.map(Into::into),
        song_name: song.map(Into::into),
        text: text.map(Into::into),
        release_date: release_date.as_deref().map(date::parse).transpose()?,
        pagination: Pagination::new(
            page.unwrap_or(1),
            limit.unwrap_or(songs::DEFAULT_LIMIT),
            songs::DEFAULT_LIMIT,
        ),
    };

    let songs = songs::list(database, &filter).await?;
    tracing::info!(count = songs.len(), "found songs matching filter");
    Ok(songs)
}

pub async fn axum_handler(
    State(database): State<Database>,
    WithRejection(Query(request), _): WithRejection<Query<Request>, Error>,
) -> Result<Json<Vec<songs::Song>>, Error> {
    handler(&database, request).await.map(Json)
}
