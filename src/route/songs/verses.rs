use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::{Query, WithRejection};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::database::Database;
use crate::orm::songs;
use crate::pagination::Pagination;
use crate::{Error, verse};

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    #[serde_as(as = "NoneAsEmptyString")]
    pub page: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize, PartialEq, Eq))]
pub struct Response {
    pub verses: Vec<String>,
}

pub async fn handler(database: &Database, id: i64, request: Request) -> Result<Response, Error> {
    let song = songs::get(database, id).await?;
    let pagination = Pagination::new(
        request.page.unwrap_or(1),
        request.limit.unwrap_or(verse::DEFAULT_LIMIT),
        verse::DEFAULT_LIMIT,
    );
    Ok(Response { verses: verse::paginate(&song.data.text, pagination) })
}

pub async fn axum_handler(
    State(database): State<Database>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, Error>,
    WithRejection(Query(request), _): WithRejection<Query<Request>, Error>,
) -> Result<Json<Response>, Error> {
    handler(&database, id, request).await.map(Json)
}
