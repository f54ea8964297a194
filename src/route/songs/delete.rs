use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::Error;
use crate::database::Database;
use crate::orm::songs;

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize, PartialEq, Eq))]
pub struct Response {
    pub message: String,
}

pub async fn handler(database: &Database, id: i64) -> Result<Response, Error> {
    songs::delete(database, id).await?;
    Ok(Response { message: "Song deleted".to_owned() })
}

pub async fn axum_handler(
    State(database): State<Database>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, Error>,
) -> Result<Json<Response>, Error> {
    handler(&database, id).await.map(Json)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use super::*;
    use crate::test::{self, http};
    #[cfg(database_env)]
    use crate::test::{Mock, mock};

    #[tokio::test]
    async fn test_delete_bad_request() {
        let (status, _) =
            http::send(test::offline_router(), Method::DELETE, "/songs/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[cfg(database_env)]
    #[rstest::rstest]
    #[tokio::test]
    async fn test_delete(
        #[future(awt)]
        #[with(2)]
        mock: Mock,
    ) {
        let ids = mock.song_ids().await;
        let (status, body) =
            http::send(mock.router(), Method::DELETE, &format!("/songs/{}", ids[0]), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "message": "Song deleted" }));
        assert_eq!(mock.song_ids().await, &ids[1..]);

        let (status, _) = http::send(
            mock.router(),
            Method::GET,
            &format!("/songs/{}/verses", ids[0]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[cfg(database_env)]
    #[rstest::rstest]
    #[tokio::test]
    async fn test_delete_missing_is_idempotent(#[future(awt)] mock: Mock) {
        assert_eq!(
            handler(mock.database(), 999_999).await.unwrap(),
            Response { message: "Song deleted".to_owned() }
        );
    }
}
