mod filter;

use std::borrow::Cow;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use filter::contains_pattern;
pub use filter::{DEFAULT_LIMIT, Filter};
use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::Error;
use crate::database::Database;
use crate::schema::songs;

#[derive(Debug, Queryable, Selectable, Insertable, Serialize)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize, PartialEq, Eq, Clone))]
pub struct Data<'a> {
    pub group_name: Cow<'a, str>,
    pub song_name: Cow<'a, str>,
    pub release_date: Date,
    pub text: Cow<'a, str>,
    pub link: Cow<'a, str>,
}

#[derive(Debug, Queryable, Selectable, Serialize)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct Song {
    pub id: i64,
    #[diesel(embed)]
    #[serde(flatten)]
    pub data: Data<'static>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields of an update request. Absent fields keep their stored value.
#[derive(Debug)]
pub struct Patch<'a> {
    pub group_name: Option<Cow<'a, str>>,
    pub song_name: Option<Cow<'a, str>>,
    pub text: Option<Cow<'a, str>>,
    pub link: Option<Cow<'a, str>>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
struct Update<'a> {
    group_name: Cow<'a, str>,
    song_name: Cow<'a, str>,
    text: Cow<'a, str>,
    link: Cow<'a, str>,
}

pub async fn list(database: &Database, filter: &Filter<'_>) -> Result<Vec<Song>, Error> {
    let mut query = songs::table.select(Song::as_select()).order_by(songs::id).into_boxed();
    if let Some(id) = filter.id {
        query = query.filter(songs::id.eq(id));
    }
    if let Some(group_name) = filter.group_name.as_deref() {
        query = query.filter(songs::group_name.ilike(contains_pattern(group_name)));
    }
    if let Some(song_name) = filter.song_name.as_deref() {
        query = query.filter(songs::song_name.ilike(contains_pattern(song_name)));
    }
    if let Some(text) = filter.text.as_deref() {
        query = query.filter(songs::text.ilike(contains_pattern(text)));
    }
    if let Some(release_date) = filter.release_date {
        query = query.filter(songs::release_date.eq(release_date));
    }

    let songs = query
        .limit(filter.pagination.limit)
        .offset(filter.pagination.offset())
        .get_results(&mut database.get().await?)
        .await?;
    tracing::debug!(?filter, count = songs.len(), "fetched songs");
    Ok(songs)
}

pub async fn get(database: &Database, id: i64) -> Result<Song, Error> {
    songs::table
        .filter(songs::id.eq(id))
        .select(Song::as_select())
        .get_result(&mut database.get().await?)
        .await
        .optional()?
        .ok_or(Error::SongNotFound(id))
}

pub async fn create(database: &Database, data: Data<'_>) -> Result<Song, Error> {
    let song = diesel::insert_into(songs::table)
        .values(data)
        .returning(Song::as_returning())
        .get_result(&mut database.get().await?)
        .await?;
    tracing::info!(song_id = song.id, "song created");
    Ok(song)
}

/// Overwrite the name, text and link of a stored song. The release date is left untouched.
pub async fn update(database: &Database, id: i64, patch: Patch<'_>) -> Result<Song, Error> {
    let Song { data: Data { group_name, song_name, text, link, .. }, .. } =
        get(database, id).await?;

    let song = diesel::update(songs::table)
        .filter(songs::id.eq(id))
        .set(Update {
            group_name: patch.group_name.unwrap_or(group_name),
            song_name: patch.song_name.unwrap_or(song_name),
            text: patch.text.unwrap_or(text),
            link: patch.link.unwrap_or(link),
        })
        .returning(Song::as_returning())
        .get_result(&mut database.get().await?)
        .await
        .optional()?
        .ok_or(Error::SongNotFound(id))?;
    tracing::info!(song_id = song.id, "song updated");
    Ok(song)
}

/// Deleting a song that does not exist is not an error.
pub async fn delete(database: &Database, id: i64) -> Result<(), Error> {
    let deleted = diesel::delete(songs::table)
        .filter(songs::id.eq(id))
        .execute(&mut database.get().await?)
        .await?;
    tracing::info!(song_id = id, deleted, "song deleted");
    Ok(())
}
