//! CSV fixture loading. Each file is parsed fully, then inserted inside one
//! transaction: a malformed row or a constraint rejection aborts that file's
//! load and commits nothing from it.

use std::fs::File;
use std::path::Path;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::errors::AppResult;
use crate::models::{NewFollow, NewLike, NewMessage, NewUser};
use crate::schema::{follows, likes, messages, users};

#[derive(Debug, Default)]
pub struct SeedSummary {
    pub users: usize,
    pub messages: usize,
    pub follows: usize,
    pub likes: usize,
}

fn read_rows<T>(path: &Path) -> AppResult<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

pub fn load_users(conn: &mut SqliteConnection, path: &Path) -> AppResult<usize> {
    let rows: Vec<NewUser> = read_rows(path)?;
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        for row in &rows {
            diesel::insert_into(users::table).values(row).execute(conn)?;
        }
        Ok(())
    })?;
    tracing::info!(rows = rows.len(), file = %path.display(), "users loaded");
    Ok(rows.len())
}

pub fn load_messages(conn: &mut SqliteConnection, path: &Path) -> AppResult<usize> {
    let rows: Vec<NewMessage> = read_rows(path)?;
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        for row in &rows {
            diesel::insert_into(messages::table).values(row).execute(conn)?;
        }
        Ok(())
    })?;
    tracing::info!(rows = rows.len(), file = %path.display(), "messages loaded");
    Ok(rows.len())
}

pub fn load_follows(conn: &mut SqliteConnection, path: &Path) -> AppResult<usize> {
    let rows: Vec<NewFollow> = read_rows(path)?;
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        for row in &rows {
            diesel::insert_into(follows::table).values(row).execute(conn)?;
        }
        Ok(())
    })?;
    tracing::info!(rows = rows.len(), file = %path.display(), "follows loaded");
    Ok(rows.len())
}

pub fn load_likes(conn: &mut SqliteConnection, path: &Path) -> AppResult<usize> {
    let rows: Vec<NewLike> = read_rows(path)?;
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        for row in &rows {
            diesel::insert_into(likes::table).values(row).execute(conn)?;
        }
        Ok(())
    })?;
    tracing::info!(rows = rows.len(), file = %path.display(), "likes loaded");
    Ok(rows.len())
}

/// Loads the four fixture files from a directory, users first so every edge
/// and message finds its endpoints.
pub fn load_dir(conn: &mut SqliteConnection, dir: &Path) -> AppResult<SeedSummary> {
    Ok(SeedSummary {
        users: load_users(conn, &dir.join("users.csv"))?,
        messages: load_messages(conn, &dir.join("messages.csv"))?,
        follows: load_follows(conn, &dir.join("follows.csv"))?,
        likes: load_likes(conn, &dir.join("likes.csv"))?,
    })
}

/// Clears all rows, children before parents.
pub fn wipe(conn: &mut SqliteConnection) -> AppResult<()> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(likes::table).execute(conn)?;
        diesel::delete(follows::table).execute(conn)?;
        diesel::delete(messages::table).execute(conn)?;
        diesel::delete(users::table).execute(conn)?;
        Ok(())
    })?;
    tracing::info!("existing rows cleared");
    Ok(())
}
