use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::errors::AppResult;
use crate::models::{Like, Message, NewLike, NewMessage};
use crate::schema::{likes, messages};

pub fn create(conn: &mut SqliteConnection, new_message: &NewMessage) -> AppResult<Message> {
    let message = diesel::insert_into(messages::table)
        .values(new_message)
        .get_result::<Message>(conn)?;
    Ok(message)
}

pub fn find(conn: &mut SqliteConnection, id: i32) -> AppResult<Option<Message>> {
    let message = messages::table.find(id).first::<Message>(conn).optional()?;
    Ok(message)
}

/// Deletes a message. The schema cascades to its likes.
pub fn delete(conn: &mut SqliteConnection, id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(messages::table.find(id)).execute(conn)?;
    if deleted > 0 {
        tracing::info!(message_id = id, "message deleted");
    }
    Ok(deleted > 0)
}

/// Messages authored by the given user, newest first.
pub fn for_user(conn: &mut SqliteConnection, user_id: i32) -> AppResult<Vec<Message>> {
    let msgs = messages::table
        .filter(messages::user_id.eq(user_id))
        .order(messages::timestamp.desc())
        .load::<Message>(conn)?;
    Ok(msgs)
}

pub fn like(conn: &mut SqliteConnection, user_id: i32, message_id: i32) -> AppResult<Like> {
    let new_like = NewLike { id: None, user_id, message_id };

    let edge = diesel::insert_into(likes::table)
        .values(&new_like)
        .get_result::<Like>(conn)?;
    Ok(edge)
}

pub fn unlike(conn: &mut SqliteConnection, user_id: i32, message_id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(
        likes::table
            .filter(likes::user_id.eq(user_id))
            .filter(likes::message_id.eq(message_id)),
    )
    .execute(conn)?;
    Ok(deleted > 0)
}

pub fn likes_of(conn: &mut SqliteConnection, message_id: i32) -> AppResult<Vec<Like>> {
    let edges = likes::table
        .filter(likes::message_id.eq(message_id))
        .load::<Like>(conn)?;
    Ok(edges)
}

/// Messages the given user has liked, newest first.
pub fn liked_by(conn: &mut SqliteConnection, user_id: i32) -> AppResult<Vec<Message>> {
    let message_ids: Vec<i32> = likes::table
        .filter(likes::user_id.eq(user_id))
        .select(likes::message_id)
        .load::<i32>(conn)?;

    let msgs = messages::table
        .filter(messages::id.eq_any(&message_ids))
        .order(messages::timestamp.desc())
        .load::<Message>(conn)?;
    Ok(msgs)
}
