use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::errors::{AppError, AppResult};
use crate::models::{Follow, NewFollow, NewUser, User};
use crate::schema::{follows, users};

pub fn create(conn: &mut SqliteConnection, new_user: &NewUser) -> AppResult<User> {
    let user = diesel::insert_into(users::table)
        .values(new_user)
        .get_result::<User>(conn)?;

    tracing::info!(user_id = user.id, username = %user.username, "user created");
    Ok(user)
}

pub fn find(conn: &mut SqliteConnection, id: i32) -> AppResult<Option<User>> {
    let user = users::table.find(id).first::<User>(conn).optional()?;
    Ok(user)
}

pub fn find_by_username(conn: &mut SqliteConnection, username: &str) -> AppResult<Option<User>> {
    let user = users::table
        .filter(users::username.eq(username))
        .first::<User>(conn)
        .optional()?;
    Ok(user)
}

/// Deletes a user. The schema cascades to their messages, their likes, and
/// their follow edges in both directions.
pub fn delete(conn: &mut SqliteConnection, id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(users::table.find(id)).execute(conn)?;
    if deleted > 0 {
        tracing::info!(user_id = id, "user deleted");
    }
    Ok(deleted > 0)
}

pub fn follow(conn: &mut SqliteConnection, follower_id: i32, followee_id: i32) -> AppResult<Follow> {
    if follower_id == followee_id {
        return Err(AppError::Validation("cannot follow yourself".into()));
    }

    let new_follow = NewFollow { follower_id, followee_id };

    let edge = diesel::insert_into(follows::table)
        .values(&new_follow)
        .get_result::<Follow>(conn)?;
    Ok(edge)
}

pub fn unfollow(conn: &mut SqliteConnection, follower_id: i32, followee_id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(
        follows::table
            .filter(follows::follower_id.eq(follower_id))
            .filter(follows::followee_id.eq(followee_id)),
    )
    .execute(conn)?;
    Ok(deleted > 0)
}

/// Users who follow the given user.
pub fn followers(conn: &mut SqliteConnection, user_id: i32) -> AppResult<Vec<User>> {
    let follower_ids: Vec<i32> = follows::table
        .filter(follows::followee_id.eq(user_id))
        .select(follows::follower_id)
        .load::<i32>(conn)?;

    let users = users::table
        .filter(users::id.eq_any(&follower_ids))
        .load::<User>(conn)?;
    Ok(users)
}

/// Users the given user follows.
pub fn following(conn: &mut SqliteConnection, user_id: i32) -> AppResult<Vec<User>> {
    let followee_ids: Vec<i32> = follows::table
        .filter(follows::follower_id.eq(user_id))
        .select(follows::followee_id)
        .load::<i32>(conn)?;

    let users = users::table
        .filter(users::id.eq_any(&followee_ids))
        .load::<User>(conn)?;
    Ok(users)
}
