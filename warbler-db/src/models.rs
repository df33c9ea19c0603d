use std::fmt;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use serde::{Deserialize, Serialize};

use crate::schema::{follows, likes, messages, users};

pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.jpg";

/// Maximum message body length, mirrored by a CHECK constraint in the schema.
pub const MESSAGE_TEXT_MAX: usize = 140;

// --- User ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
}

/// Insert form of a user. `id` and the image columns fall back to database
/// defaults when `None`, so fixtures can pin identifiers while normal
/// callers let the database assign them.
#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub id: Option<i32>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub image_url: Option<String>,
    pub header_image_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User #{}: {}, {}>", self.id, self.username, self.email)
    }
}

impl User {
    /// True iff this user follows `other`.
    pub fn is_following(&self, conn: &mut SqliteConnection, other: &User) -> QueryResult<bool> {
        follows::table
            .filter(follows::follower_id.eq(self.id))
            .filter(follows::followee_id.eq(other.id))
            .count()
            .get_result::<i64>(conn)
            .map(|c| c > 0)
    }

    /// True iff `other` follows this user.
    pub fn is_followed_by(&self, conn: &mut SqliteConnection, other: &User) -> QueryResult<bool> {
        follows::table
            .filter(follows::follower_id.eq(other.id))
            .filter(follows::followee_id.eq(self.id))
            .count()
            .get_result::<i64>(conn)
            .map(|c| c > 0)
    }
}

// --- Message ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = messages)]
pub struct Message {
    pub id: i32,
    pub text: String,
    pub timestamp: NaiveDateTime,
    pub user_id: i32,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = messages)]
pub struct NewMessage {
    pub id: Option<i32>,
    pub text: String,
    // None defers to the schema's CURRENT_TIMESTAMP default.
    pub timestamp: Option<NaiveDateTime>,
    pub user_id: i32,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Message #{}: authored by {}>", self.id, self.user_id)
    }
}

impl Message {
    /// True iff `user` has liked this message.
    pub fn is_liked(&self, conn: &mut SqliteConnection, user: &User) -> QueryResult<bool> {
        likes::table
            .filter(likes::user_id.eq(user.id))
            .filter(likes::message_id.eq(self.id))
            .first::<Like>(conn)
            .optional()
            .map(|l| l.is_some())
    }
}

// --- Follow ---

#[derive(Debug, Queryable, Identifiable, Serialize)]
#[diesel(table_name = follows)]
#[diesel(primary_key(follower_id, followee_id))]
pub struct Follow {
    pub follower_id: i32,
    pub followee_id: i32,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = follows)]
pub struct NewFollow {
    pub follower_id: i32,
    pub followee_id: i32,
}

// --- Like ---

#[derive(Debug, Queryable, Identifiable, Serialize)]
#[diesel(table_name = likes)]
pub struct Like {
    pub id: i32,
    pub user_id: i32,
    pub message_id: i32,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = likes)]
pub struct NewLike {
    pub id: Option<i32>,
    pub user_id: i32,
    pub message_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_display_format() {
        let u = User {
            id: 1000,
            username: "testuser".into(),
            email: "test@test.com".into(),
            password_hash: "HASHED_PASSWORD".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.into(),
            bio: None,
            location: None,
        };

        assert_eq!(u.to_string(), "<User #1000: testuser, test@test.com>");
    }

    #[test]
    fn message_display_format() {
        let m = Message {
            id: 1000001,
            text: "hello".into(),
            timestamp: chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            user_id: 1000,
        };

        assert_eq!(m.to_string(), "<Message #1000001: authored by 1000>");
    }
}
