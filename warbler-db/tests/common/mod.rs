#![allow(dead_code)]

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::MigrationHarness;

use warbler_db::models::NewUser;

/// Fresh in-memory database with foreign keys on and the schema applied.
pub fn setup() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").expect("in-memory database");
    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .expect("enable foreign keys");
    conn.run_pending_migrations(warbler_db::db::MIGRATIONS)
        .expect("run migrations");
    conn
}

pub fn new_user(id: i32, username: &str, email: &str) -> NewUser {
    NewUser {
        id: Some(id),
        username: username.into(),
        email: email.into(),
        password_hash: "HASHED_PASSWORD".into(),
        image_url: None,
        header_image_url: None,
        bio: None,
        location: None,
    }
}
