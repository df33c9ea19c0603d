use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::errors::{AppError, AppResult};
use crate::models::{NewUser, User, DEFAULT_IMAGE_URL};
use crate::schema::users;

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Hash(format!("password hashing failed: {e}")))
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Hash(format!("invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Builds an uncommitted user row with a freshly hashed password. The caller
/// persists it; uniqueness violations surface at insert time.
pub fn signup(
    username: &str,
    email: &str,
    password: &str,
    image_url: Option<String>,
) -> AppResult<NewUser> {
    let password_hash = hash_password(password)?;

    Ok(NewUser {
        id: None,
        username: username.to_string(),
        email: email.to_string(),
        password_hash,
        image_url: Some(image_url.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string())),
        header_image_url: None,
        bio: None,
        location: None,
    })
}

/// Username lookup plus hash verification. An unknown username and a wrong
/// password are both ordinary `None` results, never errors.
pub fn authenticate(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> AppResult<Option<User>> {
    let user = users::table
        .filter(users::username.eq(username))
        .first::<User>(conn)
        .optional()?;

    match user {
        Some(user) => {
            if verify_password(password, &user.password_hash)? {
                Ok(Some(user))
            } else {
                Ok(None)
            }
        }
        None => Ok(None),
    }
}
