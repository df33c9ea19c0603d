use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Errors surfaced by the Warbler data layer.
///
/// Lookup misses are not errors: `find*`, `authenticate` and the boolean
/// relationship queries report absence through `Option`/`bool` results.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("password hashing error: {0}")]
    Hash(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("seed data error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the underlying failure is a schema rejection: uniqueness,
    /// nullability, a length check, or a dangling foreign key. These are
    /// recoverable - the transaction rolls back and committed rows are
    /// untouched.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            AppError::Database(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation,
                _,
            ))
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
