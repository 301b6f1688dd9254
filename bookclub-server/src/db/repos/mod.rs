//! Repository implementations for database access
//!
//! One repository per resource. Each borrows the pool and follows the
//! same patterns:
//! - updates are a single `UPDATE ... SET col = COALESCE(?, col) RETURNING`
//! - deletes check `rows_affected` for not-found
//! - constraint violations surface as [`DbError::Conflict`]

pub mod users;
pub mod clubs;
pub mod books;
pub mod memberships;
pub mod discussions;

pub use users::UserRepo;
pub use clubs::ClubRepo;
pub use books::BookRepo;
pub use memberships::MembershipRepo;
pub use discussions::DiscussionRepo;

use sqlx::error::ErrorKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// UNIQUE, PRIMARY KEY or FOREIGN KEY constraint rejected a write
    #[error("constraint violated for {resource}: {detail}")]
    Conflict {
        resource: &'static str,
        detail: String,
    },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Error mapper for insert/update/delete statements.
    pub(crate) fn on_write(resource: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |err| {
            let detail = err
                .as_database_error()
                .filter(|db| is_constraint(db.kind(), db.message()))
                .map(|db| db.message().to_owned());

            match detail {
                Some(detail) => {
                    tracing::debug!(resource, %detail, "write rejected by constraint");
                    Self::Conflict { resource, detail }
                }
                None => Self::Sqlx(err),
            }
        }
    }
}

fn is_constraint(kind: ErrorKind, message: &str) -> bool {
    match kind {
        ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation => true,
        // Older SQLite builds report a plain SQLITE_CONSTRAINT code
        ErrorKind::Other => {
            message.starts_with("UNIQUE constraint failed")
                || message.starts_with("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}
