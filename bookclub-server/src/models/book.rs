//! Book records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Required, Resource, ValidationError};

/// Book row from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Owning user. Not checked for existence unless the store enforces
    /// foreign keys.
    pub user_id: i64,
}

impl Resource for Book {
    const NAME: &'static str = "Book";
    const KEY: &'static str = "book";
}

/// Book fields as sent by clients
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub user_id: Option<i64>,
}

/// Validated book ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub user_id: i64,
}

impl TryFrom<BookInput> for NewBook {
    type Error = ValidationError;

    fn try_from(input: BookInput) -> Result<Self, Self::Error> {
        let mut required = Required::default();
        let book = Self {
            title: required.text("title", input.title),
            author: required.text("author", input.author),
            genre: required.text("genre", input.genre),
            user_id: required.id("user_id", input.user_id),
        };
        required.finish(book)
    }
}
