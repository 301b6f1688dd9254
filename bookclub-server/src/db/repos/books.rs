//! Book repository
//!
//! `user_id` is written as given; whether a missing owner is rejected
//! depends on the pool's foreign-key setting.

use sqlx::SqlitePool;

use crate::models::{Book, BookInput, NewBook, Resource};
use super::DbError;

/// Book repository
pub struct BookRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all books in insertion order.
    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, genre, user_id FROM book ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(books)
    }

    pub async fn get(&self, id: i64) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, genre, user_id FROM book WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(Book::NAME, id))
    }

    pub async fn create(&self, book: NewBook) -> Result<Book, DbError> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO book (title, author, genre, user_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, author, genre, user_id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.user_id)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write(Book::NAME))?;

        tracing::debug!(book_id = created.id, user_id = created.user_id, "book created");
        Ok(created)
    }

    /// Overwrite the fields present in `patch`, keeping the rest.
    pub async fn update(&self, id: i64, patch: BookInput) -> Result<Book, DbError> {
        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE book
            SET title = COALESCE(?, title),
                author = COALESCE(?, author),
                genre = COALESCE(?, genre),
                user_id = COALESCE(?, user_id)
            WHERE id = ?
            RETURNING id, title, author, genre, user_id
            "#,
        )
        .bind(patch.title)
        .bind(patch.author)
        .bind(patch.genre)
        .bind(patch.user_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::on_write(Book::NAME))?
        .ok_or_else(|| DbError::not_found(Book::NAME, id))?;

        tracing::debug!(book_id = id, "book updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM book WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::on_write(Book::NAME))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Book::NAME, id));
        }

        tracing::debug!(book_id = id, "book deleted");
        Ok(())
    }
}
