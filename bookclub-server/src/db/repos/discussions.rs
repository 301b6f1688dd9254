//! Discussion repository

use sqlx::SqlitePool;

use crate::models::{Discussion, DiscussionInput, DiscussionListing, NewDiscussion, Resource};
use super::DbError;

/// Discussion repository
pub struct DiscussionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DiscussionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List discussions with the name of the discussed book's owner.
    ///
    /// Missing books or users yield no name rather than dropping the row.
    pub async fn list(&self) -> Result<Vec<DiscussionListing>, DbError> {
        let discussions = sqlx::query_as::<_, DiscussionListing>(
            r#"
            SELECT d.id, d.content, d.date, d.book_id, d.club_id, u.name AS user_name
            FROM discussion d
            LEFT JOIN book b ON b.id = d.book_id
            LEFT JOIN "user" u ON u.id = b.user_id
            ORDER BY d.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(discussions)
    }

    pub async fn get(&self, id: i64) -> Result<Discussion, DbError> {
        sqlx::query_as::<_, Discussion>(
            "SELECT id, content, date, book_id, club_id FROM discussion WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(Discussion::NAME, id))
    }

    pub async fn create(&self, discussion: NewDiscussion) -> Result<Discussion, DbError> {
        let created = sqlx::query_as::<_, Discussion>(
            r#"
            INSERT INTO discussion (content, date, book_id, club_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, content, date, book_id, club_id
            "#,
        )
        .bind(&discussion.content)
        .bind(&discussion.date)
        .bind(discussion.book_id)
        .bind(discussion.club_id)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write(Discussion::NAME))?;

        tracing::debug!(
            discussion_id = created.id,
            book_id = created.book_id,
            club_id = created.club_id,
            "discussion created"
        );
        Ok(created)
    }

    /// Overwrite the fields present in `patch`, keeping the rest.
    pub async fn update(&self, id: i64, patch: DiscussionInput) -> Result<Discussion, DbError> {
        let updated = sqlx::query_as::<_, Discussion>(
            r#"
            UPDATE discussion
            SET content = COALESCE(?, content),
                date = COALESCE(?, date),
                book_id = COALESCE(?, book_id),
                club_id = COALESCE(?, club_id)
            WHERE id = ?
            RETURNING id, content, date, book_id, club_id
            "#,
        )
        .bind(patch.content)
        .bind(patch.date)
        .bind(patch.book_id)
        .bind(patch.club_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::on_write(Discussion::NAME))?
        .ok_or_else(|| DbError::not_found(Discussion::NAME, id))?;

        tracing::debug!(discussion_id = id, "discussion updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM discussion WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::on_write(Discussion::NAME))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Discussion::NAME, id));
        }

        tracing::debug!(discussion_id = id, "discussion deleted");
        Ok(())
    }
}
