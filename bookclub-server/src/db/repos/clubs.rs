//! Club repository

use sqlx::SqlitePool;

use crate::models::{Club, ClubInput, NewClub, Resource};
use super::DbError;

/// Club repository
pub struct ClubRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ClubRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all clubs in insertion order.
    pub async fn list(&self) -> Result<Vec<Club>, DbError> {
        let clubs = sqlx::query_as::<_, Club>("SELECT id, name, description FROM club ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(clubs)
    }

    pub async fn get(&self, id: i64) -> Result<Club, DbError> {
        sqlx::query_as::<_, Club>("SELECT id, name, description FROM club WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(Club::NAME, id))
    }

    pub async fn create(&self, club: NewClub) -> Result<Club, DbError> {
        let created = sqlx::query_as::<_, Club>(
            r#"
            INSERT INTO club (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(&club.name)
        .bind(&club.description)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write(Club::NAME))?;

        tracing::debug!(club_id = created.id, "club created");
        Ok(created)
    }

    /// Overwrite the fields present in `patch`, keeping the rest.
    pub async fn update(&self, id: i64, patch: ClubInput) -> Result<Club, DbError> {
        let updated = sqlx::query_as::<_, Club>(
            r#"
            UPDATE club
            SET name = COALESCE(?, name),
                description = COALESCE(?, description)
            WHERE id = ?
            RETURNING id, name, description
            "#,
        )
        .bind(patch.name)
        .bind(patch.description)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::on_write(Club::NAME))?
        .ok_or_else(|| DbError::not_found(Club::NAME, id))?;

        tracing::debug!(club_id = id, "club updated");
        Ok(updated)
    }

    /// Delete a club. Memberships and discussions are not cascaded.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM club WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::on_write(Club::NAME))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Club::NAME, id));
        }

        tracing::debug!(club_id = id, "club deleted");
        Ok(())
    }
}
