//! User repository

use sqlx::SqlitePool;

use crate::models::{NewUser, Resource, User, UserInput};
use super::DbError;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users in insertion order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password FROM "user" ORDER BY id"#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password FROM "user" WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(User::NAME, id))
    }

    /// Insert a user. A duplicate email is a [`DbError::Conflict`].
    pub async fn create(&self, user: NewUser) -> Result<User, DbError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (name, email, password)
            VALUES (?, ?, ?)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write(User::NAME))?;

        tracing::debug!(user_id = created.id, "user created");
        Ok(created)
    }

    /// Overwrite the fields present in `patch`, keeping the rest.
    pub async fn update(&self, id: i64, patch: UserInput) -> Result<User, DbError> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE "user"
            SET name = COALESCE(?, name),
                email = COALESCE(?, email),
                password = COALESCE(?, password)
            WHERE id = ?
            RETURNING id, name, email, password
            "#,
        )
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.password)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::on_write(User::NAME))?
        .ok_or_else(|| DbError::not_found(User::NAME, id))?;

        tracing::debug!(user_id = id, "user updated");
        Ok(updated)
    }

    /// Delete a user. Books and memberships referencing it are left alone.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::on_write(User::NAME))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(User::NAME, id));
        }

        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }
}
