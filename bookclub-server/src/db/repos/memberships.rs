//! Membership repository
//!
//! Memberships are only listed and created. A second membership for the
//! same (user, club) pair hits the composite primary key.

use sqlx::SqlitePool;

use crate::models::{MemberListing, Membership, NewMembership, Resource};
use super::DbError;

/// Membership repository
pub struct MembershipRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MembershipRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List memberships with each member's name.
    ///
    /// Uses LEFT JOIN so a membership whose user was deleted still lists,
    /// with no name.
    pub async fn list(&self) -> Result<Vec<MemberListing>, DbError> {
        let memberships = sqlx::query_as::<_, MemberListing>(
            r#"
            SELECT m.user_id, m.club_id, m.role, u.name AS member_name
            FROM membership m
            LEFT JOIN "user" u ON u.id = m.user_id
            ORDER BY m.rowid
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(memberships)
    }

    pub async fn create(&self, membership: NewMembership) -> Result<Membership, DbError> {
        let created = sqlx::query_as::<_, Membership>(
            r#"
            INSERT INTO membership (user_id, club_id, role)
            VALUES (?, ?, ?)
            RETURNING user_id, club_id, role
            "#,
        )
        .bind(membership.user_id)
        .bind(membership.club_id)
        .bind(&membership.role)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write(Membership::NAME))?;

        tracing::debug!(
            user_id = created.user_id,
            club_id = created.club_id,
            role = %created.role,
            "membership created"
        );
        Ok(created)
    }
}
