//! Membership records - link table between users and clubs
//!
//! Keyed by `(user_id, club_id)`. Only list and create are exposed.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Required, Resource, ValidationError};

/// Membership row from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Membership {
    pub user_id: i64,
    pub club_id: i64,
    pub role: String,
}

impl Resource for Membership {
    const NAME: &'static str = "Membership";
    const KEY: &'static str = "membership";
}

/// Membership with the member's name for list display
///
/// `member_name` is absent when the user row no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct MemberListing {
    pub user_id: i64,
    pub club_id: i64,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
}

/// Membership fields as sent by clients
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembershipInput {
    pub user_id: Option<i64>,
    pub club_id: Option<i64>,
    pub role: Option<String>,
}

/// Validated membership ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMembership {
    pub user_id: i64,
    pub club_id: i64,
    pub role: String,
}

impl TryFrom<MembershipInput> for NewMembership {
    type Error = ValidationError;

    fn try_from(input: MembershipInput) -> Result<Self, Self::Error> {
        let mut required = Required::default();
        let membership = Self {
            user_id: required.id("user_id", input.user_id),
            club_id: required.id("club_id", input.club_id),
            role: required.text("role", input.role),
        };
        required.finish(membership)
    }
}
