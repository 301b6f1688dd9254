//! Club records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Required, Resource, ValidationError};

/// Club row from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Resource for Club {
    const NAME: &'static str = "Club";
    const KEY: &'static str = "club";
}

/// Club fields as sent by clients
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Validated club ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClub {
    pub name: String,
    pub description: String,
}

impl TryFrom<ClubInput> for NewClub {
    type Error = ValidationError;

    fn try_from(input: ClubInput) -> Result<Self, Self::Error> {
        let mut required = Required::default();
        let club = Self {
            name: required.text("name", input.name),
            description: required.text("description", input.description),
        };
        required.finish(club)
    }
}
