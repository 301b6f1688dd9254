//! Discussion records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Required, Resource, ValidationError};

/// Discussion row from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Discussion {
    pub id: i64,
    pub content: String,
    /// Free-form date string, stored verbatim
    pub date: String,
    pub book_id: i64,
    pub club_id: i64,
}

impl Resource for Discussion {
    const NAME: &'static str = "Discussion";
    const KEY: &'static str = "discussion";
}

/// Discussion with the name of the discussed book's owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct DiscussionListing {
    pub id: i64,
    pub content: String,
    pub date: String,
    pub book_id: i64,
    pub club_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Discussion fields as sent by clients
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscussionInput {
    pub content: Option<String>,
    pub date: Option<String>,
    pub book_id: Option<i64>,
    pub club_id: Option<i64>,
}

/// Validated discussion ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiscussion {
    pub content: String,
    pub date: String,
    pub book_id: i64,
    pub club_id: i64,
}

impl TryFrom<DiscussionInput> for NewDiscussion {
    type Error = ValidationError;

    fn try_from(input: DiscussionInput) -> Result<Self, Self::Error> {
        let mut required = Required::default();
        let discussion = Self {
            content: required.text("content", input.content),
            book_id: required.id("book_id", input.book_id),
            club_id: required.id("club_id", input.club_id),
            date: required.text("date", input.date),
        };
        required.finish(discussion)
    }
}
