//! User records
//!
//! Passwords are stored as given and never leave the server: handlers
//! respond with [`UserView`], which has no password field.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Required, Resource, ValidationError};

/// User row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Resource for User {
    const NAME: &'static str = "User";
    const KEY: &'static str = "user";
}

/// Public representation of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserView {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// User fields as sent by clients; used for both create and update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated user ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<UserInput> for NewUser {
    type Error = ValidationError;

    fn try_from(input: UserInput) -> Result<Self, Self::Error> {
        let mut required = Required::default();
        let user = Self {
            name: required.text("name", input.name),
            email: required.text("email", input.email),
            password: required.text("password", input.password),
        };
        required.finish(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_drops_password() {
        let view = UserView::from(User {
            id: 1,
            name: "Ann".into(),
            email: "a@x.com".into(),
            password: "p".into(),
        });
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ann", "email": "a@x.com"})
        );
    }

    #[test]
    fn rejects_empty_password() {
        let input = UserInput {
            name: Some("Ann".into()),
            email: Some("a@x.com".into()),
            password: Some(String::new()),
        };
        let err = NewUser::try_from(input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["password"]
            }
        );
    }
}
