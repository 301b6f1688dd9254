//! Domain models with validation at construction
//!
//! Request bodies deserialize into `*Input` types where every field is
//! optional. Creating a row goes through `TryFrom<*Input>` which rejects
//! missing or falsy fields; updating a row uses the same input as a patch.

pub mod validation;
pub mod user;
pub mod club;
pub mod book;
pub mod membership;
pub mod discussion;

pub use validation::{Required, ValidationError};
pub use user::{NewUser, User, UserInput, UserView};
pub use club::{Club, ClubInput, NewClub};
pub use book::{Book, BookInput, NewBook};
pub use membership::{MemberListing, Membership, MembershipInput, NewMembership};
pub use discussion::{Discussion, DiscussionInput, DiscussionListing, NewDiscussion};

/// A stored entity, named the way it appears in response messages.
pub trait Resource {
    /// Capitalized singular name, e.g. `"User"`.
    const NAME: &'static str;
    /// Key used to wrap a single record in mutation responses, e.g. `"user"`.
    const KEY: &'static str;
}
