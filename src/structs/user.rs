use serde::Serialize;

use crate::{models::user::UserWithRelations, structs::post::PublicPost};

/// Public view of a user. There is no password field.
///
/// The follow graph is projected to bare emails so serialization never
/// recurses through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub following: Vec<String>,
    pub followed_by: Vec<String>,
    /// Text of each comment the user authored.
    pub comments: Vec<String>,
    pub posts: Vec<PublicPost>,
}

impl UserWithRelations {
    pub fn serialize(&self) -> PublicUser {
        PublicUser {
            id: self.user.id,
            email: self.user.email.clone(),
            following: self.following.iter().map(|u| u.email.clone()).collect(),
            followed_by: self.followed_by.iter().map(|u| u.email.clone()).collect(),
            comments: self
                .comments
                .iter()
                .map(|c| c.comment_text.clone())
                .collect(),
            posts: self.posts.iter().map(|p| p.serialize()).collect(),
        }
    }
}
