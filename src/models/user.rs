use crate::models::{comment::Comment, post::PostWithRelations};

/// A row of the `user` table.
///
/// Not `Serialize`. It leaves the crate only through
/// [`UserWithRelations::serialize`](crate::models::user::UserWithRelations::serialize),
/// which never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

/// A user together with every relation its public payload is built from.
#[derive(Debug, Clone)]
pub struct UserWithRelations {
    pub user: User,
    /// Users this user follows.
    pub following: Vec<User>,
    /// Users following this user.
    pub followed_by: Vec<User>,
    /// Comments this user authored.
    pub comments: Vec<Comment>,
    pub posts: Vec<PostWithRelations>,
}
