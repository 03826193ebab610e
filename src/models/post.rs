use crate::models::{comment::Comment, media::Media};

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone)]
pub struct PostWithRelations {
    pub post: Post,
    pub media: Vec<Media>,
    pub comments: Vec<Comment>,
}
