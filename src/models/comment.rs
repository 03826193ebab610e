#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}
