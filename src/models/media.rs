#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Media {
    pub id: i64,
    /// Free-form kind such as "image" or "video".
    #[sqlx(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub post_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewMedia {
    pub media_type: String,
    pub url: String,
    pub post_id: i64,
}
