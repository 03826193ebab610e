use serde::Serialize;

use crate::models::comment::Comment;

/// Author and post are referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicComment {
    pub id: i64,
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}

impl Comment {
    pub fn serialize(&self) -> PublicComment {
        PublicComment {
            id: self.id,
            comment_text: self.comment_text.clone(),
            author_id: self.author_id,
            post_id: self.post_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn comment_payload_is_flat() {
        let comment = Comment {
            id: 9,
            comment_text: "nice".to_string(),
            author_id: 1,
            post_id: 3,
        };

        assert_eq!(
            serde_json::to_value(comment.serialize()).unwrap(),
            json!({"id": 9, "comment_text": "nice", "author_id": 1, "post_id": 3})
        );
    }
}
