use serde::Serialize;

use crate::{
    models::post::PostWithRelations,
    structs::{comment::PublicComment, media::PublicMedia},
};

/// The author is only referenced through `user_id`; embedding the author
/// would embed this post again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicPost {
    pub id: i64,
    pub user_id: i64,
    pub media: Vec<PublicMedia>,
    pub comments: Vec<PublicComment>,
}

impl PostWithRelations {
    pub fn serialize(&self) -> PublicPost {
        PublicPost {
            id: self.post.id,
            user_id: self.post.user_id,
            media: self.media.iter().map(|media| media.serialize()).collect(),
            comments: self
                .comments
                .iter()
                .map(|comment| comment.serialize())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{comment::Comment, media::Media, post::Post};

    fn post(id: i64, user_id: i64) -> PostWithRelations {
        PostWithRelations {
            post: Post { id, user_id },
            media: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn empty_post() {
        assert_eq!(
            serde_json::to_value(post(1, 2).serialize()).unwrap(),
            json!({"id": 1, "user_id": 2, "media": [], "comments": []})
        );
    }

    #[test]
    fn post_with_one_image() {
        let mut p = post(5, 1);
        p.media.push(Media {
            id: 10,
            media_type: "image".to_string(),
            url: "http://x/1.png".to_string(),
            post_id: 5,
        });

        let payload = serde_json::to_value(p.serialize()).unwrap();
        assert_eq!(
            payload["media"],
            json!([{"id": 10, "type": "image", "url": "http://x/1.png", "post_id": 5}])
        );
    }

    #[test]
    fn media_and_comments_keep_loaded_order() {
        let mut p = post(5, 1);
        for id in [3, 1, 2] {
            p.media.push(Media {
                id,
                media_type: "video".to_string(),
                url: format!("http://x/{id}.mp4"),
                post_id: 5,
            });
            p.comments.push(Comment {
                id,
                comment_text: format!("comment {id}"),
                author_id: 1,
                post_id: 5,
            });
        }

        let payload = p.serialize();
        let media_ids: Vec<i64> = payload.media.iter().map(|m| m.id).collect();
        let comment_ids: Vec<i64> = payload.comments.iter().map(|c| c.id).collect();
        assert_eq!(media_ids, vec![3, 1, 2]);
        assert_eq!(comment_ids, vec![3, 1, 2]);
    }
}
