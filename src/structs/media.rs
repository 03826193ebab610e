use serde::Serialize;

use crate::models::media::Media;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicMedia {
    pub id: i64,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub post_id: i64,
}

impl Media {
    pub fn serialize(&self) -> PublicMedia {
        PublicMedia {
            id: self.id,
            media_type: self.media_type.clone(),
            url: self.url.clone(),
            post_id: self.post_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn media_payload_uses_type_key() {
        let media = Media {
            id: 4,
            media_type: "image".to_string(),
            url: "http://x/1.png".to_string(),
            post_id: 2,
        };

        assert_eq!(
            serde_json::to_value(media.serialize()).unwrap(),
            json!({"id": 4, "type": "image", "url": "http://x/1.png", "post_id": 2})
        );
    }
}
