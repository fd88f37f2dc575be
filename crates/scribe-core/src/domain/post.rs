use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Image shown for posts created without one.
pub const PLACEHOLDER_IMG_URL: &str = "https://via.placeholder.com/350x200";

static IMG_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://.+\.(jpg|jpeg|png|gif|bmp|webp)$").expect("image URL pattern")
});

/// Post entity - a published blog entry.
///
/// Serializes to the wire shape `{_id, title, content, img_url, createdAt,
/// updatedAt}` expected by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub img_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from validated fields with generated ID and timestamps.
    pub fn new(draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            img_url: draft.img_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validated post fields - the only input the store accepts.
///
/// Construction trims `title` and `content`, rejects empty values and
/// malformed image URLs, and substitutes [`PLACEHOLDER_IMG_URL`] when no
/// image is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub img_url: String,
}

impl PostDraft {
    pub fn new(title: &str, content: &str, img_url: Option<&str>) -> Result<Self, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }

        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation("Content is required".to_string()));
        }

        let img_url = match img_url {
            None | Some("") => PLACEHOLDER_IMG_URL.to_string(),
            Some(url) if IMG_URL_PATTERN.is_match(url) => url.to_string(),
            Some(url) => {
                return Err(DomainError::Validation(format!(
                    "{url} is not a valid image URL"
                )));
            }
        };

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            img_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_title_and_content() {
        let draft = PostDraft::new("  Hello  ", "\tWorld\n", None).unwrap();
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.content, "World");
    }

    #[test]
    fn draft_rejects_whitespace_only_fields() {
        assert!(PostDraft::new("   ", "content", None).is_err());
        assert!(PostDraft::new("title", " \n ", None).is_err());
    }

    #[test]
    fn draft_defaults_missing_or_empty_img_url() {
        let absent = PostDraft::new("t", "c", None).unwrap();
        assert_eq!(absent.img_url, PLACEHOLDER_IMG_URL);

        let empty = PostDraft::new("t", "c", Some("")).unwrap();
        assert_eq!(empty.img_url, PLACEHOLDER_IMG_URL);
    }

    #[test]
    fn draft_keeps_valid_img_url_verbatim() {
        let draft = PostDraft::new("t", "c", Some("http://x.com/a.png")).unwrap();
        assert_eq!(draft.img_url, "http://x.com/a.png");

        // Extension match is case-insensitive
        let upper = PostDraft::new("t", "c", Some("https://x.com/A.JPG")).unwrap();
        assert_eq!(upper.img_url, "https://x.com/A.JPG");
    }

    #[test]
    fn draft_rejects_malformed_img_url() {
        let err = PostDraft::new("t", "c", Some("notaurl")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: notaurl is not a valid image URL"
        );

        assert!(PostDraft::new("t", "c", Some("http://x.com/a.pdf")).is_err());
        assert!(PostDraft::new("t", "c", Some("ftp://x.com/a.png")).is_err());
    }

    #[test]
    fn post_serializes_to_wire_shape() {
        let post = Post::new(PostDraft::new("t", "c", None).unwrap());
        let json = serde_json::to_value(&post).unwrap();

        assert!(json.get("_id").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["img_url"], PLACEHOLDER_IMG_URL);
    }
}
