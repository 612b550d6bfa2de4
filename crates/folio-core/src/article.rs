//! The article document model.
//!
//! Field and variant names on the wire match the persisted JSON payload, so
//! a collection written by an earlier deployment deserializes unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::block::{BlockKind, ContentBlock};

/// Opaque article identifier, stable for the article's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(SmolStr);

impl ArticleId {
    /// Generate an id for a new draft from the current Unix time in
    /// milliseconds. Drafts are created one at a time by a single author, so
    /// millisecond resolution is enough to keep ids distinct.
    pub fn generate() -> Self {
        ArticleId(SmolStr::new(
            chrono::Utc::now().timestamp_millis().to_string(),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        ArticleId(SmolStr::new(s))
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One insight article: scalar metadata plus an ordered block sequence.
///
/// Block order is the reading order. The `date` field is a display string,
/// not a timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub category: String,
    pub date: String,
    pub author: String,
    pub image: String,
    #[serde(rename = "imageAlt", default)]
    pub image_alt: String,
    pub excerpt: String,
    pub blocks: Vec<ContentBlock>,
}

impl Article {
    /// Default category for new drafts.
    pub const DRAFT_CATEGORY: &'static str = "Insights";

    /// Create an empty draft: fresh id, today's date, one empty paragraph.
    pub fn draft() -> Self {
        Self {
            id: ArticleId::generate(),
            title: String::new(),
            category: Self::DRAFT_CATEGORY.to_string(),
            date: chrono::Local::now().format("%d/%m/%Y").to_string(),
            author: String::new(),
            image: String::new(),
            image_alt: String::new(),
            excerpt: String::new(),
            blocks: vec![ContentBlock::empty(BlockKind::Paragraph)],
        }
    }

    /// Find the position of a block by id.
    pub fn block_position(&self, id: &crate::block::BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_shape() {
        let draft = Article::draft();
        assert!(!draft.id.as_str().is_empty());
        assert_eq!(draft.category, "Insights");
        assert_eq!(draft.blocks.len(), 1);
        assert_eq!(draft.blocks[0].kind, BlockKind::Paragraph);
        assert!(draft.blocks[0].value.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let payload = r#"{
            "id": "art-1",
            "title": "A Title",
            "category": "Technology",
            "date": "15 May 2024",
            "author": "M. Silva",
            "image": "https://example.com/cover.jpg",
            "imageAlt": "A statue of justice",
            "excerpt": "Short summary.",
            "blocks": [
                { "id": "1", "type": "p", "value": "Body text." },
                { "id": "2", "type": "quote", "value": "Quoted.", "caption": "A Partner" }
            ]
        }"#;
        let article: Article = serde_json::from_str(payload).unwrap();
        assert_eq!(article.id, ArticleId::from("art-1"));
        assert_eq!(article.image_alt, "A statue of justice");
        assert_eq!(article.blocks[1].kind, BlockKind::Quote);
        assert_eq!(article.blocks[1].caption_str(), "A Partner");

        // imageAlt may be absent in older payloads
        let bare = r#"{
            "id": "art-2", "title": "", "category": "", "date": "",
            "author": "", "image": "", "excerpt": "", "blocks": []
        }"#;
        let article: Article = serde_json::from_str(bare).unwrap();
        assert!(article.image_alt.is_empty());
    }

    #[test]
    fn test_block_position_by_id() {
        let mut article = Article::draft();
        article.blocks.push(ContentBlock::empty(BlockKind::Quote));
        let id = article.blocks[1].id.clone();
        assert_eq!(article.block_position(&id), Some(1));
        assert_eq!(article.block_position(&"missing".into()), None);
    }
}
