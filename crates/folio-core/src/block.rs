//! The content-block vocabulary.
//!
//! A block is one unit of article content: a typed `value` plus optional
//! caption and alt text. Block identity is the `id` token - list operations
//! compare blocks by id, never by position or content.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Length of a generated block id token.
const BLOCK_ID_LEN: usize = 9;

/// Alphabet for generated block ids (base-36, lowercase).
const BLOCK_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque block identifier, unique within its owning article.
///
/// Generated ids are 9 random base-36 characters; at that size a collision
/// inside one article is negligible. Seed data may use shorter literal ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(SmolStr);

impl BlockId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut token = String::with_capacity(BLOCK_ID_LEN);
        for _ in 0..BLOCK_ID_LEN {
            let idx = rng.random_range(0..BLOCK_ID_ALPHABET.len());
            token.push(BLOCK_ID_ALPHABET[idx] as char);
        }
        BlockId(SmolStr::new(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        BlockId(SmolStr::new(s))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// The block type vocabulary.
///
/// Serialized names match the persisted payload (`"p"`, `"h2"`, ...).
/// `Subheading` and `List` are part of the wire vocabulary but no renderer
/// consumes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "h2")]
    Heading,
    #[serde(rename = "h3")]
    Subheading,
    #[serde(rename = "img")]
    Image,
    #[serde(rename = "quote")]
    Quote,
    #[serde(rename = "list")]
    List,
}

impl BlockKind {
    /// Whether this kind is edited through a live rich-text surface.
    ///
    /// Rich-text values hold inline markup (bold/italic spans, no block-level
    /// markup). Image values are URLs, quote values plain text; those are
    /// edited directly in the structured state.
    pub fn is_rich_text(self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph | BlockKind::Heading | BlockKind::Subheading
        )
    }
}

/// One unit of article content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub value: String,
    /// Human-visible subtext (figure legend, quote attribution).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Accessibility/SEO description; meaningful only for image blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ContentBlock {
    /// Create an empty block of the given kind with a freshly generated id.
    pub fn empty(kind: BlockKind) -> Self {
        Self {
            id: BlockId::generate(),
            kind,
            value: String::new(),
            caption: None,
            alt: None,
        }
    }

    /// Caption as a plain string, empty when unset.
    pub fn caption_str(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }

    /// Alt text as a plain string, empty when unset.
    pub fn alt_str(&self) -> &str {
        self.alt.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = BlockId::generate();
        assert_eq!(id.as_str().len(), BLOCK_ID_LEN);
        assert!(
            id.as_str()
                .bytes()
                .all(|b| BLOCK_ID_ALPHABET.contains(&b))
        );
    }

    #[test]
    fn test_generated_ids_unique() {
        let ids: HashSet<BlockId> = (0..1000).map(|_| BlockId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_empty_block() {
        let block = ContentBlock::empty(BlockKind::Paragraph);
        assert_eq!(block.kind, BlockKind::Paragraph);
        assert!(block.value.is_empty());
        assert!(block.caption.is_none());
        assert!(block.alt.is_none());
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&BlockKind::Paragraph).unwrap(),
            "\"p\""
        );
        assert_eq!(serde_json::to_string(&BlockKind::Heading).unwrap(), "\"h2\"");
        assert_eq!(serde_json::to_string(&BlockKind::Image).unwrap(), "\"img\"");
        assert_eq!(
            serde_json::to_string(&BlockKind::Quote).unwrap(),
            "\"quote\""
        );

        let kind: BlockKind = serde_json::from_str("\"h3\"").unwrap();
        assert_eq!(kind, BlockKind::Subheading);
    }

    #[test]
    fn test_block_optional_fields_tolerate_absence() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"id":"b1","type":"p","value":"hello"}"#).unwrap();
        assert_eq!(block.id, BlockId::from("b1"));
        assert_eq!(block.caption_str(), "");
        assert_eq!(block.alt_str(), "");
    }

    #[test]
    fn test_rich_text_kinds() {
        assert!(BlockKind::Paragraph.is_rich_text());
        assert!(BlockKind::Heading.is_rich_text());
        assert!(BlockKind::Subheading.is_rich_text());
        assert!(!BlockKind::Image.is_rich_text());
        assert!(!BlockKind::Quote.is_rich_text());
        assert!(!BlockKind::List.is_rich_text());
    }
}
