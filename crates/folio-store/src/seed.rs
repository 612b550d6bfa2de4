//! Built-in default articles, used when no durable collection exists yet or
//! the persisted payload cannot be recovered.

use folio_core::{Article, BlockId, BlockKind, ContentBlock};

fn block(id: &str, kind: BlockKind, value: &str) -> ContentBlock {
    ContentBlock {
        id: BlockId::from(id),
        kind,
        value: value.to_string(),
        caption: None,
        alt: None,
    }
}

fn captioned(id: &str, kind: BlockKind, value: &str, caption: &str) -> ContentBlock {
    ContentBlock {
        caption: Some(caption.to_string()),
        ..block(id, kind, value)
    }
}

/// The default seed set: two fully formed insight articles covering the
/// block vocabulary the renderer consumes.
pub fn default_articles() -> Vec<Article> {
    vec![
        Article {
            id: "art-1".into(),
            title: "The New Era of Digital Regulation".to_string(),
            category: "Technology".to_string(),
            date: "15/05/2024".to_string(),
            author: "Marina Silva".to_string(),
            image: "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?auto=format&fit=crop&q=80&w=1200".to_string(),
            image_alt: "Statue of justice with scales and sword in a modern legal setting".to_string(),
            excerpt: "How the new legal framework for digital guarantees reshapes \
                      compliance for fintechs and traditional banks."
                .to_string(),
            blocks: vec![
                block(
                    "1",
                    BlockKind::Paragraph,
                    "Rapid technological change keeps testing the limits of the \
                     existing legal order. The latest guidelines for the digital \
                     market signal a genuine shift of paradigm.",
                ),
                block("2", BlockKind::Heading, "Algorithmic Transparency"),
                block(
                    "3",
                    BlockKind::Paragraph,
                    "The new rules center on algorithmic transparency and the \
                     protection of sensitive data in high-frequency transactions.",
                ),
                captioned(
                    "4",
                    BlockKind::Quote,
                    "Regulatory compliance in fintech has gone from an obligation \
                     to a pillar of strategic survival.",
                    "Arthur Mello, Senior Partner",
                ),
            ],
        },
        Article {
            id: "art-2".into(),
            title: "Mergers and Acquisitions: Global Trends".to_string(),
            category: "Corporate".to_string(),
            date: "12/05/2024".to_string(),
            author: "Roberto Almeida".to_string(),
            image: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?auto=format&fit=crop&q=80&w=1200".to_string(),
            image_alt: "Two people in suits shaking hands over a meeting table".to_string(),
            excerpt: "A close look at the heating M&A market in clean-energy sectors."
                .to_string(),
            blocks: vec![
                block(
                    "b1",
                    BlockKind::Paragraph,
                    "The M&A market shows remarkable resilience despite global \
                     rate volatility, with an aggressive wave of consolidation \
                     under way.",
                ),
                ContentBlock {
                    id: BlockId::from("b2"),
                    kind: BlockKind::Image,
                    value: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=1200".to_string(),
                    caption: Some("Global market analysis, 2024".to_string()),
                    alt: Some("Bar chart showing financial growth in blue and gray tones".to_string()),
                },
                block(
                    "b3",
                    BlockKind::Paragraph,
                    "Institutional investors now favor assets with auditable ESG \
                     metrics and predictable long-term cash flows.",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_set_is_well_formed() {
        let articles = default_articles();
        assert_eq!(articles.len(), 2);
        for article in &articles {
            assert!(!article.blocks.is_empty());
            assert!(!article.title.is_empty());
            for block in &article.blocks {
                assert!(!block.id.as_str().is_empty());
            }
        }
        // Ids are unique across the set
        assert_ne!(articles[0].id, articles[1].id);
    }

    #[test]
    fn test_seed_covers_rendered_block_kinds() {
        let articles = default_articles();
        let kinds: Vec<BlockKind> = articles
            .iter()
            .flat_map(|a| a.blocks.iter().map(|b| b.kind))
            .collect();
        for kind in [
            BlockKind::Paragraph,
            BlockKind::Heading,
            BlockKind::Image,
            BlockKind::Quote,
        ] {
            assert!(kinds.contains(&kind), "seed set missing {kind:?}");
        }
    }
}
