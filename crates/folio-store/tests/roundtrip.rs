//! File-backed persistence round trip across repository instances.

use folio_core::{BlockKind, EditSession, Field, InlineCommand, Selection};
use folio_store::{ArticleRepository, JsonFileStore};

#[test]
fn edits_survive_a_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio/articles.json");

    let authored_id = {
        let mut repo = ArticleRepository::load(JsonFileStore::new(&path));
        assert_eq!(repo.articles().len(), 2, "first run seeds defaults");

        let mut session = EditSession::new_draft();
        session.set_field(Field::Title, "Cross-Border Arbitration in 2026");
        session.set_field(Field::Author, "Helena Duarte");
        session.edit_surface(0, "Arbitration clauses are being rewritten.");
        session.select(0, Selection::new(0, 11));
        session.apply_inline_format(0, InlineCommand::Bold);
        session.insert_block(Some(0), BlockKind::Quote);
        session.set_block_value(1, "Seats are shifting east.");
        session.set_block_caption(1, "Panel chair");

        let article = session.commit();
        let id = article.id.clone();
        repo.upsert(article).unwrap();
        id
    };

    // A second process: same file, fresh repository.
    let repo = ArticleRepository::load(JsonFileStore::new(&path));
    assert_eq!(repo.articles().len(), 3);

    let article = repo.get(&authored_id).expect("authored article persisted");
    assert_eq!(article.title, "Cross-Border Arbitration in 2026");
    assert_eq!(
        article.blocks[0].value,
        "<strong>Arbitration</strong> clauses are being rewritten."
    );
    assert_eq!(article.blocks[1].kind, BlockKind::Quote);
    assert_eq!(article.blocks[1].caption_str(), "Panel chair");

    // Prepended: the new article displays first.
    assert_eq!(repo.articles()[0].id, authored_id);
}
