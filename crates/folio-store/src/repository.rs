//! The article repository: owner of the durable, ordered collection.
//!
//! Loaded exactly once per process from the backing store. Every committed
//! mutation (`upsert`, `delete`) immediately persists the whole collection;
//! a failed write leaves the in-memory collection authoritative and the
//! durable copy stale until the next successful write.

use folio_core::{Article, ArticleId};
use tracing::{debug, warn};

use crate::error::Result;
use crate::seed;
use crate::store::CollectionStore;

/// The process-wide article collection, insertion-ordered.
///
/// Newly authored articles are prepended, so the default display order is
/// newest first.
pub struct ArticleRepository<S> {
    store: S,
    articles: Vec<Article>,
}

impl<S: CollectionStore> ArticleRepository<S> {
    /// Read the durable payload once and build the collection.
    ///
    /// A missing payload seeds the built-in default set. A payload that is
    /// present but not parseable as the expected shape is discarded with a
    /// warning and replaced by the defaults - corruption never propagates as
    /// a crash. A read error degrades the same way.
    pub fn load(store: S) -> Self {
        let articles = match store.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Article>>(&payload) {
                Ok(articles) => {
                    debug!(count = articles.len(), "loaded article collection");
                    articles
                }
                Err(err) => {
                    warn!(%err, "discarding unparseable collection payload, seeding defaults");
                    seed::default_articles()
                }
            },
            Ok(None) => {
                debug!("no durable collection found, seeding defaults");
                seed::default_articles()
            }
            Err(err) => {
                warn!(%err, "failed to read collection, seeding defaults");
                seed::default_articles()
            }
        };
        Self { store, articles }
    }

    /// The committed collection, in display order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up an article by id.
    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }

    /// Replace the entry with a matching id in place, or prepend when no
    /// entry matches, then persist.
    ///
    /// On a write failure the in-memory collection keeps the change; the
    /// error tells the caller the durable copy is stale.
    pub fn upsert(&mut self, article: Article) -> Result<()> {
        match self.articles.iter_mut().find(|a| a.id == article.id) {
            Some(existing) => *existing = article,
            None => self.articles.insert(0, article),
        }
        self.persist()
    }

    /// Remove the entry with a matching id, then persist. Deleting an id
    /// that is not present is a silent no-op (the collection is still
    /// rewritten).
    pub fn delete(&mut self, id: &ArticleId) -> Result<()> {
        let before = self.articles.len();
        self.articles.retain(|a| &a.id != id);
        if self.articles.len() == before {
            debug!(%id, "delete of absent article ignored");
        }
        self.persist()
    }

    /// Serialize the whole collection and fully overwrite the durable copy.
    pub fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.articles)
            .map_err(|source| crate::error::StoreError::Serialize { source })?;
        self.store.write(&payload)
    }
}
