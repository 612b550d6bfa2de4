//! folio-store: the durable article collection.
//!
//! Owns the process-wide collection of articles behind a repository
//! interface with an explicit load/persist lifecycle. The storage backend is
//! a single JSON payload behind the `CollectionStore` trait, so the durable
//! medium (file, key-value store, embedded database) is swappable without
//! touching session logic.

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use repository::ArticleRepository;
pub use store::{CollectionStore, JsonFileStore, MemoryStore, default_store_path};
