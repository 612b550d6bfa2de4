//! folio-core: structured article documents and the editing session.
//!
//! This crate provides:
//! - `ContentBlock` / `BlockKind` - the block vocabulary for article bodies
//! - `Article` - the document model, wire-compatible with the persisted payload
//! - `EditSession` - a detached working copy with block-level mutations and
//!   deferred synchronization against live editing surfaces
//!
//! Persistence lives in `folio-store`; nothing here performs I/O.

pub mod article;
pub mod block;
pub mod session;
pub mod surface;

pub use article::{Article, ArticleId};
pub use block::{BlockId, BlockKind, ContentBlock};
pub use session::{Direction, EditSession, Field, InlineCommand};
pub use smol_str::SmolStr;
pub use surface::{Selection, Surface};
