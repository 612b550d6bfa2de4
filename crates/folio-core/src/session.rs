//! The editing session: a detached working copy of one article.
//!
//! The session reconciles two independent bookkeeping mechanisms: the
//! structured `blocks` sequence, and the live surfaces bound to rich-text
//! blocks. Surfaces are keyed by block id, so inserting, removing, or
//! reordering blocks never rebinds a surface to the wrong block.
//!
//! Mutations that would violate a structural invariant (removing the last
//! block, moving past a boundary) are silent no-ops rather than errors; the
//! console is expected to disable those controls, and the session simply
//! refuses if it doesn't.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::article::Article;
use crate::block::{BlockId, BlockKind, ContentBlock};
use crate::surface::{Selection, Surface};

/// Top-level scalar attributes of the working copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Category,
    Author,
    Image,
    ImageAlt,
    Excerpt,
}

/// Direction for neighbor swaps. `Up` moves toward index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Inline formatting commands routed to the live surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InlineCommand {
    Bold,
    Italic,
    ClearFormat,
}

/// A transient working copy of one article under authoring.
///
/// Created empty-seeded for a new draft or copy-seeded from a committed
/// article; discarded without effect on cancel; consumed by `commit`.
/// Invariant: the working copy always holds at least one block.
pub struct EditSession {
    article: Article,
    surfaces: HashMap<BlockId, Surface>,
    focused: Option<usize>,
}

impl EditSession {
    /// Start a session on an empty draft.
    pub fn new_draft() -> Self {
        Self::seed(Article::draft())
    }

    /// Start a session on a deep copy of an existing article.
    pub fn edit(article: &Article) -> Self {
        Self::seed(article.clone())
    }

    fn seed(mut article: Article) -> Self {
        // A persisted article can in principle arrive with no blocks; heal
        // it so the session invariant holds from the start.
        if article.blocks.is_empty() {
            article.blocks.push(ContentBlock::empty(BlockKind::Paragraph));
        }
        let surfaces = article
            .blocks
            .iter()
            .filter(|b| b.kind.is_rich_text())
            .map(|b| (b.id.clone(), Surface::new(&b.value)))
            .collect();
        Self {
            article,
            surfaces,
            focused: None,
        }
    }

    /// The current working-copy snapshot.
    ///
    /// For a focused block the structured value may lag behind its live
    /// surface; call `sync_block` or `commit` to reconcile.
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Index of the block whose surface currently owns unsynchronized edits.
    pub fn focused_block(&self) -> Option<usize> {
        self.focused
    }

    /// The live surface bound to the block at `index`, if it is rich text.
    pub fn surface(&self, index: usize) -> Option<&Surface> {
        let block = self.article.blocks.get(index)?;
        self.surfaces.get(&block.id)
    }

    /// Whether the block at `index` holds unsynchronized surface edits.
    pub fn is_dirty(&self, index: usize) -> bool {
        self.surface(index).is_some_and(|s| s.is_dirty())
    }

    /// Replace a top-level scalar attribute. No validation is imposed.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.article.title = value,
            Field::Category => self.article.category = value,
            Field::Author => self.article.author = value,
            Field::Image => self.article.image = value,
            Field::ImageAlt => self.article.image_alt = value,
            Field::Excerpt => self.article.excerpt = value,
        }
    }

    /// Create a block and splice it immediately after `after` (`None`
    /// prepends). An out-of-range position clamps to the end. Returns the
    /// new block.
    pub fn insert_block(&mut self, after: Option<usize>, kind: BlockKind) -> &ContentBlock {
        let at = match after {
            None => 0,
            Some(i) => (i + 1).min(self.article.blocks.len()),
        };
        let block = ContentBlock::empty(kind);
        if kind.is_rich_text() {
            self.surfaces.insert(block.id.clone(), Surface::new(""));
        }
        self.article.blocks.insert(at, block);
        if let Some(focused) = self.focused
            && focused >= at
        {
            self.focused = Some(focused + 1);
        }
        &self.article.blocks[at]
    }

    /// Delete the block at `index`.
    ///
    /// Refused (returns false) when it is the last remaining block - the
    /// one-block floor takes precedence over the request - or when the index
    /// is out of range.
    pub fn remove_block(&mut self, index: usize) -> bool {
        if self.article.blocks.len() <= 1 {
            warn!(index, "refusing to remove the last remaining block");
            return false;
        }
        if index >= self.article.blocks.len() {
            return false;
        }
        let block = self.article.blocks.remove(index);
        self.surfaces.remove(&block.id);
        self.focused = match self.focused {
            Some(f) if f == index => None,
            Some(f) if f > index => Some(f - 1),
            other => other,
        };
        true
    }

    /// Swap the block at `index` with its neighbor. Boundary moves (first
    /// block up, last block down) are no-ops.
    pub fn move_block(&mut self, index: usize, direction: Direction) -> bool {
        let len = self.article.blocks.len();
        if index >= len {
            return false;
        }
        let target = match direction {
            Direction::Up => {
                if index == 0 {
                    return false;
                }
                index - 1
            }
            Direction::Down => {
                if index + 1 >= len {
                    return false;
                }
                index + 1
            }
        };
        self.article.blocks.swap(index, target);
        // Focus follows the block it was on.
        self.focused = match self.focused {
            Some(f) if f == index => Some(target),
            Some(f) if f == target => Some(index),
            other => other,
        };
        true
    }

    /// Mark the block at `index` as owning the live focus. Only rich-text
    /// blocks take focus; other kinds edit the structured state directly.
    pub fn focus_block(&mut self, index: usize) {
        if self
            .article
            .blocks
            .get(index)
            .is_some_and(|b| b.kind.is_rich_text())
        {
            self.focused = Some(index);
        }
    }

    /// Blur the block at `index`: sync its surface and release focus.
    pub fn blur_block(&mut self, index: usize) {
        self.sync_block(index);
        if self.focused == Some(index) {
            self.focused = None;
        }
    }

    /// Replace the live surface content for the block at `index` (the
    /// keystroke path). The structured value stays stale until a sync point.
    pub fn edit_surface(&mut self, index: usize, text: impl Into<String>) {
        if let Some(surface) = self.surface_mut(index) {
            surface.set_text(text);
        }
    }

    /// Set the selection on the live surface bound to the block at `index`.
    pub fn select(&mut self, index: usize, selection: Selection) {
        if let Some(surface) = self.surface_mut(index) {
            surface.select(selection);
        }
    }

    /// Apply an inline formatting command to the live surface bound to the
    /// block at `index`. Intentionally does not touch the structured value:
    /// re-rendering structured state mid-edit would reset the author's caret
    /// and selection.
    pub fn apply_inline_format(&mut self, index: usize, command: InlineCommand) {
        if let Some(surface) = self.surface_mut(index) {
            surface.apply(command);
        }
    }

    /// Directly set the structured value of the block at `index` (image URL,
    /// quote text). On a rich-text block the surface is reset to match so
    /// the two representations stay consistent.
    pub fn set_block_value(&mut self, index: usize, value: impl Into<String>) {
        let value = value.into();
        let Some(block) = self.article.blocks.get_mut(index) else {
            return;
        };
        if let Some(surface) = self.surfaces.get_mut(&block.id) {
            *surface = Surface::new(&value);
        }
        block.value = value;
    }

    /// Set the caption of the block at `index`.
    pub fn set_block_caption(&mut self, index: usize, caption: impl Into<String>) {
        if let Some(block) = self.article.blocks.get_mut(index) {
            block.caption = Some(caption.into());
        }
    }

    /// Set the alt text of the block at `index`.
    pub fn set_block_alt(&mut self, index: usize, alt: impl Into<String>) {
        if let Some(block) = self.article.blocks.get_mut(index) {
            block.alt = Some(alt.into());
        }
    }

    /// The explicit sync point: copy the live surface content into the
    /// structured value for the block at `index`. Idempotent; a no-op for
    /// blocks without a surface.
    pub fn sync_block(&mut self, index: usize) {
        let Some(block) = self.article.blocks.get_mut(index) else {
            return;
        };
        if let Some(surface) = self.surfaces.get_mut(&block.id) {
            block.value = surface.text().to_string();
            surface.mark_clean();
        }
    }

    /// Sync every rich-text block and return the finalized article.
    ///
    /// Runs the sync unconditionally so a block still holding focus at save
    /// time is captured even though it was never blurred. Persistence is the
    /// repository's job, not the session's.
    pub fn commit(mut self) -> Article {
        for index in 0..self.article.blocks.len() {
            self.sync_block(index);
        }
        debug!(id = %self.article.id, "session committed");
        self.article
    }

    fn surface_mut(&mut self, index: usize) -> Option<&mut Surface> {
        let block = self.article.blocks.get(index)?;
        self.surfaces.get_mut(&block.id)
    }
}
