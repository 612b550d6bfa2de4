//! Live editing surfaces for rich-text blocks.
//!
//! A `Surface` stands in for the free-form editable region the console binds
//! to a paragraph or heading block. While a surface holds focus it is the
//! sole source of truth for that block's content: keystrokes and inline
//! formatting land here, and the structured block value is stale until an
//! explicit sync point (blur or commit). Keeping edits out of the structured
//! state is what preserves the author's caret and selection across
//! re-renders.

use std::ops::Range;

use crate::session::InlineCommand;

/// Text selection with anchor and head positions, in char offsets.
///
/// The anchor is where the selection started, the head is where the cursor
/// is now. They may be in any order - use `start()` and `end()` for ordered
/// bounds.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where selection started
    pub anchor: usize,
    /// Where cursor is now
    pub head: usize,
}

impl Selection {
    /// Create a new selection.
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor position).
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Get the start (lower bound) of the selection.
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Get the end (upper bound) of the selection.
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Check if the selection is collapsed (empty, cursor only).
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Convert to a Range<usize> (ordered).
    pub fn to_range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

/// The live surface bound to one rich-text block.
///
/// State machine: Clean (text matches the structured value) -> Dirty (a
/// keystroke or formatting command landed since the last sync) -> Clean
/// again on sync. Repeated edits simply re-affirm Dirty.
#[derive(Clone, Debug)]
pub struct Surface {
    text: String,
    selection: Option<Selection>,
    dirty: bool,
}

impl Surface {
    /// Create a clean surface showing the given structured value.
    pub fn new(value: &str) -> Self {
        Self {
            text: value.to_string(),
            selection: None,
            dirty: false,
        }
    }

    /// Current displayed content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current selection, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Whether the surface holds edits the structured value has not seen.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the displayed content wholesale (the keystroke path).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = None;
        self.dirty = true;
    }

    /// Insert text at a char offset, collapsing the selection after it.
    pub fn insert(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.text.chars().count());
        let byte = char_to_byte(&self.text, offset);
        self.text.insert_str(byte, text);
        self.selection = Some(Selection::collapsed(offset + text.chars().count()));
        self.dirty = true;
    }

    /// Set the selection inline formatting acts on. Offsets past the end of
    /// the text are clamped. Selecting does not dirty the surface.
    pub fn select(&mut self, selection: Selection) {
        let len = self.text.chars().count();
        self.selection = Some(Selection::new(
            selection.anchor.min(len),
            selection.head.min(len),
        ));
    }

    /// Apply an inline formatting command to the current selection.
    ///
    /// Without a selection (or with a collapsed one) this is a no-op: the
    /// console only enables formatting while a range is selected.
    pub fn apply(&mut self, command: InlineCommand) {
        let Some(selection) = self.selection else {
            return;
        };
        if selection.is_collapsed() {
            return;
        }
        let range = selection.to_range();
        match command {
            InlineCommand::Bold => self.wrap(range, "<strong>", "</strong>"),
            InlineCommand::Italic => self.wrap(range, "<em>", "</em>"),
            InlineCommand::ClearFormat => self.strip(range),
        }
        self.dirty = true;
    }

    /// Called by the session at a sync point after the structured value has
    /// absorbed the surface content.
    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn wrap(&mut self, range: Range<usize>, open: &str, close: &str) {
        let start = char_to_byte(&self.text, range.start);
        let end = char_to_byte(&self.text, range.end);
        // Insert the closing tag first so the start offset stays valid.
        self.text.insert_str(end, close);
        self.text.insert_str(start, open);
        // Selection keeps covering the same content, now shifted by the
        // opening tag.
        let shift = open.chars().count();
        self.selection = Some(Selection::new(range.start + shift, range.end + shift));
    }

    fn strip(&mut self, range: Range<usize>) {
        let start = char_to_byte(&self.text, range.start);
        let end = char_to_byte(&self.text, range.end);
        let stripped = strip_markup(&self.text[start..end]);
        let stripped_chars = stripped.chars().count();
        self.text.replace_range(start..end, &stripped);
        self.selection = Some(Selection::new(range.start, range.start + stripped_chars));
    }
}

/// Convert a char offset into a byte offset, clamping to the end.
fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Remove inline markup tags (`<strong>`, `<em>`, ...) from a fragment,
/// keeping the text content.
pub fn strip_markup(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
