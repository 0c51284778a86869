//! Shader source being edited, with its own undo history and selection.
//!
//! The editor widget owns keystroke handling; each frame it reports the new
//! text and cursor back here. Menu commands (undo, cut, paste, ...) operate
//! on this buffer and push the resulting cursor back to the widget through
//! [`TextBuffer::take_pending_selection`].

use std::ops::Range;

use crate::utils::text::byte_range;
use crate::utils::Clipboard;

const HISTORY_LIMIT: usize = 256;

#[derive(Clone, Debug)]
struct Snapshot {
    text: String,
    selection: Range<usize>,
}

pub struct TextBuffer {
    text: String,
    /// Source of the program currently on the GPU
    active: String,
    /// Char indices; empty range is a plain cursor
    selection: Range<usize>,
    pending_selection: Option<Range<usize>>,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>, active: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            active: active.into(),
            selection: 0..0,
            pending_selection: None,
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text as one undoable step
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.push_undo();
        self.text = text;
        self.set_selection(0..0);
    }

    /// Text changed inside the editor widget
    pub fn record_edit(&mut self, text: String) {
        if text == self.text {
            return;
        }
        self.push_undo();
        self.text = text;
        self.selection = self.clamp(self.selection.clone());
    }

    /// Cursor/selection reported by the editor widget
    pub fn sync_selection(&mut self, selection: Range<usize>) {
        self.selection = self.clamp(selection);
    }

    #[cfg(test)]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Selection the widget should adopt on its next frame
    pub fn take_pending_selection(&mut self) -> Option<Range<usize>> {
        self.pending_selection.take()
    }

    pub fn is_dirty(&self) -> bool {
        self.text != self.active
    }

    /// The current text has become the active program's source
    pub fn mark_active(&mut self, source: &str) {
        self.active = source.to_owned();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo(&mut self) {
        if let Some(prev) = self.undo.pop() {
            let current = self.snapshot();
            self.redo.push(current);
            self.restore(prev);
        }
    }

    pub fn redo(&mut self) {
        if let Some(next) = self.redo.pop() {
            let current = self.snapshot();
            self.undo.push(current);
            self.restore(next);
        }
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selected_text(&self) -> &str {
        &self.text[byte_range(&self.text, &self.selection)]
    }

    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        if self.has_selection() {
            clipboard.set_text(self.selected_text());
        }
    }

    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        if self.has_selection() {
            self.copy(clipboard);
            self.delete();
        }
    }

    pub fn delete(&mut self) {
        if self.has_selection() {
            self.replace_selection("");
        }
    }

    /// Replace the selection (or insert at the cursor) with clipboard text
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        match clipboard.get_text() {
            Some(text) if !text.is_empty() => self.replace_selection(&text),
            _ => log::debug!("Paste requested with empty clipboard"),
        }
    }

    pub fn select_all(&mut self) {
        let end = self.text.chars().count();
        self.set_selection(0..end);
    }

    fn replace_selection(&mut self, insert: &str) {
        self.push_undo();
        let bytes = byte_range(&self.text, &self.selection);
        self.text.replace_range(bytes, insert);
        let cursor = self.selection.start + insert.chars().count();
        self.set_selection(cursor..cursor);
    }

    fn set_selection(&mut self, selection: Range<usize>) {
        self.selection = self.clamp(selection);
        self.pending_selection = Some(self.selection.clone());
    }

    fn clamp(&self, selection: Range<usize>) -> Range<usize> {
        let len = self.text.chars().count();
        let start = selection.start.min(len);
        start..selection.end.clamp(start, len)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.text.clone(),
            selection: self.selection.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.text = snapshot.text;
        self.set_selection(snapshot.selection);
    }

    fn push_undo(&mut self) {
        let current = self.snapshot();
        self.undo.push(current);
        if self.undo.len() > HISTORY_LIMIT {
            self.undo.remove(0);
        }
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SystemClipboard;

    fn buffer(text: &str) -> TextBuffer {
        TextBuffer::new(text, text)
    }

    #[test]
    fn test_edit_then_undo_redo() {
        let mut b = buffer("void main() {}");
        assert!(!b.can_undo());
        b.record_edit("void main() { x; }".to_string());
        assert!(b.is_dirty());
        assert!(b.can_undo());

        b.undo();
        assert_eq!(b.text(), "void main() {}");
        assert!(!b.is_dirty());
        assert!(b.can_redo());

        b.redo();
        assert_eq!(b.text(), "void main() { x; }");
        assert!(!b.can_redo());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut b = buffer("a");
        b.record_edit("ab".to_string());
        b.undo();
        b.record_edit("ac".to_string());
        assert!(!b.can_redo());
        assert_eq!(b.text(), "ac");
    }

    #[test]
    fn test_unchanged_edit_is_not_recorded() {
        let mut b = buffer("same");
        b.record_edit("same".to_string());
        assert!(!b.can_undo());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut b = buffer("");
        for i in 0..(HISTORY_LIMIT + 10) {
            b.record_edit(i.to_string());
        }
        let mut steps = 0;
        while b.can_undo() {
            b.undo();
            steps += 1;
        }
        assert_eq!(steps, HISTORY_LIMIT);
    }

    #[test]
    fn test_copy_cut_paste() {
        let mut clipboard = SystemClipboard::in_memory();
        let mut b = buffer("float time;");
        b.sync_selection(6..10);
        assert!(b.has_selection());
        assert_eq!(b.selected_text(), "time");

        b.copy(&mut clipboard);
        assert_eq!(clipboard.get_text().as_deref(), Some("time"));

        b.cut(&mut clipboard);
        assert_eq!(b.text(), "float ;");
        assert!(!b.has_selection());
        assert_eq!(b.take_pending_selection(), Some(6..6));

        clipboard.set_text("mouse");
        b.paste(&mut clipboard);
        assert_eq!(b.text(), "float mouse;");
        assert_eq!(b.selection(), 11..11);
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let mut b = buffer("abc");
        b.sync_selection(1..1);
        b.delete();
        assert_eq!(b.text(), "abc");
        assert!(!b.can_undo());
    }

    #[test]
    fn test_paste_replaces_selection_and_undoes() {
        let mut clipboard = SystemClipboard::in_memory();
        clipboard.set_text("vec3");
        let mut b = buffer("vec2 v;");
        b.sync_selection(0..4);
        b.paste(&mut clipboard);
        assert_eq!(b.text(), "vec3 v;");
        b.undo();
        assert_eq!(b.text(), "vec2 v;");
        assert_eq!(b.selection(), 0..4);
    }

    #[test]
    fn test_select_all_counts_chars() {
        let mut b = buffer("é→");
        b.select_all();
        assert_eq!(b.selection(), 0..2);
        assert_eq!(b.selected_text(), "é→");
        assert_eq!(b.take_pending_selection(), Some(0..2));
        assert_eq!(b.take_pending_selection(), None);
    }

    #[test]
    fn test_selection_clamped_to_text() {
        let mut b = buffer("abc");
        b.sync_selection(2..50);
        assert_eq!(b.selection(), 2..3);
    }

    #[test]
    fn test_mark_active_clears_dirty() {
        let mut b = TextBuffer::new("new", "old");
        assert!(b.is_dirty());
        b.mark_active("new");
        assert!(!b.is_dirty());
    }
}
