//! Book form editing (pure state transitions).
//!
//! Shared by the edit panel and the manual tab of the add panel. The ISBN
//! search tab edits the same form's `isbn` field.

use crate::model::{Book, BookDraft};

// ===== TextInput =====

/// Single-line text buffer with a cursor.
///
/// `cursor` counts chars, not bytes, so multi-byte input is safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Create an input holding `value` with the cursor at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor and advance.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. No-op at 0.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    /// Move the cursor one char left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one char right, stopping at the end.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

// ===== FormField =====

/// Fields of a book form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Book title.
    Title,
    /// Author name.
    Author,
    /// ISBN.
    Isbn,
    /// Genre.
    Genre,
    /// Read checkbox.
    Read,
}

impl FormField {
    /// Fields in tab order.
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Author,
        FormField::Isbn,
        FormField::Genre,
        FormField::Read,
    ];

    /// Field caption.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Isbn => "ISBN",
            FormField::Genre => "Genre",
            FormField::Read => "Read",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Isbn,
            FormField::Isbn => FormField::Genre,
            FormField::Genre => FormField::Read,
            FormField::Read => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Read,
            FormField::Author => FormField::Title,
            FormField::Isbn => FormField::Author,
            FormField::Genre => FormField::Isbn,
            FormField::Read => FormField::Genre,
        }
    }
}

// ===== BookForm =====

/// Local, uncommitted copy of a book's editable fields.
///
/// `focus` is `None` until the form is focused, either by the first
/// keystroke or by the mount-time focus request on narrow terminals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    /// Title input.
    pub title: TextInput,
    /// Author input.
    pub author: TextInput,
    /// ISBN input.
    pub isbn: TextInput,
    /// Genre input.
    pub genre: TextInput,
    /// Read checkbox.
    pub read: bool,
    focus: Option<FormField>,
}

impl BookForm {
    /// Empty draft form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from a persisted book.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: TextInput::new(book.title.as_str()),
            author: TextInput::new(book.author.as_str()),
            isbn: TextInput::new(book.isbn.as_str()),
            genre: TextInput::new(book.genre.as_str()),
            read: book.read,
            focus: None,
        }
    }

    /// Focused field, if any.
    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    /// Focus the first input.
    pub fn focus_first(&mut self) {
        self.focus = Some(FormField::Title);
    }

    /// Focus a specific field.
    pub fn focus_field(&mut self, field: FormField) {
        self.focus = Some(field);
    }

    /// Focus the next field, wrapping.
    pub fn next_field(&mut self) {
        self.focus = Some(self.focus.map_or(FormField::Title, FormField::next));
    }

    /// Focus the previous field, wrapping.
    pub fn prev_field(&mut self) {
        self.focus = Some(self.focus.map_or(FormField::Read, FormField::prev));
    }

    /// Text buffer for a field, `None` for the `Read` checkbox.
    pub fn text(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Title => Some(&self.title),
            FormField::Author => Some(&self.author),
            FormField::Isbn => Some(&self.isbn),
            FormField::Genre => Some(&self.genre),
            FormField::Read => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus? {
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::Isbn => Some(&mut self.isbn),
            FormField::Genre => Some(&mut self.genre),
            FormField::Read => None,
        }
    }

    /// Type a character into the focused field.
    ///
    /// An unfocused form focuses its first field first. Typing on the
    /// `Read` checkbox is ignored.
    pub fn input(&mut self, ch: char) {
        if self.focus.is_none() {
            self.focus_first();
        }
        if let Some(text) = self.focused_text_mut() {
            text.insert(ch);
        }
    }

    /// Delete before the cursor in the focused field.
    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.backspace();
        }
    }

    /// Move the focused field cursor left.
    pub fn cursor_left(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.move_left();
        }
    }

    /// Move the focused field cursor right.
    pub fn cursor_right(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.move_right();
        }
    }

    /// Flip the read checkbox.
    pub fn toggle_read(&mut self) {
        self.read = !self.read;
    }

    /// Request body for the current field values.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.value().to_string(),
            author: self.author.value().to_string(),
            isbn: self.isbn.value().to_string(),
            genre: self.genre.value().to_string(),
            read: self.read,
        }
    }
}
