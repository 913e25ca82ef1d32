//! Bordered single-line text input widget.

use crate::state::TextInput;
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text field with a label, optional placeholder and block cursor.
pub struct TextField<'a> {
    label: &'a str,
    input: &'a TextInput,
    placeholder: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TextField<'a> {
    /// Field showing `input` under `label`.
    pub fn new(label: &'a str, input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            label,
            input,
            placeholder: "",
            focused: false,
            theme,
        }
    }

    /// Text shown while the input is empty.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Draw the border and cursor as focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Line to draw inside a border of `inner_width` columns.
    fn content(&self, inner_width: usize) -> Line<'a> {
        let value = self.input.value();

        if !self.focused {
            return if value.is_empty() {
                Line::from(Span::styled(self.placeholder, self.theme.muted))
            } else {
                Line::from(value)
            };
        }

        // Split around the cursor (cursor counts chars)
        let cursor = self.input.cursor();
        let before = scroll_to_fit(value.chars().take(cursor).collect(), inner_width);
        let mut rest = value.chars().skip(cursor);
        let under = rest.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(under, self.theme.cursor),
            Span::raw(after),
        ])
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.label));
        if self.focused {
            block = block.border_style(self.theme.focused_border);
        }

        let inner_width = usize::from(area.width.saturating_sub(2));
        Paragraph::new(self.content(inner_width))
            .block(block)
            .render(area, buf);
    }
}

/// Drop leading characters until the text before the cursor, plus the
/// cursor cell itself, fits in `width` columns.
fn scroll_to_fit(before: String, width: usize) -> String {
    let mut excess = (before.width() + 1).saturating_sub(width);
    if excess == 0 {
        return before;
    }
    let mut chars = before.chars();
    while excess > 0 {
        match chars.next() {
            Some(ch) => excess = excess.saturating_sub(ch.width().unwrap_or(0).max(1)),
            None => break,
        }
    }
    chars.collect()
}
