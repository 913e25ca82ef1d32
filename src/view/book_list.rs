//! Book list for the library screen.

use crate::state::LibraryState;
use crate::view::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the "Your Library" list: one two-line row per book, backend order.
pub fn render_book_list(frame: &mut Frame, area: Rect, library: &LibraryState, theme: &Theme) {
    let mut title = vec![Span::styled(" Your Library ", theme.title)];
    if library.loading() && !library.books().is_empty() {
        title.push(Span::styled("Loading... ", theme.muted));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title));

    if library.books().is_empty() {
        let text = if library.loading() {
            "Loading..."
        } else {
            "No books yet. Press a to add one."
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(text, theme.muted)))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let selected = library.selected();
    let items: Vec<ListItem> = library
        .books()
        .iter()
        .map(|book| {
            let marker = if Some(book.id) == selected { "● " } else { "  " };
            let title_style = if Some(book.id) == selected {
                theme.accent
            } else {
                ratatui::style::Style::default()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, theme.accent),
                    Span::styled(book.title.clone(), title_style),
                ]),
                Line::from(Span::styled(format!("  {}", book.byline()), theme.muted)),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight);

    let mut list_state = ListState::default().with_selected(Some(library.cursor()));
    frame.render_stateful_widget(list, area, &mut list_state);
}
