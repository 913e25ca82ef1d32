//! Overlay panels: view shelf, edit panel, add panel, delete confirmation.
//!
//! Which panel is drawn, and whether as modal or shelf, comes from
//! [`LibraryState::visible_panel`]. Rendering never changes state.

use crate::model::Book;
use crate::state::{
    AddMode, AddState, BookForm, EditState, FormField, LayoutMode, LibraryState, Overlay, Panel,
};
use crate::view::constants::TEXT_FIELD_HEIGHT;
use crate::view::layout::panel_area;
use crate::view::styles::Theme;
use crate::view::text_field::TextField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

/// Draw the open overlay, if any, on top of `area`.
pub fn render_overlay(frame: &mut Frame, area: Rect, library: &LibraryState, theme: &Theme) {
    let Some(panel) = library.visible_panel() else {
        return;
    };
    let rect = panel_area(panel, area);

    match library.overlay() {
        Overlay::Idle => {}
        Overlay::Viewing(id) => {
            if let Some(book) = library.book(*id) {
                render_view_shelf(frame, rect, book, theme);
            }
        }
        Overlay::Editing(edit) => render_edit_panel(frame, rect, edit, panel, theme),
        Overlay::Adding(add) => render_add_panel(frame, rect, add, library.layout(), theme),
        Overlay::ConfirmDelete(delete) => {
            let Some(book) = library.book(delete.id) else {
                return;
            };
            // The dialog sits on top of the shelf it was opened from
            render_view_shelf(frame, panel_area(Panel::ViewShelf, area), book, theme);
            render_confirm_dialog(frame, rect, book, delete.pending.is_some(), theme);
        }
    }
}

// ===== View shelf =====

fn render_view_shelf(frame: &mut Frame, area: Rect, book: &Book, theme: &Theme) {
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(book.title.clone(), theme.title)),
        Line::from(format!("by {}", book.author)),
        detail("Genre", &book.genre, theme),
        detail("ISBN", &book.isbn, theme),
        detail("Read", if book.read { "Yes" } else { "No" }, theme),
    ];
    if let Some(created_at) = book.created_at {
        lines.push(detail(
            "Added",
            &created_at.format("%Y-%m-%d").to_string(),
            theme,
        ));
    }

    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .title(" Book ")
        .title_bottom(Line::from(Span::styled(
            " e edit · d delete · Esc close ",
            theme.muted,
        )));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn detail(label: &str, value: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme.muted),
        Span::raw(value.to_string()),
    ])
}

// ===== Edit panel =====

fn render_edit_panel(frame: &mut Frame, area: Rect, edit: &EditState, panel: Panel, theme: &Theme) {
    frame.render_widget(Clear, area);

    let mut title = vec![Span::styled(" Edit book ", theme.title)];
    if edit.pending.is_some() {
        title.push(Span::styled("Saving... ", theme.muted));
    }
    let borders = if panel == Panel::EditShelf {
        Borders::TOP | Borders::LEFT | Borders::RIGHT
    } else {
        Borders::ALL
    };
    let block = Block::default()
        .borders(borders)
        .title(Line::from(title))
        .title_bottom(Line::from(Span::styled(
            " Enter save · Tab next field · Esc cancel ",
            theme.muted,
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_form(frame, inner, &edit.form, &FormField::ALL, theme);
}

/// Draw the given fields of a form top to bottom.
fn render_form(frame: &mut Frame, area: Rect, form: &BookForm, fields: &[FormField], theme: &Theme) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|field| match field {
            FormField::Read => Constraint::Length(1),
            _ => Constraint::Length(TEXT_FIELD_HEIGHT),
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, row) in fields.iter().zip(rows.iter()) {
        let focused = form.focus() == Some(*field);
        match form.text(*field) {
            Some(input) => {
                let widget = TextField::new(field.label(), input, theme)
                    .placeholder(field.label())
                    .focused(focused);
                frame.render_widget(widget, *row);
            }
            None => {
                let mark = if form.read { "[x]" } else { "[ ]" };
                let style = if focused { theme.highlight } else { Style::default() };
                let line = Line::from(Span::styled(format!(" {mark} Read "), style));
                frame.render_widget(Paragraph::new(line), *row);
            }
        }
    }
}

// ===== Add panel =====

fn render_add_panel(
    frame: &mut Frame,
    area: Rect,
    add: &AddState,
    layout: LayoutMode,
    theme: &Theme,
) {
    frame.render_widget(Clear, area);

    let mut title = vec![Span::styled(" Add book ", theme.title)];
    if add.working() {
        title.push(Span::styled("Saving... ", theme.muted));
    }
    let borders = if layout == LayoutMode::Narrow {
        Borders::TOP | Borders::LEFT | Borders::RIGHT
    } else {
        Borders::ALL
    };
    let block = Block::default()
        .borders(borders)
        .title(Line::from(title))
        .title_bottom(Line::from(Span::styled(add_hint(add.mode), theme.muted)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let titles: Vec<Line> = AddMode::ALL.iter().map(|m| Line::from(m.label())).collect();
    let selected = AddMode::ALL
        .iter()
        .position(|m| *m == add.mode)
        .unwrap_or_default();
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(theme.highlight)
        .divider("│");
    frame.render_widget(tabs, rows[0]);

    match add.mode {
        AddMode::Search => render_search_tab(frame, rows[1], add, theme),
        AddMode::Manual => render_form(frame, rows[1], &add.draft, &FormField::ALL, theme),
        AddMode::Bulk => render_bulk_tab(frame, rows[1], layout, theme),
    }
}

fn add_hint(mode: AddMode) -> &'static str {
    match mode {
        AddMode::Search => " Enter search · Ctrl+a add · Tab switch · Esc close ",
        AddMode::Manual => " Enter add · Tab next field · Ctrl+t switch · Esc close ",
        AddMode::Bulk => " Tab switch · Esc close ",
    }
}

fn render_search_tab(frame: &mut Frame, area: Rect, add: &AddState, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TEXT_FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let isbn = TextField::new("ISBN", &add.draft.isbn, theme)
        .placeholder("ISBN-10 or ISBN-13")
        .focused(add.draft.focus() == Some(FormField::Isbn));
    frame.render_widget(isbn, rows[0]);

    let status = if add.validating() {
        Line::from(Span::styled("Searching...", theme.muted))
    } else if let Some(error) = &add.search_error {
        Line::from(Span::styled(error.clone(), theme.error))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(status), rows[1]);

    let Some(result) = &add.search_result else {
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(rows[2]);

    let cover_text = match &result.cover_url {
        Some(_) => "(image)",
        None => "No cover",
    };
    let cover = Paragraph::new(Line::from(Span::styled(cover_text, theme.muted)))
        .block(Block::default().borders(Borders::ALL).title("Book Cover"));
    frame.render_widget(cover, columns[0]);

    let action = if add.added {
        Line::from(Span::styled("✓ Added", theme.info))
    } else {
        Line::from(vec![
            Span::styled("[ + Add ]", theme.highlight),
            Span::styled("  Ctrl+a", theme.muted),
        ])
    };
    let details = vec![
        Line::from(Span::styled(result.title.clone(), theme.title)),
        Line::from(format!("by {}", result.author)),
        detail("Genre", &result.genre, theme),
        detail("ISBN", &result.isbn, theme),
        Line::default(),
        action,
    ];
    let paragraph = Paragraph::new(details)
        .block(Block::default().borders(Borders::LEFT))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, columns[1]);
}

fn render_bulk_tab(frame: &mut Frame, area: Rect, layout: LayoutMode, theme: &Theme) {
    let lines = match layout {
        LayoutMode::Wide => vec![
            Line::from(Span::styled("Bulk import is coming soon.", theme.title)),
            Line::from(Span::styled(
                "You will be able to add many books at once from a list of ISBNs.",
                theme.muted,
            )),
        ],
        LayoutMode::Narrow => vec![Line::from(Span::styled(
            "Bulk import is coming soon.",
            theme.title,
        ))],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

// ===== Delete confirmation =====

fn render_confirm_dialog(frame: &mut Frame, area: Rect, book: &Book, deleting: bool, theme: &Theme) {
    frame.render_widget(Clear, area);

    let footer = if deleting {
        Line::from(Span::styled("Deleting...", theme.muted))
    } else {
        Line::from(vec![
            Span::styled("y", theme.accent),
            Span::raw(" delete · "),
            Span::styled("n", theme.accent),
            Span::raw(" keep"),
        ])
    };
    let lines = vec![Line::from(format!("\"{}\" will be removed.", book.title)), footer];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.error)
        .title(" Delete book? ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
