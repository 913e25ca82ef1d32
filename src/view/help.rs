//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' (F1 inside forms), dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::layout::centered_rect;
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        theme.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Library",
        &[
            ("j/↓  k/↑", "Move highlight"),
            ("g/Home  G/End", "First / last book"),
            ("Enter", "Open highlighted book"),
            ("a", "Add a book"),
            ("r", "Reload catalog"),
        ],
    ),
    (
        "Book",
        &[
            ("e", "Edit"),
            ("d", "Delete (asks first)"),
            ("Esc", "Close"),
        ],
    ),
    (
        "Forms",
        &[
            ("Tab / Shift+Tab", "Next / previous field"),
            ("Space", "Toggle read (on the checkbox)"),
            ("Enter", "Save, submit or search"),
            ("Ctrl+t", "Switch add tab"),
            ("Ctrl+a", "Add the search result"),
            ("Esc", "Cancel"),
        ],
    ),
    (
        "Application",
        &[
            ("? / F1", "Toggle this help"),
            ("q / Ctrl+c", "Quit"),
        ],
    ),
];

/// Build the help content lines grouped by category.
fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let key_style = theme.accent.add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (index, (category, entries)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, theme.title)));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<18}"), key_style),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
        let mut result = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    result.push_str(cell.symbol());
                }
            }
            result.push('\n');
        }
        result
    }

    #[test]
    fn render_help_overlay_lists_shortcut_sections() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| render_help_overlay(frame, &Theme::default()))
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Library"));
        assert!(text.contains("Reload catalog"));
    }

    #[test]
    fn render_help_overlay_survives_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();
        terminal
            .draw(|frame| render_help_overlay(frame, &Theme::default()))
            .unwrap();
    }
}
