//! Home and sign-in screens.
//!
//! Both are static: a title, a line of text and one "button" that Enter
//! activates. Sign-in is simulated and never talks to the backend.

use crate::view::layout::centered_fixed;
use crate::view::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 9;

/// Landing card with the sign-in button.
pub fn render_home(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled("Welcome to BookLib", theme.title)),
        Line::default(),
        Line::from("Keep track of the books you own and the ones you have read."),
        Line::default(),
        button("Sign in", theme),
    ];
    render_card(frame, area, lines);
}

/// Sign-in placeholder card.
pub fn render_login(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled("Sign in", theme.title)),
        Line::default(),
        Line::from(Span::styled(
            "Accounts are not implemented yet. Continue to open your library.",
            theme.muted,
        )),
        Line::default(),
        button("Continue", theme),
    ];
    render_card(frame, area, lines);
}

fn button(label: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[ {label} ]"), theme.highlight),
        Span::styled("  Enter", theme.muted),
    ])
}

fn render_card(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let card = centered_fixed(CARD_WIDTH, CARD_HEIGHT, area);
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, card);
}
