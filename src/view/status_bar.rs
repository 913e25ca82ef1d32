//! One-line status bar: the notice banner when present, else key hints.

use crate::state::{AppState, NoticeLevel, OverlayKind, Route};
use crate::view::styles::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Bottom line: the notice on the library screen, key hints elsewhere.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = match state.library.notice() {
        Some(notice) if state.route() == Route::Library => {
            let style = match notice.level {
                NoticeLevel::Info => theme.info,
                NoticeLevel::Error => theme.error,
            };
            Line::from(Span::styled(format!(" {}", notice.text), style))
        }
        _ => Line::from(Span::styled(key_hints(state), theme.muted)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints(state: &AppState) -> &'static str {
    match state.route() {
        Route::Home => " Enter sign in · ? help · q quit",
        Route::Login => " Enter continue · Esc back · q quit",
        Route::Library => match state.library.overlay().kind() {
            OverlayKind::Idle => " j/k move · Enter open · a add · r reload · ? help · q quit",
            OverlayKind::Viewing => " e edit · d delete · Esc close · ? help",
            OverlayKind::Editing => " Enter save · Esc cancel · F1 help",
            OverlayKind::Adding => " Ctrl+t switch tab · Esc close · F1 help",
            OverlayKind::ConfirmDelete => " y delete · n keep",
        },
    }
}
