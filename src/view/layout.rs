//! Screen layout and overlay placement.
//!
//! Pure layout logic: splits the frame into header, content and status bar,
//! and decides where each overlay panel lands.

use crate::state::{AppState, Panel, Route};
use crate::view::constants::{
    CONFIRM_HEIGHT, CONFIRM_WIDTH, HEADER_HEIGHT, MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT,
    SHELF_HEIGHT_PERCENT, SHELF_MIN_HEIGHT, STATUS_BAR_HEIGHT, VIEW_SHELF_HEIGHT,
};
use crate::view::styles::Theme;
use crate::view::{book_list, help, overlays, screens, status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render one full frame for the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    let header_area = chunks[0];
    let content_area = chunks[1];
    let status_area = chunks[2];

    render_header(frame, header_area, state, theme);

    match state.route() {
        Route::Home => screens::render_home(frame, content_area, theme),
        Route::Login => screens::render_login(frame, content_area, theme),
        Route::Library => {
            book_list::render_book_list(frame, content_area, &state.library, theme);
            overlays::render_overlay(frame, content_area, &state.library, theme);
        }
    }

    status_bar::render_status_bar(frame, status_area, state, theme);

    if state.help_visible {
        help::render_help_overlay(frame, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let screen = match state.route() {
        Route::Home => "Home",
        Route::Login => "Sign in",
        Route::Library => "Library",
    };
    let line = Line::from(vec![
        Span::styled(" BookLib ", theme.title),
        Span::styled(format!("· {screen}"), theme.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Where a panel is drawn inside the content area.
///
/// Modals are centered; shelves hug the bottom edge at full width.
pub fn panel_area(panel: Panel, area: Rect) -> Rect {
    match panel {
        Panel::ViewShelf => shelf_rect(VIEW_SHELF_HEIGHT, area),
        Panel::EditModal | Panel::AddModal => {
            centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, area)
        }
        Panel::EditShelf | Panel::AddShelf => {
            let height = percent_of(area.height, SHELF_HEIGHT_PERCENT).max(SHELF_MIN_HEIGHT);
            shelf_rect(height, area)
        }
        Panel::ConfirmDialog => centered_fixed(CONFIRM_WIDTH, CONFIRM_HEIGHT, area),
    }
}

/// Full-width strip anchored to the bottom of `area`.
pub fn shelf_rect(height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    }
}

/// Centered rect sized as a percentage of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = percent_of(area.width, percent_x);
    let popup_height = percent_of(area.height, percent_y);
    centered_fixed(popup_width, popup_height, area)
}

/// `percent` of `value`, computed in `u32`.
fn percent_of(value: u16, percent: u16) -> u16 {
    let scaled = u32::from(value) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(value)
}

/// Centered rect of a fixed size, clamped to `area`.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
