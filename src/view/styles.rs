//! Color and style configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles shared by every screen.
///
/// With colors disabled only modifiers remain, so highlights stay visible
/// on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Headings.
    pub title: Style,
    /// Buttons and active tabs.
    pub accent: Style,
    /// Secondary text.
    pub muted: Style,
    /// Selected list row.
    pub highlight: Style,
    /// Text cursor.
    pub cursor: Style,
    /// Error notices and messages.
    pub error: Style,
    /// Info notices.
    pub info: Style,
    /// Border of the focused input.
    pub focused_border: Style,
}

impl Theme {
    /// Styles for the given color setting.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Yellow),
                muted: Style::default().fg(Color::DarkGray),
                highlight: Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
                info: Style::default().fg(Color::Green),
                focused_border: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                accent: Style::default(),
                muted: Style::default().add_modifier(Modifier::DIM),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                error: Style::default().add_modifier(Modifier::BOLD),
                info: Style::default(),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::new(true))
    }
}
