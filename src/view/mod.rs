//! TUI rendering and terminal management (impure shell)

mod book_list;
pub mod constants;
mod help;
pub mod layout;
mod overlays;
mod screens;
mod status_bar;
pub mod styles;
mod text_field;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use styles::{ColorConfig, Theme};
pub use text_field::TextField;

use crate::client::{CatalogApi, RequestWorker, WorkerError};
use crate::config::KeyBindings;
use crate::state::{AppState, KeyOutcome, LibraryOptions, Msg};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Request worker failed to start or died
    #[error(transparent)]
    Worker(#[from] WorkerError),
}

/// Settings the TUI starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Library view settings.
    pub library: LibraryOptions,
    /// Color overrides.
    pub colors: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    worker: RequestWorker,
    key_bindings: KeyBindings,
    theme: Theme,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(options: RunOptions, worker: RequestWorker) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, options, worker))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an app around an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, options: RunOptions, worker: RequestWorker) -> Self {
        Self {
            terminal,
            app_state: AppState::new(options.library),
            worker,
            key_bindings: KeyBindings::default(),
            theme: Theme::with_color_config(options.colors),
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Redraws after input,
    /// resizes and arriving completions; otherwise idles.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(100);

        let width = self.terminal.size()?.width;
        self.dispatch(Msg::Resize(width))?;
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key)? {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.dispatch(Msg::Resize(width))?;
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.poll_completions()? {
                self.draw()?;
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        match crate::state::handle_key(&self.app_state, &self.key_bindings, key) {
            KeyOutcome::Quit => Ok(true),
            KeyOutcome::Msg(msg) => {
                self.dispatch(msg)?;
                Ok(false)
            }
            KeyOutcome::Ignored => Ok(false),
        }
    }

    /// Feed finished requests back into the state machine.
    ///
    /// Returns whether anything arrived.
    pub fn poll_completions(&mut self) -> Result<bool, TuiError> {
        let completions = self.worker.drain();
        let arrived = !completions.is_empty();
        for completion in completions {
            self.dispatch(Msg::Completed(completion))?;
        }
        Ok(arrived)
    }

    /// Apply a message and hand resulting requests to the worker.
    pub fn dispatch(&mut self, msg: Msg) -> Result<(), TuiError> {
        for request in self.app_state.update(msg) {
            self.worker.submit(request)?;
        }
        Ok(())
    }

    /// Render the current frame
    ///
    /// Applies a pending focus request first, so a form opened on a narrow
    /// terminal shows its first field focused as soon as it appears.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        self.app_state.library.apply_focus_request();

        let state = &self.app_state;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, theme);
        })?;

        Ok(())
    }
}

/// Initialize and run the TUI application against a catalog backend
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_client<A>(api: A, options: RunOptions) -> Result<(), TuiError>
where
    A: CatalogApi + Send + 'static,
{
    let worker = RequestWorker::spawn(api)?;
    let mut app = TuiApp::new(options, worker)?;
    info!("TUI started");

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
