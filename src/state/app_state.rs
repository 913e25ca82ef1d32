//! Application state and transitions.
//!
//! AppState is the root state type: the active screen, the help overlay and
//! the library view. All transitions are pure functions following the Elm
//! architecture; side effects leave as [`Request`] values.

use crate::client::Request;
use crate::state::library::{LibraryOptions, LibraryState};
use crate::state::message::Msg;
use tracing::debug;

// ===== Route =====

/// Top-level screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing screen.
    #[default]
    Home,
    /// Sign-in placeholder.
    Login,
    /// Book catalog.
    Library,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    route: Route,

    /// Library view. Reset whenever the library screen is left.
    pub library: LibraryState,

    /// Whether the help overlay is visible.
    /// Independent of the library overlays; it never changes them.
    pub help_visible: bool,
}

impl AppState {
    /// Start on the home screen.
    pub fn new(options: LibraryOptions) -> Self {
        Self {
            route: Route::Home,
            library: LibraryState::new(options),
            help_visible: false,
        }
    }

    /// Current screen.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Apply a message and return the requests to execute.
    pub fn update(&mut self, msg: Msg) -> Vec<Request> {
        match msg {
            Msg::Navigate(route) => self.navigate(route),
            Msg::ToggleHelp => {
                self.help_visible = !self.help_visible;
                Vec::new()
            }
            // Layout tracks the terminal on every screen
            Msg::Resize(_) => self.library.update(msg),
            // Completions may arrive after leaving the library; the ticket
            // check inside LibraryState drops them.
            Msg::Completed(_) => self.library.update(msg),
            _ if self.route == Route::Library => self.library.update(msg),
            _ => Vec::new(),
        }
    }

    fn navigate(&mut self, route: Route) -> Vec<Request> {
        if route == self.route {
            return Vec::new();
        }
        debug!(from = ?self.route, to = ?route, "Navigate");
        let leaving_library = self.route == Route::Library;
        self.route = route;

        if leaving_library {
            self.library.reset();
        }
        if route == Route::Library {
            vec![self.library.begin_load()]
        } else {
            Vec::new()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LibraryOptions::default())
    }
}
