//! Key event routing (pure).
//!
//! Turns a crossterm key event into a [`Msg`] for the current screen and
//! overlay. Outside text entry the configurable [`KeyBindings`] decide; while
//! a form is focused printable keys become text and only fixed form keys
//! apply.

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::add_flow::AddMode;
use crate::state::app_state::{AppState, Route};
use crate::state::form::{BookForm, FormField};
use crate::state::library::{LibraryState, Overlay};
use crate::state::message::Msg;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means for the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Leave the application.
    Quit,
    /// Feed this message to the state machine.
    Msg(Msg),
    /// Nothing to do.
    Ignored,
}

/// Map a key press to an outcome for the given state.
pub fn handle_key(state: &AppState, bindings: &KeyBindings, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    if state.help_visible {
        return match bindings.get(key) {
            Some(KeyAction::Help) | Some(KeyAction::Close) => KeyOutcome::Msg(Msg::ToggleHelp),
            Some(KeyAction::Quit) => KeyOutcome::Quit,
            _ => KeyOutcome::Ignored,
        };
    }

    if state.route() == Route::Library && state.library.is_text_entry() {
        if key.code == KeyCode::F(1) {
            return KeyOutcome::Msg(Msg::ToggleHelp);
        }
        return form_key(&state.library, key).map_or(KeyOutcome::Ignored, KeyOutcome::Msg);
    }

    let action = bindings.get(key);
    if action == Some(KeyAction::Quit) {
        return KeyOutcome::Quit;
    }
    if action == Some(KeyAction::Help) {
        return KeyOutcome::Msg(Msg::ToggleHelp);
    }

    let msg = match state.route() {
        Route::Home => match action {
            Some(KeyAction::Select) => Some(Msg::Navigate(Route::Login)),
            _ => None,
        },
        Route::Login => match action {
            Some(KeyAction::Select) => Some(Msg::Navigate(Route::Library)),
            Some(KeyAction::Close) => Some(Msg::Navigate(Route::Home)),
            _ => None,
        },
        Route::Library => library_key(&state.library, action, key),
    };
    msg.map_or(KeyOutcome::Ignored, KeyOutcome::Msg)
}

/// Library keys outside text entry.
fn library_key(library: &LibraryState, action: Option<KeyAction>, key: KeyEvent) -> Option<Msg> {
    match library.overlay() {
        Overlay::ConfirmDelete(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Msg::ConfirmDelete(true))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(Msg::ConfirmDelete(false))
            }
            _ => None,
        },
        // Bulk tab: no inputs, only tab switching
        Overlay::Adding(_) => match key.code {
            KeyCode::Tab => Some(Msg::CycleAddMode),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Msg::CycleAddMode)
            }
            KeyCode::Esc => Some(Msg::Close),
            _ => None,
        },
        Overlay::Viewing(_) => match action? {
            KeyAction::OpenEdit => Some(Msg::OpenEdit),
            KeyAction::Delete => Some(Msg::RequestDelete),
            KeyAction::Close => Some(Msg::Close),
            other => list_action(other),
        },
        Overlay::Idle => match action? {
            KeyAction::Close => Some(Msg::Navigate(Route::Home)),
            other => list_action(other),
        },
        // Editing always counts as text entry
        Overlay::Editing(_) => None,
    }
}

/// Actions shared by the idle list and the view shelf.
fn list_action(action: KeyAction) -> Option<Msg> {
    match action {
        KeyAction::CursorUp => Some(Msg::CursorUp),
        KeyAction::CursorDown => Some(Msg::CursorDown),
        KeyAction::CursorFirst => Some(Msg::CursorFirst),
        KeyAction::CursorLast => Some(Msg::CursorLast),
        KeyAction::Select => Some(Msg::PickHighlighted),
        KeyAction::OpenAdd => Some(Msg::OpenAdd),
        KeyAction::Reload => Some(Msg::Reload),
        _ => None,
    }
}

/// Fixed keys while the edit panel or an add tab with inputs is open.
fn form_key(library: &LibraryState, key: KeyEvent) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let (form, submit, close): (&BookForm, Msg, Msg) = match library.overlay() {
        Overlay::Editing(edit) => (&edit.form, Msg::SaveEdit, Msg::CloseEdit),
        Overlay::Adding(add) => {
            let submit = match add.mode {
                AddMode::Search => Msg::SubmitSearch,
                _ => Msg::SubmitManual,
            };
            // Tab switching and adding a hit only exist in the add panel
            match key.code {
                KeyCode::Char('t') if ctrl => return Some(Msg::CycleAddMode),
                KeyCode::Char('a') if ctrl && add.mode == AddMode::Search => {
                    return Some(Msg::AddFoundBook)
                }
                KeyCode::Tab | KeyCode::BackTab if add.mode == AddMode::Search => {
                    return Some(Msg::CycleAddMode)
                }
                _ => {}
            }
            (&add.draft, submit, Msg::Close)
        }
        _ => return None,
    };

    match key.code {
        KeyCode::Esc => Some(close),
        KeyCode::Enter => Some(submit),
        KeyCode::Char('s') if ctrl => Some(submit),
        KeyCode::Tab | KeyCode::Down => Some(Msg::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Msg::PrevField),
        KeyCode::Left => Some(Msg::CursorLeft),
        KeyCode::Right => Some(Msg::CursorRight),
        KeyCode::Backspace => Some(Msg::Backspace),
        KeyCode::Char(' ') if form.focus() == Some(FormField::Read) => Some(Msg::ToggleRead),
        KeyCode::Char(ch) if !ctrl && !alt => Some(Msg::Input(ch)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
