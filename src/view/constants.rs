//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for the notice banner or keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the view shelf in lines (border included).
pub const VIEW_SHELF_HEIGHT: u16 = 9;

/// Width percentage for edit/add modals on wide terminals.
pub const MODAL_WIDTH_PERCENT: u16 = 60;

/// Height percentage for edit/add modals on wide terminals.
pub const MODAL_HEIGHT_PERCENT: u16 = 70;

/// Height percentage of the content area taken by edit/add shelves.
pub const SHELF_HEIGHT_PERCENT: u16 = 65;

/// Minimum shelf height so every form field fits.
pub const SHELF_MIN_HEIGHT: u16 = 12;

/// Width of the delete confirmation dialog.
pub const CONFIRM_WIDTH: u16 = 36;
/// Height of the delete confirmation dialog.
pub const CONFIRM_HEIGHT: u16 = 5;

/// Height of a bordered single-line text field.
pub const TEXT_FIELD_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
