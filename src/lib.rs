//! BookLib
//!
//! Terminal client for a personal library backend: browse the catalog,
//! view, edit and delete books, and add new ones by hand or by ISBN lookup.
//!
//! Pure Core / Impure Shell:
//! - [`state`]: the view-state machine, pure and testable without a terminal
//! - [`client`]: REST client and the worker thread that runs it
//! - [`view`]: ratatui rendering and the event loop

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
