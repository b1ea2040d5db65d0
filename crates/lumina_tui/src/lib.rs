//! Terminal user interface for the Lumina reading list.
//!
//! Provides an interactive TUI for browsing the shelf, adding books,
//! and reading their insights. Built with ratatui for terminal rendering.

mod app;
mod events;
mod runner;
mod ui;

pub use app::{App, AppMode};
pub use events::{Event, EventHandler};
pub use lumina_error::{TuiError, TuiErrorKind, TuiResult};
pub use runner::run_tui;
