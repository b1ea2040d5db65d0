//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the lumina binary.

mod books;
mod commands;
mod tui_handler;

pub use books::{handle_add, handle_list, handle_remove};
pub use commands::{Cli, Commands};
pub use tui_handler::launch_tui;
