//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the tuberank binary.

mod categories;
mod commands;
mod generate;
mod tui_handler;

pub use categories::handle_categories_command;
pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
pub use tui_handler::launch_tui;
