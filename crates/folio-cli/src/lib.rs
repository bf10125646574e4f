// Library interface for folio-cli so integration tests can reach the
// command parser and theme.

#[path = "commands.rs"]
pub mod commands;

#[path = "theme.rs"]
pub mod theme;

pub use commands::{handle_command, CommandResult};
pub use theme::Theme;
