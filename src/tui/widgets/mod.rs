// ABOUTME: TUI widget sub-modules for chat, settings row, and status bar.
// ABOUTME: Each widget is a pure rendering function over TuiState.

pub mod chat;
pub mod settings;
pub mod status;
