// ABOUTME: Conversation core — turn history, prompt building, and answer extraction.
// ABOUTME: Pure logic with no UI or backend dependencies.

pub mod exchange;
pub mod extract;
pub mod history;
pub mod prompt;

pub use exchange::run_exchange;
pub use extract::extract_answer;
pub use history::{History, Turn};
pub use prompt::{SYSTEM_PREAMBLE, build_prompt};
