// ABOUTME: One request/response exchange — prompt build, generation call, answer extraction.
// ABOUTME: Takes history and state explicitly; the caller decides whether to append the turn.

use crate::chat::extract::extract_answer;
use crate::chat::history::History;
use crate::chat::prompt::build_prompt;
use crate::generate::{GenerationConfig, Generator};

/// Run one exchange against the generator: serialize the history plus the new
/// message into a prompt, wait for the full continuation, and extract the
/// reply.
///
/// The history is read, never written; on success the caller appends the turn,
/// and on failure nothing is recorded, so a failed call can never leave a
/// half-written turn behind.
pub async fn run_exchange(
    generator: &dyn Generator,
    history: &History,
    user_msg: &str,
    config: &GenerationConfig,
) -> anyhow::Result<String> {
    let prompt = build_prompt(history, user_msg);
    let raw = generator.generate(&prompt, config).await?;
    Ok(extract_answer(&raw))
}
