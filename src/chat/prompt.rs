// ABOUTME: Prompt builder — serializes history plus a new question into one flat prompt.
// ABOUTME: Uses a Question:/Answer: template suitable for base (non-instruct) models.

use crate::chat::history::History;

/// Fixed preamble framing the assistant's role. Prepended to every prompt.
pub const SYSTEM_PREAMBLE: &str = "You are a helpful assistant for software engineering. \
Answer concisely and give short code examples when useful. \
If unsure, say you are unsure.\n\n";

/// Build the full generation prompt: preamble, every prior turn as a closed
/// `Question:`/`Answer:` block, then an open block ending in `Answer:` with no
/// trailing content — the continuation point handed to the generator.
///
/// User text is concatenated as-is; there is no escaping. Pure and
/// deterministic for a given history and message.
pub fn build_prompt(history: &History, new_user_message: &str) -> String {
    let mut blocks: Vec<String> = history
        .iter()
        .map(|turn| format!("Question: {}\nAnswer: {}\n", turn.user, turn.assistant))
        .collect();
    blocks.push(format!("Question: {}\nAnswer:", new_user_message));

    format!("{}{}", SYSTEM_PREAMBLE, blocks.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_is_preamble_plus_open_block() {
        let history = History::new();
        let prompt = build_prompt(&history, "What is Rust?");
        assert_eq!(
            prompt,
            format!("{}Question: What is Rust?\nAnswer:", SYSTEM_PREAMBLE)
        );
    }

    #[test]
    fn single_turn_history_emits_closed_then_open_block() {
        let mut history = History::new();
        history.append("u1", "a1");
        let prompt = build_prompt(&history, "u2");
        assert_eq!(
            prompt,
            format!(
                "{}Question: u1\nAnswer: a1\n\nQuestion: u2\nAnswer:",
                SYSTEM_PREAMBLE
            )
        );
    }

    #[test]
    fn turns_appear_oldest_first() {
        let mut history = History::new();
        history.append("first", "1");
        history.append("second", "2");
        let prompt = build_prompt(&history, "third");
        let first_pos = prompt.find("Question: first").unwrap();
        let second_pos = prompt.find("Question: second").unwrap();
        let third_pos = prompt.find("Question: third").unwrap();
        assert!(first_pos < second_pos);
        assert!(second_pos < third_pos);
    }

    #[test]
    fn prompt_ends_at_the_open_answer_marker() {
        let mut history = History::new();
        history.append("q", "a");
        let prompt = build_prompt(&history, "next");
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn user_text_is_not_escaped() {
        let history = History::new();
        let prompt = build_prompt(&history, "what does \"Answer:\" mean?\nreally");
        assert!(prompt.contains("Question: what does \"Answer:\" mean?\nreally\nAnswer:"));
    }

    #[test]
    fn build_is_deterministic() {
        let mut history = History::new();
        history.append("q", "a");
        let a = build_prompt(&history, "msg");
        let b = build_prompt(&history, "msg");
        assert_eq!(a, b);
    }
}
