// ABOUTME: Answer extractor — trims a raw generated continuation down to one answer span.
// ABOUTME: Pure string transform keyed on the literal Question:/Answer: markers.

const ANSWER_MARKER: &str = "Answer:";
const QUESTION_MARKER: &str = "Question:";

/// Extract the assistant's reply from the generator's raw output.
///
/// The generator returns the full prompt plus continuation as one string, so
/// the reply is everything after the *last* `Answer:` marker, trimmed. Base
/// models often keep going and hallucinate a follow-up `Question:` block; when
/// the selected segment contains that marker, the reply is truncated at its
/// first occurrence and trimmed again.
///
/// If no `Answer:` marker is present at all (cannot happen for prompts built
/// by [`build_prompt`](crate::chat::build_prompt), but handled anyway), the
/// trimmed raw text is returned unchanged. An empty result is a valid, if
/// unhelpful, reply.
pub fn extract_answer(raw_generated_text: &str) -> String {
    let Some(idx) = raw_generated_text.rfind(ANSWER_MARKER) else {
        return raw_generated_text.trim().to_string();
    };

    let mut answer = raw_generated_text[idx + ANSWER_MARKER.len()..].trim();
    if let Some(q) = answer.find(QUESTION_MARKER) {
        answer = answer[..q].trim();
    }
    answer.to_string()
}
