// ABOUTME: Session conversation history — an append-only log of question/answer turns.
// ABOUTME: Owned by the chat worker; cleared only on explicit user request.

/// One completed exchange: what the user asked and what the assistant replied.
///
/// A turn is only constructed after a full reply has been obtained, so the
/// history never contains half-written entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

/// Ordered log of turns for one session, oldest first.
///
/// Growth is unbounded within a session; long sessions eventually produce
/// prompts that exceed the backend's context window, and what happens then is
/// the backend's problem. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn at the end.
    pub fn append(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.turns.push(Turn {
            user: user.into(),
            assistant: assistant.into(),
        });
    }

    /// Reset the history to empty.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Iterate turns oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }
}
