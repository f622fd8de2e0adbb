// ABOUTME: TUI state types — chat messages, worker/user events, input buffer, and knob focus.
// ABOUTME: Drives the TUI rendering and bridges the chat worker to the display.

use crate::generate::{GenerationConfig, Param};

/// The kind of a single chat message displayed in the TUI.
#[derive(Debug, PartialEq)]
pub enum ChatMessageKind {
    User,
    Assistant,
    System,
}

/// A single message in the transcript.
#[derive(Debug)]
pub struct ChatMessage {
    pub kind: ChatMessageKind,
    pub content: String,
}

/// Events sent from the TUI to the chat worker.
#[derive(Debug, PartialEq)]
pub enum UserEvent {
    /// User submitted a question, with the knob values in effect at submission.
    Ask {
        text: String,
        config: GenerationConfig,
    },
    /// User cleared the transcript; the worker drops its history too.
    Clear,
    /// User requested to quit.
    Quit,
}

/// Events sent from the chat worker back to the TUI.
#[derive(Debug, PartialEq)]
pub enum WorkerEvent {
    /// A completed assistant reply.
    Reply(String),
    /// Generation failed; the turn was not recorded.
    Error(String),
}

/// Which part of the screen receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Settings,
}

/// Full TUI application state.
pub struct TuiState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub cursor_pos: usize,
    pub scroll_offset: u16,
    /// True while a generation request is in flight; submissions are ignored
    /// until the reply (or error) arrives, so at most one request runs at a
    /// time.
    pub generating: bool,
    pub focus: Focus,
    /// Index into [`Param::ALL`] of the highlighted knob.
    pub selected_param_index: usize,
    pub config: GenerationConfig,
    pub model: String,
    pub turn_count: usize,
}

impl TuiState {
    /// Create a new empty TUI state for the given model and starting knobs.
    pub fn new(model: String, config: GenerationConfig) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            generating: false,
            focus: Focus::Input,
            selected_param_index: 0,
            config,
            model,
            turn_count: 0,
        }
    }

    /// Add a message to the transcript and reset scroll to bottom.
    pub fn push_message(&mut self, kind: ChatMessageKind, content: String) {
        self.messages.push(ChatMessage { kind, content });
        self.scroll_offset = 0;
    }

    /// Drop the visible transcript (the worker clears its history separately).
    pub fn clear_transcript(&mut self) {
        self.messages.clear();
        self.scroll_offset = 0;
        self.turn_count = 0;
    }

    /// The knob currently highlighted in the settings row.
    pub fn selected_param(&self) -> Param {
        Param::ALL[self.selected_param_index]
    }

    /// Move the knob highlight left or right, saturating at the ends.
    pub fn select_param(&mut self, next: bool) {
        if next {
            self.selected_param_index = (self.selected_param_index + 1).min(Param::ALL.len() - 1);
        } else {
            self.selected_param_index = self.selected_param_index.saturating_sub(1);
        }
    }

    /// Adjust the highlighted knob by one step, clamped to its range.
    pub fn adjust_selected_param(&mut self, up: bool) {
        self.config.step(self.selected_param(), up);
    }

    /// Submit the current input buffer. Returns the trimmed text if non-empty.
    pub fn submit_input(&mut self) -> Option<String> {
        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }
        self.input.clear();
        self.cursor_pos = 0;
        Some(trimmed)
    }

    // --- input buffer editing ---

    /// Clamp the cursor position to the valid character range of the input buffer.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.input_char_len());
    }

    /// Return the current cursor byte index in the UTF-8 input buffer.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.input, self.cursor_pos)
    }

    /// Return the total number of characters in the input buffer.
    pub fn input_char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor and advance by one character.
    pub fn insert_char_at_cursor(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert(byte_index, c);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor (backspace behavior).
    pub fn backspace_char(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }

        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.input, self.cursor_pos - 1);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    /// Delete the character at the cursor (delete behavior).
    pub fn delete_char_at_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.input_char_len() {
            return;
        }

        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.input, self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
    }

    /// Move cursor one character to the left.
    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor one character to the right.
    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.input_char_len() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start of input.
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end of input.
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_char_len();
    }

    // --- multiline input helpers ---

    /// The input buffer split into lines (a trailing newline yields an empty
    /// final line, matching how the cursor can sit there).
    pub fn input_lines(&self) -> Vec<&str> {
        self.input.split('\n').collect()
    }

    /// Number of visual lines in the input buffer.
    pub fn input_line_count(&self) -> usize {
        self.input_lines().len()
    }

    /// Index of the line the cursor sits on.
    pub fn cursor_line(&self) -> usize {
        self.input
            .chars()
            .take(self.cursor_pos)
            .filter(|&c| c == '\n')
            .count()
    }

    /// Character column of the cursor within its line.
    pub fn cursor_column(&self) -> usize {
        let mut column = 0;
        for c in self.input.chars().take(self.cursor_pos) {
            if c == '\n' {
                column = 0;
            } else {
                column += 1;
            }
        }
        column
    }

    /// Move the cursor up one input line, keeping the column where possible.
    /// Returns false if the cursor is already on the first line.
    pub fn move_cursor_up_in_input(&mut self) -> bool {
        self.clamp_cursor();
        let line = self.cursor_line();
        if line == 0 {
            return false;
        }
        let column = self.cursor_column();
        self.cursor_pos = char_pos_at(&self.input, line - 1, column);
        true
    }

    /// Move the cursor down one input line, keeping the column where possible.
    /// Returns false if the cursor is already on the last line.
    pub fn move_cursor_down_in_input(&mut self) -> bool {
        self.clamp_cursor();
        let line = self.cursor_line();
        if line + 1 >= self.input_line_count() {
            return false;
        }
        let column = self.cursor_column();
        self.cursor_pos = char_pos_at(&self.input, line + 1, column);
        true
    }
}

/// Character position of (line, column) in `s`, clamping the column to the
/// target line's length.
fn char_pos_at(s: &str, line: usize, column: usize) -> usize {
    let mut pos = 0;
    for (i, l) in s.split('\n').enumerate() {
        let len = l.chars().count();
        if i == line {
            return pos + column.min(len);
        }
        pos += len + 1; // +1 for the newline
    }
    s.chars().count()
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}
