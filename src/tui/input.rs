// ABOUTME: Keyboard input handling for the TUI — translates key events into actions.
// ABOUTME: Handles normal typing, settings-row knob adjustment, and busy mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::state::{Focus, TuiState};

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// User submitted a question.
    Send(String),
    /// User asked to clear the transcript.
    Clear,
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current TUI state and return the resulting action.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    // Ctrl+L clears the transcript from any mode, but not while a request is
    // in flight: the worker would finish the pending exchange after the clear,
    // leaving the transcript and its history disagreeing.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('l') {
        if state.generating {
            return InputResult::None;
        }
        return InputResult::Clear;
    }

    // PageUp/PageDown always scroll, regardless of mode.
    if handle_scroll_key(state, key.code) {
        return InputResult::None;
    }

    // Tab moves focus between the input box and the settings row.
    if key.code == KeyCode::Tab {
        state.focus = match state.focus {
            Focus::Input => Focus::Settings,
            Focus::Settings => Focus::Input,
        };
        return InputResult::None;
    }

    if state.focus == Focus::Settings {
        return handle_settings_key(state, key);
    }

    // Up/Down scroll the transcript while a generation is in flight.
    if state.generating {
        match key.code {
            KeyCode::Up => {
                state.scroll_offset = state.scroll_offset.saturating_add(1);
                return InputResult::None;
            }
            KeyCode::Down => {
                state.scroll_offset = state.scroll_offset.saturating_sub(1);
                return InputResult::None;
            }
            _ => {}
        }
        // All other input is ignored until the reply arrives.
        return InputResult::None;
    }

    // Context-aware Up/Down in normal input mode: move cursor within multiline
    // input first, then fall back to chat scrolling.
    match key.code {
        KeyCode::Up => {
            if !state.move_cursor_up_in_input() {
                state.scroll_offset = state.scroll_offset.saturating_add(1);
            }
            return InputResult::None;
        }
        KeyCode::Down => {
            if !state.move_cursor_down_in_input() {
                state.scroll_offset = state.scroll_offset.saturating_sub(1);
            }
            return InputResult::None;
        }
        _ => {}
    }

    // Normal input mode
    match key.code {
        // Shift+Enter inserts a newline into the input buffer.
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
            state.insert_char_at_cursor('\n');
            InputResult::None
        }
        KeyCode::Enter => {
            if let Some(text) = state.submit_input() {
                InputResult::Send(text)
            } else {
                InputResult::None
            }
        }
        KeyCode::Char(c) => {
            state.insert_char_at_cursor(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace_char();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete_char_at_cursor();
            InputResult::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputResult::None
        }
        KeyCode::Esc => InputResult::Quit,
        _ => InputResult::None,
    }
}

fn handle_scroll_key(state: &mut TuiState, key: KeyCode) -> bool {
    match key {
        KeyCode::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(10);
            true
        }
        KeyCode::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(10);
            true
        }
        _ => false,
    }
}

/// Handle key events while the settings row has focus: Left/Right pick a knob,
/// Up/Down nudge it within its range, Esc returns to the input box.
fn handle_settings_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Left => {
            state.select_param(false);
            InputResult::None
        }
        KeyCode::Right => {
            state.select_param(true);
            InputResult::None
        }
        KeyCode::Up => {
            state.adjust_selected_param(true);
            InputResult::None
        }
        KeyCode::Down => {
            state.adjust_selected_param(false);
            InputResult::None
        }
        KeyCode::Esc | KeyCode::Enter => {
            state.focus = Focus::Input;
            InputResult::None
        }
        _ => InputResult::None,
    }
}
