// ABOUTME: Main TUI rendering function — assembles header, chat, settings, input, and status bar.
// ABOUTME: Splits the terminal frame into vertical layout chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::{Focus, TuiState};
use crate::tui::widgets::chat::render_chat_lines;
use crate::tui::widgets::settings::settings_line;
use crate::tui::widgets::status::status_line;

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut TuiState) {
    let area = frame.area();

    // Maximum height the input area can grow to (in terminal rows).
    const MAX_INPUT_HEIGHT: u16 = 8;

    // +2 accounts for top and bottom borders.
    let input_height = (state.input_line_count() as u16 + 2).clamp(3, MAX_INPUT_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),            // Header
            Constraint::Min(3),               // Chat area
            Constraint::Length(1),            // Settings row
            Constraint::Length(input_height), // Input area
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    // Header
    let header = Line::from(Span::styled(
        " plainchat",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // Chat area
    let chat_lines = render_chat_lines(&state.messages);

    let chat_chunk = chunks[1];
    let visible_height = chat_chunk.height;

    // Use ratatui's own line_count() to get an accurate wrapped line count
    // that exactly matches its internal rendering. This prevents scroll
    // miscalculations that could hide the bottom of chat content.
    let chat_paragraph = Paragraph::new(chat_lines).wrap(Wrap { trim: false });
    let total_lines = chat_paragraph.line_count(chat_chunk.width) as u16;
    let max_scroll = total_lines.saturating_sub(visible_height);

    // Cap scroll_offset so it can't go past the top of the content.
    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    // scroll_offset is lines scrolled up from the bottom (0 = at bottom)
    let scroll = max_scroll.saturating_sub(state.scroll_offset);

    frame.render_widget(chat_paragraph.scroll((scroll, 0)), chat_chunk);

    // Settings row
    let selected = match state.focus {
        Focus::Settings => Some(state.selected_param_index),
        Focus::Input => None,
    };
    frame.render_widget(
        Paragraph::new(settings_line(&state.config, selected)),
        chunks[2],
    );

    // Input area
    let input_chunk = chunks[3];
    let mut input_block = Block::default().borders(Borders::TOP | Borders::BOTTOM);

    if state.generating {
        input_block = input_block.title(Span::styled(
            " generating... ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let input_style = if state.focus == Focus::Settings {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let input = Paragraph::new(Span::styled(state.input.clone(), input_style)).block(input_block);
    frame.render_widget(input, input_chunk);

    // Set cursor position while the input box is being edited.
    if state.focus == Focus::Input && input_chunk.width > 0 && input_chunk.height > 1 {
        state.clamp_cursor();

        let cursor_line = state.cursor_line();
        let cursor_col = state.cursor_column();

        // Compute the visual (display) width of the text before the cursor on its line.
        let lines = state.input_lines();
        let line_text = lines.get(cursor_line).copied().unwrap_or("");
        let prefix: String = line_text.chars().take(cursor_col).collect();
        let visual_col = UnicodeWidthStr::width(prefix.as_str());

        let max_visual_col = input_chunk.width.saturating_sub(1) as usize;
        let clamped_visual_col = visual_col.min(max_visual_col);

        let cursor_x = input_chunk.x.saturating_add(clamped_visual_col as u16);
        // +1 for the top border, then offset by the cursor's line index,
        // clamped so a buffer taller than the input area can't push the
        // cursor past the bottom border.
        let max_line = input_chunk.height.saturating_sub(3) as usize;
        let cursor_y = input_chunk
            .y
            .saturating_add(1 + cursor_line.min(max_line) as u16);
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }

    // Status bar
    let status = status_line(&state.model, state.turn_count, state.generating);
    frame.render_widget(Paragraph::new(status), chunks[4]);
}
