// ABOUTME: Status bar widget — renders model name, turn count, and generating indicator.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Render the status bar line with model, turn count, and busy state.
pub fn status_line(model: &str, turn_count: usize, generating: bool) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(format!(" {} ", model), Style::default().fg(Color::Cyan)),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} {} ", turn_count, plural_turns(turn_count)),
            Style::default().fg(Color::White),
        ),
    ];

    if generating {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled(
            "generating... ",
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled("Ctrl+L clear  Esc quit", dim));
    }

    Line::from(spans)
}

fn plural_turns(count: usize) -> &'static str {
    if count == 1 { "turn" } else { "turns" }
}
