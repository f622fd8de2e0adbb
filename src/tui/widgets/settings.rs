// ABOUTME: Settings widget — renders the four sampling knobs as a single row.
// ABOUTME: Highlights the selected knob while the settings row has focus.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::generate::{GenerationConfig, Param};

/// Render the knob row. `selected` is Some(index into [`Param::ALL`]) while the
/// settings row has focus, None otherwise.
pub fn settings_line(config: &GenerationConfig, selected: Option<usize>) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled(" settings ", dim)];

    for (i, param) in Param::ALL.iter().enumerate() {
        let style = if selected == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!(" {}: {} ", param.label(), config.display(*param)),
            style,
        ));
        if i + 1 < Param::ALL.len() {
            spans.push(Span::styled("|", dim));
        }
    }

    if selected.is_some() {
        spans.push(Span::styled(
            "  ←/→ select  ↑/↓ adjust  Esc done",
            dim,
        ));
    } else {
        spans.push(Span::styled("  (Tab to adjust)", dim));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn shows_all_four_knobs() {
        let config = GenerationConfig::default();
        let line = settings_line(&config, None);
        let text = line_text(&line);
        assert!(text.contains("max tokens: 120"));
        assert!(text.contains("temp: 0.50"));
        assert!(text.contains("top-p: 0.90"));
        assert!(text.contains("repeat: 1.15"));
        assert!(text.contains("Tab to adjust"));
    }

    #[test]
    fn selected_knob_is_highlighted() {
        let config = GenerationConfig::default();
        let line = settings_line(&config, Some(1));
        let selected: Vec<&Span> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(Color::Yellow))
            .collect();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].content.contains("temp"));
        assert!(line_text(&line).contains("adjust"));
    }

    #[test]
    fn no_highlight_without_focus() {
        let config = GenerationConfig::default();
        let line = settings_line(&config, None);
        assert!(line.spans.iter().all(|s| s.style.bg.is_none()));
    }
}
