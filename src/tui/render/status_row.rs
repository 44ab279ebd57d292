use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Bottom status row: filter input while typing, key hints otherwise
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.mode {
        Mode::Filter => Line::from(vec![
            Span::styled(" /", Style::default().fg(app.theme.highlight)),
            Span::styled(
                app.filter_input.clone(),
                Style::default().fg(app.theme.text_bright),
            ),
            Span::styled("█", Style::default().fg(app.theme.highlight)),
        ]),
        Mode::Navigate => {
            let mut spans = vec![Span::styled(
                " q quit · / filter · hover a card for a preview",
                Style::default().fg(app.theme.dim),
            )];
            if let Some(entry) = app.cursor_entry() {
                spans.push(Span::styled(
                    format!("  · {}", entry.card.title),
                    Style::default().fg(app.theme.text),
                ));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
