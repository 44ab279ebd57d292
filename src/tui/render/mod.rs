pub mod card_grid;
pub mod preview;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | card grid | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Min(1),    // card grid
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    app.content_area = chunks[1];
    card_grid::render_card_grid(frame, app, chunks[1]);

    // Preview popovers on top of the grid
    preview::render_previews(frame, app);

    status_row::render_status_row(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let visible = app.visible_indices().len();
    let total = app.cards.len();
    let count = if visible == total {
        format!("{} items", total)
    } else {
        format!("{}/{} items", visible, total)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.archive_name),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(count, Style::default().fg(app.theme.dim)),
    ];
    if let Some(filter) = &app.last_filter {
        spans.push(Span::styled(
            format!("  filter: {}", filter),
            Style::default().fg(app.theme.highlight),
        ));
    }

    let separator = "─".repeat(area.width as usize);
    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(separator, Style::default().fg(app.theme.dim))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
