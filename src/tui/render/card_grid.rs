use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::model::CardKind;
use crate::tui::app::App;
use crate::tui::layout;
use crate::util::unicode::truncate_to_width;

/// Render the card grid and record each card body's rect on the app for
/// mouse hit-testing.
pub fn render_card_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible_indices();

    if visible.is_empty() {
        let msg = if app.cards.is_empty() {
            "archive is empty"
        } else {
            "no cards match the filter"
        };
        let para = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(app.theme.dim),
        )));
        frame.render_widget(para, Rect::new(area.x + 1, area.y, area.width.saturating_sub(1), 1));
        app.card_rects = Vec::new();
        return;
    }

    let rects = layout::card_rects(area, visible.len(), app.scroll_rows);

    for (vis_pos, &card_idx) in visible.iter().enumerate() {
        let Some(rect) = rects[vis_pos] else { continue };
        let entry = &app.cards[card_idx];
        let selected = vis_pos == app.cursor;

        let border_style = if selected {
            Style::default().fg(app.theme.selection_border)
        } else {
            Style::default().fg(app.theme.dim)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let kind_color = match entry.card.kind {
            CardKind::Folder => app.theme.folder,
            CardKind::Document => app.theme.document,
        };
        let thumb_glyph = match entry.card.kind {
            CardKind::Folder => "▣",
            CardKind::Document => "▤",
        };
        // Dark-mode thumb inversion swaps the glyph's fg/bg
        let thumb_style = if app.settings.is_thumb_inverted() {
            Style::default().fg(app.theme.background).bg(kind_color)
        } else {
            Style::default().fg(kind_color)
        };

        let title_width = inner.width.saturating_sub(2) as usize;
        let mut lines = vec![Line::from(vec![
            Span::styled(thumb_glyph, thumb_style),
            Span::raw(" "),
            Span::styled(
                truncate_to_width(&entry.card.title, title_width),
                Style::default()
                    .fg(app.theme.text_bright)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        let meta = match entry.card.kind {
            CardKind::Folder => "folder".to_string(),
            CardKind::Document => {
                let size = entry.card.size_display().unwrap_or_default();
                match &entry.card.modified {
                    Some(ts) => format!("{}  {}", size, ts.format("%Y-%m-%d")),
                    None => size,
                }
            }
        };
        lines.push(Line::from(Span::styled(
            truncate_to_width(&meta, inner.width as usize),
            Style::default().fg(app.theme.dim),
        )));

        if app.settings.is_notes_enabled() && entry.card.note_count > 0 {
            lines.push(Line::from(Span::styled(
                format!("{} notes", entry.card.note_count),
                Style::default().fg(app.theme.notes),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    app.card_rects = rects;
}
