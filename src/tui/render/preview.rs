use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::model::CardKind;
use crate::tui::app::App;
use crate::tui::layout;
use crate::util::unicode::truncate_to_width;

/// Draw the preview popover for any card whose dwell has elapsed, and
/// record its rect on the card's popover for hit-testing.
///
/// An open-hidden popover draws nothing; its content is only built after
/// the reveal.
pub fn render_previews(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    let visible = app.visible_indices();

    // Collect first: drawing needs &mut entries while reading card_rects
    let to_draw: Vec<(usize, Rect)> = visible
        .iter()
        .enumerate()
        .filter_map(|(vis_pos, &card_idx)| {
            let trigger = (*app.card_rects.get(vis_pos)?)?;
            let entry = &app.cards[card_idx];
            if entry.hover.content_visible() {
                Some((card_idx, layout::popover_rect(trigger, frame_area)))
            } else {
                None
            }
        })
        .collect();

    let theme = app.theme.clone();
    let notes_enabled = app.settings.is_notes_enabled();

    for (card_idx, rect) in to_draw {
        let entry = &mut app.cards[card_idx];
        entry.popover.set_area(rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.popover_border))
            .title(truncate_to_width(
                &entry.card.title,
                rect.width.saturating_sub(4) as usize,
            ));
        let inner = block.inner(rect);
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);

        let mut lines = Vec::new();
        let meta = match entry.card.kind {
            CardKind::Folder => "folder".to_string(),
            CardKind::Document => {
                let mut parts = Vec::new();
                if let Some(size) = entry.card.size_display() {
                    parts.push(size);
                }
                if let Some(ts) = &entry.card.modified {
                    parts.push(ts.format("%Y-%m-%d %H:%M").to_string());
                }
                if parts.is_empty() {
                    "document".to_string()
                } else {
                    parts.join("  ")
                }
            }
        };
        lines.push(Line::from(Span::styled(
            meta,
            Style::default().fg(theme.dim),
        )));

        if notes_enabled && entry.card.note_count > 0 {
            lines.push(Line::from(Span::styled(
                format!("{} notes", entry.card.note_count),
                Style::default().fg(theme.notes),
            )));
        }

        match &entry.card.snippet {
            Some(snippet) => {
                lines.push(Line::default());
                for text_line in snippet.lines() {
                    lines.push(Line::from(Span::styled(
                        text_line.to_string(),
                        Style::default().fg(theme.text),
                    )));
                }
            }
            None if entry.card.kind == CardKind::Document => {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "no preview available",
                    Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
                )));
            }
            None => {}
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}
