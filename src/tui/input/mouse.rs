use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::App;
use crate::tui::layout;

/// Handle a mouse event: pointer moves feed the per-card hover controllers,
/// clicks move the keyboard cursor, the wheel scrolls the grid.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            pointer_moved(app, Position::new(mouse.column, mouse.row), now);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            click(app, Position::new(mouse.column, mouse.row));
        }
        MouseEventKind::ScrollDown => {
            scroll(app, 1);
        }
        MouseEventKind::ScrollUp => {
            scroll(app, -1);
        }
        _ => {}
    }
}

/// Translate the pointer position into per-card presence transitions.
///
/// For every card the pointer can be over its body (the trigger region),
/// over its popover, or over neither; leaving both is the definitive exit.
/// Rects come from the last render.
fn pointer_moved(app: &mut App, pos: Position, now: Instant) {
    let visible = app.visible_indices();

    for (vis_pos, &card_idx) in visible.iter().enumerate() {
        let trigger_rect = app.card_rects.get(vis_pos).copied().flatten();
        let in_trigger = trigger_rect.is_some_and(|r| r.contains(pos));

        let entry = &mut app.cards[card_idx];
        let in_popover = entry.popover.contains(pos);
        let was_trigger = entry.hover.trigger_hovered();
        let was_popover = entry.hover.popover_hovered();

        if in_trigger && !was_trigger {
            entry.hover.trigger_enter(&mut entry.popover, now);
        }
        if !in_trigger && was_trigger {
            entry.hover.trigger_leave();
        }
        if in_popover && !was_popover {
            entry.hover.popover_enter();
        }
        if !in_popover && was_popover {
            entry.hover.popover_leave();
        }
        if !in_trigger && !in_popover && (was_trigger || was_popover) {
            entry.hover.card_leave(&mut entry.popover);
        }
    }
}

fn click(app: &mut App, pos: Position) {
    if let Some(vis_pos) = app
        .card_rects
        .iter()
        .position(|r| r.is_some_and(|r| r.contains(pos)))
    {
        app.cursor = vis_pos;
    }
}

fn scroll(app: &mut App, delta: i64) {
    let visible = app.visible_indices().len();
    let cols = layout::grid_columns(app.content_area);
    let total_rows = visible.div_ceil(cols);
    let max_scroll = total_rows.saturating_sub(layout::grid_rows(app.content_area));

    let next = app.scroll_rows.saturating_add_signed(delta as isize);
    app.scroll_rows = next.min(max_scroll);
    // Every card rect just shifted; any open preview is now stale
    app.close_all_popovers();
}
