use ratatui::layout::Rect;

/// Fixed card cell geometry for the grid
pub const CARD_WIDTH: u16 = 26;
pub const CARD_HEIGHT: u16 = 5;
const H_GAP: u16 = 2;
const V_GAP: u16 = 1;

/// Preview popover geometry
pub const POPOVER_WIDTH: u16 = 42;
pub const POPOVER_HEIGHT: u16 = 12;

/// Number of card columns that fit in the content area (at least 1)
pub fn grid_columns(area: Rect) -> usize {
    ((area.width + H_GAP) / (CARD_WIDTH + H_GAP)).max(1) as usize
}

/// Number of full card rows that fit in the content area (at least 1)
pub fn grid_rows(area: Rect) -> usize {
    ((area.height + V_GAP) / (CARD_HEIGHT + V_GAP)).max(1) as usize
}

/// Compute where each card lands in the content area, given a vertical
/// scroll offset in card rows. Off-screen cards get None. Used by both the
/// renderer and mouse hit-testing.
pub fn card_rects(area: Rect, count: usize, scroll_rows: usize) -> Vec<Option<Rect>> {
    let cols = grid_columns(area);
    let visible = grid_rows(area);

    (0..count)
        .map(|i| {
            let col = (i % cols) as u16;
            let row = i / cols;
            if row < scroll_rows || row >= scroll_rows + visible {
                return None;
            }
            let x = area.x + col * (CARD_WIDTH + H_GAP);
            let y = area.y + ((row - scroll_rows) as u16) * (CARD_HEIGHT + V_GAP);
            let rect = Rect::new(
                x,
                y,
                CARD_WIDTH.min(area.right().saturating_sub(x)),
                CARD_HEIGHT.min(area.bottom().saturating_sub(y)),
            );
            if rect.width == 0 || rect.height == 0 {
                None
            } else {
                Some(rect)
            }
        })
        .collect()
}

/// Scroll offset (in card rows) that keeps `cursor` visible.
pub fn scroll_for_cursor(area: Rect, cursor: usize, scroll_rows: usize) -> usize {
    let cols = grid_columns(area);
    let visible = grid_rows(area);
    let row = cursor / cols;
    if row < scroll_rows {
        row
    } else if row >= scroll_rows + visible {
        row + 1 - visible
    } else {
        scroll_rows
    }
}

/// Place the preview popover next to its card: to the right when there is
/// room, otherwise to the left, otherwise overlapping. Always clamped inside
/// the frame.
pub fn popover_rect(trigger: Rect, frame: Rect) -> Rect {
    let w = POPOVER_WIDTH.min(frame.width);
    let h = POPOVER_HEIGHT.min(frame.height);

    let x = if trigger.right() + w <= frame.right() {
        trigger.right()
    } else if trigger.x >= frame.x + w {
        trigger.x - w
    } else {
        frame.right().saturating_sub(w)
    };

    let y = trigger.y.min(frame.bottom().saturating_sub(h)).max(frame.y);

    Rect::new(x, y, w, h)
}
