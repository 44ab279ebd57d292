use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::layout;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let visible = app.visible_indices().len();
    let cols = layout::grid_columns(app.content_area);

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Esc => {
            // Dismiss any open preview; a set filter is cleared second
            app.close_all_popovers();
            if app.last_filter.take().is_some() {
                app.cursor = 0;
                app.scroll_rows = 0;
            }
        }
        KeyCode::Char('/') => {
            app.mode = Mode::Filter;
            app.filter_input = app.last_filter.clone().unwrap_or_default();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            move_cursor(app, visible, app.cursor.saturating_add(cols));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            move_cursor(app, visible, app.cursor.saturating_sub(cols));
        }
        KeyCode::Char('h') | KeyCode::Left => {
            move_cursor(app, visible, app.cursor.saturating_sub(1));
        }
        KeyCode::Char('l') | KeyCode::Right => {
            move_cursor(app, visible, app.cursor.saturating_add(1));
        }
        KeyCode::Char('g') | KeyCode::Home => {
            move_cursor(app, visible, 0);
        }
        KeyCode::Char('G') | KeyCode::End => {
            move_cursor(app, visible, usize::MAX);
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, visible: usize, target: usize) {
    if visible == 0 {
        app.cursor = 0;
        return;
    }
    app.cursor = target.min(visible - 1);
    app.scroll_rows = layout::scroll_for_cursor(app.content_area, app.cursor, app.scroll_rows);
}
