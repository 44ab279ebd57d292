use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_filter(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            app.filter_input.clear();
        }
        KeyCode::Enter => {
            app.last_filter = if app.filter_input.is_empty() {
                None
            } else {
                Some(app.filter_input.clone())
            };
            app.mode = Mode::Navigate;
            app.filter_input.clear();
            app.cursor = 0;
            app.scroll_rows = 0;
            // Rects are about to shift under the pointer; drop any preview
            app.close_all_popovers();
        }
        KeyCode::Backspace => {
            app.filter_input.pop();
        }
        KeyCode::Char(c) => {
            app.filter_input.push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::sample_app;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_filters_live_and_enter_applies() {
        let mut app = sample_app();
        app.mode = Mode::Filter;

        for c in "memo".chars() {
            handle_filter(&mut app, key(KeyCode::Char(c)));
        }
        // Live narrowing while typing
        assert_eq!(app.visible_indices(), vec![2]);

        handle_filter(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.last_filter.as_deref(), Some("memo"));
        assert_eq!(app.visible_indices(), vec![2]);
    }

    #[test]
    fn test_esc_cancels_without_applying() {
        let mut app = sample_app();
        app.mode = Mode::Filter;
        handle_filter(&mut app, key(KeyCode::Char('x')));
        handle_filter(&mut app, key(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.last_filter, None);
        assert_eq!(app.visible_indices().len(), 3);
    }

    #[test]
    fn test_empty_enter_clears_filter() {
        let mut app = sample_app();
        app.last_filter = Some("memo".into());
        app.mode = Mode::Filter;
        handle_filter(&mut app, key(KeyCode::Enter));
        assert_eq!(app.last_filter, None);
    }
}
