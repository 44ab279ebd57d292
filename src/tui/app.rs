use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use regex::Regex;

use crate::io::archive::{Archive, load_archive};
use crate::model::{Card, Settings};

use super::hover::HoverPreviewController;
use super::input;
use super::popover::PreviewPopover;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Filter,
}

/// One card plus the interactive state it owns. Each card gets its own
/// hover controller and popover; cards never share mutable state.
#[derive(Debug)]
pub struct CardEntry {
    pub card: Card,
    pub hover: HoverPreviewController,
    pub popover: PreviewPopover,
}

impl CardEntry {
    pub fn new(card: Card) -> Self {
        CardEntry {
            card,
            hover: HoverPreviewController::new(),
            popover: PreviewPopover::new(),
        }
    }
}

/// Main application state
pub struct App {
    pub archive_name: String,
    pub cards: Vec<CardEntry>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub settings: Settings,
    /// Keyboard cursor into the visible (filtered) card list
    pub cursor: usize,
    /// Vertical scroll offset in card rows
    pub scroll_rows: usize,
    /// Filter mode: pattern being typed
    pub filter_input: String,
    /// Last applied filter pattern
    pub last_filter: Option<String>,
    /// Card body rects from the last render, parallel to `visible_indices()`
    pub card_rects: Vec<Option<Rect>>,
    /// Content area from the last render (for hit-testing and scrolling)
    pub content_area: Rect,
}

impl App {
    pub fn new(archive: Archive) -> Self {
        let theme = Theme::from_config(&archive.config.ui);
        let settings = Settings::from_config(&archive.config);
        let archive_name = archive.name();
        let cards = archive.cards.into_iter().map(CardEntry::new).collect();

        App {
            archive_name,
            cards,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            settings,
            cursor: 0,
            scroll_rows: 0,
            filter_input: String::new(),
            last_filter: None,
            card_rects: Vec::new(),
            content_area: Rect::default(),
        }
    }

    /// The filter regex currently in effect.
    /// In Filter mode: compiles from the input being typed. In Navigate:
    /// compiles from the last applied filter.
    pub fn active_filter_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Filter if !self.filter_input.is_empty() => &self.filter_input,
            Mode::Navigate => self.last_filter.as_deref()?,
            _ => return None,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }

    /// Indices into `cards` that pass the active filter, in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        match self.active_filter_re() {
            Some(re) => self
                .cards
                .iter()
                .enumerate()
                .filter(|(_, e)| re.is_match(&e.card.title))
                .map(|(i, _)| i)
                .collect(),
            None => (0..self.cards.len()).collect(),
        }
    }

    /// The entry under the keyboard cursor, if any
    pub fn cursor_entry(&self) -> Option<&CardEntry> {
        let idx = *self.visible_indices().get(self.cursor)?;
        self.cards.get(idx)
    }

    /// Drive all pending hover reveals. Runs every event-loop tick.
    pub fn tick(&mut self, now: Instant) {
        for entry in &mut self.cards {
            entry.hover.poll(&mut entry.popover, now);
        }
    }

    /// Definitive exit for every card (used by Esc and on filter changes,
    /// when rects shift under the pointer).
    pub fn close_all_popovers(&mut self) {
        for entry in &mut self.cards {
            entry.hover.card_leave(&mut entry.popover);
        }
    }
}

/// Run the TUI application
pub fn run(archive_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let root = match archive_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    let archive = load_archive(&root)?;
    let mut app = App::new(archive);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll so dwell deadlines are checked promptly
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(app, mouse, Instant::now());
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
