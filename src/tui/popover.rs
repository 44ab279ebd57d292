use ratatui::layout::{Position, Rect};

use super::hover::PopoverSurface;

/// Concrete popover surface for a card's preview.
///
/// Besides the open flag it remembers where it was last drawn, so mouse
/// hit-testing can tell whether the pointer sits on the overlay. The rect is
/// set by the renderer each frame and cleared on close.
#[derive(Debug, Default)]
pub struct PreviewPopover {
    open: bool,
    area: Option<Rect>,
}

impl PreviewPopover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer records where the popover was drawn this frame.
    pub fn set_area(&mut self, area: Rect) {
        self.area = Some(area);
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.open && self.area.is_some_and(|a| a.contains(pos))
    }
}

impl PopoverSurface for PreviewPopover {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
        self.area = None;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_requires_open_and_area() {
        let mut pop = PreviewPopover::new();
        let pos = Position::new(5, 5);
        assert!(!pop.contains(pos));

        pop.open();
        assert!(!pop.contains(pos)); // no area recorded yet

        pop.set_area(Rect::new(0, 0, 10, 10));
        assert!(pop.contains(pos));
        assert!(!pop.contains(Position::new(20, 5)));

        pop.close();
        assert!(!pop.contains(pos)); // close clears the area
    }
}
