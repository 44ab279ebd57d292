use std::time::{Duration, Instant};

/// Minimum sustained hover before preview content is revealed
pub const DWELL_DELAY: Duration = Duration::from_millis(600);

/// The floating overlay a hover controller drives. Open/close are
/// synchronous and limited to visual state; only the owning controller
/// calls them.
pub trait PopoverSurface {
    fn open(&mut self);
    fn close(&mut self);
    fn is_open(&self) -> bool;
}

/// Popover visibility as the controller sees it. `OpenHidden` means the
/// surface is open but its content has not been revealed yet, so nothing
/// expensive is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverVisibility {
    #[default]
    Closed,
    OpenHidden,
    OpenVisible,
}

/// Per-card mediator between pointer events and the popover surface.
///
/// Hovering the card body opens the popover immediately but hidden; the
/// content is revealed only after the pointer has dwelt for [`DWELL_DELAY`].
/// There is no explicit timer cancellation: the pending reveal is a deadline
/// consumed by [`poll`](Self::poll), and its effect is gated on the presence
/// flags as they read at fire time, not as they were when scheduled. Leaving
/// before the deadline therefore makes the fire a close, and a fire landing
/// after [`card_leave`](Self::card_leave) re-closes an already-closed
/// popover instead of reopening it.
#[derive(Debug, Default)]
pub struct HoverPreviewController {
    /// Pointer is over the card body (the trigger region)
    trigger_hovered: bool,
    /// Pointer is over the popover surface itself
    popover_hovered: bool,
    /// Pending reveal deadline; at most one per card
    reveal_at: Option<Instant>,
    visibility: PopoverVisibility,
}

impl HoverPreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> PopoverVisibility {
        self.visibility
    }

    /// Whether the popover's content should be drawn this frame.
    pub fn content_visible(&self) -> bool {
        self.visibility == PopoverVisibility::OpenVisible
    }

    pub fn trigger_hovered(&self) -> bool {
        self.trigger_hovered
    }

    pub fn popover_hovered(&self) -> bool {
        self.popover_hovered
    }

    /// Pointer entered the card body. Opens the popover (hidden) and arms
    /// the reveal deadline, unless the popover is already open — then a
    /// reveal is already scheduled or visible and only presence changes.
    pub fn trigger_enter(&mut self, popover: &mut dyn PopoverSurface, now: Instant) {
        self.trigger_hovered = true;
        if popover.is_open() {
            return;
        }
        popover.open();
        self.visibility = PopoverVisibility::OpenHidden;
        self.reveal_at = Some(now + DWELL_DELAY);
    }

    /// Pointer left the card body. Not a close: it may be on its way onto
    /// the popover surface. Closing belongs to the deadline check or to
    /// `card_leave`.
    pub fn trigger_leave(&mut self) {
        self.trigger_hovered = false;
    }

    /// Pointer entered the popover surface.
    pub fn popover_enter(&mut self) {
        self.popover_hovered = true;
    }

    /// Pointer left the popover surface.
    pub fn popover_leave(&mut self) {
        self.popover_hovered = false;
    }

    /// Pointer left the whole card region (body, popover and chrome).
    /// Definitive exit: closes unconditionally, idempotent. The pending
    /// deadline is left in place; the presence check at fire time turns it
    /// into a no-op.
    pub fn card_leave(&mut self, popover: &mut dyn PopoverSurface) {
        self.trigger_hovered = false;
        self.popover_hovered = false;
        popover.close();
        self.visibility = PopoverVisibility::Closed;
    }

    /// Drive the pending reveal; call once per event-loop tick. When the
    /// deadline has passed it is consumed, and presence is sampled NOW: a
    /// still-hovered open popover reveals its content, anything else closes.
    pub fn poll(&mut self, popover: &mut dyn PopoverSurface, now: Instant) {
        let Some(due) = self.reveal_at else {
            return;
        };
        if now < due {
            return;
        }
        self.reveal_at = None;
        if self.trigger_hovered && popover.is_open() {
            self.visibility = PopoverVisibility::OpenVisible;
        } else {
            popover.close();
            self.visibility = PopoverVisibility::Closed;
        }
    }

    #[cfg(test)]
    fn reveal_pending(&self) -> bool {
        self.reveal_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Recording popover: tracks open state plus call counts so tests can
    /// see redundant closes and would-be reopens.
    #[derive(Debug, Default)]
    struct MockPopover {
        open: bool,
        open_calls: usize,
        close_calls: usize,
    }

    impl PopoverSurface for MockPopover {
        fn open(&mut self) {
            self.open = true;
            self.open_calls += 1;
        }
        fn close(&mut self) {
            self.open = false;
            self.close_calls += 1;
        }
        fn is_open(&self) -> bool {
            self.open
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup() -> (HoverPreviewController, MockPopover, Instant) {
        (
            HoverPreviewController::new(),
            MockPopover::default(),
            Instant::now(),
        )
    }

    #[test]
    fn test_scenario_a_sustained_hover_reveals_at_dwell() {
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenHidden);
        assert!(pop.is_open());
        assert!(!ctrl.content_visible());

        // Just before the dwell elapses: still hidden
        ctrl.poll(&mut pop, t0 + ms(599));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenHidden);

        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);
        assert!(pop.is_open());
        assert!(ctrl.content_visible());
    }

    #[test]
    fn test_scenario_b_leave_before_dwell_closes_at_fire() {
        // P1: no premature reveal
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        ctrl.trigger_leave();
        ctrl.poll(&mut pop, t0 + ms(100));
        // Deadline not reached yet; popover stays open-hidden
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenHidden);

        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::Closed);
        assert!(!pop.is_open());
    }

    #[test]
    fn test_scenario_c_reentry_reuses_original_window() {
        // Enter, leave, re-enter all before the dwell elapses: the popover
        // never closed, so the original deadline stands and presence at fire
        // time wins.
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        ctrl.poll(&mut pop, t0 + ms(100));
        ctrl.trigger_leave();
        ctrl.poll(&mut pop, t0 + ms(200));
        ctrl.trigger_enter(&mut pop, t0 + ms(200));

        // P5: re-entry did not arm a second deadline
        assert_eq!(pop.open_calls, 1);
        assert!(ctrl.reveal_pending());

        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);

        ctrl.poll(&mut pop, t0 + ms(800));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);
    }

    #[test]
    fn test_scenario_d_card_leave_beats_pending_reveal() {
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        ctrl.card_leave(&mut pop);
        assert_eq!(ctrl.visibility(), PopoverVisibility::Closed);
        assert!(!pop.is_open());

        // The deadline was deliberately not cleared; firing must re-close,
        // never reopen.
        assert!(ctrl.reveal_pending());
        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::Closed);
        assert!(!pop.is_open());
        assert_eq!(pop.open_calls, 1);
    }

    #[test]
    fn test_reveal_happens_exactly_once() {
        // P2: no second transition after the reveal
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);
        assert!(!ctrl.reveal_pending());

        // Further ticks are inert
        ctrl.poll(&mut pop, t0 + ms(700));
        ctrl.poll(&mut pop, t0 + ms(5000));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);
        assert_eq!(pop.open_calls, 1);
        assert_eq!(pop.close_calls, 0);
    }

    #[test]
    fn test_card_leave_is_idempotent() {
        // P3: repeated definitive exits in any state are safe
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.card_leave(&mut pop);
        ctrl.card_leave(&mut pop);
        assert_eq!(ctrl.visibility(), PopoverVisibility::Closed);

        ctrl.trigger_enter(&mut pop, t0);
        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);

        ctrl.card_leave(&mut pop);
        ctrl.card_leave(&mut pop);
        ctrl.card_leave(&mut pop);
        assert_eq!(ctrl.visibility(), PopoverVisibility::Closed);
        assert!(!pop.is_open());
    }

    #[test]
    fn test_presence_is_sampled_at_fire_time() {
        // P4: many enter/leave pairs before the deadline; only the last
        // state matters
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        for i in 0..5u64 {
            ctrl.trigger_leave();
            ctrl.trigger_enter(&mut pop, t0 + ms(50 + i * 50));
        }
        ctrl.trigger_leave();

        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::Closed);
        assert!(!pop.is_open());
        assert_eq!(pop.open_calls, 1);
    }

    #[test]
    fn test_fresh_window_after_definitive_exit() {
        // Re-entry after card_leave starts over: popover reopens and the
        // stale deadline slot is overwritten, not duplicated.
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        ctrl.card_leave(&mut pop);
        ctrl.trigger_enter(&mut pop, t0 + ms(100));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenHidden);
        assert_eq!(pop.open_calls, 2);

        // Old deadline (t0+600) is gone; the new window ends at t0+700
        ctrl.poll(&mut pop, t0 + ms(650));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenHidden);

        ctrl.poll(&mut pop, t0 + ms(700));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);
    }

    #[test]
    fn test_pointer_parked_on_popover_keeps_it_open() {
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);

        // Moving from the card body onto the popover surface is not an exit
        ctrl.trigger_leave();
        ctrl.popover_enter();
        ctrl.poll(&mut pop, t0 + ms(700));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);
        assert!(pop.is_open());
    }

    #[test]
    fn test_late_enter_after_missed_window_rearms() {
        let (mut ctrl, mut pop, t0) = setup();

        ctrl.trigger_enter(&mut pop, t0);
        ctrl.trigger_leave();
        // Fire closes (presence false)
        ctrl.poll(&mut pop, t0 + ms(600));
        assert_eq!(ctrl.visibility(), PopoverVisibility::Closed);

        // A fresh hover goes through the whole sequence again
        ctrl.trigger_enter(&mut pop, t0 + ms(900));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenHidden);
        ctrl.poll(&mut pop, t0 + ms(1500));
        assert_eq!(ctrl.visibility(), PopoverVisibility::OpenVisible);
    }
}
