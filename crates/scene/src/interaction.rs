//! View-state machines for the interactive surface.
//!
//! All state here is explicit and transitioned by pure functions, so any
//! binding layer (native shell, test harness) can drive them identically.

use crate::entity::EntityId;

/// Pointer events delivered by the embedding surface for marker hover.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered a marker; carries the entity name and the pointer's
    /// viewport position in pixels.
    Enter { name: String, x: f64, y: f64 },
    /// Pointer left whatever it was over.
    Leave,
}

/// Hover-label state of the rendering surface.
///
/// Invariant: at most one marker is hovered at a time. A later `Enter`
/// overwrites an earlier one with no intermediate `Idle`, and `Leave` always
/// returns to `Idle` (idempotent when nothing was hovered).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Showing { name: String, x: f64, y: f64 },
}

impl HoverState {
    pub fn transition(self, event: PointerEvent) -> HoverState {
        match event {
            PointerEvent::Enter { name, x, y } => HoverState::Showing { name, x, y },
            PointerEvent::Leave => HoverState::Idle,
        }
    }

    pub fn is_showing(&self) -> bool {
        matches!(self, HoverState::Showing { .. })
    }
}

/// Pointer events delivered for a single boundary region.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegionEvent {
    Enter,
    Leave,
    Press,
    Release,
}

/// Visual interaction state of a boundary region.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RegionPointerState {
    #[default]
    Default,
    Hover,
    Pressed,
}

impl RegionPointerState {
    pub fn transition(self, event: RegionEvent) -> RegionPointerState {
        use RegionPointerState::{Default, Hover, Pressed};
        match (self, event) {
            (_, RegionEvent::Leave) => Default,
            (_, RegionEvent::Press) => Pressed,
            (Pressed, RegionEvent::Release) => Hover,
            (Pressed, RegionEvent::Enter) => Pressed,
            (_, RegionEvent::Enter) => Hover,
            (state, RegionEvent::Release) => state,
        }
    }
}

/// Ordering of the ranked-place listing; a two-option toggle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RosterOrder {
    #[default]
    ByRank,
    ByName,
}

impl RosterOrder {
    pub fn toggled(self) -> RosterOrder {
        match self {
            RosterOrder::ByRank => RosterOrder::ByName,
            RosterOrder::ByName => RosterOrder::ByRank,
        }
    }
}

/// Remote action produced by toggling an interest mark.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkAction {
    Set,
    Clear,
}

/// Per-place "I'm curious too" flag.
///
/// Toggling flips the local flag immediately and reports the remote action to
/// fire; delivery is fire-and-forget, so the flag never waits on transport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct InterestMark {
    marked: bool,
}

impl InterestMark {
    pub fn new(marked: bool) -> Self {
        Self { marked }
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn toggle(&mut self) -> MarkAction {
        if self.marked {
            self.marked = false;
            MarkAction::Clear
        } else {
            self.marked = true;
            MarkAction::Set
        }
    }
}

/// Single-slot focus (detail view) state; last focus wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FocusState {
    selected: Option<EntityId>,
}

impl FocusState {
    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    pub fn focus(&mut self, entity: EntityId) {
        self.selected = Some(entity);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{
        FocusState, HoverState, InterestMark, MarkAction, PointerEvent, RegionEvent,
        RegionPointerState, RosterOrder,
    };
    use crate::entity::EntityId;

    fn enter(name: &str, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Enter {
            name: name.to_string(),
            x,
            y,
        }
    }

    #[test]
    fn enter_shows_the_marker() {
        let state = HoverState::Idle.transition(enter("서울대", 100.0, 200.0));
        assert_eq!(
            state,
            HoverState::Showing {
                name: "서울대".to_string(),
                x: 100.0,
                y: 200.0,
            }
        );
    }

    #[test]
    fn later_enter_wins_without_passing_through_idle() {
        let state = HoverState::Idle
            .transition(enter("연세대", 10.0, 20.0))
            .transition(enter("부산대", 30.0, 40.0));
        assert_eq!(
            state,
            HoverState::Showing {
                name: "부산대".to_string(),
                x: 30.0,
                y: 40.0,
            }
        );
    }

    #[test]
    fn leave_returns_to_idle() {
        let state = HoverState::Idle
            .transition(enter("이화여대", 1.0, 2.0))
            .transition(PointerEvent::Leave);
        assert_eq!(state, HoverState::Idle);
    }

    #[test]
    fn leave_without_enter_is_idempotent() {
        assert_eq!(HoverState::Idle.transition(PointerEvent::Leave), HoverState::Idle);
    }

    #[test]
    fn region_pointer_cycle() {
        use RegionPointerState::{Default, Hover, Pressed};
        let s = Default.transition(RegionEvent::Enter);
        assert_eq!(s, Hover);
        let s = s.transition(RegionEvent::Press);
        assert_eq!(s, Pressed);
        let s = s.transition(RegionEvent::Release);
        assert_eq!(s, Hover);
        let s = s.transition(RegionEvent::Leave);
        assert_eq!(s, Default);
    }

    #[test]
    fn region_release_without_press_keeps_state() {
        use RegionPointerState::{Default, Hover};
        assert_eq!(Default.transition(RegionEvent::Release), Default);
        assert_eq!(Hover.transition(RegionEvent::Release), Hover);
    }

    #[test]
    fn pressed_region_stays_pressed_on_reenter() {
        use RegionPointerState::Pressed;
        assert_eq!(Pressed.transition(RegionEvent::Enter), Pressed);
    }

    #[test]
    fn roster_order_toggles_between_two_options() {
        let order = RosterOrder::default();
        assert_eq!(order, RosterOrder::ByRank);
        assert_eq!(order.toggled(), RosterOrder::ByName);
        assert_eq!(order.toggled().toggled(), RosterOrder::ByRank);
    }

    #[test]
    fn mark_toggle_reports_the_remote_action() {
        let mut mark = InterestMark::default();
        assert!(!mark.is_marked());

        assert_eq!(mark.toggle(), MarkAction::Set);
        assert!(mark.is_marked());

        assert_eq!(mark.toggle(), MarkAction::Clear);
        assert!(!mark.is_marked());
    }

    #[test]
    fn focus_is_single_slot_and_last_wins() {
        let mut focus = FocusState::default();
        assert_eq!(focus.selected(), None);

        focus.focus(EntityId(1));
        focus.focus(EntityId(4));
        assert_eq!(focus.selected(), Some(EntityId(4)));

        focus.clear();
        assert_eq!(focus.selected(), None);
    }
}
