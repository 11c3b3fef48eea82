use crate::angle::{Band, RingKind};
use crate::geometry::{FACE_RADIUS, Point, Polar};
use crate::ring::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Radius interval in which a press grabs the hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitArea {
    pub min_radius: f64,
    pub max_radius: f64,
}

impl HitArea {
    pub fn face() -> Self {
        Self {
            min_radius: 0.0,
            max_radius: FACE_RADIUS,
        }
    }

    pub fn within(max_radius: f64) -> Self {
        Self {
            min_radius: 0.0,
            max_radius,
        }
    }

    pub fn beyond(min_radius: f64) -> Self {
        Self {
            min_radius,
            max_radius: FACE_RADIUS,
        }
    }

    pub fn contains(&self, radius: f64) -> bool {
        radius >= self.min_radius && radius <= self.max_radius.min(FACE_RADIUS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The hand moved onto a new value.
    Changed(Selection),
    /// The pointer was released: the drag is complete.
    Committed(Selection),
}

/// Tracks one hand of the clock while the pointer is held down.
///
/// Pointer positions are relative to the face centre.
#[derive(Debug, Clone)]
pub struct DragHandler {
    kind: RingKind,
    area: HitArea,
    dragable: bool,
    state: DragState,
    reported: Option<u32>,
    latest: Option<Selection>,
}

impl DragHandler {
    pub fn new(kind: RingKind, area: HitArea, dragable: bool, current: u32) -> Self {
        Self {
            kind,
            area,
            dragable,
            state: DragState::Idle,
            reported: Some(kind.normalize(current)),
            latest: None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    pub fn kind(&self) -> RingKind {
        self.kind
    }

    /// Whether a press at `pointer` would start a drag.
    pub fn accepts(&self, pointer: Point) -> bool {
        self.dragable && self.area.contains(Polar::from_offset(Point::default(), pointer).radius)
    }

    /// Value under `pointer`, snapped to its slot.
    pub fn selection_at(&self, pointer: Point) -> Selection {
        let polar = Polar::from_offset(Point::default(), pointer);
        let value = self
            .kind
            .angle_to_value(polar.angle, Band::from_radius(polar.radius));
        Selection::of(self.kind, value)
    }

    pub fn press(&mut self, pointer: Point) -> Option<DragEvent> {
        if !self.accepts(pointer) {
            return None;
        }
        self.state = DragState::Dragging;
        self.track(pointer)
    }

    pub fn motion(&mut self, pointer: Point) -> Option<DragEvent> {
        if !self.is_dragging() {
            return None;
        }
        self.track(pointer)
    }

    pub fn release(&mut self) -> Option<DragEvent> {
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;
        self.latest.take().map(DragEvent::Committed)
    }

    /// Pointer left the face: stop without committing.
    pub fn leave(&mut self) {
        self.state = DragState::Idle;
        self.latest = None;
    }

    /// Records a value chosen elsewhere (tick click) so it is not reported twice.
    pub fn sync(&mut self, value: u32) {
        self.reported = Some(value);
    }

    fn track(&mut self, pointer: Point) -> Option<DragEvent> {
        let selection = self.selection_at(pointer);
        self.latest = Some(selection);

        if self.reported == Some(selection.value) {
            return None;
        }
        self.reported = Some(selection.value);
        Some(DragEvent::Changed(selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{INNER_RING_RADIUS, OUTER_RING_RADIUS};
    use crate::ring::Ring;
    use proptest::prelude::*;

    fn at(radius: f64, degrees: f64) -> Point {
        Point::on_circle(Point::default(), radius, degrees)
    }

    #[test]
    fn test_drag_reports_only_new_values() {
        let mut drag = DragHandler::new(RingKind::Minute, HitArea::face(), true, 0);

        assert_eq!(drag.press(at(100.0, 1.0)), None);
        assert!(drag.is_dragging());

        let mut changes = Vec::new();
        for step in 0..=40 {
            if let Some(DragEvent::Changed(sel)) = drag.motion(at(100.0, step as f64 * 0.5)) {
                changes.push(sel.value);
            }
        }
        assert_eq!(changes, vec![1, 2, 3]);

        assert_eq!(
            drag.release(),
            Some(DragEvent::Committed(Selection::new(3, 18.0)))
        );
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.motion(at(100.0, 90.0)), None);
    }

    #[test]
    fn test_press_outside_area_is_ignored() {
        let mut drag = DragHandler::new(
            RingKind::Hour12,
            HitArea::within(INNER_RING_RADIUS + 10.0),
            true,
            3,
        );
        assert_eq!(drag.press(at(OUTER_RING_RADIUS, 90.0)), None);
        assert!(!drag.is_dragging());
        assert_eq!(drag.press(at(FACE_RADIUS + 5.0, 90.0)), None);

        let event = drag.press(at(INNER_RING_RADIUS, 180.0));
        assert_eq!(event, Some(DragEvent::Changed(Selection::new(6, 180.0))));
    }

    #[test]
    fn test_not_dragable_ignores_press() {
        let mut drag = DragHandler::new(RingKind::Minute, HitArea::face(), false, 0);
        assert_eq!(drag.press(at(OUTER_RING_RADIUS, 90.0)), None);
        assert_eq!(drag.motion(at(OUTER_RING_RADIUS, 120.0)), None);
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn test_leave_does_not_commit() {
        let mut drag = DragHandler::new(RingKind::Minute, HitArea::face(), true, 0);
        drag.press(at(OUTER_RING_RADIUS, 60.0));
        drag.leave();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn test_release_commits_unchanged_value() {
        let mut drag = DragHandler::new(RingKind::Minute, HitArea::face(), true, 10);
        assert_eq!(drag.press(at(OUTER_RING_RADIUS, 60.0)), None);
        assert_eq!(
            drag.release(),
            Some(DragEvent::Committed(Selection::new(10, 60.0)))
        );
    }

    #[test]
    fn test_center_press_reads_as_top() {
        let mut drag = DragHandler::new(RingKind::Hour24, HitArea::face(), true, 5);
        assert_eq!(
            drag.press(Point::default()),
            Some(DragEvent::Changed(Selection::new(0, 0.0)))
        );
    }

    #[test]
    fn test_hour24_band_follows_radius() {
        let drag = DragHandler::new(RingKind::Hour24, HitArea::face(), true, 0);
        assert_eq!(drag.selection_at(at(OUTER_RING_RADIUS, 270.0)).value, 9);
        assert_eq!(drag.selection_at(at(INNER_RING_RADIUS, 270.0)).value, 21);
        assert_eq!(drag.selection_at(at(OUTER_RING_RADIUS, 0.0)).value, 12);
        assert_eq!(drag.selection_at(at(INNER_RING_RADIUS, 0.0)).value, 0);
    }

    #[test]
    fn test_every_tick_click_matches_drag() {
        for ring in [Ring::hours_12(), Ring::hours_24(), Ring::minutes()] {
            let drag = DragHandler::new(ring.kind(), HitArea::face(), true, 0);
            for tick in ring.ticks() {
                assert_eq!(
                    ring.click(tick.center),
                    Some(drag.selection_at(tick.center)),
                    "{:?} tick {}",
                    ring.kind(),
                    tick.value
                );
            }
        }
    }

    proptest! {
        #[test]
        fn test_click_and_drag_agree_near_ticks(
            ring_index in 0..3usize,
            tick_index in 0..60usize,
            radial in -12.0..12.0f64,
            slot_fraction in -0.4..0.4f64,
        ) {
            let ring = [Ring::hours_12(), Ring::hours_24(), Ring::minutes()][ring_index].clone();
            let tick = &ring.ticks()[tick_index % ring.ticks().len()];
            let radius = tick.center.distance(Point::default()) + radial;
            let angle = tick.angle + slot_fraction * ring.kind().step_degrees() / 2.0;
            let pointer = at(radius, angle);

            let drag = DragHandler::new(ring.kind(), HitArea::face(), true, 0);
            prop_assert_eq!(ring.click(pointer), Some(drag.selection_at(pointer)));
        }
    }
}
