use super::{ModeEvent, PointerInput};
use crate::angle::RingKind;
use crate::drag::{DragEvent, DragHandler, HitArea};
use crate::geometry::Point;
use crate::ring::{Ring, Selection};
use crate::time::TimeValue;
use crate::transition::{Step, StepTimer};
use std::time::Instant;

/// One hand, one active ring at a time: hours first, then minutes.
#[derive(Debug, Clone)]
pub struct TwentyFourHourMode {
    step: Step,
    rotation: f64,
    time: TimeValue,
    auto_mode: bool,
    dragable: bool,
    hour_ring: Ring,
    minute_ring: Ring,
    drag: DragHandler,
    timer: StepTimer,
}

impl TwentyFourHourMode {
    pub fn new(time: TimeValue, step: Step, auto_mode: bool, dragable: bool) -> Self {
        let kind = Self::ring_kind(step);
        Self {
            step,
            rotation: Self::rotation_for(step, time),
            time,
            auto_mode,
            dragable,
            hour_ring: Ring::hours_24(),
            minute_ring: Ring::minutes(),
            drag: DragHandler::new(kind, HitArea::face(), dragable, Self::value_for(step, time)),
            timer: StepTimer::new(),
        }
    }

    fn ring_kind(step: Step) -> RingKind {
        match step {
            Step::Hour => RingKind::Hour24,
            Step::Minute => RingKind::Minute,
        }
    }

    fn value_for(step: Step, time: TimeValue) -> u32 {
        match step {
            Step::Hour => time.hour(),
            Step::Minute => time.minute(),
        }
    }

    fn rotation_for(step: Step, time: TimeValue) -> f64 {
        Self::ring_kind(step).value_to_angle(Self::value_for(step, time))
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn active_ring(&self) -> &Ring {
        match self.step {
            Step::Hour => &self.hour_ring,
            Step::Minute => &self.minute_ring,
        }
    }

    /// The hour-to-minute transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn transition_due(&self) -> Option<Instant> {
        self.timer.due()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Newer time from the owner. The hand stays put until the next step change.
    pub fn update_time(&mut self, time: TimeValue) {
        self.time = time;
        self.drag.sync(Self::value_for(self.step, time));
    }

    pub fn pointer(&mut self, input: PointerInput, now: Instant) -> Vec<ModeEvent> {
        // the ring is about to be swapped; input would land on the wrong one
        if self.is_animating() {
            return Vec::new();
        }

        match input {
            PointerInput::Press(p) => {
                let event = self.drag.press(p);
                self.apply(event, now)
            }
            PointerInput::Motion(p) => {
                let event = self.drag.motion(p);
                self.apply(event, now)
            }
            PointerInput::Release(p) => {
                if self.drag.is_dragging() {
                    let event = self.drag.release();
                    self.apply(event, now)
                } else {
                    self.click(p, now)
                }
            }
            PointerInput::Leave => {
                self.drag.leave();
                Vec::new()
            }
        }
    }

    /// Clicking the hour or minute label: immediate, never completes.
    pub fn select_step(&mut self, step: Step) -> Vec<ModeEvent> {
        if self.timer.cancel() {
            log::debug!("Manual step change cancelled pending transition");
        }
        if step == self.step {
            return Vec::new();
        }
        self.set_step(step);
        vec![ModeEvent::StepChanged(step)]
    }

    /// Runs the delayed transition once it is due.
    pub fn poll(&mut self, now: Instant) -> Vec<ModeEvent> {
        match self.timer.poll(now) {
            Some(step) => {
                self.set_step(step);
                vec![ModeEvent::StepChanged(step)]
            }
            None => Vec::new(),
        }
    }

    /// Teardown: the pending transition must never fire afterwards.
    pub fn dispose(&mut self) {
        self.timer.dispose();
        self.drag.leave();
    }

    fn set_step(&mut self, step: Step) {
        log::debug!("Step {} -> {}", self.step, step);
        self.step = step;
        self.rotation = Self::rotation_for(step, self.time);
        self.drag = DragHandler::new(
            Self::ring_kind(step),
            HitArea::face(),
            self.dragable,
            Self::value_for(step, self.time),
        );
    }

    fn click(&mut self, p: Point, now: Instant) -> Vec<ModeEvent> {
        let Some(selection) = self.active_ring().click(p) else {
            return Vec::new();
        };
        self.drag.sync(selection.value);

        let mut events = vec![self.change(selection)];
        events.extend(self.commit(now));
        events
    }

    fn apply(&mut self, event: Option<DragEvent>, now: Instant) -> Vec<ModeEvent> {
        match event {
            Some(DragEvent::Changed(selection)) => vec![self.change(selection)],
            Some(DragEvent::Committed(selection)) => {
                let mut events = Vec::new();
                if selection.value != Self::value_for(self.step, self.time) {
                    events.push(self.change(selection));
                }
                events.extend(self.commit(now));
                events
            }
            None => Vec::new(),
        }
    }

    fn change(&mut self, selection: Selection) -> ModeEvent {
        self.rotation = selection.angle;
        match self.step {
            Step::Hour => {
                self.time = self.time.with_hour(selection.value);
                ModeEvent::Hour(selection.value)
            }
            Step::Minute => {
                self.time = self.time.with_minute(selection.value);
                ModeEvent::Minute(selection.value)
            }
        }
    }

    fn commit(&mut self, now: Instant) -> Vec<ModeEvent> {
        if !self.auto_mode {
            return Vec::new();
        }
        match self.step {
            Step::Hour => {
                self.timer.schedule(Step::Minute, now);
                Vec::new()
            }
            Step::Minute => {
                self.set_step(Step::Hour);
                vec![ModeEvent::Completed, ModeEvent::StepChanged(Step::Hour)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{INNER_RING_RADIUS, OUTER_RING_RADIUS};
    use crate::transition::STEP_TRANSITION_DELAY;

    fn at(radius: f64, degrees: f64) -> Point {
        Point::on_circle(Point::default(), radius, degrees)
    }

    fn mode(time: TimeValue, auto_mode: bool) -> TwentyFourHourMode {
        TwentyFourHourMode::new(time, Step::Hour, auto_mode, true)
    }

    fn tap(mode: &mut TwentyFourHourMode, p: Point, now: Instant) -> Vec<ModeEvent> {
        let mut events = mode.pointer(PointerInput::Press(p), now);
        events.extend(mode.pointer(PointerInput::Release(p), now));
        events
    }

    #[test]
    fn test_seeded_rotation() {
        let time = TimeValue::new(9, 5);
        assert_eq!(mode(time, true).rotation(), 270.0);
        let minutes = TwentyFourHourMode::new(time, Step::Minute, true, true);
        assert_eq!(minutes.rotation(), 30.0);
    }

    #[test]
    fn test_inner_band_selects_afternoon() {
        let now = Instant::now();
        let mut mode = mode(TimeValue::new(9, 0), false);
        let events = tap(&mut mode, at(INNER_RING_RADIUS, 90.0), now);
        assert_eq!(events, vec![ModeEvent::Hour(15)]);
        assert_eq!(mode.rotation(), 90.0);
        assert_eq!(mode.step(), Step::Hour);
    }

    #[test]
    fn test_auto_mode_full_cycle() {
        let now = Instant::now();
        let mut mode = mode(TimeValue::new(9, 0), true);

        let events = tap(&mut mode, at(OUTER_RING_RADIUS, 60.0), now);
        assert_eq!(events, vec![ModeEvent::Hour(2)]);
        assert!(mode.is_animating());
        assert_eq!(mode.step(), Step::Hour);
        assert_eq!(mode.transition_due(), Some(now + STEP_TRANSITION_DELAY));

        // input during the transition is dropped
        assert!(tap(&mut mode, at(OUTER_RING_RADIUS, 90.0), now).is_empty());
        assert!(mode.poll(now).is_empty());

        let later = now + STEP_TRANSITION_DELAY;
        assert_eq!(mode.poll(later), vec![ModeEvent::StepChanged(Step::Minute)]);
        assert_eq!(mode.step(), Step::Minute);
        assert_eq!(mode.rotation(), 0.0);

        let events = tap(&mut mode, at(OUTER_RING_RADIUS, 120.0), later);
        assert_eq!(
            events,
            vec![
                ModeEvent::Minute(20),
                ModeEvent::Completed,
                ModeEvent::StepChanged(Step::Hour)
            ]
        );
        assert_eq!(mode.step(), Step::Hour);
        assert_eq!(mode.rotation(), 60.0);
        assert!(mode.poll(later + STEP_TRANSITION_DELAY).is_empty());
    }

    #[test]
    fn test_drag_then_release_commits_once() {
        let now = Instant::now();
        let mut mode = TwentyFourHourMode::new(TimeValue::new(9, 0), Step::Minute, true, true);

        let mut events = mode.pointer(PointerInput::Press(at(OUTER_RING_RADIUS, 6.0)), now);
        for degrees in [12, 18, 24, 30] {
            events.extend(mode.pointer(PointerInput::Motion(at(OUTER_RING_RADIUS, degrees as f64)), now));
        }
        events.extend(mode.pointer(PointerInput::Release(at(OUTER_RING_RADIUS, 30.0)), now));

        let completed = events.iter().filter(|e| **e == ModeEvent::Completed).count();
        let back_to_hour = events
            .iter()
            .filter(|e| **e == ModeEvent::StepChanged(Step::Hour))
            .count();
        assert_eq!(completed, 1);
        assert_eq!(back_to_hour, 1);
        assert_eq!(events[..5], [1, 2, 3, 4, 5].map(ModeEvent::Minute));
    }

    #[test]
    fn test_manual_step_switch_never_completes() {
        let now = Instant::now();
        let mut mode = mode(TimeValue::new(9, 5), true);

        assert_eq!(
            mode.select_step(Step::Minute),
            vec![ModeEvent::StepChanged(Step::Minute)]
        );
        assert_eq!(mode.rotation(), 30.0);
        assert!(!mode.is_animating());
        assert!(mode.select_step(Step::Minute).is_empty());
        assert_eq!(
            mode.select_step(Step::Hour),
            vec![ModeEvent::StepChanged(Step::Hour)]
        );
        assert!(mode.poll(now + STEP_TRANSITION_DELAY).is_empty());
    }

    #[test]
    fn test_manual_step_cancels_pending_transition() {
        let now = Instant::now();
        let mut mode = mode(TimeValue::new(9, 0), true);
        tap(&mut mode, at(OUTER_RING_RADIUS, 60.0), now);
        assert!(mode.is_animating());

        assert!(mode.select_step(Step::Hour).is_empty());
        assert!(!mode.is_animating());
        assert!(mode.poll(now + STEP_TRANSITION_DELAY).is_empty());
        assert_eq!(mode.step(), Step::Hour);
    }

    #[test]
    fn test_disposed_mode_never_transitions() {
        let now = Instant::now();
        let mut mode = mode(TimeValue::new(9, 0), true);
        tap(&mut mode, at(OUTER_RING_RADIUS, 60.0), now);

        mode.dispose();
        assert!(mode.poll(now + STEP_TRANSITION_DELAY).is_empty());
        assert_eq!(mode.step(), Step::Hour);
    }

    #[test]
    fn test_updated_time_does_not_swallow_old_value() {
        let now = Instant::now();
        let mut mode = mode(TimeValue::new(9, 5), true);
        mode.update_time(TimeValue::new(4, 50));

        let events = tap(&mut mode, at(OUTER_RING_RADIUS, 270.0), now);
        assert_eq!(events, vec![ModeEvent::Hour(9)]);
        assert!(mode.is_animating());
    }

    #[test]
    fn test_release_applies_unreported_selection() {
        let now = Instant::now();
        let mut mode = mode(TimeValue::new(9, 0), false);

        // drag reported 9 against the seeded time, then the owner moved to 4
        assert_eq!(
            mode.pointer(PointerInput::Press(at(OUTER_RING_RADIUS, 240.0)), now),
            vec![ModeEvent::Hour(8)]
        );
        assert_eq!(
            mode.pointer(PointerInput::Motion(at(OUTER_RING_RADIUS, 270.0)), now),
            vec![ModeEvent::Hour(9)]
        );
        mode.time = TimeValue::new(4, 0);

        let events = mode.pointer(PointerInput::Release(at(OUTER_RING_RADIUS, 270.0)), now);
        assert_eq!(events, vec![ModeEvent::Hour(9)]);
        assert_eq!(mode.rotation(), 270.0);
    }

    #[test]
    fn test_step_change_uses_latest_time() {
        let mut mode = mode(TimeValue::new(9, 0), false);
        mode.update_time(TimeValue::new(9, 45));
        mode.select_step(Step::Minute);
        assert_eq!(mode.rotation(), 270.0);
    }
}
