use super::{ModeEvent, PointerInput};
use crate::angle::RingKind;
use crate::drag::{DragEvent, DragHandler, HitArea};
use crate::geometry::{BAND_SPLIT_RADIUS, Point};
use crate::ring::{Ring, Selection};
use crate::time::{Quantum, TimeValue};

/// Hour hand on the inner ring and minute hand on the outer ring, both live.
///
/// Rotations are seeded from the time once and afterwards move only with the
/// user's own input.
#[derive(Debug, Clone)]
pub struct TwelveHourMode {
    hour_ring: Ring,
    minute_ring: Ring,
    hour_drag: DragHandler,
    minute_drag: DragHandler,
    hour_rotation: f64,
    minute_rotation: f64,
    /// Last known values, as shown on the rings (hour 1-12).
    hour: u32,
    minute: u32,
}

impl TwelveHourMode {
    pub fn new(time: TimeValue, dragable: bool) -> Self {
        let hour_ring = Ring::hours_12();
        let minute_ring = Ring::minutes();

        Self {
            hour_rotation: RingKind::Hour12.value_to_angle(time.hour_12()),
            minute_rotation: RingKind::Minute.value_to_angle(time.minute()),
            hour_drag: DragHandler::new(
                RingKind::Hour12,
                HitArea::within(BAND_SPLIT_RADIUS),
                dragable,
                time.hour_12(),
            ),
            minute_drag: DragHandler::new(
                RingKind::Minute,
                HitArea::beyond(BAND_SPLIT_RADIUS),
                dragable,
                time.minute(),
            ),
            hour_ring,
            minute_ring,
            hour: time.hour_12(),
            minute: time.minute(),
        }
    }

    pub fn hour_rotation(&self) -> f64 {
        self.hour_rotation
    }

    pub fn minute_rotation(&self) -> f64 {
        self.minute_rotation
    }

    pub fn hour_ring(&self) -> &Ring {
        &self.hour_ring
    }

    pub fn minute_ring(&self) -> &Ring {
        &self.minute_ring
    }

    pub fn is_dragging(&self) -> bool {
        self.hour_drag.is_dragging() || self.minute_drag.is_dragging()
    }

    /// Newer time from the owner. Hands keep their rotation.
    pub fn update_time(&mut self, time: TimeValue) {
        self.hour = time.hour_12();
        self.minute = time.minute();
        self.hour_drag.sync(self.hour);
        self.minute_drag.sync(self.minute);
    }

    pub fn pointer(&mut self, input: PointerInput) -> Vec<ModeEvent> {
        match input {
            PointerInput::Press(p) => {
                let event = if self.hour_drag.accepts(p) {
                    self.hour_drag.press(p)
                } else {
                    self.minute_drag.press(p)
                };
                self.apply(event)
            }
            PointerInput::Motion(p) => {
                let event = self.hour_drag.motion(p).or(self.minute_drag.motion(p));
                self.apply(event)
            }
            PointerInput::Release(p) => {
                if self.hour_drag.is_dragging() {
                    match self.hour_drag.release() {
                        Some(DragEvent::Committed(s)) if s.value != self.hour => {
                            vec![self.set_hour(s)]
                        }
                        _ => Vec::new(),
                    }
                } else if self.minute_drag.is_dragging() {
                    match self.minute_drag.release() {
                        Some(DragEvent::Committed(s)) if s.value != self.minute => {
                            vec![self.set_minute(s)]
                        }
                        _ => Vec::new(),
                    }
                } else {
                    self.click(p)
                }
            }
            PointerInput::Leave => {
                self.hour_drag.leave();
                self.minute_drag.leave();
                Vec::new()
            }
        }
    }

    /// Switching AM/PM is only reported; hour and minute stay as they are.
    pub fn toggle_quantum(&self, current: Quantum) -> ModeEvent {
        ModeEvent::Quantum(current.toggle())
    }

    fn click(&mut self, p: Point) -> Vec<ModeEvent> {
        if let Some(selection) = self.hour_ring.click(p) {
            self.hour_drag.sync(selection.value);
            return vec![self.set_hour(selection)];
        }
        if let Some(selection) = self.minute_ring.click(p) {
            self.minute_drag.sync(selection.value);
            return vec![self.set_minute(selection)];
        }
        Vec::new()
    }

    fn apply(&mut self, event: Option<DragEvent>) -> Vec<ModeEvent> {
        match event {
            Some(DragEvent::Changed(selection)) => {
                let event = if self.hour_drag.is_dragging() {
                    self.set_hour(selection)
                } else {
                    self.set_minute(selection)
                };
                vec![event]
            }
            // releases are settled in `pointer`
            Some(DragEvent::Committed(_)) | None => Vec::new(),
        }
    }

    fn set_hour(&mut self, selection: Selection) -> ModeEvent {
        self.hour_rotation = selection.angle;
        self.hour = selection.value;
        ModeEvent::Hour(selection.value)
    }

    fn set_minute(&mut self, selection: Selection) -> ModeEvent {
        self.minute_rotation = selection.angle;
        self.minute = selection.value;
        ModeEvent::Minute(selection.value)
    }
}
