pub mod twelve;
pub mod twenty_four;

pub use twelve::TwelveHourMode;
pub use twenty_four::TwentyFourHourMode;

use crate::geometry::Point;
use crate::time::Quantum;
use crate::transition::Step;

/// Pointer gesture over the face, relative to its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Press(Point),
    Motion(Point),
    Release(Point),
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// Hour as shown on the active ring (1-12 or 0-23).
    Hour(u32),
    Minute(u32),
    /// The quantum the user asked to switch to.
    Quantum(Quantum),
    StepChanged(Step),
    /// A full hour-then-minute selection finished in auto mode.
    Completed,
}
