//! Headless clock-face time picker: pointer geometry in, time values out.

pub mod angle;
pub mod classic;
pub mod drag;
pub mod geometry;
pub mod ipc;
mod macros;
pub mod mode;
pub mod picker;
pub mod ring;
pub mod time;
pub mod transition;

pub use geometry::Point;
pub use mode::PointerInput;
pub use picker::{Panel, Picker, PickerEvent, PickerOptions};
pub use time::{Quantum, TimeMode, TimeText, TimeValue};
pub use transition::Step;
