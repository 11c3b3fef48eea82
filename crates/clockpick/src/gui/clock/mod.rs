pub mod layout;
pub mod view;

pub use layout::{Layout, PanelKind, Rect, Target};
pub use view::draw;

pub const PANEL_PADDING: f64 = 16.0;
pub const CORNER_RADIUS: f64 = 12.0;
pub const HEADER_HEIGHT: f64 = 64.0;
pub const LABEL_WIDTH: f64 = 80.0;
pub const COLON_GAP: f64 = 24.0;
pub const QUANTUM_WIDTH: f64 = 56.0;
pub const CLOSE_WIDTH: f64 = 96.0;
pub const CLOSE_HEIGHT: f64 = 36.0;
pub const CLASSIC_COLUMNS: usize = 4;
pub const CLASSIC_CELL_WIDTH: f64 = 84.0;
pub const CLASSIC_CELL_HEIGHT: f64 = 30.0;
pub const HAND_WIDTH: f64 = 2.0;
pub const CENTER_DOT_RADIUS: f64 = 4.0;
pub const MINUTE_DOT_RADIUS: f64 = 1.5;
