//! Conversions between clock angles and hour/minute values.
//!
//! Angles are degrees clockwise from 12 o'clock. Every ring has a fixed number
//! of discrete positions; a value sits at `360 * position / positions`.

use crate::geometry::{BAND_SPLIT_RADIUS, normalize_degrees};
use strum::{Display as StrumDisplay, EnumIter};

/// Which dial a value lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum RingKind {
    /// Hours 1-12, index 0 shows as 12.
    Hour12,
    /// Hours 0-23 over two bands sharing the same 12 slots.
    Hour24,
    Minute,
}

/// Radius band of the 24-hour hour ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Band {
    #[default]
    Outer,
    Inner,
}

impl Band {
    pub fn from_radius(radius: f64) -> Self {
        if radius >= BAND_SPLIT_RADIUS {
            Self::Outer
        } else {
            Self::Inner
        }
    }
}

impl RingKind {
    pub fn positions(&self) -> u32 {
        match self {
            Self::Hour12 | Self::Hour24 => 12,
            Self::Minute => 60,
        }
    }

    pub fn step_degrees(&self) -> f64 {
        360.0 / self.positions() as f64
    }

    /// Folds an arbitrary value onto the ring's displayed range.
    pub fn normalize(&self, value: u32) -> u32 {
        match self {
            Self::Hour12 => match value % 12 {
                0 => 12,
                h => h,
            },
            Self::Hour24 => value % 24,
            Self::Minute => value % 60,
        }
    }

    /// Slot index of a value on this ring.
    pub fn position(&self, value: u32) -> u32 {
        value % self.positions()
    }

    pub fn value_to_angle(&self, value: u32) -> f64 {
        360.0 * self.position(value) as f64 / self.positions() as f64
    }

    /// Band a value is drawn on. Only the 24-hour hour ring has an inner band.
    pub fn band_of(&self, value: u32) -> Band {
        match self {
            Self::Hour24 => match value % 24 {
                1..=12 => Band::Outer,
                _ => Band::Inner,
            },
            _ => Band::Outer,
        }
    }

    pub fn angle_to_index(&self, angle: f64) -> u32 {
        let steps = (normalize_degrees(angle) / self.step_degrees()).round() as u32;
        steps % self.positions()
    }

    /// Nearest value for a pointer angle; `band` only matters for [`RingKind::Hour24`].
    pub fn angle_to_value(&self, angle: f64, band: Band) -> u32 {
        let index = self.angle_to_index(angle);
        match (self, band) {
            (Self::Hour12, _) | (Self::Hour24, Band::Outer) => {
                if index == 0 {
                    12
                } else {
                    index
                }
            }
            (Self::Hour24, Band::Inner) => {
                if index == 0 {
                    0
                } else {
                    index + 12
                }
            }
            (Self::Minute, _) => index,
        }
    }
}

pub fn hour_to_angle(hour: u32) -> f64 {
    RingKind::Hour12.value_to_angle(hour)
}

pub fn angle_to_hour(angle: f64) -> u32 {
    RingKind::Hour12.angle_to_value(angle, Band::Outer)
}

pub fn minute_to_angle(minute: u32) -> f64 {
    RingKind::Minute.value_to_angle(minute)
}

pub fn angle_to_minute(angle: f64) -> u32 {
    RingKind::Minute.angle_to_value(angle, Band::Outer)
}
