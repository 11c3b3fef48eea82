use crate::angle::RingKind;
use chrono::{Local, Timelike};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Expected HH:MM, got {0:?}")]
    Format(String),
    #[error("Invalid number in time: {0}")]
    Number(#[from] ParseIntError),
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
pub enum TimeMode {
    #[strum(serialize = "12")]
    Twelve,
    #[default]
    #[strum(serialize = "24")]
    TwentyFour,
}

impl TimeMode {
    pub fn hour_ring(&self) -> RingKind {
        match self {
            Self::Twelve => RingKind::Hour12,
            Self::TwentyFour => RingKind::Hour24,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Quantum {
    #[default]
    #[strum(serialize = "AM")]
    Am,
    #[strum(serialize = "PM")]
    Pm,
}

impl Quantum {
    pub fn for_hour(hour: u32) -> Self {
        if hour % 24 >= 12 { Self::Pm } else { Self::Am }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }
}

/// Canonical time of day: hour 0-23, minute 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeValue {
    hour: u32,
    minute: u32,
}

impl TimeValue {
    /// Out-of-range units wrap instead of failing.
    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    pub fn from_12h(hour: u32, minute: u32, quantum: Quantum) -> Self {
        let offset = match quantum {
            Quantum::Am => 0,
            Quantum::Pm => 12,
        };
        Self::new(hour % 12 + offset, minute)
    }

    pub fn now() -> Self {
        let now = Local::now();
        Self::new(now.hour(), now.minute())
    }

    /// Parses `HH:MM`, falling back to the wall clock on any error.
    pub fn parse_or_now(text: Option<&str>) -> Self {
        match text.map(str::parse::<Self>) {
            Some(Ok(time)) => time,
            Some(Err(e)) => {
                log::debug!("Falling back to current time: {}", e);
                Self::now()
            }
            None => Self::now(),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Hour as shown on a 12-hour face, midnight and noon both being 12.
    pub fn hour_12(&self) -> u32 {
        RingKind::Hour12.normalize(self.hour)
    }

    pub fn display_hour(&self, mode: TimeMode) -> u32 {
        match mode {
            TimeMode::Twelve => self.hour_12(),
            TimeMode::TwentyFour => self.hour,
        }
    }

    pub fn quantum(&self) -> Quantum {
        Quantum::for_hour(self.hour)
    }

    pub fn with_quantum(self, quantum: Quantum) -> Self {
        Self::from_12h(self.hour, self.minute, quantum)
    }

    pub fn with_hour(self, hour: u32) -> Self {
        Self::new(hour, self.minute)
    }

    pub fn with_minute(self, minute: u32) -> Self {
        Self::new(self.hour, minute)
    }
}

impl FromStr for TimeValue {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeError::Format(s.to_string()))?;

        let hour = hour.trim();
        let minute = minute.trim();
        if hour.is_empty() || minute.is_empty() {
            return Err(TimeError::Format(s.to_string()));
        }

        Ok(Self::new(hour.parse()?, minute.parse()?))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", pad(self.hour), pad(self.minute))
    }
}

/// Two-digit form of a time unit.
pub fn pad(value: u32) -> String {
    format!("{:02}", value)
}

/// Time as handed around by the owning application, e.g. `"09:05"`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct TimeText(String);

crate::impl_string_newtype!(TimeText);

impl From<TimeValue> for TimeText {
    fn from(time: TimeValue) -> Self {
        Self(time.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let time: TimeValue = "09:05".parse().unwrap();
        assert_eq!((time.hour(), time.minute()), (9, 5));
        assert_eq!(time.to_string(), "09:05");

        let loose: TimeValue = " 7 : 3 ".parse().unwrap();
        assert_eq!(loose.to_string(), "07:03");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<TimeValue>(),
            Err(TimeError::Format("".to_string()))
        );
        assert!(matches!(
            "12".parse::<TimeValue>(),
            Err(TimeError::Format(_))
        ));
        assert!(matches!(
            "ab:cd".parse::<TimeValue>(),
            Err(TimeError::Number(_))
        ));
        assert!(matches!(
            "-1:00".parse::<TimeValue>(),
            Err(TimeError::Number(_))
        ));
    }

    #[test]
    fn test_out_of_range_wraps() {
        let time: TimeValue = "25:75".parse().unwrap();
        assert_eq!(time, TimeValue::new(1, 15));
    }

    #[test]
    fn test_parse_or_now_never_panics() {
        let _ = TimeValue::parse_or_now(Some(""));
        let _ = TimeValue::parse_or_now(Some("garbage"));
        let _ = TimeValue::parse_or_now(None);
        assert_eq!(
            TimeValue::parse_or_now(Some("23:59")),
            TimeValue::new(23, 59)
        );
    }

    #[test]
    fn test_twelve_hour_views() {
        let midnight = TimeValue::new(0, 0);
        assert_eq!(midnight.hour_12(), 12);
        assert_eq!(midnight.quantum(), Quantum::Am);
        assert_eq!(TimeValue::new(12, 0).quantum(), Quantum::Pm);
        assert_eq!(TimeValue::new(21, 30).display_hour(TimeMode::Twelve), 9);
        assert_eq!(TimeValue::new(21, 30).display_hour(TimeMode::TwentyFour), 21);
    }

    #[test]
    fn test_quantum_and_12h_value_are_unique() {
        for hour in 0..24 {
            let time = TimeValue::new(hour, 10);
            assert_eq!(
                TimeValue::from_12h(time.hour_12(), 10, time.quantum()),
                time
            );
        }
        assert_eq!(TimeValue::new(9, 0).with_quantum(Quantum::Pm).hour(), 21);
        assert_eq!(TimeValue::new(21, 0).with_quantum(Quantum::Am).hour(), 9);
    }

    #[test]
    fn test_enum_deserialization() {
        let cases = vec![("\"12\"", TimeMode::Twelve), ("\"24\"", TimeMode::TwentyFour)];
        for (json, expected) in cases {
            let mode: TimeMode = serde_json::from_str(json).unwrap();
            assert_eq!(mode, expected);
        }

        let pm: Quantum = serde_json::from_str("\"pm\"").unwrap();
        assert_eq!(pm, Quantum::Pm);
        assert_eq!(serde_json::to_string(&Quantum::Am).unwrap(), "\"AM\"");
        assert_eq!(Quantum::Am.toggle(), Quantum::Pm);
    }

    #[test]
    fn test_time_text_from_value() {
        let text = TimeText::from(TimeValue::new(0, 0));
        assert_eq!(text.as_str(), "00:00");
        assert_eq!(TimeText::new("07:45").parse::<TimeValue>().unwrap().minute(), 45);
    }
}
