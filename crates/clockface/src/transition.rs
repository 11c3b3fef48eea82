use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::time::{Duration, Instant};
use strum::{Display as StrumDisplay, EnumString};

/// Visual delay between picking an hour and the minute ring taking over.
pub const STEP_TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// Which ring of the 24-hour face receives input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    #[strum(serialize = "hour", serialize = "0")]
    Hour,
    #[strum(serialize = "minute", serialize = "1")]
    Minute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    target: Step,
    due: Instant,
}

/// A single delayed step change. The owner polls it; nothing runs on its own.
#[derive(Debug, Clone, Default)]
pub struct StepTimer {
    pending: Option<Pending>,
    disposed: bool,
}

impl StepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer, replacing any earlier transition. No-op once disposed.
    pub fn schedule(&mut self, target: Step, now: Instant) {
        if self.disposed {
            return;
        }
        self.pending = Some(Pending {
            target,
            due: now + STEP_TRANSITION_DELAY,
        });
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Cancels and refuses any later scheduling.
    pub fn dispose(&mut self) {
        self.cancel();
        self.disposed = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Fires at most once per schedule.
    pub fn poll(&mut self, now: Instant) -> Option<Step> {
        match self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                Some(p.target)
            }
            _ => None,
        }
    }
}
