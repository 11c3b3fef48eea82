use crate::time::{Quantum, TimeMode, TimeValue, pad};

/// Minutes between two consecutive entries of the list.
pub const CLASSIC_INTERVAL: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicOption {
    pub time: TimeValue,
    pub label: String,
}

/// Text list of times, the picker without a clock face.
#[derive(Debug, Clone)]
pub struct ClassicTheme {
    mode: TimeMode,
    quantum: Quantum,
    options: Vec<ClassicOption>,
}

impl ClassicTheme {
    pub fn new(mode: TimeMode, quantum: Quantum) -> Self {
        Self {
            mode,
            quantum,
            options: Self::build(mode, quantum),
        }
    }

    fn build(mode: TimeMode, quantum: Quantum) -> Vec<ClassicOption> {
        let per_hour = 60 / CLASSIC_INTERVAL;
        let hours = match mode {
            TimeMode::Twelve => 12,
            TimeMode::TwentyFour => 24,
        };

        (0..hours * per_hour)
            .map(|i| {
                let (hour, minute) = (i / per_hour, (i % per_hour) * CLASSIC_INTERVAL);
                let time = match mode {
                    TimeMode::Twelve => TimeValue::from_12h(hour, minute, quantum),
                    TimeMode::TwentyFour => TimeValue::new(hour, minute),
                };
                ClassicOption {
                    label: format!("{}:{}", pad(time.display_hour(mode)), pad(minute)),
                    time,
                }
            })
            .collect()
    }

    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    pub fn quantum(&self) -> Quantum {
        self.quantum
    }

    pub fn options(&self) -> &[ClassicOption] {
        &self.options
    }

    pub fn select(&self, index: usize) -> Option<TimeValue> {
        self.options.get(index).map(|o| o.time)
    }

    pub fn selected_index(&self, time: TimeValue) -> Option<usize> {
        self.options.iter().position(|o| o.time == time)
    }

    /// Only the 12-hour list depends on the quantum.
    pub fn set_quantum(&mut self, quantum: Quantum) {
        if self.quantum != quantum {
            self.quantum = quantum;
            self.options = Self::build(self.mode, quantum);
        }
    }
}
