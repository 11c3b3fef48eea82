use crate::classic::ClassicTheme;
use crate::mode::{ModeEvent, PointerInput, TwelveHourMode, TwentyFourHourMode};
use crate::time::{Quantum, TimeMode, TimeText, TimeValue, pad};
use crate::transition::Step;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use strum::{Display as StrumDisplay, EnumString};

/// `"material"` draws the clock face; any other name falls back to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, SerializeDisplay, DeserializeFromStr)]
pub enum Theme {
    #[default]
    Material,
    Classic,
}

impl FromStr for Theme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("material") {
            Ok(Self::Material)
        } else {
            Ok(Self::Classic)
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material => write!(f, "material"),
            Self::Classic => write!(f, "classic"),
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
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ColorPalette {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    pub time: Option<TimeText>,
    pub time_mode: TimeMode,
    pub time_quantum: Option<Quantum>,
    pub auto_mode: bool,
    pub dragable: bool,
    pub theme: Theme,
    pub color_palette: ColorPalette,
    pub without_icon: bool,
    pub placeholder: String,
    pub focused: bool,
    pub step: Step,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            time: None,
            time_mode: TimeMode::default(),
            time_quantum: None,
            auto_mode: true,
            dragable: true,
            theme: Theme::default(),
            color_palette: ColorPalette::default(),
            without_icon: false,
            placeholder: String::new(),
            focused: false,
            step: Step::default(),
        }
    }
}

/// What the owning application hears back. Plain values only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    HourChanged(u32),
    MinuteChanged(u32),
    TimeChanged(String),
    QuantumChanged(Quantum),
    FocusChanged(bool),
}

/// The open part of the picker. Exists only while focused.
#[derive(Debug, Clone)]
pub enum Panel {
    Twelve(TwelveHourMode),
    TwentyFour(TwentyFourHourMode),
    Classic(ClassicTheme),
}

#[derive(Debug, Clone)]
pub struct Picker {
    options: PickerOptions,
    focused: bool,
    panel: Option<Panel>,
}

impl Picker {
    pub fn new(options: PickerOptions) -> Self {
        let mut picker = Self {
            focused: options.focused,
            options,
            panel: None,
        };
        picker.check_time();
        if picker.focused {
            picker.mount();
        }
        picker
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    /// Effective time, re-parsed on every call. Falls back to the wall clock.
    pub fn time(&self) -> TimeValue {
        let parsed = TimeValue::parse_or_now(self.options.time.as_ref().map(|t| t.as_str()));
        match (self.options.time_mode, self.options.time_quantum) {
            (TimeMode::Twelve, Some(quantum)) => parsed.with_quantum(quantum),
            _ => parsed,
        }
    }

    pub fn quantum(&self) -> Quantum {
        self.options
            .time_quantum
            .unwrap_or_else(|| self.time().quantum())
    }

    /// Two-digit hour and minute as displayed for the current mode.
    pub fn hour_and_minute(&self) -> (String, String) {
        let time = self.time();
        (
            pad(time.display_hour(self.options.time_mode)),
            pad(time.minute()),
        )
    }

    /// Text of the closed picker.
    pub fn preview_text(&self) -> String {
        if !self.options.placeholder.is_empty() {
            return self.options.placeholder.clone();
        }
        let (hour, minute) = self.hour_and_minute();
        match self.options.time_mode {
            TimeMode::Twelve => format!("{}:{} {}", hour, minute, self.quantum()),
            TimeMode::TwentyFour => format!("{} : {}", hour, minute),
        }
    }

    pub fn transition_due(&self) -> Option<Instant> {
        match &self.panel {
            Some(Panel::TwentyFour(mode)) => mode.transition_due(),
            _ => None,
        }
    }

    pub fn focus(&mut self) -> Vec<PickerEvent> {
        if self.focused {
            return Vec::new();
        }
        self.focused = true;
        self.mount();
        log::debug!("Picker focused");
        vec![PickerEvent::FocusChanged(true)]
    }

    pub fn clear_focus(&mut self) -> Vec<PickerEvent> {
        if !self.focused {
            return Vec::new();
        }
        self.unmount();
        self.focused = false;
        log::debug!("Picker focus cleared");
        vec![PickerEvent::FocusChanged(false)]
    }

    pub fn pointer(&mut self, input: PointerInput, now: Instant) -> Vec<PickerEvent> {
        let events = match &mut self.panel {
            Some(Panel::Twelve(mode)) => mode.pointer(input),
            Some(Panel::TwentyFour(mode)) => mode.pointer(input, now),
            Some(Panel::Classic(_)) | None => Vec::new(),
        };
        self.handle(events)
    }

    pub fn select_step(&mut self, step: Step) -> Vec<PickerEvent> {
        let events = match &mut self.panel {
            Some(Panel::TwentyFour(mode)) => mode.select_step(step),
            _ => Vec::new(),
        };
        self.handle(events)
    }

    pub fn toggle_quantum(&mut self) -> Vec<PickerEvent> {
        let current = self.quantum();
        let event = match &self.panel {
            Some(Panel::Twelve(mode)) => mode.toggle_quantum(current),
            Some(Panel::Classic(theme)) if theme.mode() == TimeMode::Twelve => {
                ModeEvent::Quantum(current.toggle())
            }
            _ => return Vec::new(),
        };
        self.handle(vec![event])
    }

    /// Picks an entry of the classic list.
    pub fn choose(&mut self, index: usize) -> Vec<PickerEvent> {
        let Some(Panel::Classic(theme)) = &self.panel else {
            return Vec::new();
        };
        let Some(time) = theme.select(index) else {
            return Vec::new();
        };

        let mut events = vec![self.write_time(time)];
        if self.options.auto_mode {
            events.extend(self.clear_focus());
        }
        events
    }

    /// Drives the delayed step transition.
    pub fn poll(&mut self, now: Instant) -> Vec<PickerEvent> {
        let events = match &mut self.panel {
            Some(Panel::TwentyFour(mode)) => mode.poll(now),
            _ => Vec::new(),
        };
        self.handle(events)
    }

    /// New time from the owner. Hands keep their rotation until the next step change.
    pub fn set_time(&mut self, time: TimeText) {
        self.options.time = Some(time);
        self.check_time();
        let current = self.time();
        let quantum = self.quantum();
        match &mut self.panel {
            Some(Panel::TwentyFour(mode)) => mode.update_time(current),
            Some(Panel::Twelve(mode)) => mode.update_time(current),
            Some(Panel::Classic(theme)) => theme.set_quantum(quantum),
            None => {}
        }
    }

    pub fn set_quantum(&mut self, quantum: Option<Quantum>) {
        self.options.time_quantum = quantum;
        let current = self.quantum();
        if let Some(Panel::Classic(theme)) = &mut self.panel {
            theme.set_quantum(current);
        }
    }

    /// Replaces every option; an open panel is rebuilt from the new ones.
    pub fn set_options(&mut self, options: PickerOptions) {
        self.options = options;
        self.check_time();
        if self.focused {
            self.unmount();
            self.mount();
        }
    }

    /// Warns once per new value; `time()` itself falls back quietly.
    fn check_time(&self) {
        if let Some(text) = &self.options.time
            && let Err(e) = text.parse::<TimeValue>()
        {
            log::warn!("Ignoring time {:?}, using the current time: {}", text.as_str(), e);
        }
    }

    fn mount(&mut self) {
        let time = self.time();
        let opts = &self.options;
        let panel = match (opts.theme, opts.time_mode) {
            (Theme::Classic, mode) => Panel::Classic(ClassicTheme::new(mode, self.quantum())),
            (Theme::Material, TimeMode::Twelve) => {
                Panel::Twelve(TwelveHourMode::new(time, opts.dragable))
            }
            (Theme::Material, TimeMode::TwentyFour) => Panel::TwentyFour(TwentyFourHourMode::new(
                time,
                opts.step,
                opts.auto_mode,
                opts.dragable,
            )),
        };
        self.panel = Some(panel);
    }

    fn unmount(&mut self) {
        if let Some(Panel::TwentyFour(mode)) = &mut self.panel {
            mode.dispose();
        }
        self.panel = None;
    }

    fn write_time(&mut self, time: TimeValue) -> PickerEvent {
        let text = TimeText::from(time);
        let event = PickerEvent::TimeChanged(text.to_string());
        self.set_time(text);
        event
    }

    fn handle(&mut self, events: Vec<ModeEvent>) -> Vec<PickerEvent> {
        let mut out = Vec::new();
        for event in events {
            match event {
                ModeEvent::Hour(hour) => {
                    let time = self.time();
                    let updated = match self.options.time_mode {
                        TimeMode::Twelve => TimeValue::from_12h(hour, time.minute(), self.quantum()),
                        TimeMode::TwentyFour => time.with_hour(hour),
                    };
                    out.push(PickerEvent::HourChanged(hour));
                    out.push(self.write_time(updated));
                }
                ModeEvent::Minute(minute) => {
                    let updated = self.time().with_minute(minute);
                    out.push(PickerEvent::MinuteChanged(minute));
                    out.push(self.write_time(updated));
                }
                ModeEvent::Quantum(quantum) => {
                    self.set_quantum(Some(quantum));
                    out.push(PickerEvent::QuantumChanged(quantum));
                }
                ModeEvent::StepChanged(step) => log::debug!("Now selecting {}", step),
                ModeEvent::Completed => {
                    if self.options.auto_mode {
                        out.extend(self.clear_focus());
                    }
                }
            }
        }
        out
    }
}
