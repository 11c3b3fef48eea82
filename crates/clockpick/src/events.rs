use clockface::TimeText;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Show,
    Hide,
    SetTime(TimeText),
    ConfigReload,
}
