use crate::client::gui::style::{self, EMOJI_FONT};
use crate::client::models::messages::Message;
use iced::widget::{Container, Row, Space, Text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl LogLevel {
    fn badge(self) -> (&'static str, Color) {
        match self {
            LogLevel::Success => ("✅", style::SUCCESS_COLOR),
            LogLevel::Error => ("❌", style::ERROR_COLOR),
            LogLevel::Info => ("ℹ️", style::INFO_COLOR),
            LogLevel::Warning => ("⚠️", style::WARNING_COLOR),
        }
    }
}

/// One alert-bar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(latest) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    let (icon, tint) = latest.level.badge();
    let line = Row::new()
        .spacing(10)
        .align_items(iced::Alignment::Center)
        .push(Text::new(icon).font(EMOJI_FONT).size(18))
        .push(Text::new(&latest.message).size(16).style(style::TEXT_PRIMARY));

    Container::new(line)
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(style::alert_appearance(tint))))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_level_has_its_own_tint() {
        let levels = [LogLevel::Success, LogLevel::Error, LogLevel::Info, LogLevel::Warning];
        let tints: Vec<Color> = levels.iter().map(|l| l.badge().1).collect();
        for (i, a) in tints.iter().enumerate() {
            assert!(tints[i + 1..].iter().all(|b| b != a));
        }
        assert_eq!(LogLevel::Error.badge(), ("❌", style::ERROR_COLOR));
    }
}
