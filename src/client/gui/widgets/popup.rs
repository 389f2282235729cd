use crate::client::gui::style::*;
use crate::client::models::experiment::ExperimentAction;
use crate::client::models::messages::Message;
use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

fn popup_frame<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content.padding(20).spacing(12))
        .width(Length::Fixed(460.0))
        .style(iced::theme::Container::Custom(Box::new(popup_appearance)))
        .into()
}

/// Shown when an unauthenticated user tries to edit or submit prompts.
pub fn login_prompt<'a>() -> Element<'a, Message> {
    popup_frame(
        Column::new()
            .align_items(Alignment::Center)
            .push(
                Row::new()
                    .push(Space::new(Length::Fill, Length::Shrink))
                    .push(
                        Button::new(Text::new("X").size(14))
                            .on_press(Message::DismissLoginPrompt)
                            .style(iced::theme::Button::Text),
                    ),
            )
            .push(Text::new("Please log in to enter prompts").size(18).style(TEXT_PRIMARY))
            .push(
                Row::new()
                    .spacing(12)
                    .push(Button::new(Text::new("Login")).on_press(Message::OpenLogin).style(iced::theme::Button::Primary))
                    .push(Button::new(Text::new("Sign Up")).on_press(Message::OpenSignup).style(iced::theme::Button::Secondary)),
            ),
    )
}

/// Post-processing menu for a generated image.
pub fn experiment<'a>() -> Element<'a, Message> {
    let options = ExperimentAction::all().chunks(3).fold(Column::new().spacing(8), |col, chunk| {
        col.push(chunk.iter().fold(Row::new().spacing(8), |row, action| {
            let style = if action.is_assigned() { iced::theme::Button::Primary } else { iced::theme::Button::Secondary };
            row.push(
                Button::new(Text::new(action.to_string()).size(14))
                    .on_press(Message::ExperimentChosen(*action))
                    .style(style)
                    .width(Length::Fixed(130.0))
                    .padding([8, 10]),
            )
        }))
    });

    popup_frame(
        Column::new()
            .align_items(Alignment::Center)
            .push(
                Row::new()
                    .align_items(Alignment::Center)
                    .push(Text::new("Experiment Options").font(BOLD_FONT).size(20))
                    .push(Space::new(Length::Fill, Length::Shrink))
                    .push(
                        Button::new(Text::new("X").size(14))
                            .on_press(Message::CloseExperiment)
                            .style(iced::theme::Button::Text),
                    ),
            )
            .push(options),
    )
}
