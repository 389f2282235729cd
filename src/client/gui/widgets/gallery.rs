use crate::client::gui::style::*;
use crate::client::models::generation::ImageSet;
use crate::client::models::messages::Message;
use iced::widget::{image, Button, Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

const IMAGE_SIZE: f32 = 256.0;
const PER_ROW: usize = 3;

fn tile<'a>(index: usize, handle: Option<&image::Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => image::Image::new(handle.clone())
            .width(Length::Fixed(IMAGE_SIZE))
            .height(Length::Fixed(IMAGE_SIZE))
            .into(),
        None => Container::new(Text::new("Image unavailable").size(14).style(TEXT_SECONDARY))
            .width(Length::Fixed(IMAGE_SIZE))
            .height(Length::Fixed(IMAGE_SIZE))
            .center_x()
            .center_y()
            .into(),
    };

    let buttons = Row::new()
        .spacing(8)
        .push(
            Button::new(Text::new("Experiment β").size(14))
                .on_press(Message::OpenExperiment(index))
                .style(iced::theme::Button::Secondary)
                .padding([8, 12]),
        )
        .push(
            Button::new(Text::new("Save Image").size(14))
                .on_press(Message::SaveImage(index))
                .style(iced::theme::Button::Primary)
                .padding([8, 12]),
        );

    Container::new(
        Column::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(picture)
            .push(Text::new(format!("Generated {}", index + 1)).size(12).style(TEXT_SECONDARY))
            .push(buttons),
    )
    .padding(12)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

pub fn view(images: &ImageSet) -> Element<'_, Message> {
    let handles: Vec<_> = images.iter().map(|img| img.handle.as_ref()).collect();
    let mut grid = Column::new().spacing(16).align_items(Alignment::Center);
    for (row_index, chunk) in handles.chunks(PER_ROW).enumerate() {
        let row = chunk
            .iter()
            .enumerate()
            .fold(Row::new().spacing(16), |row, (col, handle)| row.push(tile(row_index * PER_ROW + col, *handle)));
        grid = grid.push(row);
    }
    grid.into()
}
