use crate::client::gui::style::*;
use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::ConceptCraftState;
use crate::client::models::messages::Message;
use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Element, Length};

fn labeled_input<'a>(icon: &'a str, label: &'a str, input: TextInput<'a, Message>) -> Column<'a, Message> {
    Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new(icon).font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new(label).size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(input.width(Length::Fill).padding(12).size(14))
                .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
}

pub(crate) fn form_card<'a>(title: &'a str, body: Column<'a, Message>, message: Option<&'a str>, switch: (&'a str, Message)) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fixed(420.0))
        .spacing(20)
        .padding(32)
        .align_items(Alignment::Center)
        .push(
            Text::new(title)
                .size(36)
                .font(BOLD_FONT)
                .style(TEXT_PRIMARY)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        )
        .push(body);

    if let Some(message) = message {
        content = content.push(Text::new(message).size(14).style(ACCENT_COLOR));
    }

    let (switch_label, switch_msg) = switch;
    content = content
        .push(
            Row::new()
                .spacing(12)
                .push(
                    Button::new(Text::new(switch_label).size(14))
                        .on_press(switch_msg)
                        .style(iced::theme::Button::Secondary)
                        .padding([8, 16]),
                )
                .push(
                    Button::new(Text::new("Back").size(14))
                        .on_press(Message::OpenWorkspace)
                        .style(iced::theme::Button::Text)
                        .padding([8, 16]),
                ),
        );

    Container::new(content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

pub(crate) fn submit_button<'a>(label: &'a str, busy_label: &'a str, enabled: bool, busy: bool, on_press: Message) -> Button<'a, Message> {
    let text = Text::new(if busy { busy_label } else { label })
        .font(BOLD_FONT)
        .size(16)
        .horizontal_alignment(iced::alignment::Horizontal::Center);
    let button = Button::new(Container::new(text).width(Length::Fill).center_x())
        .width(Length::Fill)
        .padding(14);
    if enabled {
        button.on_press(on_press).style(iced::theme::Button::Primary)
    } else {
        button.style(iced::theme::Button::Secondary)
    }
}

pub(crate) fn screen<'a>(state: &'a ConceptCraftState, card: Element<'a, Message>) -> Element<'a, Message> {
    let logger_bar = Container::new(logger_view(&state.logger))
        .width(Length::Fill)
        .padding([8, 12, 0, 12]);

    Container::new(
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(logger_bar)
            .push(
                Container::new(card)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x()
                    .center_y(),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}

pub fn view(state: &ConceptCraftState) -> Element<'_, Message> {
    let form = &state.login;
    let submit = if form.can_submit() { Message::SubmitLogin } else { Message::NoOp };

    let password_row = Row::new()
        .align_items(Alignment::Center)
        .push(
            TextInput::new("Password", &form.password)
                .on_input(Message::LoginPasswordChanged)
                .on_submit(submit.clone())
                .secure(!form.show_password)
                .width(Length::Fill)
                .padding(12)
                .size(14),
        )
        .push(
            Button::new(Text::new(if form.show_password { "🙈" } else { "👁️" }).font(EMOJI_FONT).size(16))
                .on_press(Message::ToggleShowPassword)
                .style(iced::theme::Button::Text)
                .padding([8, 12]),
        );

    let body = Column::new()
        .spacing(16)
        .push(labeled_input(
            "👤",
            "Username",
            TextInput::new("Username", &form.username)
                .on_input(Message::LoginUsernameChanged)
                .on_submit(submit.clone()),
        ))
        .push(
            Container::new(password_row).style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(submit_button("Login", "Logging in...", form.can_submit(), form.submitting, Message::SubmitLogin));

    screen(state, form_card("Login", body, form.message.as_deref(), ("Sign Up", Message::OpenSignup)))
}
