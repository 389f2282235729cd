use crate::client::gui::style::*;
use crate::client::gui::views::login::{form_card, screen, submit_button};
use crate::client::models::app_state::ConceptCraftState;
use crate::client::models::messages::Message;
use iced::widget::{Column, Container, TextInput};
use iced::{Element, Length};

fn field<'a>(input: TextInput<'a, Message>) -> Container<'a, Message> {
    Container::new(input.width(Length::Fill).padding(12).size(14))
        .style(iced::theme::Container::Custom(Box::new(input_appearance)))
}

pub fn view(state: &ConceptCraftState) -> Element<'_, Message> {
    let form = &state.signup;
    let submit = if form.can_submit() { Message::SubmitSignup } else { Message::NoOp };

    let body = Column::new()
        .spacing(16)
        .push(field(
            TextInput::new("Username", &form.username)
                .on_input(Message::SignupUsernameChanged)
                .on_submit(submit.clone()),
        ))
        .push(field(
            TextInput::new("Email", &form.email)
                .on_input(Message::SignupEmailChanged)
                .on_submit(submit.clone()),
        ))
        .push(field(
            TextInput::new("Password", &form.password)
                .on_input(Message::SignupPasswordChanged)
                .on_submit(submit)
                .secure(true),
        ))
        .push(submit_button("Sign Up", "Signing up...", form.can_submit(), form.submitting, Message::SubmitSignup));

    screen(state, form_card("Sign Up", body, form.message.as_deref(), ("Login", Message::OpenLogin)))
}
