use crate::client::gui::style::*;
use crate::client::gui::views::logger::logger_view;
use crate::client::gui::widgets::{gallery, popup};
use crate::client::models::app_state::ConceptCraftState;
use crate::client::models::messages::Message;
use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Element, Length};

fn prompt_editor(state: &ConceptCraftState) -> Element<'_, Message> {
    let prompts = state.workspace.prompts();
    let removable = prompts.len() > 1;

    let inputs = prompts.iter().enumerate().fold(Column::new().spacing(10), |col, (index, prompt)| {
        let mut row = Row::new().spacing(8).align_items(Alignment::Center).push(
            Container::new(
                TextInput::new("Enter a text prompt", prompt)
                    .on_input(move |text| Message::PromptChanged(index, text))
                    .on_submit(Message::SubmitPrompts)
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );
        if removable {
            row = row.push(
                Button::new(Text::new("✕").font(EMOJI_FONT).size(14))
                    .on_press(Message::RemovePrompt(index))
                    .style(iced::theme::Button::Text),
            );
        }
        col.push(row)
    });

    let loading = state.workspace.workflow().is_loading();
    let generate = Button::new(Text::new(if loading { "Generating..." } else { "Generate Images" }).font(BOLD_FONT).size(16))
        .padding([12, 20]);
    // disabled while a request is outstanding
    let generate = if loading {
        generate.style(iced::theme::Button::Secondary)
    } else {
        generate.on_press(Message::SubmitPrompts).style(iced::theme::Button::Primary)
    };

    let actions = Row::new()
        .spacing(12)
        .push(
            Button::new(Text::new("Add another prompt").size(14))
                .on_press(Message::AddPrompt)
                .style(iced::theme::Button::Secondary)
                .padding([12, 16]),
        )
        .push(generate);

    Container::new(Column::new().spacing(16).push(inputs).push(actions))
        .width(Length::Fixed(640.0))
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn account_bar(state: &ConceptCraftState) -> Element<'_, Message> {
    let mut bar = Row::new().spacing(12).align_items(Alignment::Center).push(Space::new(Length::Fill, Length::Shrink));
    if state.is_authenticated() {
        bar = bar.push(
            Button::new(Text::new("Logout"))
                .on_press(Message::Logout)
                .style(iced::theme::Button::Destructive),
        );
    } else {
        bar = bar
            .push(Button::new(Text::new("SignUp")).on_press(Message::OpenSignup).style(iced::theme::Button::Secondary))
            .push(Button::new(Text::new("Login")).on_press(Message::OpenLogin).style(iced::theme::Button::Primary));
    }
    bar.into()
}

pub fn view(state: &ConceptCraftState) -> Element<'_, Message> {
    let ws = &state.workspace;

    let mut content = Column::new()
        .spacing(24)
        .padding(24)
        .width(Length::Fill)
        .align_items(Alignment::Center)
        .push(account_bar(state))
        .push(Text::new("ConceptCraft").size(42).font(BOLD_FONT).style(TEXT_PRIMARY));

    if ws.popups.login_prompt {
        content = content.push(popup::login_prompt());
    }

    content = content.push(prompt_editor(state));

    if ws.popups.experiment.is_some() {
        content = content.push(popup::experiment());
    }

    content = content
        .push(gallery::view(ws.workflow().images()))
        .push(
            Text::new("“Creativity is Intelligence Having Fun.” -Albert Einstein")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    Container::new(
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(Container::new(logger_view(&state.logger)).width(Length::Fill).padding([8, 12, 0, 12]))
            .push(Scrollable::new(content).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}
