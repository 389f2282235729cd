use crate::client::config::ClientConfig;
use crate::client::models::app_state::{ConceptCraftState, Effect, Screen};
use crate::client::models::messages::Message;
use crate::client::models::session::Session;
use crate::client::services::api_client::ApiClient;
use crate::client::services::auth_service::AuthService;
use crate::client::services::image_store;
use crate::client::utils::session_store::SessionStore;
use iced::{Application, Command, Element, Theme};

/// Everything the application needs from `main`.
pub struct AppFlags {
    pub config: ClientConfig,
    pub api: ApiClient,
}

pub struct ConceptCraftApp {
    pub state: ConceptCraftState,
    pub api: ApiClient,
    pub config: ClientConfig,
}

impl ConceptCraftApp {
    fn run_effect(&self, effect: Effect) -> Command<Message> {
        match effect {
            Effect::Login(credentials) => {
                let api = self.api.clone();
                Command::perform(async move { AuthService::login(&api, &credentials).await }, Message::LoginResult)
            }
            Effect::Signup(request) => {
                let api = self.api.clone();
                Command::perform(async move { AuthService::signup(&api, &request).await }, Message::SignupResult)
            }
            Effect::Send(submission) => {
                let api = self.api.clone();
                let ticket = submission.ticket;
                Command::perform(
                    async move {
                        api.submit(submission.kind, &submission.request)
                            .await
                            .map(|response| response.images)
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::ImagesSettled { ticket, result },
                )
            }
            Effect::SaveImage { encoded } => {
                let default_name = self.config.save_name.clone();
                Command::perform(
                    async move {
                        match image_store::pick_save_path(default_name).await {
                            Some(path) => image_store::save_image(&encoded, &path)
                                .await
                                .map(|()| Some(path))
                                .map_err(|e| e.to_string()),
                            None => Ok(None),
                        }
                    },
                    Message::ImageSaved,
                )
            }
            Effect::ClearLogLater(serial) => Command::perform(
                async move {
                    tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
                    Message::ClearLog(serial)
                },
                |msg| msg,
            ),
        }
    }
}

impl Application for ConceptCraftApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let session = Session::initialize(SessionStore::from_config(&flags.config));
        let app = ConceptCraftApp {
            state: ConceptCraftState::new(session),
            api: flags.api,
            config: flags.config,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        match self.state.screen {
            Screen::Workspace => "ConceptCraft".to_string(),
            Screen::Login => "ConceptCraft - Login".to_string(),
            Screen::Signup => "ConceptCraft - Sign Up".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let effects = self.state.update(message);
        Command::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
    }

    fn view(&self) -> Element<Message> {
        match self.state.screen {
            Screen::Workspace => crate::client::gui::views::workspace::view(&self.state),
            Screen::Login => crate::client::gui::views::login::view(&self.state),
            Screen::Signup => crate::client::gui::views::signup::view(&self.state),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
