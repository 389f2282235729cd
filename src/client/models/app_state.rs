use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::credentials::{Credentials, LoginForm, SignupForm};
use crate::client::models::generation::{Submission, WorkflowError};
use crate::client::models::messages::Message;
use crate::client::models::session::Session;
use crate::client::models::workspace::Workspace;
use crate::common::models::SignupRequest;
use log::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Workspace,
    Login,
    Signup,
}

/// Work `update` asks the application to run asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Login(Credentials),
    Signup(SignupRequest),
    Send(Submission),
    SaveImage { encoded: String },
    /// Clears the alert bar after a delay, unless a newer alert replaced it.
    ClearLogLater(u64),
}

#[derive(Debug, Clone)]
pub struct ConceptCraftState {
    pub screen: Screen,
    pub session: Session,
    /// Access token from the last login; kept in memory only.
    pub session_token: Option<String>,
    pub workspace: Workspace,
    pub login: LoginForm,
    pub signup: SignupForm,
    pub logger: Vec<LogMessage>,
    log_serial: u64,
}

impl ConceptCraftState {
    pub fn new(session: Session) -> Self {
        Self {
            screen: Screen::Workspace,
            session,
            session_token: None,
            workspace: Workspace::default(),
            login: LoginForm::default(),
            signup: SignupForm::default(),
            logger: Vec::new(),
            log_serial: 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn alert(&mut self, level: LogLevel, message: impl Into<String>) -> Effect {
        self.logger.clear();
        self.logger.push(LogMessage { level, message: message.into() });
        self.log_serial += 1;
        Effect::ClearLogLater(self.log_serial)
    }

    fn navigate(&mut self, screen: Screen) {
        if self.screen == Screen::Workspace && screen != Screen::Workspace {
            self.workspace.unmount();
        }
        if screen == Screen::Workspace {
            // read-through on every entry into the workspace
            self.session.refresh();
        }
        self.screen = screen;
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::NoOp => {}
            Message::OpenWorkspace => self.navigate(Screen::Workspace),
            Message::OpenLogin => self.navigate(Screen::Login),
            Message::OpenSignup => self.navigate(Screen::Signup),

            Message::LoginUsernameChanged(username) => self.login.username = username,
            Message::LoginPasswordChanged(password) => self.login.password = password,
            Message::ToggleShowPassword => self.login.show_password = !self.login.show_password,
            Message::SubmitLogin => {
                if !self.login.can_submit() {
                    return vec![];
                }
                self.login.submitting = true;
                self.login.message = None;
                return vec![Effect::Login(self.login.credentials())];
            }
            Message::LoginResult(result) => {
                self.login.submitting = false;
                self.login.message = Some(result.message.clone());
                if result.success {
                    self.session.set_authenticated(true);
                    self.session_token = result.token;
                    self.login.password.clear();
                    self.navigate(Screen::Workspace);
                    return vec![self.alert(LogLevel::Success, result.message)];
                }
            }

            Message::SignupUsernameChanged(username) => self.signup.username = username,
            Message::SignupEmailChanged(email) => self.signup.email = email,
            Message::SignupPasswordChanged(password) => self.signup.password = password,
            Message::SubmitSignup => {
                if !self.signup.can_submit() {
                    return vec![];
                }
                self.signup.submitting = true;
                self.signup.message = None;
                return vec![Effect::Signup(self.signup.registration())];
            }
            Message::SignupResult(result) => {
                self.signup.submitting = false;
                self.signup.message = Some(result.message);
            }

            Message::Logout => {
                self.session.set_authenticated(false);
                self.session_token = None;
                self.workspace.popups = Default::default();
                info!("[SESSION] Logged out");
                return vec![self.alert(LogLevel::Info, "Logout successful")];
            }

            Message::PromptChanged(index, text) => {
                let _ = self.workspace.edit_prompt(&self.session, index, text);
            }
            Message::AddPrompt => {
                let _ = self.workspace.add_prompt(&self.session);
            }
            Message::RemovePrompt(index) => {
                let _ = self.workspace.remove_prompt(&self.session, index);
            }
            Message::SubmitPrompts => match self.workspace.submit(&self.session) {
                Ok(submission) => return vec![Effect::Send(submission)],
                Err(WorkflowError::LoginRequired) => debug!("[WORKSPACE] Submission blocked, login required"),
                Err(e) => debug!("[WORKSPACE] Submission refused: {}", e),
            },
            Message::ImagesSettled { ticket, result } => {
                let failed = result.is_err();
                match self.workspace.settle(ticket, result) {
                    Ok(kind) if failed => return vec![self.alert(LogLevel::Error, kind.failure_message())],
                    Ok(_) => {}
                    Err(e) => debug!("[WORKSPACE] Dropping response: {}", e),
                }
            }
            Message::DismissLoginPrompt => self.workspace.dismiss_login_prompt(),

            Message::OpenExperiment(index) => self.workspace.open_experiment(index),
            Message::CloseExperiment => self.workspace.close_experiment(),
            Message::ExperimentChosen(action) => match self.workspace.choose_experiment(action) {
                Ok(Some(submission)) => return vec![Effect::Send(submission)],
                Ok(None) => {}
                Err(e) => debug!("[WORKSPACE] {} refused: {}", action, e),
            },
            Message::SaveImage(index) => {
                let encoded = self
                    .workspace
                    .workflow()
                    .images()
                    .get(index)
                    .filter(|img| img.handle.is_some())
                    .map(|img| img.encoded.clone());
                return match encoded {
                    Some(encoded) => vec![Effect::SaveImage { encoded }],
                    None => vec![self.alert(LogLevel::Warning, "This image cannot be saved")],
                };
            }
            Message::ImageSaved(result) => match result {
                Ok(Some(path)) => return vec![self.alert(LogLevel::Success, format!("Image saved to {}", path.display()))],
                Ok(None) => {}
                Err(e) => {
                    error!("Failed to save image: {}", e);
                    return vec![self.alert(LogLevel::Error, "Failed to save image")];
                }
            },
            Message::ClearLog(serial) => {
                if serial == self.log_serial {
                    self.logger.clear();
                }
            }
        }
        vec![]
    }
}
