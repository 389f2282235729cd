use crate::client::models::experiment::ExperimentAction;
use crate::client::models::generation::RequestTicket;
use crate::client::services::auth_service::AuthResult;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    // Navigation
    OpenWorkspace,
    OpenLogin,
    OpenSignup,
    // Login screen
    LoginUsernameChanged(String),
    LoginPasswordChanged(String),
    ToggleShowPassword,
    SubmitLogin,
    LoginResult(AuthResult),
    // Signup screen
    SignupUsernameChanged(String),
    SignupEmailChanged(String),
    SignupPasswordChanged(String),
    SubmitSignup,
    SignupResult(AuthResult),
    Logout,
    // Prompt editor
    PromptChanged(usize, String),
    AddPrompt,
    RemovePrompt(usize),
    SubmitPrompts,
    ImagesSettled { ticket: RequestTicket, result: Result<Vec<String>, String> },
    DismissLoginPrompt,
    // Gallery and experiment popup
    OpenExperiment(usize),
    CloseExperiment,
    ExperimentChosen(ExperimentAction),
    SaveImage(usize),
    ImageSaved(Result<Option<PathBuf>, String>),
    ClearLog(u64),
}
