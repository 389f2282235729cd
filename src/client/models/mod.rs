pub mod app_state;
pub mod credentials;
pub mod experiment;
pub mod generation;
pub mod messages;
pub mod prompt_list;
pub mod session;
pub mod workspace;
