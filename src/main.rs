use conceptcraft::client::config::ClientConfig;
use conceptcraft::client::gui::app::{AppFlags, ConceptCraftApp};
use conceptcraft::client::services::api_client::ApiClient;
use iced::Application;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    conceptcraft::utils::logger::init();

    let config = ClientConfig::from_env();
    let api = ApiClient::from_config(&config)?;
    ConceptCraftApp::run(iced::Settings::with_flags(AppFlags { config, api }))
        .map_err(|e| anyhow::anyhow!("GUI error: {}", e))?;
    Ok(())
}
