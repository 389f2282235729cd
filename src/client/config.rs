use log::info;
use std::env;
use std::path::PathBuf;

/// Where the "logged in" flag is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagBackend {
    Keyring,
    #[default]
    File,
}

impl FlagBackend {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "keyring" => FlagBackend::Keyring,
            _ => FlagBackend::File,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub flag_backend: FlagBackend,
    pub flag_path: PathBuf,
    pub keyring_fallback: bool,
    pub save_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000".to_string(),
            flag_backend: FlagBackend::File,
            flag_path: PathBuf::from("data").join("session_flag.txt"),
            keyring_fallback: false,
            save_name: "generated_image.png".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let config = Self {
            api_url: env::var("CONCEPTCRAFT_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            flag_backend: env::var("CONCEPTCRAFT_FLAG_BACKEND")
                .map(|v| FlagBackend::parse(&v))
                .unwrap_or(defaults.flag_backend),
            flag_path: env::var("CONCEPTCRAFT_FLAG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.flag_path),
            keyring_fallback: env::var("KEYRING_FALLBACK").map(|v| v == "true" || v == "1").unwrap_or(false),
            save_name: env::var("CONCEPTCRAFT_SAVE_NAME").unwrap_or(defaults.save_name),
        };

        info!("Client configuration loaded:");
        info!("  Backend URL: {}", config.api_url);
        info!("  Session flag backend: {:?} ({})", config.flag_backend, config.flag_path.display());
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_backend_falls_back_to_file() {
        assert_eq!(FlagBackend::parse("keyring"), FlagBackend::Keyring);
        assert_eq!(FlagBackend::parse(" KEYRING "), FlagBackend::Keyring);
        assert_eq!(FlagBackend::parse("sqlite"), FlagBackend::File);
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.api_url, "http://127.0.0.1:8000");
        assert_eq!(cfg.save_name, "generated_image.png");
        assert!(!cfg.keyring_fallback);
    }
}
