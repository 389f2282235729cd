use crate::client::config::{ClientConfig, FlagBackend};
use keyring::Entry;
use log::{debug, warn};
use std::path::{Path, PathBuf};

const SERVICE: &str = "conceptcraft";
pub const FLAG_KEY: &str = "isLoggedIn";

const AUTHENTICATED: &str = "true";
const UNAUTHENTICATED: &str = "false";

/// Persisted "logged in" flag. Only ever holds the literal strings `true` / `false`.
#[derive(Debug, Clone)]
pub enum SessionStore {
    /// OS keyring, optionally falling back to a local file when the keyring is unavailable.
    Keyring { fallback: Option<PathBuf> },
    File(PathBuf),
}

impl SessionStore {
    pub fn from_config(cfg: &ClientConfig) -> Self {
        match cfg.flag_backend {
            FlagBackend::File => SessionStore::File(cfg.flag_path.clone()),
            FlagBackend::Keyring => SessionStore::Keyring {
                fallback: cfg.keyring_fallback.then(|| cfg.flag_path.clone()),
            },
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        SessionStore::File(path.into())
    }

    /// `true` only when the stored value is the authenticated marker.
    /// Missing or unreadable storage reads as `false`.
    pub fn load_flag(&self) -> bool {
        self.read_raw().map(|v| v.trim() == AUTHENTICATED).unwrap_or(false)
    }

    pub fn save_flag(&self, authenticated: bool) -> anyhow::Result<()> {
        let value = if authenticated { AUTHENTICATED } else { UNAUTHENTICATED };
        match self {
            SessionStore::File(path) => write_file(path, value),
            SessionStore::Keyring { fallback } => {
                let entry = Entry::new(SERVICE, FLAG_KEY);
                match entry.set_password(value) {
                    Ok(()) => Ok(()),
                    Err(e) => match fallback {
                        Some(path) => {
                            warn!("[SESSION_STORE] Keyring unavailable ({}), persisting flag to fallback file", e);
                            write_file(path, value)
                        }
                        None => Err(anyhow::anyhow!("keyring unavailable and file fallback disabled: {}", e)),
                    },
                }
            }
        }
    }

    fn read_raw(&self) -> Option<String> {
        match self {
            SessionStore::File(path) => read_file(path),
            SessionStore::Keyring { fallback } => {
                let entry = Entry::new(SERVICE, FLAG_KEY);
                match entry.get_password() {
                    Ok(v) => Some(v),
                    Err(e) => {
                        debug!("[SESSION_STORE] Keyring read failed: {}", e);
                        fallback.as_deref().and_then(read_file)
                    }
                }
            }
        }
    }
}

fn read_file(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}

fn write_file(path: &Path, value: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::file(dir.path().join("absent.txt"));
        assert!(!store.load_flag());
    }

    #[test]
    fn only_the_literal_marker_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.txt");
        let store = SessionStore::file(&path);

        for (raw, expected) in [("true", true), ("true\n", true), ("TRUE", false), ("1", false), ("", false)] {
            std::fs::write(&path, raw).unwrap();
            assert_eq!(store.load_flag(), expected, "raw value {:?}", raw);
        }
    }

    #[test]
    fn save_writes_markers_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("flag.txt");
        let store = SessionStore::file(&path);

        store.save_flag(true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "true");
        store.save_flag(false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "false");
    }
}
