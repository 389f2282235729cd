use crate::client::utils::session_store::SessionStore;
use log::{info, warn};

/// In-memory authentication state backed by the persisted flag.
#[derive(Debug, Clone)]
pub struct Session {
    authenticated: bool,
    store: SessionStore,
}

impl Session {
    /// Reads the persisted flag once. Absent or corrupt storage yields an unauthenticated session.
    pub fn initialize(store: SessionStore) -> Self {
        let authenticated = store.load_flag();
        info!("[SESSION] Initial state: {}", if authenticated { "authenticated" } else { "anonymous" });
        Self { authenticated, store }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Updates the in-memory value and writes the marker synchronously.
    /// A failed write is logged and otherwise treated like success.
    pub fn set_authenticated(&mut self, value: bool) {
        self.authenticated = value;
        if let Err(e) = self.store.save_flag(value) {
            warn!("[SESSION] Failed to persist session flag: {}", e);
        }
    }

    /// Re-reads the persisted flag; called on every entry into the workspace.
    pub fn refresh(&mut self) -> bool {
        self.authenticated = self.store.load_flag();
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_picks_up_external_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.txt");
        let mut session = Session::initialize(SessionStore::file(&path));
        assert!(!session.is_authenticated());

        std::fs::write(&path, "true").unwrap();
        assert!(!session.is_authenticated());
        assert!(session.refresh());
        assert!(session.is_authenticated());
    }

    #[test]
    fn unwritable_store_still_updates_memory() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be written as a file
        let mut session = Session::initialize(SessionStore::file(dir.path()));
        session.set_authenticated(true);
        assert!(session.is_authenticated());
    }
}
