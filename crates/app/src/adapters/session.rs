//! Local session credential store and navigation adapters.
//!
//! The token lives in a plain file written at login by the companion
//! tooling; this adapter only ever reads it.

use repodeck_core::ports::{Navigator, Route, SessionStore};
use std::path::{Path, PathBuf};
use tracing::info;

/// File-backed read-only session store
pub struct FileSessionStore {
    token_path: PathBuf,
}

impl FileSessionStore {
    pub fn with_path<P: AsRef<Path>>(token_path: P) -> Self {
        Self {
            token_path: token_path.as_ref().to_path_buf(),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn access_token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.token_path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

/// Navigator that announces the redirect target on the console.
///
/// The dashboard never runs past a redirect, so printing the destination
/// and letting the process exit is the terminal equivalent of a page
/// navigation.
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn redirect(&self, route: Route) {
        info!("Redirecting to {}", route);
        eprintln!("repodeck: redirected to {route} page");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_token_file_yields_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("absent"));
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_blank_token_file_yields_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();
        let store = FileSessionStore::with_path(&path);
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_token_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("token");
        std::fs::write(&path, "sekrit-token\n").unwrap();
        let store = FileSessionStore::with_path(&path);
        assert_eq!(store.access_token(), Some("sekrit-token".to_string()));
    }
}
