use repodeck_core::error::CoreError;
use repodeck_core::ports::{Navigator, Route, SessionStore};
use tracing::{info, warn};

/// Gate at the entry of the dashboard: without a stored credential nothing
/// else runs, and the user is sent to the login page. No retry.
pub struct SessionGuard;

impl SessionGuard {
    /// Read the locally persisted access token. On absence, redirect to the
    /// login destination and fail with `Unauthenticated`.
    pub fn check(
        session: &dyn SessionStore,
        navigator: &dyn Navigator,
    ) -> Result<String, CoreError> {
        match session.access_token() {
            Some(token) => {
                info!("Session credential present");
                Ok(token)
            }
            None => {
                warn!("No session credential, redirecting to login");
                navigator.redirect(Route::Login);
                Err(CoreError::Unauthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FixedSession(Option<String>);

    impl SessionStore for FixedSession {
        fn access_token(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, route: Route) {
            self.routes.lock().unwrap().push(route);
        }
    }

    #[test]
    fn present_token_passes_without_redirect() {
        let session = FixedSession(Some("tok".to_string()));
        let navigator = RecordingNavigator::default();

        let token = SessionGuard::check(&session, &navigator).unwrap();
        assert_eq!(token, "tok");
        assert!(navigator.routes.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_token_redirects_to_login() {
        let session = FixedSession(None);
        let navigator = RecordingNavigator::default();

        let err = SessionGuard::check(&session, &navigator).unwrap_err();
        assert!(matches!(err, CoreError::Unauthenticated));
        assert_eq!(*navigator.routes.lock().unwrap(), vec![Route::Login]);
    }
}
