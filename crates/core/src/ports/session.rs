/// Named navigation destinations the dashboard can redirect to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login page - target when no credential is present
    Login,
    /// Home page - target when the profile load fails
    Home,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Login => write!(f, "login"),
            Route::Home => write!(f, "home"),
        }
    }
}

/// Read-only view of the locally persisted session credential.
///
/// Session state is passed in explicitly rather than looked up ambiently;
/// the lifecycle (set at login, cleared at logout) belongs to the caller.
pub trait SessionStore: Send + Sync {
    /// The stored access token, if one is present
    fn access_token(&self) -> Option<String>;
}

/// Navigation service for redirects out of this view
pub trait Navigator: Send + Sync {
    /// Redirect to a named destination. Fire-and-forget; the dashboard does
    /// not run past a redirect.
    fn redirect(&self, route: Route);
}
