use thiserror::Error;

/// Failures of the read ports (profile, articles, metrics).
///
/// Every failure is terminal for that attempt - there is no retry anywhere
/// in the core, only a new user-triggered selection.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network failure: {msg}")]
    Network { msg: String },

    #[error("authentication rejected by backend")]
    Auth,

    #[error("unknown repository: {id}")]
    NotFound { id: String },
}

/// Core application errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("no access credential present")]
    Unauthenticated,

    #[error("profile load failed: {msg}")]
    ProfileLoad { msg: String },

    #[error("repository not selected or unknown: {id}")]
    UnknownRepository { id: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
