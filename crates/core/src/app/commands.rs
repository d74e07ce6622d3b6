use crate::domain::repo::RepoId;

/// Commands that can be sent to the dashboard service
#[derive(Debug, Clone)]
pub enum Command {
    /// Select a repository from the loaded list and fan out the article and
    /// metrics fetches for it
    SelectRepository { id: RepoId },

    /// Re-fetch articles and metrics for the current selection
    Reselect,

    /// Quit the application
    Quit,
}
