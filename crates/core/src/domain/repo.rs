use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId(pub u64);

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source repository owned by the authenticated user.
///
/// Immutable once fetched; the backend determines list order and the
/// projection preserves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: RepoId,
    pub name: String,
    /// Registration timestamp as delivered by the backend
    pub reg_date: String,
    /// Commit identifier of the last analysed request, if any
    pub last_rq_commit: Option<String>,
    pub language: Option<String>,
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
