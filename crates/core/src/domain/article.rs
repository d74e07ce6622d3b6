use serde::{Deserialize, Serialize};

/// Unique identifier for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub u64);

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An article (post) published from one repository.
///
/// Scoped to exactly one repository at a time; the article pane is replaced
/// wholesale on every selection change, never merged incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    /// Absent titles get a positional display fallback in the view
    pub title: Option<String>,
    /// Author label, if the backend attached one
    pub writer: Option<String>,
    pub reg_date: String,
}
