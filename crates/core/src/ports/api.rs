use crate::domain::{Article, MetricsSnapshot, RepoId, Repository};
use crate::error::FetchError;
use async_trait::async_trait;

/// Pagination and search parameters of the article listing endpoint.
///
/// The dashboard always asks for the first page with no keyword filter.
#[derive(Clone, Debug, PartialEq)]
pub struct ArticleQuery {
    pub page: u32,
    pub search_item: u32,
    pub keyword: String,
}

impl ArticleQuery {
    /// Page 1, no filter - the only query this view issues
    pub fn first_page() -> Self {
        Self {
            page: 1,
            search_item: 0,
            keyword: String::new(),
        }
    }
}

/// Port for the user-profile endpoint
#[async_trait]
pub trait ProfilePort: Send + Sync {
    /// Fetch the authenticated user's repositories, in server order.
    /// Called exactly once per mounted dashboard.
    async fn repositories(&self) -> Result<Vec<Repository>, FetchError>;
}

/// Port for the article-listing endpoint
#[async_trait]
pub trait ArticlePort: Send + Sync {
    /// List articles scoped to one repository. Idempotent; no caching
    /// across calls.
    async fn articles(&self, repo: RepoId, query: &ArticleQuery)
        -> Result<Vec<Article>, FetchError>;
}

/// Port for the metrics-aggregation endpoint
#[async_trait]
pub trait MetricsPort: Send + Sync {
    /// Fetch the averaged quality metrics for one repository
    async fn average_metrics(&self, repo: RepoId) -> Result<MetricsSnapshot, FetchError>;
}
