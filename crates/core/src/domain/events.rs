use super::{article::Article, metrics::MetricsSnapshot, repo::Repository};

/// Epoch tag for one `select_repository` invocation.
///
/// Monotonically increasing; every fetch issued for a selection carries the
/// epoch current at issue time, and results whose epoch no longer matches
/// the live selection are discarded on apply. This is what keeps a
/// slow-resolving fetch from a prior selection from overwriting fresher
/// state.
pub type SelectionEpoch = u64;

/// Domain events emitted by the dashboard service
#[derive(Debug, Clone)]
pub enum Event {
    /// The user profile was loaded; carries the repository list (possibly
    /// empty) in server order
    RepositoriesLoaded { repositories: Vec<Repository> },

    /// The profile load failed - unrecoverable for this view
    RepositoriesFailed { msg: String },

    /// A repository was selected; articles and metrics are now in flight
    SelectionStarted {
        epoch: SelectionEpoch,
        repository: Repository,
    },

    /// Article fetch succeeded for the tagged selection
    ArticlesLoaded {
        epoch: SelectionEpoch,
        articles: Vec<Article>,
    },

    /// Article fetch failed for the tagged selection
    ArticlesFailed { epoch: SelectionEpoch, msg: String },

    /// Metrics fetch succeeded for the tagged selection
    MetricsLoaded {
        epoch: SelectionEpoch,
        snapshot: MetricsSnapshot,
    },

    /// Metrics fetch failed for the tagged selection
    MetricsFailed { epoch: SelectionEpoch, msg: String },

    /// Both fetches of the tagged selection have settled
    SelectionSettled { epoch: SelectionEpoch },

    /// User requested to quit the application
    QuitRequested,
}
