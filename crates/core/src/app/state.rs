use crate::domain::{Article, Event, MetricsSnapshot, Repository, SelectionEpoch};

/// Status of the article/metrics pane for the current selection.
///
/// Re-enters `Loading` on every new selection; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneStatus {
    /// Nothing selected yet
    Idle,
    /// A selection's fetches are in flight
    Loading,
    /// Both articles and metrics arrived
    Loaded,
    /// Exactly one side arrived (the other failed or came back empty)
    PartiallyLoaded,
    /// Neither side has data
    Empty,
}

/// Read projection of the dashboard, driven purely by [`Event`]s.
///
/// Invariant: `articles` and `metrics` always correspond to `selected` as of
/// their last successful fetch. Results from a superseded selection carry a
/// stale epoch and are dropped in [`apply`](Self::apply), so a slow fetch
/// from an earlier selection can never overwrite a newer one. While a fresh
/// selection's fetches are in flight the previous values stay visible,
/// guarded by `article_loading`.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Repository list in server order
    pub repositories: Vec<Repository>,

    /// Whether the one-shot profile load is still in flight
    pub repo_list_loading: bool,

    /// The currently selected repository, if any
    pub selected: Option<Repository>,

    /// Epoch of the live selection; fetch results tagged with an older
    /// epoch are discarded
    pub epoch: SelectionEpoch,

    /// Articles of the selection that last fetched successfully
    pub articles: Vec<Article>,

    /// Metrics of the selection that last fetched successfully
    pub metrics: Option<MetricsSnapshot>,

    /// True from selection until both fetches of that selection settled
    pub article_loading: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            repo_list_loading: true,
            ..Self::default()
        }
    }

    /// Apply an event to update the projection
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::RepositoriesLoaded { repositories } => {
                self.repositories = repositories.clone();
                self.repo_list_loading = false;
            }

            Event::RepositoriesFailed { .. } => {
                self.repo_list_loading = false;
            }

            Event::SelectionStarted { epoch, repository } => {
                // Selections are issued with monotonically increasing
                // epochs; an older start must not regress a newer one.
                if *epoch > self.epoch || self.selected.is_none() {
                    self.epoch = *epoch;
                    self.selected = Some(repository.clone());
                    self.article_loading = true;
                }
            }

            Event::ArticlesLoaded { epoch, articles } => {
                if self.is_current(*epoch) {
                    self.articles = articles.clone();
                }
            }

            Event::ArticlesFailed { epoch, .. } => {
                if self.is_current(*epoch) {
                    self.articles.clear();
                }
            }

            Event::MetricsLoaded { epoch, snapshot } => {
                if self.is_current(*epoch) {
                    self.metrics = Some(snapshot.clone());
                }
            }

            Event::MetricsFailed { epoch, .. } => {
                if self.is_current(*epoch) {
                    self.metrics = None;
                }
            }

            Event::SelectionSettled { epoch } => {
                // The loading flag is owned by the join over both fetches;
                // a settle from a superseded selection must not clear it.
                if self.is_current(*epoch) {
                    self.article_loading = false;
                }
            }

            Event::QuitRequested => {
                // No state change needed
            }
        }
    }

    fn is_current(&self, epoch: SelectionEpoch) -> bool {
        epoch == self.epoch && self.selected.is_some()
    }

    /// Derived status of the article/metrics pane
    pub fn pane_status(&self) -> PaneStatus {
        if self.selected.is_none() {
            return PaneStatus::Idle;
        }
        if self.article_loading {
            return PaneStatus::Loading;
        }
        match (self.articles.is_empty(), self.metrics.is_some()) {
            (false, true) => PaneStatus::Loaded,
            (true, false) => PaneStatus::Empty,
            _ => PaneStatus::PartiallyLoaded,
        }
    }

    /// Look up a repository from the loaded list by id
    pub fn repository(&self, id: crate::domain::RepoId) -> Option<&Repository> {
        self.repositories.iter().find(|r| r.id == id)
    }
}
