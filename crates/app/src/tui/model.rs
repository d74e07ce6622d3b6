use repodeck_core::app::{chart, ChartDataset, DashboardState};
use repodeck_core::domain::{Event, Repository};
use repodeck_core::ports::UiConfig;

/// The TUI model - the complete UI state.
///
/// Wraps the core projection and adds UI-only concerns (cursor, transient
/// messages) on top.
#[derive(Debug, Default)]
pub struct TuiModel {
    /// Core data, driven by service events
    pub projection: DashboardState,

    /// UI preferences from the config file
    pub ui: UiConfig,

    /// Cursor position in the repository list
    pub cursor: usize,

    /// Error messages to display
    pub errors: Vec<String>,

    /// Status messages to display
    pub messages: Vec<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl TuiModel {
    pub fn new(ui: UiConfig) -> Self {
        Self {
            projection: DashboardState::new(),
            ui,
            ..Self::default()
        }
    }

    /// Apply a service event to update both projection and UI state
    pub fn apply_event(&mut self, event: &Event) {
        self.projection.apply(event);

        match event {
            Event::RepositoriesLoaded { repositories } => {
                self.cursor = 0;
                self.messages
                    .push(format!("Loaded {} repositories", repositories.len()));
            }

            Event::RepositoriesFailed { msg } => {
                self.errors.push(format!("Repository load failed: {msg}"));
            }

            Event::SelectionStarted { repository, .. } => {
                // Keep the cursor on the repository that drives the panes
                if let Some(pos) = self
                    .projection
                    .repositories
                    .iter()
                    .position(|r| r.id == repository.id)
                {
                    self.cursor = pos;
                }
            }

            Event::ArticlesFailed { epoch, msg } if *epoch == self.projection.epoch => {
                self.errors.push(format!("Article load failed: {msg}"));
            }

            Event::MetricsFailed { epoch, msg } if *epoch == self.projection.epoch => {
                self.errors.push(format!("Metrics load failed: {msg}"));
            }

            Event::QuitRequested => {
                self.should_quit = true;
            }

            _ => {}
        }
    }

    /// Repository the cursor is on, if any
    pub fn repo_under_cursor(&self) -> Option<&Repository> {
        self.projection.repositories.get(self.cursor)
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.projection.repositories.len() {
            self.cursor += 1;
        }
    }

    /// Chart dataset derived from the current metrics, if any
    pub fn chart_dataset(&self) -> Option<ChartDataset> {
        chart::project(self.projection.metrics.as_ref())
    }

    /// Clear all error messages
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}
