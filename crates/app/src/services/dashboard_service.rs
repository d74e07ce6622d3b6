use anyhow::Result;
use repodeck_core::app::{Command, DashboardState};
use repodeck_core::domain::{Event, Repository, SelectionEpoch};
use repodeck_core::ports::{ArticlePort, ArticleQuery, MetricsPort, Navigator, ProfilePort, Route};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// The orchestrator of the dashboard: owns which repository is selected,
/// fans out the article and metrics fetches on selection change, and owns
/// the loading state exposed to the presentation layer.
///
/// Ports are injected; all communication with the TUI goes over the event
/// channel. State is only ever mutated from the event loop, so the only
/// hazard is ordering, which the selection epochs take care of.
pub struct DashboardService {
    // Ports (dependency injection)
    profile_port: Arc<dyn ProfilePort>,
    article_port: Arc<dyn ArticlePort>,
    metrics_port: Arc<dyn MetricsPort>,
    navigator: Arc<dyn Navigator>,

    // Event bus
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,

    // External event sender (for TUI)
    event_tx_external: mpsc::UnboundedSender<Event>,

    // Command receiver
    command_rx: mpsc::UnboundedReceiver<Command>,

    // Read projection for queries
    projection: DashboardState,

    // Epoch of the most recently issued selection
    epoch: SelectionEpoch,

    // Background fetch management
    tasks: JoinSet<Result<()>>,
}

impl DashboardService {
    pub fn new(
        profile_port: Arc<dyn ProfilePort>,
        article_port: Arc<dyn ArticlePort>,
        metrics_port: Arc<dyn MetricsPort>,
        navigator: Arc<dyn Navigator>,
    ) -> (
        Self,
        mpsc::UnboundedReceiver<Event>,
        mpsc::UnboundedSender<Command>,
    ) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (event_tx_external, event_rx_external) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let service = Self {
            profile_port,
            article_port,
            metrics_port,
            navigator,
            event_tx,
            event_rx,
            event_tx_external,
            command_rx,
            projection: DashboardState::new(),
            epoch: 0,
            tasks: JoinSet::new(),
        };

        (service, event_rx_external, command_tx)
    }

    /// Get the current read projection (for UI queries)
    pub fn projection(&self) -> &DashboardState {
        &self.projection
    }

    /// Start the dashboard service: load the repository list once, then run
    /// the event loop
    pub async fn start(&mut self) -> Result<()> {
        info!("Starting DashboardService");

        self.load_repositories();

        self.run_event_loop().await
    }

    /// Handle a command from the TUI
    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SelectRepository { id } => {
                // Selection must name a member of the loaded list
                match self.projection.repository(id).cloned() {
                    Some(repository) => {
                        info!("Selecting repository {}", repository);
                        self.select_repository(repository);
                    }
                    None => {
                        warn!("Ignoring selection of unknown repository {}", id);
                    }
                }
            }
            Command::Reselect => {
                if let Some(repository) = self.projection.selected.clone() {
                    info!("Re-fetching selection {}", repository);
                    self.select_repository(repository);
                }
            }
            Command::Quit => {
                info!("Quit command received");
                let _ = self.event_tx.send(Event::QuitRequested);
            }
        }
    }

    /// Load the user profile and extract the repository list. Happens
    /// exactly once per service start; failure is unrecoverable for this
    /// view.
    fn load_repositories(&mut self) {
        let profile_port = self.profile_port.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(async move {
            match profile_port.repositories().await {
                Ok(repositories) => {
                    info!("Profile loaded with {} repositories", repositories.len());
                    let _ = event_tx.send(Event::RepositoriesLoaded { repositories });
                }
                Err(e) => {
                    error!("Profile load failed: {}", e);
                    let _ = event_tx.send(Event::RepositoriesFailed { msg: e.to_string() });
                }
            }
            Ok(())
        });
    }

    /// Select a repository and fan out its article and metrics fetches.
    ///
    /// The selection takes effect synchronously (the `SelectionStarted`
    /// event is queued before the fetch task is spawned). Both fetches run
    /// concurrently and are joined in one task; the `SelectionSettled`
    /// event only fires after both have settled. Results carry the epoch of
    /// this selection so that the projection can drop them if a newer
    /// selection has taken over in the meantime - prior in-flight fetches
    /// are not cancelled.
    fn select_repository(&mut self, repository: Repository) {
        self.epoch += 1;
        let epoch = self.epoch;

        let _ = self.event_tx.send(Event::SelectionStarted {
            epoch,
            repository: repository.clone(),
        });

        let article_port = self.article_port.clone();
        let metrics_port = self.metrics_port.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(async move {
            let query = ArticleQuery::first_page();
            let (articles, metrics) = tokio::join!(
                article_port.articles(repository.id, &query),
                metrics_port.average_metrics(repository.id),
            );

            match articles {
                Ok(articles) => {
                    let _ = event_tx.send(Event::ArticlesLoaded { epoch, articles });
                }
                Err(e) => {
                    error!("Article fetch failed for {}: {}", repository.id, e);
                    let _ = event_tx.send(Event::ArticlesFailed {
                        epoch,
                        msg: e.to_string(),
                    });
                }
            }

            match metrics {
                Ok(snapshot) => {
                    let _ = event_tx.send(Event::MetricsLoaded { epoch, snapshot });
                }
                Err(e) => {
                    error!("Metrics fetch failed for {}: {}", repository.id, e);
                    let _ = event_tx.send(Event::MetricsFailed {
                        epoch,
                        msg: e.to_string(),
                    });
                }
            }

            let _ = event_tx.send(Event::SelectionSettled { epoch });

            Ok(())
        });
    }

    /// Main event processing loop
    async fn run_event_loop(&mut self) -> Result<()> {
        info!("Starting event loop");

        loop {
            tokio::select! {
                // Handle commands from the TUI
                command = self.command_rx.recv() => {
                    match command {
                        Some(cmd) => self.handle_command(cmd),
                        None => {
                            info!("Command channel closed");
                            break;
                        }
                    }
                }

                // Handle events from the event bus
                event = self.event_rx.recv() => {
                    match event {
                        Some(event) => {
                            if self.handle_event(event) {
                                break;
                            }
                        }
                        None => {
                            info!("Event channel closed, stopping event loop");
                            break;
                        }
                    }
                }

                // Handle completed background tasks
                task_result = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    if let Some(result) = task_result {
                        match result {
                            Ok(Ok(())) => {
                                // Fetch task completed
                            }
                            Ok(Err(e)) => {
                                error!("Background task failed: {}", e);
                            }
                            Err(e) => {
                                error!("Background task panicked: {}", e);
                            }
                        }
                    }
                }

                else => {
                    break;
                }
            }
        }

        info!("Shutting down background tasks");
        self.tasks.abort_all();

        Ok(())
    }

    /// Handle a single event, update the projection and forward it to the
    /// TUI. Returns true when the event loop should stop.
    fn handle_event(&mut self, event: Event) -> bool {
        // Forward event to external listeners (TUI)
        let _ = self.event_tx_external.send(event.clone());

        match &event {
            Event::RepositoriesLoaded { repositories } => {
                self.projection.apply(&event);

                // The panel is never left in a "list loaded, nothing
                // selected" state: the first entry is selected right away.
                if let Some(first) = repositories.first().cloned() {
                    info!("Auto-selecting first repository {}", first);
                    self.select_repository(first);
                }
            }

            Event::RepositoriesFailed { msg } => {
                error!("Repository list load failed: {}", msg);
                self.projection.apply(&event);
                // Unrecoverable for this view
                self.navigator.redirect(Route::Home);
                let _ = self.event_tx.send(Event::QuitRequested);
            }

            Event::QuitRequested => {
                info!("Quit requested via event");
                return true;
            }

            _ => {
                self.projection.apply(&event);
            }
        }

        false
    }
}

impl Drop for DashboardService {
    fn drop(&mut self) {
        // Abort all background tasks when the service is dropped
        self.tasks.abort_all();
    }
}
