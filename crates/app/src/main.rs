// Composition root: wires adapters, the dashboard service and the MVU TUI
// together.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

use repodeck::adapters::{
    api::ApiClient,
    persistence::FileConfigStore,
    session::{ConsoleNavigator, FileSessionStore},
};
use repodeck::cli::CliArgs;
use repodeck::services::{DashboardService, SessionGuard};
use repodeck::tui::{TuiMessage, TuiModel, TuiUpdate, TuiView};
use repodeck_core::app::Command;
use repodeck_core::domain::Event;
use repodeck_core::ports::{ConfigStore, Navigator};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with env filter; logs go to stderr so they do not
    // fight the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting RepoDeck");

    let cli_args = CliArgs::parse();

    // Load configuration; CLI overrides the config file
    let config_store = match &cli_args.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new()?,
    };
    let mut config = config_store.load()?;
    if let Some(api_url) = cli_args.api_url {
        config.api_base_url = api_url;
    }
    if let Some(token_file) = cli_args.token_file {
        config.token_path = token_file;
    }

    info!("Using API at {}", config.api_base_url);

    let navigator: Arc<dyn Navigator> = Arc::new(ConsoleNavigator);

    // Session gate: without a credential nothing else runs
    let session = FileSessionStore::with_path(&config.token_path);
    let token = match SessionGuard::check(&session, navigator.as_ref()) {
        Ok(token) => token,
        Err(_) => return Ok(()),
    };

    // Create adapters (dependency injection)
    let api = Arc::new(ApiClient::from_url(&config.api_base_url, token)?);

    let (service, event_rx, command_tx) = DashboardService::new(
        api.clone(),
        api.clone(),
        api,
        navigator,
    );

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Start the dashboard service in the background
    let mut service = service;
    let service_handle = tokio::spawn(async move { service.start().await });

    let mut tui_model = TuiModel::new(config.ui.clone());
    let result = run_main_loop(&mut tui_model, &mut terminal, event_rx, command_tx).await;

    shutdown(&mut terminal)?;

    if let Err(e) = service_handle.await {
        error!("Dashboard service task failed: {:?}", e);
    }

    if let Err(e) = result {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    info!("RepoDeck shut down cleanly");
    Ok(())
}

/// Main application loop - coordinates TUI and dashboard service
async fn run_main_loop(
    tui_model: &mut TuiModel,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut event_rx: mpsc::UnboundedReceiver<Event>,
    command_tx: mpsc::UnboundedSender<Command>,
) -> Result<()> {
    let mut last_render = std::time::Instant::now();
    let render_interval = Duration::from_millis(16);
    let mut needs_redraw = true;

    loop {
        // Handle events from the dashboard service
        let mut events_received = false;
        while let Ok(event) = event_rx.try_recv() {
            tui_model.apply_event(&event);
            events_received = true;
        }

        if events_received {
            needs_redraw = true;
        }

        // Handle user input
        if event::poll(Duration::from_millis(10))? {
            if let TermEvent::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    let message =
                        TuiUpdate::handle_key(tui_model, key_event.code, key_event.modifiers)?;

                    match message {
                        TuiMessage::Command(cmd) => {
                            info!("Sending command to dashboard service: {:?}", cmd);

                            if matches!(cmd, Command::Quit) {
                                tui_model.should_quit = true;
                            }
                            if let Err(e) = command_tx.send(cmd) {
                                error!("Failed to send command: {}", e);
                            }
                        }
                        TuiMessage::None => {}
                    }

                    needs_redraw = true;
                }
            }
        }

        if tui_model.should_quit {
            info!("Quit requested, exiting main loop");
            break;
        }

        if needs_redraw || last_render.elapsed() >= render_interval {
            terminal.draw(|frame| TuiView::render(tui_model, frame))?;
            last_render = std::time::Instant::now();
            needs_redraw = false;
        }

        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    Ok(())
}

/// Clean shutdown
fn shutdown(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    info!("Shutting down RepoDeck");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
