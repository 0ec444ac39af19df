//! Nurse Connect - terminal intake for healthcare staffing
//!
//! A Ratatui-based TUI where nurses apply and employers request staff
//! through guided multi-step forms backed by a hosted document store.

mod app;
mod config;
mod content;
mod platform;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use store::{DocumentStore, FirestoreStore, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nurse_connect=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut startup_errors = Vec::new();
    let config = AppConfig::load().unwrap_or_else(|e| {
        startup_errors.push(format!("Could not load configuration: {e:#}"));
        AppConfig::default()
    });
    let store = open_store(&config, &mut startup_errors);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(store);
    for message in startup_errors {
        app.push_error(message);
    }
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Let in-flight writes finish; they are never cancelled
    if app.has_pending_submissions() {
        tracing::info!("waiting for pending submissions");
        app.finish_submissions().await;
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Pick the Firestore backend when credentials are configured, else keep submissions in memory
fn open_store(config: &AppConfig, errors: &mut Vec<String>) -> Arc<dyn DocumentStore> {
    let Some(settings) = config.firestore() else {
        tracing::warn!("no document store credentials configured; submissions stay in memory");
        return Arc::new(MemoryStore::new());
    };
    match FirestoreStore::new(
        &settings.base_url,
        &settings.project_id,
        &settings.api_key,
        settings.timeout,
    ) {
        Ok(store) => {
            tracing::info!(project = %settings.project_id, "using Firestore document store");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to create Firestore client");
            errors.push(format!("Document store unavailable: {e}"));
            Arc::new(MemoryStore::new())
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    app.request_quit();
                } else {
                    app.handle_key(key).await?;
                }
            }
        }

        // Settle store writes that have completed
        app.poll_submissions().await;

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
