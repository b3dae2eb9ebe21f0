//! Catalog TUI - product catalog browser
//!
//! Terminal UI for filtering the product catalog by owner, name and category,
//! and sorting it by column.

mod app;
mod error;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use catalog_core::{Catalog, CatalogConfig, LoggingConfig, ViewState};

use app::App;
use error::AppError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::load_or_default()?;

    // Setup logging
    init_logging(&config.logging)?;

    let dataset = config.dataset()?;
    let catalog = Catalog::join(dataset);
    tracing::info!(
        "Catalog ready: {} products, {} categories, {} users",
        catalog.products().len(),
        catalog.categories().len(),
        catalog.users().len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(ViewState::with_options(catalog, config.table_options()));
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Event loop failed: {}", err);
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` overrides the configured filter.
fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AppError::LogFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}
