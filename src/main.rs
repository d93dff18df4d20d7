use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};

use movietui::{catalog::Catalog, config::Config, tui::App};

#[derive(Parser)]
#[command(name = "movietui")]
#[command(about = "Terminal UI for managing an in-memory movie watchlist")]
#[command(version)]
pub struct Cli {
    /// Pre-populate the catalog with a title (repeatable)
    #[arg(long, value_name = "TITLE")]
    pub seed: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "movietui=info");
    }

    let config = Config::from_env();
    config.validate()?;

    // Log to a file so output never interferes with the alternate screen
    let file_appender =
        tracing_appender::rolling::never(config.log_dir(), config.log_file_name()?);

    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("starting movietui");

    // The catalog always starts empty; --seed runs through the same add
    // boundary as interactive input, so blank seeds are dropped.
    let mut catalog = Catalog::new();
    for title in &cli.seed {
        if !catalog.add(title) {
            info!(%title, "blank seed title skipped");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog);
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match result {
        Ok(()) => {
            info!("movietui exited");
        }
        Err(e) => {
            error!("movietui encountered an error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
