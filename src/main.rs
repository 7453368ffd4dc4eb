//! Crystal OSINT - landing page for the terminal
//!
//! ## Usage
//!
//! ```bash
//! # Start the landing page
//! crystal
//!
//! # With verbose logging
//! crystal -v
//!
//! # With a custom config file and log directory
//! crystal --config ./crystal.yaml --log-dir /path/to/logs/
//! ```

use std::io::Write;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crystal_core::{init_logging, CrystalConfig, LogGuard, LogOptions};
use crystal_tui::App;
use tracing::{error, info, warn};

/// Crystal OSINT
///
/// Pick an OSINT module, enter a query and run a search from the terminal.
#[derive(Parser, Debug)]
#[command(name = "crystal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (increases log level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for log files (defaults to ~/.crystal/logs/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.crystal/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::from(1);
        }
    };

    install_panic_hook();

    let config = load_config(&cli);
    info!("Starting Crystal OSINT");

    match run_app(config) {
        Ok(()) => {
            info!("Crystal OSINT exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Crystal OSINT error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Install a panic hook that restores the terminal before printing the panic message.
fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Restore terminal to its normal state.
fn restore_terminal() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();

    let _ = crossterm::terminal::disable_raw_mode();

    crossterm::execute!(
        stdout,
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableMouseCapture
    )?;
    crossterm::execute!(stdout, crossterm::cursor::Show)?;

    stdout.flush()?;

    Ok(())
}

/// Set up logging based on CLI arguments.
fn setup_logging(cli: &Cli) -> crystal_core::Result<LogGuard> {
    // The console layer would draw over the UI.
    init_logging(LogOptions {
        log_dir: cli.log_dir.clone(),
        verbose: cli.verbose > 0,
        console: false,
    })
}

/// Load configuration, falling back to defaults when it is unusable.
fn load_config(cli: &Cli) -> CrystalConfig {
    let loaded = match &cli.config {
        Some(path) => CrystalConfig::load_from(path),
        None => CrystalConfig::load(),
    };

    loaded.unwrap_or_else(|e| {
        warn!(error = %e, "using default configuration");
        eprintln!("Warning: {e}");
        if let Some(hint) = e.guidance() {
            eprintln!("  {hint}");
        }
        eprintln!("Continuing with default settings.");
        CrystalConfig::default()
    })
}

/// Run the TUI application.
fn run_app(config: CrystalConfig) -> crystal_tui::AppResult<()> {
    let mut app = App::new(config)?;
    app.run()
}
