//! agriconnect: Terminal form for farmers to list their crops
//!
//! A keyboard-driven page where a farmer enters crop name, quantity,
//! expected price and location, and submits them.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;
use std::io;
use std::panic;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agriconnect::{App, AppConfig};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode alternate screen, left again when dropped
struct TerminalSession {
    terminal: Tui,
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen, titled after the page
    fn enter(title: &str) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, SetTitle(title))?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Restore the terminal to normal mode, reporting failures
    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore(&mut self.terminal)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Early returns skip `leave`
        let _ = self.leave();
    }
}

fn restore(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // The session guard is not dropped before the message prints
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Show the form until the user quits or Ctrl+C arrives
async fn run_form(config: AppConfig) -> Result<()> {
    let mut session = TerminalSession::enter(&config.page.heading())?;
    let mut app = App::new(config);

    let result = tokio::select! {
        res = app.run(&mut session.terminal) => res,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received Ctrl+C, shutting down");
            Ok(())
        }
    };

    // Restore terminal (always, even on error)
    session.leave()?;

    if let Some(submission) = &app.last_submission {
        tracing::debug!("Last submission: {}", submission);
    }

    Ok(result?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Install panic hook for graceful terminal restoration
    install_panic_hook();

    // Config layers are looked up relative to the working directory
    let cwd = std::env::current_dir().ok();
    let config = AppConfig::load_or_default(cwd.as_deref());

    tracing::info!(
        title = %config.page.title,
        layout = ?config.page.layout,
        "Starting agriconnect"
    );

    run_form(config).await
}
