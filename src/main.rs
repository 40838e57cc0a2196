//! user-search binary entry point.
//!
//! Parses configuration, initializes the terminal in raw mode, runs the event
//! loop on a current-thread runtime, and restores the terminal on exit.
//!
use anyhow::Context;
use clap::Parser;
use crossterm::event::EventStream;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use user_search::app::{self, AppState, Theme};
use user_search::cli::Cli;
use user_search::remote::UserLoader;
use user_search::{Result, logging};

type Tui = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let loader = UserLoader::new(cli.endpoint.clone()).context("build HTTP client")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;

    let mut terminal = init_terminal().context("init terminal")?;
    let app = AppState::new(Theme::from_name(cli.theme));
    let res = runtime.block_on(app::run(&mut terminal, app, loader, EventStream::new()));
    restore_terminal(&mut terminal);

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err:#}");
    }
    Ok(())
}
