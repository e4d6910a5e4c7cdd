//! Main entry point for the RéviseTerm TUI.
//!
//! Initializes logging and the terminal, runs the event loop, and restores
//! the terminal on exit or panic.

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use revise_term::app::App;
use revise_term::utils;
use revise_term::utils::cleanup::CleanupGuard;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything else
    utils::logger::init_logging();

    let mut terminal = ratatui::init();

    // Mouse capture enables click-to-focus and history-row clicks
    execute!(std::io::stdout(), EnableMouseCapture)?;

    // Guard ensures restoration on both normal exit and panic
    let _cleanup = CleanupGuard::with(|| {
        if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
            tracing::error!("Failed to disable mouse capture: {}", e);
        }
        ratatui::restore();
    });

    let mut app = App::new()?;
    // draw the first frame before any event arrives
    app.draw(&mut terminal)?;
    app.run(&mut terminal).await
}
