//! Interactive viewer: question list on the left, the selected answer with
//! its highlights on the right, annotation detail below on demand.

mod app;
mod components;
mod ui;

use std::io;
use std::time::Duration;

use annoview_runtime::Workspace;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::debug;

use self::app::AppState;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the viewer until the user quits.
///
/// The terminal is restored on every exit path once raw mode is on.
pub fn run(workspace: &Workspace) -> Result<()> {
    let mut state = AppState::new(workspace);

    // Installed before raw mode so a failure leaves the terminal untouched
    ctrlc::set_handler(|| {
        let _ = restore_terminal();
        std::process::exit(130);
    })?;

    enable_raw_mode()?;
    let result = run_in_alternate_screen(&mut state);
    let restored = restore_terminal();

    result?;
    Ok(restored?)
}

fn run_in_alternate_screen(state: &mut AppState) -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    event_loop(&mut terminal, state)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut AppState) -> Result<()> {
    while !state.should_quit {
        terminal.draw(|f| ui::draw(f, state))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!(code = ?key.code, "key pressed");
            state.handle_key(key);
        }
    }
    Ok(())
}
