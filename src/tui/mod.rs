mod app;
pub mod keybindings;
mod message;
pub mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

pub use app::{App, Menu};
pub use message::Message;

pub fn run(mut app: App) -> Result<()> {
    // Check if stdout is a terminal
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("projboard requires an interactive terminal (try `projboard list`)");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, abandon_setup)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort undo of a half-finished setup, so a failure doesn't leave the
/// shell in raw mode.
fn abandon_setup() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `setup`, calling `restore` before handing back its error.
fn setup_or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let msg = keybindings::dispatch(app, key);
                    tracing::trace!("{:?} -> {:?}", key.code, msg);
                    if app.update(msg) {
                        return Ok(()); // Quit requested
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no alternate screen")),
            || restored.set(true),
        );

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_skips_restore() {
        let restored = Cell::new(false);
        let result = setup_or_restore(|| Ok(7), || restored.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
