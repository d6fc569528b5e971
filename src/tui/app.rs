//! Terminal event loop with RAII setup/teardown.
//!
//! Everything is drawn to stderr so prompt UI never ends up in piped stdout.

use std::{
    io::{self, IsTerminal, Stderr},
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail};
use crossterm::{
    event, execute,
    style::Print,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{
    Terminal, TerminalOptions, Viewport, backend::CrosstermBackend, layout::Position,
    widgets::Paragraph,
};

use super::{event::Msg, program::EventLoop};

/// Type alias for the terminal with crossterm backend.
pub type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// The real terminal.
///
/// Raw mode (and the alternate screen, when requested) is enabled on
/// `attach` and restored on `detach` or drop, whichever comes first.
#[derive(Default)]
pub struct TerminalApp {
    terminal: Option<TuiTerminal>,
    raw_mode: bool,
    full_screen: bool,
}

impl TerminalApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Inline viewports have a fixed height, so the terminal is built on the
    // first draw once the height of the view is known.
    fn create_terminal(&self, height: u16) -> io::Result<TuiTerminal> {
        let backend = CrosstermBackend::new(io::stderr());
        if self.full_screen {
            Terminal::new(backend)
        } else {
            Terminal::with_options(
                backend,
                TerminalOptions {
                    viewport: Viewport::Inline(height),
                },
            )
        }
    }

    fn restore(&mut self) -> Result<()> {
        let mut result = Ok(());

        if let Some(mut terminal) = self.terminal.take() {
            if !self.full_screen {
                // Leave the final frame on screen and continue below it
                let bottom = terminal.get_frame().area().bottom().saturating_sub(1);
                result = result.and(
                    terminal
                        .set_cursor_position(Position::new(0, bottom))
                        .and_then(|()| execute!(io::stderr(), Print("\r\n")))
                        .context("Unable to move below the prompt"),
                );
            }
            result = result.and(terminal.show_cursor().context("Unable to show cursor"));
        }

        if self.raw_mode {
            result = result.and(disable_raw_mode().context("Unable to disable raw mode"));
            self.raw_mode = false;
        }

        if self.full_screen {
            result = result.and(
                execute!(io::stderr(), LeaveAlternateScreen)
                    .context("Unable to leave alternate screen"),
            );
            self.full_screen = false;
        }

        result
    }
}

impl EventLoop for TerminalApp {
    fn attach(&mut self, full_screen: bool) -> Result<()> {
        if !io::stderr().is_terminal() {
            bail!("stderr is not an interactive terminal");
        }

        enable_raw_mode().context("Unable to enable raw mode")?;
        self.raw_mode = true;

        if full_screen {
            execute!(io::stderr(), EnterAlternateScreen)
                .context("Unable to enter alternate screen")?;
        }
        self.full_screen = full_screen;

        debug!("terminal attached");
        Ok(())
    }

    fn poll(&mut self, timeout: Option<Duration>) -> Result<Option<Msg>> {
        let deadline = timeout.and_then(|t| Instant::now().checked_add(t));

        loop {
            if let Some(deadline) = deadline {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if !event::poll(remaining).context("Unable to poll terminal events")? {
                    return Ok(None);
                }
            }

            let raw = event::read().context("Unable to read terminal event")?;
            if let Some(msg) = Msg::from_event(raw) {
                return Ok(Some(msg));
            }
        }
    }

    fn draw(&mut self, view: &str) -> Result<()> {
        if self.terminal.is_none() {
            let height = u16::try_from(view.lines().count())
                .unwrap_or(u16::MAX)
                .max(1);
            self.terminal = Some(self.create_terminal(height)?);
        }

        if let Some(terminal) = self.terminal.as_mut() {
            terminal
                .draw(|frame| frame.render_widget(Paragraph::new(view), frame.area()))
                .context("Unable to draw prompt")?;
        }

        Ok(())
    }

    fn detach(&mut self) -> Result<()> {
        let result = self.restore();
        debug!("terminal detached");
        result
    }
}

impl Drop for TerminalApp {
    fn drop(&mut self) {
        // Attempt to restore terminal state, ignoring errors during cleanup
        let _ = self.restore();
    }
}
