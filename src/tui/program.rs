//! Drives a [`Model`] through an [`EventLoop`] until it asks to quit.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, trace, warn};

use super::{
    app::TerminalApp,
    event::{Command, Msg, Tick},
    model::Model,
};

/// The terminal collaborator a [`Program`] talks to.
///
/// Implementations own everything terminal-specific: raw mode, key
/// decoding and screen redraw. Models never see it.
pub trait EventLoop {
    /// Takes over the terminal, optionally switching to the alternate screen.
    fn attach(&mut self, full_screen: bool) -> Result<()>;

    /// Waits for the next message.
    ///
    /// With `Some(timeout)`, returns `Ok(None)` once the timeout elapses
    /// without input. With `None`, blocks until a message arrives.
    fn poll(&mut self, timeout: Option<Duration>) -> Result<Option<Msg>>;

    /// Replaces what is on screen with `view`.
    fn draw(&mut self, view: &str) -> Result<()>;

    /// Gives the terminal back. Must be safe to call after a failed `attach`.
    fn detach(&mut self) -> Result<()>;
}

/// A prompt invocation: one model plus how to display it.
pub struct Program<M> {
    model: M,
    full_screen: bool,
}

impl<M: Model> Program<M> {
    /// Creates a program that renders inline below the cursor.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            full_screen: false,
        }
    }

    /// Renders in the alternate screen buffer instead of inline.
    #[must_use]
    pub fn with_full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    /// Runs against the real terminal, drawing to stderr.
    ///
    /// Returns the model as it stood at termination together with any
    /// loop-level failure.
    pub fn run(self) -> (M, Result<()>) {
        let mut app = TerminalApp::new();
        self.run_with(&mut app)
    }

    /// Runs against the given event loop.
    pub fn run_with<L: EventLoop>(mut self, event_loop: &mut L) -> (M, Result<()>) {
        let result = drive(&mut self.model, event_loop, self.full_screen);
        (self.model, result)
    }
}

/// Runs `model` on the real terminal. See [`Program::run`].
pub fn run<M: Model>(model: M, full_screen: bool) -> (M, Result<()>) {
    Program::new(model).with_full_screen(full_screen).run()
}

fn drive<M: Model, L: EventLoop>(model: &mut M, event_loop: &mut L, full_screen: bool) -> Result<()> {
    debug!("attaching event loop (full_screen={full_screen})");

    let outcome = event_loop
        .attach(full_screen)
        .and_then(|()| dispatch(model, event_loop));

    let detached = event_loop.detach();
    if let Err(e) = &detached {
        warn!("failed to restore terminal: {e}");
    }

    debug!("event loop finished");
    outcome.and(detached)
}

/// Single pending follow-up. Scheduling again replaces it.
#[derive(Default)]
struct Timer {
    pending: Option<(Instant, Tick)>,
}

impl Timer {
    fn arm(&mut self, tick: Tick) {
        let deadline = Instant::now()
            .checked_add(tick.after)
            .unwrap_or_else(Instant::now);
        self.pending = Some((deadline, tick));
    }

    fn timeout(&self) -> Option<Duration> {
        self.pending
            .map(|(deadline, _)| deadline.saturating_duration_since(Instant::now()))
    }

    fn fire(&mut self) -> Option<Tick> {
        self.pending.take().map(|(_, tick)| tick)
    }
}

/// Applies a command; returns true when the model asked to quit.
fn apply(command: Option<Command>, timer: &mut Timer) -> bool {
    match command {
        Some(Command::Quit) => true,
        Some(Command::Schedule(tick)) => {
            timer.arm(tick);
            false
        }
        None => false,
    }
}

fn dispatch<M: Model, L: EventLoop>(model: &mut M, event_loop: &mut L) -> Result<()> {
    let mut timer = Timer::default();

    let quit = apply(model.init(), &mut timer);
    event_loop.draw(&model.view())?;
    if quit {
        return Ok(());
    }

    loop {
        let msg = match event_loop.poll(timer.timeout())? {
            Some(msg) => msg,
            None => match timer.fire() {
                Some(tick) => Msg::Tick(tick),
                None => continue,
            },
        };

        if let Some(key) = msg.key_string() {
            trace!("dispatching key '{key}'");
        }

        let quit = apply(model.update(msg), &mut timer);
        event_loop.draw(&model.view())?;

        if quit {
            return Ok(());
        }
    }
}
