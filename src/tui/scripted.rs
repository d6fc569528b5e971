//! A deterministic [`EventLoop`] fed from a fixed script.
//!
//! Useful for tests and for driving prompts headlessly: every frame the
//! program draws is recorded, and running out of script is reported as a
//! loop failure instead of blocking.

use std::{collections::VecDeque, time::Duration};

use anyhow::{Result, bail};
use crossterm::event::KeyCode;

use super::{event::Msg, program::EventLoop};

enum Step {
    Msg(Msg),
    /// Behave as if the pending timeout elapsed
    Wait,
}

/// Scripted stand-in for the terminal.
#[derive(Default)]
pub struct ScriptedLoop {
    steps: VecDeque<Step>,
    frames: Vec<String>,
    attached: bool,
    full_screen: bool,
    attach_error: Option<String>,
}

impl ScriptedLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an arbitrary message.
    #[must_use]
    pub fn msg(mut self, msg: Msg) -> Self {
        self.steps.push_back(Step::Msg(msg));
        self
    }

    /// Queues a key press.
    #[must_use]
    pub fn key(self, code: KeyCode) -> Self {
        self.msg(Msg::key(code))
    }

    /// Queues one key press per character.
    #[must_use]
    pub fn type_str(self, text: &str) -> Self {
        text.chars().fold(self, |script, c| script.msg(Msg::char(c)))
    }

    /// Queues a `ctrl+<c>` key press.
    #[must_use]
    pub fn ctrl(self, c: char) -> Self {
        self.msg(Msg::ctrl(c))
    }

    /// Queues an elapsed timeout, firing whatever tick is pending.
    #[must_use]
    pub fn wait(mut self) -> Self {
        self.steps.push_back(Step::Wait);
        self
    }

    /// Makes `attach` fail, as when no interactive terminal is available.
    #[must_use]
    pub fn fail_attach(mut self, reason: impl Into<String>) -> Self {
        self.attach_error = Some(reason.into());
        self
    }

    /// Every frame drawn so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recently drawn frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the last `attach` asked for the alternate screen.
    #[must_use]
    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    /// Steps not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl EventLoop for ScriptedLoop {
    fn attach(&mut self, full_screen: bool) -> Result<()> {
        if let Some(reason) = &self.attach_error {
            bail!("unable to attach to terminal: {reason}");
        }
        self.attached = true;
        self.full_screen = full_screen;
        Ok(())
    }

    fn poll(&mut self, timeout: Option<Duration>) -> Result<Option<Msg>> {
        match self.steps.pop_front() {
            Some(Step::Msg(msg)) => Ok(Some(msg)),
            Some(Step::Wait) if timeout.is_some() => Ok(None),
            Some(Step::Wait) => bail!("scripted wait with no pending tick"),
            None => bail!("event script exhausted"),
        }
    }

    fn draw(&mut self, view: &str) -> Result<()> {
        self.frames.push(view.to_string());
        Ok(())
    }

    fn detach(&mut self) -> Result<()> {
        self.attached = false;
        Ok(())
    }
}
