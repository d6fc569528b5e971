//! The capability set shared by every prompt.

use super::event::{Command, Msg};

/// A prompt state machine driven by a [`Program`](super::Program).
///
/// The loop calls [`init`](Model::init) once, then alternates
/// [`update`](Model::update) and [`view`](Model::view) until a
/// [`Command::Quit`] comes back.
pub trait Model {
    /// Startup action requested before the first event.
    fn init(&mut self) -> Option<Command> {
        None
    }

    /// Applies one message and optionally asks the loop to quit or schedule a tick.
    fn update(&mut self, msg: Msg) -> Option<Command>;

    /// Renders the current state as plain text.
    fn view(&self) -> String;
}
