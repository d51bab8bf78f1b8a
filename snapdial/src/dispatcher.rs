//! Trigger dispatch for one controlled client

use std::fmt;
use std::sync::mpsc::Receiver;

use rpc_client::Transport;
use snapdial_api::ControlClient;
use tracing::{info, warn};

use crate::{ControlError, StreamCycler, VolumeController};

/// A debounced external input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Clockwise rotation
    VolumeUp,
    /// Counter-clockwise rotation
    VolumeDown,
    /// Button press
    NextStream,
}

/// What a successfully handled trigger did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    VolumeChanged(u8),
    StreamChanged(String),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::VolumeChanged(percent) => write!(f, "volume set to {percent}%"),
            CommandOutcome::StreamChanged(stream_id) => {
                write!(f, "stream changed to {stream_id}")
            }
        }
    }
}

/// Maps triggers onto volume and stream operations for one client id
///
/// One dispatcher owns one client id. Commands run to completion through
/// `&mut self`, so two mutations for the same client can never interleave;
/// dispatchers for different client ids share no state. The presentation
/// collaborator issues its absolute-volume and rename commands through the
/// same instance to stay inside that ordering guarantee.
pub struct Dispatcher<T: Transport> {
    volume: VolumeController<T>,
    cycler: StreamCycler<T>,
    step: i32,
}

impl<T: Transport + Clone> Dispatcher<T> {
    /// Create a dispatcher for `client_id`
    ///
    /// Seeds the volume controller with one status fetch; `step` is the
    /// per-trigger volume magnitude.
    pub fn new(
        client: ControlClient<T>,
        client_id: impl Into<String>,
        step: i32,
    ) -> Result<Self, ControlError> {
        let client_id = client_id.into();
        Ok(Self {
            volume: VolumeController::new(client.clone(), client_id.clone())?,
            cycler: StreamCycler::new(client, client_id),
            step,
        })
    }
}

impl<T: Transport> Dispatcher<T> {
    /// Handle one trigger, returning the typed outcome
    pub fn handle(&mut self, trigger: Trigger) -> Result<CommandOutcome, ControlError> {
        match trigger {
            Trigger::VolumeUp => self
                .volume
                .apply_delta(self.step)
                .map(CommandOutcome::VolumeChanged),
            Trigger::VolumeDown => self
                .volume
                .apply_delta(-self.step)
                .map(CommandOutcome::VolumeChanged),
            Trigger::NextStream => self.cycler.advance().map(CommandOutcome::StreamChanged),
        }
    }

    /// Handle one trigger and reduce the outcome to a single status line
    ///
    /// Failures are caught here: they become the returned line and a
    /// warning record, never a crash of the control surface.
    pub fn dispatch(&mut self, trigger: Trigger) -> String {
        match self.handle(trigger) {
            Ok(outcome) => {
                let line = outcome.to_string();
                info!(client_id = %self.volume.client_id(), "{line}");
                line
            }
            Err(error) => {
                let line = match trigger {
                    Trigger::VolumeUp | Trigger::VolumeDown => {
                        format!("volume change failed: {error}")
                    }
                    Trigger::NextStream => format!("stream change failed: {error}"),
                };
                warn!(client_id = %self.volume.client_id(), "{line}");
                line
            }
        }
    }

    /// Drain a trigger queue to completion
    ///
    /// Runs until every sender is dropped. One command finishes its whole
    /// fetch/compute/mutate cycle before the next is taken off the queue.
    pub fn run(&mut self, triggers: Receiver<Trigger>) {
        for trigger in triggers {
            self.dispatch(trigger);
        }
    }

    /// The local volume as the controller sees it
    pub fn current_volume(&self) -> u8 {
        self.volume.current_volume()
    }

    /// Arbitrary volume delta for the presentation collaborator
    pub fn apply_delta(&mut self, delta: i32) -> Result<u8, ControlError> {
        self.volume.apply_delta(delta)
    }

    /// Absolute volume set for the presentation collaborator
    pub fn set_volume(&mut self, target: i32) -> Result<u8, ControlError> {
        self.volume.set_volume(target)
    }

    /// Client rename for the presentation collaborator
    pub fn set_name(&mut self, name: &str) -> Result<(), ControlError> {
        self.volume.set_name(name)
    }
}
