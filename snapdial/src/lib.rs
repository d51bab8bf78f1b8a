//! # snapdial: knob and web control surface for multi-room audio
//!
//! Turns discrete trigger events (rotary encoder steps, button presses,
//! web requests) into volume and stream changes for one client of a
//! Snapcast-style audio server, reconciling local state with
//! server-reported truth:
//!
//! ```rust,no_run
//! use std::sync::mpsc;
//! use snapdial::{Config, Dispatcher, Trigger};
//! use snapdial_api::ControlClient;
//!
//! fn main() -> Result<(), snapdial::ControlError> {
//!     let config = Config::from_env()?;
//!     let client = ControlClient::with_timeout(&config.host, config.port, config.timeout);
//!     let mut dispatcher = Dispatcher::new(client, config.client_id, config.volume_step)?;
//!
//!     let (triggers, queue) = mpsc::channel();
//!     // The hardware or web collaborator owns `triggers`...
//!     triggers.send(Trigger::VolumeUp).ok();
//!     drop(triggers);
//!
//!     // ...while the dispatcher serializes commands off the queue.
//!     dispatcher.run(queue);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! snapdial (controllers, dispatch, config)
//!     ↓
//! snapdial-api (typed operations, status model)
//!     ↓
//! rpc-client (JSON-RPC 2.0 over websocket)
//! ```
//!
//! Every command fetches whatever status it needs fresh and runs to
//! completion before the next command for the same client starts; nothing
//! is cached across commands except the volume controller's optimistic
//! local volume.

pub mod artwork;
pub mod config;
pub mod logging;

mod controller;
mod cycler;
mod dispatcher;
mod error;

pub use artwork::{ArtworkCache, ArtworkError, ArtworkSource};
pub use config::Config;
pub use controller::VolumeController;
pub use cycler::StreamCycler;
pub use dispatcher::{CommandOutcome, Dispatcher, Trigger};
pub use error::ControlError;
