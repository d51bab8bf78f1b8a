//! Typed control API for a Snapcast-style multi-room audio server
//!
//! Sits between the raw JSON-RPC transport and the control layer. Three
//! pieces:
//!
//! - [`model`]: the tolerant, typed view of the server's status document
//! - [`operations`]: one typed operation per consumed wire method
//!   (`Server.GetStatus`, `Client.SetVolume`, `Client.SetName`,
//!   `Group.SetStream`)
//! - [`ControlClient`]: executes operations through any
//!   [`rpc_client::Transport`]
//!
//! ```rust,no_run
//! use snapdial_api::ControlClient;
//!
//! let client = ControlClient::new("192.168.1.50", 1780);
//! let status = client.get_status()?;
//! for id in status.stream_ids() {
//!     println!("stream: {id}");
//! }
//! # Ok::<(), snapdial_api::ApiError>(())
//! ```

mod client;
mod error;
pub mod model;
mod operation;
pub mod operations;

pub use client::ControlClient;
pub use error::{ApiError, Result};
pub use model::{ClientRef, Group, ServerStatus, Stream, StreamMetadata, Volume};
pub use operation::SnapcastOperation;
