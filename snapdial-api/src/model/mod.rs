//! Status document model
//!
//! Typed, defaulted view of the server's status document. Parsing is
//! tolerant: absent collections become empty, absent scalars take their
//! documented defaults (`percent` 0, `muted` false, `connected` true),
//! unknown fields are ignored.

mod group;
mod status;
mod stream;
mod volume;

pub use group::{ClientConfig, ClientRef, Group, Host};
pub use status::{ServerSection, ServerStatus};
pub use stream::{Stream, StreamMetadata, StreamProperties};
pub use volume::Volume;
