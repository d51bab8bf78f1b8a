//! Typed operations, one module per server namespace

pub mod client;
pub mod group;
pub mod server;

pub use client::{SetNameOperation, SetNameRequest, SetVolumeOperation, SetVolumeRequest};
pub use group::{SetStreamOperation, SetStreamRequest};
pub use server::GetStatusOperation;
