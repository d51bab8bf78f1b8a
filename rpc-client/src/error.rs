//! Error types for the JSON-RPC client

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during JSON-RPC communication
#[derive(Debug, Error)]
pub enum RpcError {
    /// Connection, timeout, or websocket-level error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not a valid JSON-RPC response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error object returned by the server; the payload is preserved verbatim
    #[error("RPC fault: {0}")]
    Fault(Value),
}
