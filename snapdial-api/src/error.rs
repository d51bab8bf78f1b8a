use rpc_client::RpcError;
use serde_json::Value;
use thiserror::Error;

/// High-level API errors for server control operations
///
/// Abstracts the underlying JSON-RPC transport details into the failure
/// kinds callers actually branch on: the network failed, the response was
/// not understandable, or the server reported a fault.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Connection refused, resolution failure, timeout, or a websocket
    /// protocol violation.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsing error
    ///
    /// The server answered but the body could not be parsed into the
    /// expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Fault reported by the server; the error payload is kept verbatim
    #[error("RPC fault: {0}")]
    Rpc(Value),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<RpcError> for ApiError {
    fn from(error: RpcError) -> Self {
        match error {
            RpcError::Transport(msg) => ApiError::Network(msg),
            RpcError::Parse(msg) => ApiError::Parse(msg),
            RpcError::Fault(detail) => ApiError::Rpc(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rpc_error_conversion_preserves_kind() {
        let api: ApiError = RpcError::Transport("connection timeout".to_string()).into();
        assert!(matches!(api, ApiError::Network(_)));

        let api: ApiError = RpcError::Parse("bad body".to_string()).into();
        assert!(matches!(api, ApiError::Parse(_)));

        let api: ApiError = RpcError::Fault(json!({"code": -32602})).into();
        match api {
            ApiError::Rpc(detail) => assert_eq!(detail["code"], json!(-32602)),
            other => panic!("expected rpc fault, got {other:?}"),
        }
    }
}
