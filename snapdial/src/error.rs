use snapdial_api::ApiError;
use thiserror::Error;

/// Failure kinds for control operations
///
/// Expected absence (`NotFound`) is distinct from operational failure
/// (`Transport`/`Protocol`) so callers can tell "nothing to do" from
/// "tried and failed". `Config` is the only variant that aborts startup;
/// everything else is caught at the dispatch boundary and reported.
#[derive(Debug, Error)]
pub enum ControlError {
    /// Missing or unparseable configuration; fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection refused, resolution failure, or timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed response or server-reported fault
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Requested client, group, or stream absent from current status
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ApiError> for ControlError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(msg) => ControlError::Transport(msg),
            ApiError::Parse(msg) => ControlError::Protocol(msg),
            ApiError::Rpc(detail) => ControlError::Protocol(detail.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_errors_map_to_the_taxonomy() {
        let error: ControlError = ApiError::Network("timed out".to_string()).into();
        assert!(matches!(error, ControlError::Transport(_)));

        let error: ControlError = ApiError::Parse("bad body".to_string()).into();
        assert!(matches!(error, ControlError::Protocol(_)));

        let error: ControlError = ApiError::Rpc(json!({"code": -32603})).into();
        match error {
            ControlError::Protocol(detail) => assert!(detail.contains("-32603")),
            other => panic!("expected protocol error, got {other:?}"),
        }
    }
}
