//! Base trait for typed server operations

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// A typed JSON-RPC operation against the audio server
///
/// Each operation pairs a wire method name with typed request and response
/// data, so call sites never assemble raw JSON. Implementations decide how
/// request data becomes the `params` value (or none at all) and how the
/// response's `result` value becomes typed data.
pub trait SnapcastOperation {
    /// The request type for this operation, must be serializable
    type Request: Serialize;

    /// The typed response; mutations use `()` since the server's reply
    /// carries no data the caller acts on
    type Response;

    /// The JSON-RPC method name on the wire
    const METHOD: &'static str;

    /// Build the `params` value from the request data
    ///
    /// Returning `None` means the request is framed without a `params`
    /// member at all, which some methods require.
    fn build_params(request: &Self::Request) -> Result<Option<Value>>;

    /// Parse the response's `result` value into the typed response
    fn parse_response(result: Value) -> Result<Self::Response>;
}
