//! Operations on the `Server` namespace

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::model::ServerStatus;
use crate::operation::SnapcastOperation;

/// `Server.GetStatus`: fetch the full status document
pub struct GetStatusOperation;

impl SnapcastOperation for GetStatusOperation {
    type Request = ();
    type Response = ServerStatus;

    const METHOD: &'static str = "Server.GetStatus";

    fn build_params(_request: &Self::Request) -> Result<Option<Value>> {
        Ok(None)
    }

    fn parse_response(result: Value) -> Result<Self::Response> {
        serde_json::from_value(result)
            .map_err(|e| ApiError::Parse(format!("malformed status document: {e}")))
    }
}
