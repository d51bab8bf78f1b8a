//! Operations on the `Group` namespace

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::operation::SnapcastOperation;
use crate::operations::client::to_params;

/// `Group.SetStream`: route a stream to a group
pub struct SetStreamOperation;

#[derive(Debug, Serialize)]
pub struct SetStreamRequest {
    pub id: String,
    pub stream_id: String,
}

impl SnapcastOperation for SetStreamOperation {
    type Request = SetStreamRequest;
    type Response = ();

    const METHOD: &'static str = "Group.SetStream";

    fn build_params(request: &Self::Request) -> Result<Option<Value>> {
        to_params(request)
    }

    fn parse_response(_result: Value) -> Result<Self::Response> {
        Ok(())
    }
}
