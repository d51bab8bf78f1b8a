//! Operations on the `Client` namespace

use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::model::Volume;
use crate::operation::SnapcastOperation;

/// `Client.SetVolume`: set a client's volume configuration
pub struct SetVolumeOperation;

#[derive(Debug, Serialize)]
pub struct SetVolumeRequest {
    pub id: String,
    pub volume: Volume,
}

impl SnapcastOperation for SetVolumeOperation {
    type Request = SetVolumeRequest;
    type Response = ();

    const METHOD: &'static str = "Client.SetVolume";

    fn build_params(request: &Self::Request) -> Result<Option<Value>> {
        to_params(request)
    }

    fn parse_response(_result: Value) -> Result<Self::Response> {
        Ok(())
    }
}

/// `Client.SetName`: rename a client
pub struct SetNameOperation;

#[derive(Debug, Serialize)]
pub struct SetNameRequest {
    pub id: String,
    pub name: String,
}

impl SnapcastOperation for SetNameOperation {
    type Request = SetNameRequest;
    type Response = ();

    const METHOD: &'static str = "Client.SetName";

    fn build_params(request: &Self::Request) -> Result<Option<Value>> {
        to_params(request)
    }

    fn parse_response(_result: Value) -> Result<Self::Response> {
        Ok(())
    }
}

pub(crate) fn to_params<R: Serialize>(request: &R) -> Result<Option<Value>> {
    serde_json::to_value(request)
        .map(Some)
        .map_err(|e| ApiError::Parse(format!("request serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_volume_params_match_the_wire_contract() {
        let params = SetVolumeOperation::build_params(&SetVolumeRequest {
            id: "c1".to_string(),
            volume: Volume::new(45),
        })
        .expect("build")
        .expect("params present");
        assert_eq!(
            params,
            json!({"id": "c1", "volume": {"percent": 45, "muted": false}})
        );
    }

    #[test]
    fn set_volume_at_zero_is_muted() {
        let params = SetVolumeOperation::build_params(&SetVolumeRequest {
            id: "c1".to_string(),
            volume: Volume::new(0),
        })
        .expect("build")
        .expect("params present");
        assert_eq!(
            params,
            json!({"id": "c1", "volume": {"percent": 0, "muted": true}})
        );
    }

    #[test]
    fn set_name_params_match_the_wire_contract() {
        let params = SetNameOperation::build_params(&SetNameRequest {
            id: "c1".to_string(),
            name: "Kitchen".to_string(),
        })
        .expect("build")
        .expect("params present");
        assert_eq!(params, json!({"id": "c1", "name": "Kitchen"}));
    }
}
