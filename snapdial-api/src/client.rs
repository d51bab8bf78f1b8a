//! Client for executing typed operations against a server

use rpc_client::{RpcClient, Transport};
use std::time::Duration;

use crate::error::Result;
use crate::model::{ServerStatus, Volume};
use crate::operation::SnapcastOperation;
use crate::operations::{
    GetStatusOperation, SetNameOperation, SetNameRequest, SetStreamOperation, SetStreamRequest,
    SetVolumeOperation, SetVolumeRequest,
};

/// Executes typed operations over a [`Transport`]
///
/// Bridges the stateless operation definitions to actual network requests.
/// The transport is an explicit dependency: construct one client per
/// controller (clones share nothing mutable) instead of holding a
/// process-wide instance.
#[derive(Debug, Clone)]
pub struct ControlClient<T: Transport = RpcClient> {
    transport: T,
}

impl ControlClient<RpcClient> {
    /// Create a client for `host:port` with the default request timeout
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            transport: RpcClient::new(host, port),
        }
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            transport: RpcClient::with_timeout(host, port, timeout),
        }
    }
}

impl<T: Transport> ControlClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Execute any typed operation
    pub fn execute<Op: SnapcastOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let params = Op::build_params(request)?;
        let result = self.transport.call(Op::METHOD, params)?;
        Op::parse_response(result)
    }

    /// Fetch a fresh status snapshot
    pub fn get_status(&self) -> Result<ServerStatus> {
        self.execute::<GetStatusOperation>(&())
    }

    /// Set a client's volume configuration
    pub fn set_volume(&self, id: &str, volume: Volume) -> Result<()> {
        self.execute::<SetVolumeOperation>(&SetVolumeRequest {
            id: id.to_string(),
            volume,
        })
    }

    /// Rename a client
    pub fn set_name(&self, id: &str, name: &str) -> Result<()> {
        self.execute::<SetNameOperation>(&SetNameRequest {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    /// Route a stream to a group
    pub fn set_stream(&self, group_id: &str, stream_id: &str) -> Result<()> {
        self.execute::<SetStreamOperation>(&SetStreamRequest {
            id: group_id.to_string(),
            stream_id: stream_id.to_string(),
        })
    }
}
