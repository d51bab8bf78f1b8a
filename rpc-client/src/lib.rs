//! Private JSON-RPC 2.0 client for multi-room audio server communication
//!
//! This crate provides a minimal blocking JSON-RPC client for the control
//! endpoint of a Snapcast-style audio server. Each call opens a fresh
//! websocket connection to `ws://host:port/jsonrpc`, sends one request
//! frame, and reads frames until the response with the matching request id
//! arrives. Server-pushed notification frames on the same socket are
//! skipped.
//!
//! The [`Transport`] trait is the seam between this crate and the typed
//! API layer; [`MockTransport`] (behind the `test-support` feature) lets
//! higher layers be exercised without a server.

mod error;
#[cfg(any(test, feature = "test-support"))]
mod mock;

pub use error::RpcError;
#[cfg(any(test, feature = "test-support"))]
pub use mock::MockTransport;

use std::io::ErrorKind;
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;
use tungstenite::{Message, WebSocket};

/// Process-wide request id counter; ids are strictly increasing and never
/// reused, even across client instances.
static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// One JSON-RPC request/response exchange
pub trait Transport {
    /// Call `method`, returning the response's `result` field verbatim
    ///
    /// `Value::Null` stands in for an absent result; callers treat it as
    /// "no data". When `params` is `None` the request carries no `params`
    /// member at all.
    fn call(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError>;
}

/// A blocking JSON-RPC client speaking one request per connection
#[derive(Debug, Clone)]
pub struct RpcClient {
    host: String,
    port: u16,
    timeout: Duration,
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    id: u64,
    jsonrpc: &'static str,
    method: &'a str,
    // The server rejects `params: null`, so the member is omitted entirely
    // when there is nothing to send.
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a Value>,
}

impl RpcClient {
    /// Timeout applied to the full request/response cycle by default
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client with the default timeout
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_timeout(host, port, Self::DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout covering connect, handshake,
    /// send, and receive
    pub fn with_timeout(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!("ws://{}:{}/jsonrpc", self.host, self.port)
    }

    fn connect(&self) -> Result<WebSocket<TcpStream>, RpcError> {
        let addr = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| RpcError::Transport(format!("address resolution failed: {e}")))?
            .next()
            .ok_or_else(|| {
                RpcError::Transport(format!("no address for {}:{}", self.host, self.port))
            })?;

        let stream = TcpStream::connect_timeout(&addr, self.timeout)
            .map_err(|e| RpcError::Transport(format!("connect failed: {e}")))?;
        stream
            .set_read_timeout(Some(self.timeout))
            .map_err(|e| RpcError::Transport(format!("socket configuration failed: {e}")))?;
        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(|e| RpcError::Transport(format!("socket configuration failed: {e}")))?;

        let (socket, _response) = tungstenite::client(self.endpoint(), stream)
            .map_err(|e| RpcError::Transport(format!("websocket handshake failed: {e}")))?;
        Ok(socket)
    }

    /// Read frames until the response for `id` arrives or `deadline` passes
    fn read_response(
        &self,
        socket: &mut WebSocket<TcpStream>,
        id: u64,
        deadline: Instant,
    ) -> Result<Value, RpcError> {
        loop {
            if Instant::now() >= deadline {
                return Err(RpcError::Transport("request timed out".to_string()));
            }

            let frame = match socket.read() {
                Ok(frame) => frame,
                Err(tungstenite::Error::Io(e))
                    if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) =>
                {
                    return Err(RpcError::Transport("request timed out".to_string()));
                }
                Err(e) => return Err(RpcError::Transport(format!("receive failed: {e}"))),
            };

            let text = match frame {
                Message::Text(text) => text,
                Message::Close(_) => {
                    return Err(RpcError::Transport(
                        "connection closed before response".to_string(),
                    ));
                }
                // Control frames and binary frames are not responses.
                _ => continue,
            };

            let body: Value = serde_json::from_str(&text)
                .map_err(|e| RpcError::Parse(format!("invalid response body: {e}")))?;

            // Notifications pushed on the same socket have no matching id.
            match body.get("id").and_then(Value::as_u64) {
                Some(got) if got == id => {}
                _ => {
                    tracing::trace!(frame = %text, "skipping frame without matching request id");
                    continue;
                }
            }

            tracing::debug!(response = %text, "received rpc response");

            if let Some(error) = body.get("error") {
                if !error.is_null() {
                    return Err(RpcError::Fault(error.clone()));
                }
            }
            return Ok(body.get("result").cloned().unwrap_or(Value::Null));
        }
    }
}

impl Transport for RpcClient {
    fn call(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
        let id = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            id,
            jsonrpc: "2.0",
            method,
            params: params.as_ref(),
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| RpcError::Parse(format!("request serialization failed: {e}")))?;

        tracing::debug!(request = %body, "sending rpc request");

        let deadline = Instant::now() + self.timeout;
        let mut socket = self.connect()?;
        socket
            .send(Message::Text(body))
            .map_err(|e| RpcError::Transport(format!("send failed: {e}")))?;

        let result = self.read_response(&mut socket, id, deadline);
        let _ = socket.close(None);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_params_omits_the_member() {
        let request = RpcRequest {
            id: 7,
            jsonrpc: "2.0",
            method: "Server.GetStatus",
            params: None,
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            json!({"id": 7, "jsonrpc": "2.0", "method": "Server.GetStatus"})
        );
        assert!(value.get("params").is_none());
    }

    #[test]
    fn request_with_empty_params_keeps_the_member() {
        let params = json!({});
        let request = RpcRequest {
            id: 8,
            jsonrpc: "2.0",
            method: "Server.GetStatus",
            params: Some(&params),
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value.get("params"), Some(&json!({})));
    }

    #[test]
    fn request_ids_are_strictly_increasing() {
        let first = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed);
        let second = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed);
        assert!(second > first);
    }
}
