//! Stream cycling for the group containing one client

use rpc_client::Transport;
use snapdial_api::ControlClient;

use crate::ControlError;

/// Advances a group to the next stream in server order
///
/// Holds no local notion of "current stream": every advance recomputes
/// from a fresh status fetch, so nothing is speculated and nothing can
/// drift.
pub struct StreamCycler<T: Transport> {
    client: ControlClient<T>,
    client_id: String,
}

impl<T: Transport> StreamCycler<T> {
    pub fn new(client: ControlClient<T>, client_id: impl Into<String>) -> Self {
        Self {
            client,
            client_id: client_id.into(),
        }
    }

    /// Switch the client's group to the next stream, returning its id
    ///
    /// Wraps around at the end of the server's stream list. A group
    /// stream id that no longer exists restarts the cycle at the first
    /// stream. When no group contains the client, or the server exposes
    /// no streams, fails with [`ControlError::NotFound`] before any
    /// mutation is attempted.
    pub fn advance(&self) -> Result<String, ControlError> {
        let status = self.client.get_status()?;

        let group = status.find_group_containing(&self.client_id).ok_or_else(|| {
            ControlError::NotFound(format!("no group contains client {}", self.client_id))
        })?;

        let stream_ids = status.stream_ids();
        if stream_ids.is_empty() {
            return Err(ControlError::NotFound(
                "server exposes no streams".to_string(),
            ));
        }

        let next = match stream_ids.iter().position(|id| *id == group.stream_id) {
            Some(index) => stream_ids[(index + 1) % stream_ids.len()],
            // Stale or absent pointer: no known position, start over.
            None => stream_ids[0],
        };

        self.client.set_stream(&group.id, next)?;
        Ok(next.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpc_client::{MockTransport, RpcError};
    use rstest::rstest;
    use serde_json::{json, Value};

    fn status(current_stream: &str, stream_ids: &[&str]) -> Value {
        let streams: Vec<Value> = stream_ids.iter().map(|id| json!({"id": id})).collect();
        json!({
            "server": {
                "groups": [{"id": "g1", "stream_id": current_stream, "clients": [{"id": "c1"}]}],
                "streams": streams
            }
        })
    }

    fn cycler_with(raw_status: Value) -> (StreamCycler<MockTransport>, MockTransport) {
        let mock = MockTransport::new();
        mock.push_result("Server.GetStatus", raw_status);
        (
            StreamCycler::new(ControlClient::with_transport(mock.clone()), "c1"),
            mock,
        )
    }

    #[rstest]
    #[case::steps_forward("s1", &["s1", "s2", "s3"], "s2")]
    #[case::wraps_around("s3", &["s1", "s2", "s3"], "s1")]
    #[case::stale_pointer_restarts("gone", &["s1", "s2"], "s1")]
    #[case::single_stream_stays("s1", &["s1"], "s1")]
    fn advances_in_server_order(
        #[case] current: &str,
        #[case] ids: &[&str],
        #[case] expected: &str,
    ) {
        let (cycler, mock) = cycler_with(status(current, ids));
        assert_eq!(cycler.advance().expect("advance"), expected);
        assert_eq!(
            mock.calls_for("Group.SetStream"),
            vec![Some(json!({"id": "g1", "stream_id": expected}))]
        );
    }

    #[test]
    fn empty_stream_list_is_not_found_and_mutates_nothing() {
        let (cycler, mock) = cycler_with(status("s1", &[]));
        let error = cycler.advance().expect_err("not found");
        assert!(matches!(error, ControlError::NotFound(_)));
        assert!(mock.calls_for("Group.SetStream").is_empty());
    }

    #[test]
    fn missing_group_is_not_found_and_mutates_nothing() {
        let mock = MockTransport::new();
        mock.push_result(
            "Server.GetStatus",
            json!({"server": {"groups": [], "streams": [{"id": "s1"}]}}),
        );
        let cycler = StreamCycler::new(ControlClient::with_transport(mock.clone()), "c1");

        let error = cycler.advance().expect_err("not found");
        assert!(matches!(error, ControlError::NotFound(_)));
        assert!(mock.calls_for("Group.SetStream").is_empty());
    }

    #[test]
    fn status_fetch_failure_propagates_and_mutates_nothing() {
        let mock = MockTransport::new();
        mock.push_error(
            "Server.GetStatus",
            RpcError::Transport("timed out".to_string()),
        );
        let cycler = StreamCycler::new(ControlClient::with_transport(mock.clone()), "c1");

        let error = cycler.advance().expect_err("transport error");
        assert!(matches!(error, ControlError::Transport(_)));
        assert!(mock.calls_for("Group.SetStream").is_empty());
    }

    #[test]
    fn commit_failure_is_reported() {
        let (cycler, mock) = cycler_with(status("s1", &["s1", "s2"]));
        mock.push_error(
            "Group.SetStream",
            RpcError::Fault(json!({"code": -32603, "message": "Internal error"})),
        );

        let error = cycler.advance().expect_err("fault");
        assert!(matches!(error, ControlError::Protocol(_)));
    }
}
