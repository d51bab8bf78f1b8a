//! Server status snapshot

use serde::Deserialize;

use super::{ClientRef, Group, Stream};

/// One snapshot of full server state, as returned by `Server.GetStatus`
///
/// Fetched fresh for every operation and dropped afterwards; it is a
/// read-of-record for computing the next desired state, never a
/// write-of-record. Lookups are linear scans: status documents are small
/// and never cached, so no index is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerStatus {
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub streams: Vec<Stream>,
}

impl ServerStatus {
    /// Find a client by id across all groups
    pub fn find_client(&self, id: &str) -> Option<&ClientRef> {
        self.server
            .groups
            .iter()
            .flat_map(|g| g.clients.iter())
            .find(|c| c.id == id)
    }

    /// Find the group whose client list contains `client_id`
    pub fn find_group_containing(&self, client_id: &str) -> Option<&Group> {
        self.server.groups.iter().find(|g| g.contains_client(client_id))
    }

    /// All stream ids, in server order
    pub fn stream_ids(&self) -> Vec<&str> {
        self.server.streams.iter().map(|s| s.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_status() -> ServerStatus {
        serde_json::from_value(json!({
            "server": {
                "groups": [
                    {"id": "g1", "stream_id": "s1", "clients": [{"id": "c1"}]},
                    {"id": "g2", "stream_id": "s2", "clients": [{"id": "c2"}, {"id": "c3"}]}
                ],
                "streams": [{"id": "s1"}, {"id": "s2"}, {"id": "s3"}]
            }
        }))
        .expect("status parses")
    }

    #[test]
    fn empty_document_parses_to_empty_snapshot() {
        let status: ServerStatus = serde_json::from_value(json!({})).expect("parse");
        assert!(status.server.groups.is_empty());
        assert!(status.server.streams.is_empty());
        assert!(status.find_client("c1").is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let status: ServerStatus = serde_json::from_value(json!({
            "server": {
                "version": "0.27.0",
                "groups": [{"id": "g1", "muted": false, "clients": [{"id": "c1", "snapclient": {}}]}],
                "streams": []
            }
        }))
        .expect("parse");
        assert!(status.find_client("c1").is_some());
    }

    #[test]
    fn finds_client_and_owning_group() {
        let status = sample_status();
        assert_eq!(status.find_client("c3").expect("client").id, "c3");
        assert_eq!(status.find_group_containing("c3").expect("group").id, "g2");
        assert!(status.find_group_containing("c9").is_none());
    }

    #[test]
    fn stream_ids_keep_server_order() {
        let status = sample_status();
        assert_eq!(status.stream_ids(), vec!["s1", "s2", "s3"]);
    }
}
