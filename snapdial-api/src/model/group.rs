//! Group and client reference types

use serde::Deserialize;

use super::Volume;

/// A set of clients sharing one audio stream
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: String,
    /// Id of the stream currently routed to this group; may reference a
    /// stream the server no longer exposes
    #[serde(default)]
    pub stream_id: String,
    #[serde(default)]
    pub clients: Vec<ClientRef>,
}

impl Group {
    /// Check if a client belongs to this group
    pub fn contains_client(&self, client_id: &str) -> bool {
        self.clients.iter().any(|c| c.id == client_id)
    }
}

/// An addressable audio output endpoint managed by the server
#[derive(Debug, Clone, Deserialize)]
pub struct ClientRef {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_connected")]
    pub connected: bool,
    #[serde(default)]
    pub host: Host,
    #[serde(default)]
    pub config: ClientConfig,
}

fn default_connected() -> bool {
    true
}

impl ClientRef {
    /// Display name: configured name, else host name, else the id
    pub fn display_name(&self) -> &str {
        if !self.config.name.is_empty() {
            &self.config.name
        } else if !self.host.name.is_empty() {
            &self.host.name
        } else {
            &self.id
        }
    }

    /// The client's volume configuration
    pub fn volume(&self) -> Volume {
        self.config.volume
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Host {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub volume: Volume,
}
