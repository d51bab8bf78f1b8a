//! Stream and track metadata types

use serde::Deserialize;

/// A named audio source the server can route to a group
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stream {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub properties: StreamProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamProperties {
    #[serde(default)]
    pub metadata: Option<StreamMetadata>,
}

/// Metadata for whatever the stream is currently playing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StreamMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

impl Stream {
    /// Current track metadata, if the source reports any
    pub fn metadata(&self) -> Option<&StreamMetadata> {
        self.properties.metadata.as_ref()
    }
}

impl StreamMetadata {
    /// Check whether any field carries content
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.album.is_none()
    }
}
