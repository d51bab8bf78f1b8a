//! Album artwork lookup with a process-lifetime cache

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;
use tracing::debug;

/// A failed lookup against the metadata service
#[derive(Debug, Error)]
#[error("artwork lookup failed: {0}")]
pub struct ArtworkError(pub String);

/// External metadata service resolving `(artist, album)` to an image URL
pub trait ArtworkSource {
    fn lookup(&self, artist: &str, album: &str) -> Result<Option<String>, ArtworkError>;
}

/// Caches artwork lookups per `(artist, album)` key
///
/// Negative and failed lookups are cached too, so a key hits the external
/// service at most once per process lifetime. Failures are logged and
/// reported as "no artwork": they never reach the volume/stream control
/// path.
pub struct ArtworkCache<S> {
    source: S,
    entries: RwLock<HashMap<(String, String), Option<String>>>,
}

impl<S: ArtworkSource> ArtworkCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The artwork URL for `(artist, album)`, if any
    pub fn get(&self, artist: &str, album: &str) -> Option<String> {
        let key = (artist.to_string(), album.to_string());

        if let Ok(entries) = self.entries.read() {
            if let Some(cached) = entries.get(&key) {
                return cached.clone();
            }
        }

        let resolved = match self.source.lookup(artist, album) {
            Ok(found) => found,
            Err(error) => {
                debug!(%artist, %album, %error, "artwork lookup failed");
                None
            }
        };

        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, resolved.clone());
        }
        resolved
    }
}
