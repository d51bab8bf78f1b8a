//! Client volume setting

use serde::{Deserialize, Serialize};

/// Volume configuration for a single client
///
/// `percent` is in `[0, 100]`. Every volume written by this system keeps
/// the invariant `muted == (percent == 0)` via [`Volume::new`]; volumes
/// read back from the server are taken as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(default)]
    pub percent: u8,
    #[serde(default)]
    pub muted: bool,
}

impl Volume {
    /// Create a volume setting, muting at zero
    pub fn new(percent: u8) -> Self {
        Self {
            percent,
            muted: percent == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutes_at_zero() {
        assert!(Volume::new(0).muted);
        assert!(!Volume::new(1).muted);
        assert!(!Volume::new(100).muted);
    }

    #[test]
    fn deserializes_with_defaults() {
        let volume: Volume = serde_json::from_str("{}").expect("empty object");
        assert_eq!(volume.percent, 0);
        assert!(!volume.muted);
    }
}
