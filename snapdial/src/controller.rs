//! Per-client volume control

use rpc_client::Transport;
use snapdial_api::{ControlClient, Volume};

use crate::ControlError;

/// Owns the local notion of one client's current volume
///
/// The local value is optimistic: it moves to the attempted volume before
/// the server write is issued and does not roll back when the write
/// fails, so a flaky link never triggers retry storms. Drift from server
/// truth persists until [`VolumeController::refresh`] re-seeds it; nothing
/// re-syncs automatically.
#[derive(Debug)]
pub struct VolumeController<T: Transport> {
    client: ControlClient<T>,
    client_id: String,
    current_volume: u8,
}

impl<T: Transport> VolumeController<T> {
    /// Create a controller for `client_id`, seeding the local volume with
    /// one status fetch
    ///
    /// A client id absent from every group seeds 0: the client may simply
    /// not be connected yet. Fetch failures propagate.
    pub fn new(client: ControlClient<T>, client_id: impl Into<String>) -> Result<Self, ControlError> {
        let mut controller = Self {
            client,
            client_id: client_id.into(),
            current_volume: 0,
        };
        controller.refresh()?;
        Ok(controller)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The local (possibly drifted) volume
    pub fn current_volume(&self) -> u8 {
        self.current_volume
    }

    /// Re-seed the local volume from a fresh status fetch
    pub fn refresh(&mut self) -> Result<u8, ControlError> {
        let status = self.client.get_status()?;
        self.current_volume = status
            .find_client(&self.client_id)
            .map(|c| c.volume().percent)
            .unwrap_or(0);
        Ok(self.current_volume)
    }

    /// Apply a bounded volume change and push it to the server
    ///
    /// Saturates at 0 and 100 rather than failing; the new percent is
    /// returned. Writes that land on 0 are muted.
    pub fn apply_delta(&mut self, delta: i32) -> Result<u8, ControlError> {
        self.commit(i32::from(self.current_volume) + delta)
    }

    /// Set an absolute volume with the same clamping and mute rules
    pub fn set_volume(&mut self, target: i32) -> Result<u8, ControlError> {
        self.commit(target)
    }

    fn commit(&mut self, requested: i32) -> Result<u8, ControlError> {
        let volume = Volume::new(requested.clamp(0, 100) as u8);
        // Local state moves first and stays moved on failure.
        self.current_volume = volume.percent;
        self.client.set_volume(&self.client_id, volume)?;
        Ok(volume.percent)
    }

    /// Rename the client on the server; touches no local state
    pub fn set_name(&self, name: &str) -> Result<(), ControlError> {
        self.client.set_name(&self.client_id, name)?;
        Ok(())
    }
}
