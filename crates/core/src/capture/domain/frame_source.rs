use thiserror::Error;

use crate::shared::capture_metadata::CaptureMetadata;
use crate::shared::frame::Frame;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("cannot open capture device {device}")]
    OpenFailed { device: i32 },
    #[error("capture source has not been opened")]
    NotOpened,
    #[error("capture backend error: {0}")]
    Library(String),
}

/// Produces frames from a live capture device.
///
/// The stream is lazy and may be infinite. A device that stops producing
/// yields one empty [`Frame`] and then ends.
pub trait FrameSource {
    /// Opens the device. Failure here is fatal for the whole run.
    fn open(&mut self, device: i32) -> Result<CaptureMetadata, CaptureError>;

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases the device. Safe to call more than once.
    fn close(&mut self);
}
