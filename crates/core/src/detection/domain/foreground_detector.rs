use crate::shared::frame::Frame;
use crate::shared::mask::ForegroundMask;

use super::detector_backend::DetectorBackend;

/// Domain interface for background subtraction.
///
/// Implementations hold a running background model, hence `&mut self`:
/// every call both updates the model and classifies the frame.
pub trait ForegroundDetector {
    fn apply(&mut self, frame: &Frame) -> Result<ForegroundMask, Box<dyn std::error::Error>>;

    fn backend(&self) -> DetectorBackend;
}
