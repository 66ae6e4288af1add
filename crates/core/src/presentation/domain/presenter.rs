use std::time::Duration;

use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::mask::ForegroundMask;

#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("display backend error: {0}")]
    Library(String),
}

/// Shows each annotated frame next to its mask and reports key presses.
///
/// Display surfaces are created on the first `present` call, so a run that
/// never presents never opens a window.
pub trait Presenter {
    fn present(
        &mut self,
        frame: &Frame,
        mask: &ForegroundMask,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Waits at most `wait` for a key press. Returns the key code, or
    /// `None` when the wait elapsed without input.
    fn poll_key(&mut self, wait: Duration) -> Result<Option<i32>, Box<dyn std::error::Error>>;

    /// Destroys every display surface. Safe to call more than once.
    fn close(&mut self);
}
