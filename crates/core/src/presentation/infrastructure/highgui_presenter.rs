use std::time::Duration;

use opencv::highgui;

use crate::presentation::domain::presenter::{PresentationError, Presenter};
use crate::shared::constants::{FRAME_WINDOW, MASK_WINDOW};
use crate::shared::frame::Frame;
use crate::shared::mask::ForegroundMask;
use crate::shared::opencv_mat::{frame_to_mat, mask_to_mat};

impl From<opencv::Error> for PresentationError {
    fn from(e: opencv::Error) -> Self {
        PresentationError::Library(e.to_string())
    }
}

/// Two HighGUI windows: the annotated frame and the raw foreground mask.
pub struct HighGuiPresenter {
    frame_window: String,
    mask_window: String,
    windows_open: bool,
}

impl HighGuiPresenter {
    pub fn new() -> Self {
        Self::with_titles(FRAME_WINDOW, MASK_WINDOW)
    }

    pub fn with_titles(frame_window: &str, mask_window: &str) -> Self {
        Self {
            frame_window: frame_window.to_string(),
            mask_window: mask_window.to_string(),
            windows_open: false,
        }
    }
}

impl Default for HighGuiPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for HighGuiPresenter {
    fn present(
        &mut self,
        frame: &Frame,
        mask: &ForegroundMask,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let frame_mat = frame_to_mat(frame).map_err(PresentationError::from)?;
        let mask_mat = mask_to_mat(mask).map_err(PresentationError::from)?;

        highgui::imshow(&self.frame_window, &frame_mat).map_err(PresentationError::from)?;
        highgui::imshow(&self.mask_window, &mask_mat).map_err(PresentationError::from)?;
        if !self.windows_open {
            log::debug!(
                "Opened windows '{}' and '{}'",
                self.frame_window,
                self.mask_window
            );
            self.windows_open = true;
        }
        Ok(())
    }

    fn poll_key(&mut self, wait: Duration) -> Result<Option<i32>, Box<dyn std::error::Error>> {
        // wait_key(0) blocks forever, so never go below 1 ms.
        let wait_ms = wait.as_millis().clamp(1, i32::MAX as u128) as i32;
        let key = highgui::wait_key(wait_ms).map_err(PresentationError::from)?;
        Ok((key >= 0).then_some(key & 0xFF))
    }

    fn close(&mut self) {
        if !self.windows_open {
            return;
        }
        match highgui::destroy_all_windows() {
            Ok(()) => log::debug!("Display windows destroyed"),
            Err(e) => log::warn!("Failed to destroy display windows: {e}"),
        }
        self.windows_open = false;
    }
}
