use opencv::core::{Mat, Ptr};
use opencv::video::{self, BackgroundSubtractorMOG2, BackgroundSubtractorTrait};

use crate::detection::domain::detection_error::DetectionError;
use crate::detection::domain::detector_backend::DetectorBackend;
use crate::detection::domain::foreground_detector::ForegroundDetector;
use crate::shared::constants::{MOG2_DETECT_SHADOWS, MOG2_HISTORY, MOG2_VAR_THRESHOLD};
use crate::shared::frame::Frame;
use crate::shared::mask::ForegroundMask;
use crate::shared::opencv_mat::{frame_to_mat, mat_to_mask};

/// Negative rate lets the subtractor pick its own, derived from `history`.
pub(super) const AUTO_LEARNING_RATE: f64 = -1.0;

impl From<opencv::Error> for DetectionError {
    fn from(e: opencv::Error) -> Self {
        DetectionError::Library(e.to_string())
    }
}

/// CPU Gaussian-mixture background subtractor (OpenCV MOG2).
pub struct CpuMog2Detector {
    subtractor: Ptr<BackgroundSubtractorMOG2>,
    raw_mask: Mat,
}

impl CpuMog2Detector {
    pub fn new() -> Result<Self, DetectionError> {
        Self::with_params(MOG2_HISTORY, MOG2_VAR_THRESHOLD, MOG2_DETECT_SHADOWS)
    }

    pub fn with_params(
        history: i32,
        var_threshold: f64,
        detect_shadows: bool,
    ) -> Result<Self, DetectionError> {
        let subtractor =
            video::create_background_subtractor_mog2(history, var_threshold, detect_shadows)?;
        log::debug!(
            "Created CPU MOG2 subtractor (history={history}, var_threshold={var_threshold}, shadows={detect_shadows})"
        );
        Ok(Self {
            subtractor,
            raw_mask: Mat::default(),
        })
    }
}

impl ForegroundDetector for CpuMog2Detector {
    fn apply(&mut self, frame: &Frame) -> Result<ForegroundMask, Box<dyn std::error::Error>> {
        let input = frame_to_mat(frame).map_err(DetectionError::from)?;
        BackgroundSubtractorTrait::apply(
            &mut self.subtractor,
            &input,
            &mut self.raw_mask,
            AUTO_LEARNING_RATE,
        )
        .map_err(DetectionError::from)?;
        Ok(mat_to_mask(&self.raw_mask).map_err(DetectionError::from)?)
    }

    fn backend(&self) -> DetectorBackend {
        DetectorBackend::Standard
    }
}
