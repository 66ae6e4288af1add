use crate::detection::domain::detector_backend::BackendUnavailable;
use crate::detection::domain::foreground_detector::ForegroundDetector;

#[cfg(feature = "cuda")]
pub use self::cuda::CudaMog2Detector;

/// Builds the CUDA detector, or reports why it cannot exist here.
#[cfg(feature = "cuda")]
pub fn try_create() -> Result<Box<dyn ForegroundDetector>, BackendUnavailable> {
    let devices = opencv::core::get_cuda_enabled_device_count()
        .map_err(|e| BackendUnavailable::new(format!("CUDA runtime query failed: {e}")))?;
    if devices < 1 {
        return Err(BackendUnavailable::new("no CUDA-capable device found"));
    }
    let detector = CudaMog2Detector::new()
        .map_err(|e| BackendUnavailable::new(format!("CUDA MOG2 construction failed: {e}")))?;
    Ok(Box::new(detector))
}

#[cfg(not(feature = "cuda"))]
pub fn try_create() -> Result<Box<dyn ForegroundDetector>, BackendUnavailable> {
    Err(BackendUnavailable::new("built without the `cuda` feature"))
}

#[cfg(feature = "cuda")]
mod cuda {
    use opencv::core::{GpuMat, Mat, Ptr};
    use opencv::cudabgsegm::{self, CUDA_BackgroundSubtractorMOG2};
    use opencv::prelude::*;
    use opencv::video::BackgroundSubtractorTrait;

    use super::super::cpu_mog2_detector::AUTO_LEARNING_RATE;
    use crate::detection::domain::detection_error::DetectionError;
    use crate::detection::domain::detector_backend::DetectorBackend;
    use crate::detection::domain::foreground_detector::ForegroundDetector;
    use crate::shared::constants::{MOG2_DETECT_SHADOWS, MOG2_HISTORY, MOG2_VAR_THRESHOLD};
    use crate::shared::frame::Frame;
    use crate::shared::mask::ForegroundMask;
    use crate::shared::opencv_mat::{frame_to_mat, mat_to_mask};

    /// MOG2 running on the GPU. Device buffers are reused across frames.
    pub struct CudaMog2Detector {
        subtractor: Ptr<CUDA_BackgroundSubtractorMOG2>,
        device_frame: GpuMat,
        device_mask: GpuMat,
        host_mask: Mat,
    }

    impl CudaMog2Detector {
        pub fn new() -> Result<Self, DetectionError> {
            let subtractor = cudabgsegm::create_background_subtractor_mog2(
                MOG2_HISTORY,
                MOG2_VAR_THRESHOLD,
                MOG2_DETECT_SHADOWS,
            )?;
            Ok(Self {
                subtractor,
                device_frame: GpuMat::new_def()?,
                device_mask: GpuMat::new_def()?,
                host_mask: Mat::default(),
            })
        }
    }

    impl ForegroundDetector for CudaMog2Detector {
        fn apply(
            &mut self,
            frame: &Frame,
        ) -> Result<ForegroundMask, Box<dyn std::error::Error>> {
            let input = frame_to_mat(frame).map_err(DetectionError::from)?;
            self.device_frame
                .upload(&input)
                .map_err(DetectionError::from)?;
            BackgroundSubtractorTrait::apply(
                &mut self.subtractor,
                &self.device_frame,
                &mut self.device_mask,
                AUTO_LEARNING_RATE,
            )
            .map_err(DetectionError::from)?;
            self.device_mask
                .download(&mut self.host_mask)
                .map_err(DetectionError::from)?;
            mat_to_mask(&self.host_mask).map_err(|e| DetectionError::from(e).into())
        }

        fn backend(&self) -> DetectorBackend {
            DetectorBackend::Accelerated
        }
    }
}
