use crate::detection::domain::backend_selector::{select_backend, BackendPreference};
use crate::detection::domain::foreground_detector::ForegroundDetector;

use super::cpu_mog2_detector::CpuMog2Detector;
use super::cuda_mog2_detector;

/// Creates the best available foreground detector.
///
/// Tries CUDA MOG2 first (unless `preference` forbids it) and falls back
/// to CPU MOG2. Called once per run; the result is never re-evaluated.
pub fn create_detector(
    preference: BackendPreference,
) -> Result<Box<dyn ForegroundDetector>, Box<dyn std::error::Error>> {
    select_backend(preference, cuda_mog2_detector::try_create, || {
        let detector: Box<dyn ForegroundDetector> = Box::new(CpuMog2Detector::new()?);
        Ok(detector)
    })
}

/// Returns true if the CUDA detector can be constructed in this process.
pub fn accelerated_available() -> bool {
    cuda_mog2_detector::try_create().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detector_backend::DetectorBackend;
    use crate::shared::frame::Frame;

    #[test]
    fn test_standard_only_yields_cpu_backend() {
        let detector = create_detector(BackendPreference::StandardOnly).unwrap();
        assert_eq!(detector.backend(), DetectorBackend::Standard);
    }

    #[test]
    fn test_auto_matches_availability() {
        let detector = create_detector(BackendPreference::Auto).unwrap();
        let expected = if accelerated_available() {
            DetectorBackend::Accelerated
        } else {
            DetectorBackend::Standard
        };
        assert_eq!(detector.backend(), expected);
    }

    #[test]
    fn test_cpu_detector_mask_matches_frame_size() {
        let mut detector = create_detector(BackendPreference::StandardOnly).unwrap();
        let frame = Frame::new(vec![90u8; 64 * 48 * 3], 64, 48, 3, 0);
        let mask = detector.apply(&frame).unwrap();
        assert!(mask.matches_frame(&frame));
    }
}
