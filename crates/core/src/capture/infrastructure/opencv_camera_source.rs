use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::capture::domain::frame_source::{CaptureError, FrameSource};
use crate::shared::capture_metadata::CaptureMetadata;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::mat_to_frame;

impl From<opencv::Error> for CaptureError {
    fn from(e: opencv::Error) -> Self {
        CaptureError::Library(e.to_string())
    }
}

/// Reads frames from a camera through OpenCV's `VideoCapture`.
///
/// Frames arrive in the device's native BGR layout. The device is released
/// on `close` and again on drop.
pub struct OpenCvCameraSource {
    capture: Option<VideoCapture>,
    next_index: usize,
}

impl OpenCvCameraSource {
    pub fn new() -> Self {
        Self {
            capture: None,
            next_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.capture.is_some()
    }
}

impl Default for OpenCvCameraSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for OpenCvCameraSource {
    fn open(&mut self, device: i32) -> Result<CaptureMetadata, CaptureError> {
        let capture = VideoCapture::new(device, videoio::CAP_ANY).map_err(|e| {
            log::debug!("VideoCapture::new({device}) failed: {e}");
            CaptureError::OpenFailed { device }
        })?;
        if !capture.is_opened()? {
            return Err(CaptureError::OpenFailed { device });
        }

        let metadata = CaptureMetadata {
            device,
            width: capture.get(videoio::CAP_PROP_FRAME_WIDTH)?.max(0.0) as u32,
            height: capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?.max(0.0) as u32,
            fps: capture.get(videoio::CAP_PROP_FPS)?.max(0.0),
        };
        if metadata.has_resolution() {
            log::info!(
                "Opened capture device {} ({}x{} @ {:.1} fps)",
                device,
                metadata.width,
                metadata.height,
                metadata.fps
            );
        } else {
            log::info!("Opened capture device {device} (resolution not reported)");
        }

        self.capture = Some(capture);
        self.next_index = 0;
        Ok(metadata)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        let Some(capture) = self.capture.as_mut() else {
            return Box::new(std::iter::once(Err(CaptureError::NotOpened.into())));
        };

        Box::new(CameraFrameIter {
            capture,
            next_index: &mut self.next_index,
            buffer: Mat::default(),
            done: false,
        })
    }

    fn close(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            match capture.release() {
                Ok(()) => log::info!("Capture device released"),
                Err(e) => log::warn!("Failed to release capture device: {e}"),
            }
        }
    }
}

impl Drop for OpenCvCameraSource {
    fn drop(&mut self) {
        self.close();
    }
}

/// Lazy iterator pulling one frame per `next`. Ends after the device hands
/// back an empty frame.
struct CameraFrameIter<'a> {
    capture: &'a mut VideoCapture,
    next_index: &'a mut usize,
    buffer: Mat,
    done: bool,
}

impl Iterator for CameraFrameIter<'_> {
    type Item = Result<Frame, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let index = *self.next_index;
        let grabbed = match self.capture.read(&mut self.buffer) {
            Ok(grabbed) => grabbed,
            Err(e) => {
                self.done = true;
                return Some(Err(CaptureError::from(e).into()));
            }
        };

        if !grabbed || self.buffer.empty() {
            log::debug!("Capture device returned an empty frame at index {index}");
            self.done = true;
            return Some(Ok(Frame::empty(index)));
        }

        *self.next_index += 1;
        Some(mat_to_frame(&self.buffer, index).map_err(|e| CaptureError::from(e).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING_DEVICE: i32 = 9999;

    #[test]
    fn test_open_missing_device_fails_with_device_index() {
        let mut source = OpenCvCameraSource::new();

        let err = source.open(MISSING_DEVICE).unwrap_err();

        assert!(matches!(
            err,
            CaptureError::OpenFailed {
                device: MISSING_DEVICE
            }
        ));
        assert!(!source.is_open());
    }

    #[test]
    fn test_frames_before_open_reports_not_opened() {
        let mut source = OpenCvCameraSource::new();
        let mut frames = source.frames();

        let first = frames.next().unwrap().unwrap_err();
        assert!(first.downcast_ref::<CaptureError>().is_some());
        assert!(frames.next().is_none());
    }

    #[test]
    fn test_close_without_open_is_harmless() {
        let mut source = OpenCvCameraSource::new();
        source.close();
        source.close();
        assert!(!source.is_open());
    }
}
