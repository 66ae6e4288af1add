use thiserror::Error;

use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("drawing backend error: {0}")]
    Library(String),
}

/// Domain interface for drawing detection overlays onto a frame.
///
/// Implementations modify the frame in place. Boxes are drawn in the given
/// order; later boxes paint over earlier ones where they overlap.
pub trait FrameAnnotator {
    fn annotate(
        &self,
        frame: &mut Frame,
        boxes: &[BoundingBox],
    ) -> Result<(), Box<dyn std::error::Error>>;
}
