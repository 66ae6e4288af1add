use opencv::core::{Rect, Scalar};
use opencv::imgproc;
use opencv::prelude::*;

use crate::annotation::domain::annotation_style::AnnotationStyle;
use crate::annotation::domain::frame_annotator::{AnnotationError, FrameAnnotator};
use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::frame_to_mat;

impl From<opencv::Error> for AnnotationError {
    fn from(e: opencv::Error) -> Self {
        AnnotationError::Library(e.to_string())
    }
}

/// Hollow rectangles drawn with `imgproc::rectangle`.
///
/// The stroke is centred on the box edge and clipped by OpenCV. A fourth
/// channel, if present, is painted opaque.
pub struct OpenCvRectangleAnnotator {
    style: AnnotationStyle,
}

impl OpenCvRectangleAnnotator {
    pub fn new(style: AnnotationStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> AnnotationStyle {
        self.style
    }

    fn color(&self) -> Scalar {
        let [c0, c1, c2] = self.style.color;
        Scalar::new(c0 as f64, c1 as f64, c2 as f64, 255.0)
    }
}

impl Default for OpenCvRectangleAnnotator {
    fn default() -> Self {
        Self::new(AnnotationStyle::default())
    }
}

impl FrameAnnotator for OpenCvRectangleAnnotator {
    fn annotate(
        &self,
        frame: &mut Frame,
        boxes: &[BoundingBox],
    ) -> Result<(), Box<dyn std::error::Error>> {
        if frame.is_empty() || boxes.is_empty() {
            return Ok(());
        }

        let mut canvas = frame_to_mat(frame).map_err(AnnotationError::from)?;
        let color = self.color();
        let thickness = self.style.thickness.min(i32::MAX as u32) as i32;
        for b in boxes {
            imgproc::rectangle(
                &mut canvas,
                Rect::new(b.x, b.y, b.width, b.height),
                color,
                thickness,
                imgproc::LINE_8,
                0,
            )
            .map_err(AnnotationError::from)?;
        }

        let painted = canvas.data_bytes().map_err(AnnotationError::from)?;
        frame.data_mut().copy_from_slice(painted);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: [u8; 3] = [0, 255, 0];

    fn make_frame(width: u32, height: u32) -> Frame {
        Frame::new(vec![0u8; (width * height * 3) as usize], width, height, 3, 0)
    }

    fn is_green(frame: &Frame, x: u32, y: u32) -> bool {
        frame.pixel(x, y) == GREEN
    }

    #[test]
    fn test_no_boxes_leaves_frame_unchanged() {
        let mut frame = make_frame(20, 20);
        OpenCvRectangleAnnotator::default()
            .annotate(&mut frame, &[])
            .unwrap();
        assert!(frame.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_outline_on_box_edges() {
        let mut frame = make_frame(60, 60);
        OpenCvRectangleAnnotator::default()
            .annotate(&mut frame, &[BoundingBox::new(10, 10, 30, 20)])
            .unwrap();

        // corners of the box: (x, y) and (x + w - 1, y + h - 1)
        for &(x, y) in &[(10, 10), (39, 10), (10, 29), (39, 29), (25, 10), (10, 20)] {
            assert!(is_green(&frame, x, y), "expected stroke at ({x}, {y})");
        }
        // interior and far exterior untouched
        for &(x, y) in &[(25, 20), (20, 15), (2, 2), (55, 55)] {
            assert!(!is_green(&frame, x, y), "unexpected stroke at ({x}, {y})");
        }
    }

    #[test]
    fn test_box_partly_outside_is_clipped() {
        let mut frame = make_frame(20, 20);
        OpenCvRectangleAnnotator::default()
            .annotate(&mut frame, &[BoundingBox::new(-5, 15, 10, 10)])
            .unwrap();
        assert!(is_green(&frame, 0, 15));
        assert!(is_green(&frame, 4, 17));
        assert_eq!(frame.data().len(), 20 * 20 * 3);
    }

    #[test]
    fn test_box_outside_frame_draws_nothing() {
        let mut frame = make_frame(10, 10);
        OpenCvRectangleAnnotator::default()
            .annotate(&mut frame, &[BoundingBox::new(50, 50, 10, 10)])
            .unwrap();
        assert!(frame.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_color_written_in_frame_channel_order() {
        let mut frame = make_frame(20, 20);
        let annotator = OpenCvRectangleAnnotator::new(AnnotationStyle {
            color: [255, 0, 0],
            thickness: 1,
        });
        annotator
            .annotate(&mut frame, &[BoundingBox::new(2, 2, 6, 6)])
            .unwrap();
        assert_eq!(frame.pixel(2, 2), &[255, 0, 0]);
        assert_eq!(frame.pixel(4, 4), &[0, 0, 0]);
    }

    #[test]
    fn test_empty_frame_is_skipped() {
        let mut frame = Frame::empty(3);
        OpenCvRectangleAnnotator::default()
            .annotate(&mut frame, &[BoundingBox::new(0, 0, 5, 5)])
            .unwrap();
        assert!(frame.is_empty());
    }
}
