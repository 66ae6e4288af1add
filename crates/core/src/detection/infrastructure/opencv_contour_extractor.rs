use opencv::core::{Point as CvPoint, Vector};
use opencv::imgproc::{self, CHAIN_APPROX_SIMPLE, RETR_EXTERNAL};

use crate::detection::domain::detection_error::DetectionError;
use crate::detection::domain::region_extractor::RegionExtractor;
use crate::shared::contour::{Contour, Point};
use crate::shared::mask::ForegroundMask;
use crate::shared::opencv_mat::mask_to_mat;

/// Outer contours via `findContours(RETR_EXTERNAL, CHAIN_APPROX_SIMPLE)`.
#[derive(Default)]
pub struct OpenCvContourExtractor;

impl OpenCvContourExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl RegionExtractor for OpenCvContourExtractor {
    fn extract(&self, mask: &ForegroundMask) -> Result<Vec<Contour>, Box<dyn std::error::Error>> {
        if mask.is_all_background() {
            return Ok(Vec::new());
        }

        let image = mask_to_mat(mask).map_err(DetectionError::from)?;
        let mut found: Vector<Vector<CvPoint>> = Vector::new();
        imgproc::find_contours(
            &image,
            &mut found,
            RETR_EXTERNAL,
            CHAIN_APPROX_SIMPLE,
            CvPoint::new(0, 0),
        )
        .map_err(DetectionError::from)?;

        let contours: Vec<Contour> = found
            .iter()
            .map(|chain| chain.iter().map(|p| Point::new(p.x, p.y)).collect::<Vec<_>>().into())
            .collect();
        log::trace!("Extracted {} contours", contours.len());
        Ok(contours)
    }
}
