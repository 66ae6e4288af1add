use crate::shared::bounding_box::BoundingBox;
use crate::shared::contour::Contour;

/// Keeps contours whose enclosed area is strictly greater than `min_area`
/// and returns their bounding boxes.
///
/// Output order follows the extractor's emission order; nothing is sorted.
/// A contour exactly at `min_area` is dropped.
pub fn filter_regions(contours: &[Contour], min_area: f64) -> Vec<BoundingBox> {
    contours
        .iter()
        .filter(|c| c.area() > min_area)
        .filter_map(Contour::bounding_box)
        .collect()
}
