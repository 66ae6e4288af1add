use crate::shared::contour::Contour;
use crate::shared::mask::ForegroundMask;

/// Domain interface for contour extraction.
///
/// Returns only outer boundaries (holes are ignored), each as a simplified
/// point chain, in the order the implementation discovers them.
pub trait RegionExtractor {
    fn extract(&self, mask: &ForegroundMask) -> Result<Vec<Contour>, Box<dyn std::error::Error>>;
}
