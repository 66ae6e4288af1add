pub mod bounding_box;
pub mod capture_metadata;
pub mod constants;
pub mod contour;
pub mod frame;
pub mod mask;
#[cfg(feature = "opencv")]
pub mod opencv_mat;
