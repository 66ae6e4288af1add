pub mod cpu_mog2_detector;
pub mod cuda_mog2_detector;
pub mod detector_factory;
pub mod opencv_contour_extractor;
