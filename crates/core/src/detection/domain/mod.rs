pub mod backend_selector;
pub mod detection_error;
pub mod detector_backend;
pub mod foreground_detector;
pub mod region_extractor;
