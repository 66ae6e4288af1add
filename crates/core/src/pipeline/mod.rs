pub mod capture_loop;
pub mod motion_detection_use_case;
pub mod pipeline_logger;
pub mod region_filter;
