pub mod opencv_camera_source;
