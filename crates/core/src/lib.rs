//! Live motion detection: background subtraction over a camera stream,
//! contour extraction, and boxed annotation of moving regions.
//!
//! Domain traits and the capture loop build without any vision library.
//! The `opencv` feature adds camera, detector, contour and window
//! adapters; `cuda` adds the accelerated background subtractor.

pub mod annotation;
pub mod capture;
pub mod detection;
pub mod pipeline;
pub mod presentation;
pub mod shared;
