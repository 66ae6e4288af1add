use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DetectionError {
    #[error("mask is {actual_width}x{actual_height} but frame is {expected_width}x{expected_height}")]
    MaskSizeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
    #[error("vision backend error: {0}")]
    Library(String),
}
