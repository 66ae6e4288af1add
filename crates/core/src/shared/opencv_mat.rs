//! Conversions between domain buffers and OpenCV `Mat`s.
//!
//! Only infrastructure adapters call into this module; pixel data crosses
//! the library boundary here and nowhere else.

use opencv::core::{Mat, Scalar, StsBadArg, StsUnsupportedFormat, CV_8U, CV_8UC1, CV_8UC3, CV_8UC4};
use opencv::prelude::*;

use super::frame::Frame;
use super::mask::ForegroundMask;

fn mat_type_for(channels: u8) -> opencv::Result<i32> {
    match channels {
        1 => Ok(CV_8UC1),
        3 => Ok(CV_8UC3),
        4 => Ok(CV_8UC4),
        n => Err(opencv::Error::new(
            StsBadArg,
            format!("unsupported channel count {n}"),
        )),
    }
}

fn filled_mat(width: u32, height: u32, typ: i32, bytes: &[u8]) -> opencv::Result<Mat> {
    let mut mat =
        Mat::new_rows_cols_with_default(height as i32, width as i32, typ, Scalar::all(0.0))?;
    mat.data_bytes_mut()?.copy_from_slice(bytes);
    Ok(mat)
}

/// Copies `mat` into a contiguous owned buffer, cloning first if the
/// source is a non-continuous view.
fn continuous_bytes(mat: &Mat) -> opencv::Result<Vec<u8>> {
    if mat.depth() != CV_8U {
        return Err(opencv::Error::new(
            StsUnsupportedFormat,
            format!("expected 8-bit pixels, got depth {}", mat.depth()),
        ));
    }
    if mat.is_continuous() {
        Ok(mat.data_bytes()?.to_vec())
    } else {
        Ok(mat.try_clone()?.data_bytes()?.to_vec())
    }
}

pub fn frame_to_mat(frame: &Frame) -> opencv::Result<Mat> {
    let typ = mat_type_for(frame.channels())?;
    filled_mat(frame.width(), frame.height(), typ, frame.data())
}

/// An empty `Mat` becomes the empty end-of-stream frame.
pub fn mat_to_frame(mat: &Mat, index: usize) -> opencv::Result<Frame> {
    if mat.empty() {
        return Ok(Frame::empty(index));
    }
    let data = continuous_bytes(mat)?;
    Ok(Frame::new(
        data,
        mat.cols() as u32,
        mat.rows() as u32,
        mat.channels() as u8,
        index,
    ))
}

pub fn mask_to_mat(mask: &ForegroundMask) -> opencv::Result<Mat> {
    filled_mat(mask.width(), mask.height(), CV_8UC1, mask.data())
}

pub fn mat_to_mask(mat: &Mat) -> opencv::Result<ForegroundMask> {
    if mat.channels() != 1 {
        return Err(opencv::Error::new(
            StsBadArg,
            format!("mask must be single-channel, got {}", mat.channels()),
        ));
    }
    let data = continuous_bytes(mat)?;
    Ok(ForegroundMask::new(data, mat.cols() as u32, mat.rows() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mask::SHADOW;

    #[test]
    fn test_mask_round_trip_keeps_shadow_level() {
        let mask = ForegroundMask::new(vec![0, SHADOW, 255, 0, 0, SHADOW], 3, 2);
        let mat = mask_to_mat(&mask).unwrap();
        let back = mat_to_mask(&mat).unwrap();
        assert_eq!(back.data(), mask.data());
        assert_eq!(back.foreground_count(), 3);
    }

    #[test]
    fn test_multi_channel_mat_rejected_as_mask() {
        let frame = Frame::new(vec![0u8; 2 * 2 * 3], 2, 2, 3, 0);
        let mat = frame_to_mat(&frame).unwrap();
        assert!(mat_to_mask(&mat).is_err());
    }

    #[test]
    fn test_empty_mat_is_end_of_stream_frame() {
        let frame = mat_to_frame(&Mat::default(), 7).unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.index(), 7);
    }
}
