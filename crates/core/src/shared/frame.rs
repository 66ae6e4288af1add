use ndarray::{ArrayView3, ArrayViewMut3};

/// A single captured frame: interleaved pixel bytes in row-major order.
///
/// Capture devices deliver BGR; the domain layer treats channel order as
/// opaque and only the annotation color has to agree with it. A frame with
/// zero width or height is *empty* and marks the end of a capture stream.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    /// The end-of-stream marker a device yields once it stops producing.
    pub fn empty(index: usize) -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
            channels: 0,
            index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Position of this frame in its capture stream, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Channel values of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let channels = self.channels as usize;
        let start = ((y as usize) * (self.width as usize) + x as usize) * channels;
        &self.data[start..start + channels]
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let frame = Frame::new(vec![7u8; 24], 4, 2, 3, 11);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.index(), 11);
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_empty_marker() {
        let frame = Frame::empty(3);
        assert!(frame.is_empty());
        assert!(frame.data().is_empty());
        assert_eq!(frame.index(), 3);
    }

    #[test]
    fn test_zero_height_counts_as_empty() {
        let frame = Frame::new(Vec::new(), 640, 0, 3, 0);
        assert!(frame.is_empty());
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * channels")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2, 3, 0);
    }

    #[test]
    fn test_pixel_reads_bgr_triplet() {
        // 2x2 BGR, pixel (x=1, y=1) starts at byte 9
        let mut data = vec![0u8; 12];
        data[9] = 10;
        data[10] = 20;
        data[11] = 30;
        let frame = Frame::new(data, 2, 2, 3, 0);
        assert_eq!(frame.pixel(1, 1), &[10, 20, 30]);
        assert_eq!(frame.pixel(0, 0), &[0, 0, 0]);
    }

    #[test]
    fn test_ndarray_view_is_height_width_channels() {
        let frame = Frame::new(vec![0u8; 24], 4, 2, 3, 0);
        assert_eq!(frame.as_ndarray().shape(), &[2, 4, 3]);
    }

    #[test]
    fn test_ndarray_mut_writes_through() {
        let mut frame = Frame::new(vec![0u8; 12], 2, 2, 3, 0);
        frame.as_ndarray_mut()[[1, 0, 1]] = 255;
        assert_eq!(frame.pixel(0, 1), &[0, 255, 0]);
    }

    #[test]
    fn test_clone_is_independent() {
        let frame = Frame::new(vec![100u8; 12], 2, 2, 3, 0);
        let mut cloned = frame.clone();
        cloned.data_mut()[0] = 0;
        assert_eq!(frame.data()[0], 100);
        assert_eq!(cloned.data()[0], 0);
    }
}
