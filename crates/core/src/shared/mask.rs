use ndarray::ArrayView2;

use super::frame::Frame;

pub const FOREGROUND: u8 = 255;
/// MOG2 marks pixels it classifies as shadow with this level.
pub const SHADOW: u8 = 127;
pub const BACKGROUND: u8 = 0;

/// Foreground mask: one byte per pixel, any non-zero value is foreground.
///
/// Levels are kept exactly as the subtractor produced them, so a displayed
/// mask still shows shadows in gray. Produced fresh for every frame and
/// sized exactly like the frame that triggered it.
#[derive(Clone, Debug, PartialEq)]
pub struct ForegroundMask {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl ForegroundMask {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "mask length must equal width * height"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn zeros(width: u32, height: u32) -> Self {
        Self::new(
            vec![BACKGROUND; (width as usize) * (height as usize)],
            width,
            height,
        )
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.data[(y as usize) * (self.width as usize) + x as usize] != BACKGROUND
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != BACKGROUND).count()
    }

    pub fn is_all_background(&self) -> bool {
        self.data.iter().all(|&v| v == BACKGROUND)
    }

    pub fn matches_frame(&self, frame: &Frame) -> bool {
        self.width == frame.width() && self.height == frame.height()
    }

    pub fn as_ndarray(&self) -> ArrayView2<'_, u8> {
        ArrayView2::from_shape((self.height as usize, self.width as usize), &self.data)
            .expect("Mask data length must match dimensions")
    }
}
