use crate::shared::constants::{DEFAULT_BOX_COLOR, DEFAULT_STROKE_THICKNESS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotationStyle {
    /// Channel values in the frame's own order (BGR for camera frames).
    pub color: [u8; 3],
    pub thickness: u32,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_BOX_COLOR,
            thickness: DEFAULT_STROKE_THICKNESS,
        }
    }
}
