/// Default camera: the first device the capture backend enumerates.
pub const DEFAULT_DEVICE_INDEX: i32 = 0;

/// Contours enclosing this many pixels or fewer are treated as noise.
pub const DEFAULT_MIN_AREA: f64 = 500.0;

/// Bounded key-poll wait per iteration; also throttles the loop.
pub const DEFAULT_KEY_WAIT_MS: u64 = 30;

pub const ESCAPE_KEY: i32 = 27;

pub const FRAME_WINDOW: &str = "Frame";
pub const MASK_WINDOW: &str = "FG Mask";

/// Box outline color in BGR order (green).
pub const DEFAULT_BOX_COLOR: [u8; 3] = [0, 255, 0];
pub const DEFAULT_STROKE_THICKNESS: u32 = 2;

/// MOG2 parameters, matching the library defaults.
pub const MOG2_HISTORY: i32 = 500;
pub const MOG2_VAR_THRESHOLD: f64 = 16.0;
pub const MOG2_DETECT_SHADOWS: bool = true;
