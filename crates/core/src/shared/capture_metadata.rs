/// Properties a capture device reports when it is opened.
///
/// Devices that do not expose a property report 0 for it.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureMetadata {
    pub device: i32,
    pub width: u32,
    pub height: u32,
    pub fps: f64,
}

impl CaptureMetadata {
    pub fn has_resolution(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_resolution() {
        let meta = CaptureMetadata {
            device: 0,
            width: 640,
            height: 480,
            fps: 30.0,
        };
        assert!(meta.has_resolution());
    }

    #[test]
    fn test_unreported_resolution() {
        let meta = CaptureMetadata {
            device: 2,
            width: 0,
            height: 0,
            fps: 0.0,
        };
        assert!(!meta.has_resolution());
        assert_eq!(meta.clone(), meta);
    }
}
