use super::detector_backend::BackendUnavailable;
use super::foreground_detector::ForegroundDetector;

/// Whether the accelerated backend may be attempted at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendPreference {
    #[default]
    Auto,
    StandardOnly,
}

/// Picks the detector backend once, before any frame is processed.
///
/// Under `Auto` the accelerated constructor is tried first and its
/// `BackendUnavailable` is recovered by building the standard detector.
/// A failure of the standard constructor is not recoverable and is
/// returned to the caller.
pub fn select_backend<A, S>(
    preference: BackendPreference,
    accelerated: A,
    standard: S,
) -> Result<Box<dyn ForegroundDetector>, Box<dyn std::error::Error>>
where
    A: FnOnce() -> Result<Box<dyn ForegroundDetector>, BackendUnavailable>,
    S: FnOnce() -> Result<Box<dyn ForegroundDetector>, Box<dyn std::error::Error>>,
{
    match preference {
        BackendPreference::Auto => match accelerated() {
            Ok(detector) => {
                log::info!("Using {} background subtraction", detector.backend());
                return Ok(detector);
            }
            Err(e) => log::warn!("{e}, falling back to CPU"),
        },
        BackendPreference::StandardOnly => {
            log::info!("Accelerated backend disabled by configuration");
        }
    }

    let detector = standard()?;
    log::info!("Using {} background subtraction", detector.backend());
    Ok(detector)
}
