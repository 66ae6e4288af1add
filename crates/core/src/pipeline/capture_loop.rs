use std::time::{Duration, Instant};

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::detection::domain::detection_error::DetectionError;
use crate::detection::domain::detector_backend::DetectorBackend;
use crate::detection::domain::foreground_detector::ForegroundDetector;
use crate::detection::domain::region_extractor::RegionExtractor;
use crate::presentation::domain::presenter::Presenter;
use crate::shared::constants::{DEFAULT_KEY_WAIT_MS, DEFAULT_MIN_AREA, ESCAPE_KEY};
use crate::shared::frame::Frame;

use super::pipeline_logger::PipelineLogger;
use super::region_filter::filter_regions;

/// Tunables of one capture run.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopConfig {
    /// Contours must enclose strictly more than this many pixels.
    pub min_area: f64,
    /// Upper bound on the per-iteration key poll.
    pub key_wait: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_AREA,
            key_wait: Duration::from_millis(DEFAULT_KEY_WAIT_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The device yielded an empty frame or the stream ended.
    SourceExhausted,
    /// Escape was pressed.
    UserCancelled,
}

/// Loop states. `Draining` releases resources; `Stopped` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Draining(StopReason),
    Stopped(StopReason),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoopReport {
    pub backend: DetectorBackend,
    pub frames_processed: usize,
    pub boxes_drawn: usize,
    pub stop_reason: StopReason,
}

/// Borrowed per-frame stages, so the frame iterator can hold the source
/// mutably while the stages run.
pub struct FrameStages<'a> {
    pub detector: &'a mut dyn ForegroundDetector,
    pub extractor: &'a dyn RegionExtractor,
    pub annotator: &'a dyn FrameAnnotator,
    pub presenter: &'a mut dyn Presenter,
    pub logger: &'a mut dyn PipelineLogger,
}

/// Counts accumulated while `Running`.
#[derive(Default)]
struct Tally {
    frames: usize,
    boxes: usize,
}

/// Drives the loop from `Running` until it starts draining.
///
/// Returns the reason to drain; releasing the source and the display is
/// the caller's job, which lets it run on the error path as well.
pub fn run_until_draining(
    frames: &mut dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>>,
    stages: &mut FrameStages<'_>,
    config: &LoopConfig,
) -> Result<(StopReason, usize, usize), Box<dyn std::error::Error>> {
    let mut tally = Tally::default();

    loop {
        let state = match frames.next() {
            None => LoopState::Draining(StopReason::SourceExhausted),
            Some(frame) => {
                let frame = frame?;
                if frame.is_empty() {
                    LoopState::Draining(StopReason::SourceExhausted)
                } else {
                    process_frame(frame, stages, config, &mut tally)?
                }
            }
        };

        if let LoopState::Draining(reason) = state {
            log::debug!("Capture loop draining: {reason:?}");
            return Ok((reason, tally.frames, tally.boxes));
        }
    }
}

/// One full iteration: detect, extract, filter and annotate, present, poll.
fn process_frame(
    mut frame: Frame,
    stages: &mut FrameStages<'_>,
    config: &LoopConfig,
    tally: &mut Tally,
) -> Result<LoopState, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let mask = stages.detector.apply(&frame)?;
    stages.logger.timing("detect", elapsed_ms(started));
    if !mask.matches_frame(&frame) {
        return Err(DetectionError::MaskSizeMismatch {
            expected_width: frame.width(),
            expected_height: frame.height(),
            actual_width: mask.width(),
            actual_height: mask.height(),
        }
        .into());
    }

    let started = Instant::now();
    let contours = stages.extractor.extract(&mask)?;
    stages.logger.timing("extract", elapsed_ms(started));

    let started = Instant::now();
    let boxes = filter_regions(&contours, config.min_area);
    stages.annotator.annotate(&mut frame, &boxes)?;
    stages.logger.timing("annotate", elapsed_ms(started));

    let started = Instant::now();
    stages.presenter.present(&frame, &mask)?;
    stages.logger.timing("present", elapsed_ms(started));

    stages.logger.metric("contours", contours.len() as f64);
    stages.logger.metric("boxes", boxes.len() as f64);
    stages.logger.frame_processed(frame.index());
    log::trace!(
        "Frame {}: {} contours, {} boxes",
        frame.index(),
        contours.len(),
        boxes.len()
    );
    tally.frames += 1;
    tally.boxes += boxes.len();

    match stages.presenter.poll_key(config.key_wait)? {
        Some(ESCAPE_KEY) => Ok(LoopState::Draining(StopReason::UserCancelled)),
        _ => Ok(LoopState::Running),
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
