use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::capture::domain::frame_source::FrameSource;
use crate::detection::domain::foreground_detector::ForegroundDetector;
use crate::detection::domain::region_extractor::RegionExtractor;
use crate::presentation::domain::presenter::Presenter;

use super::capture_loop::{run_until_draining, FrameStages, LoopConfig, LoopReport, LoopState};
use super::pipeline_logger::PipelineLogger;

/// Runs the capture, detect, annotate and display loop over an opened source.
///
/// The source and the display are released on every exit path, including
/// when a stage fails mid-run.
pub struct MotionDetectionUseCase {
    source: Box<dyn FrameSource>,
    detector: Box<dyn ForegroundDetector>,
    extractor: Box<dyn RegionExtractor>,
    annotator: Box<dyn FrameAnnotator>,
    presenter: Box<dyn Presenter>,
    config: LoopConfig,
    logger: Box<dyn PipelineLogger>,
    state: LoopState,
    started: bool,
}

impl MotionDetectionUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn ForegroundDetector>,
        extractor: Box<dyn RegionExtractor>,
        annotator: Box<dyn FrameAnnotator>,
        presenter: Box<dyn Presenter>,
        config: LoopConfig,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            source,
            detector,
            extractor,
            annotator,
            presenter,
            config,
            logger,
            state: LoopState::Running,
            started: false,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn execute(&mut self) -> Result<LoopReport, Box<dyn std::error::Error>> {
        if self.started {
            return Err("Capture loop already executed".into());
        }
        self.started = true;

        let backend = self.detector.backend();
        self.logger.info(&format!(
            "Detecting motion with {backend} backend (min area {}, key wait {}ms)",
            self.config.min_area,
            self.config.key_wait.as_millis()
        ));

        let outcome = {
            let mut stages = FrameStages {
                detector: self.detector.as_mut(),
                extractor: self.extractor.as_ref(),
                annotator: self.annotator.as_ref(),
                presenter: self.presenter.as_mut(),
                logger: self.logger.as_mut(),
            };
            let mut frames = self.source.frames();
            run_until_draining(&mut frames, &mut stages, &self.config)
        };

        self.source.close();
        self.presenter.close();
        self.logger.summary();

        let (stop_reason, frames_processed, boxes_drawn) = outcome?;
        self.state = LoopState::Stopped(stop_reason);
        log::info!("Capture stopped: {stop_reason:?} after {frames_processed} frames");

        Ok(LoopReport {
            backend,
            frames_processed,
            boxes_drawn,
            stop_reason,
        })
    }
}
