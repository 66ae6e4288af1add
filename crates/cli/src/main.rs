use std::process;
use std::time::Duration;

use clap::Parser;
use env_logger::Env;

use motion_watch_core::annotation::domain::annotation_style::AnnotationStyle;
use motion_watch_core::annotation::infrastructure::opencv_rectangle_annotator::OpenCvRectangleAnnotator;
use motion_watch_core::capture::domain::frame_source::{CaptureError, FrameSource};
use motion_watch_core::capture::infrastructure::opencv_camera_source::OpenCvCameraSource;
use motion_watch_core::detection::domain::backend_selector::BackendPreference;
use motion_watch_core::detection::infrastructure::detector_factory::create_detector;
use motion_watch_core::detection::infrastructure::opencv_contour_extractor::OpenCvContourExtractor;
use motion_watch_core::pipeline::capture_loop::LoopConfig;
use motion_watch_core::pipeline::motion_detection_use_case::MotionDetectionUseCase;
use motion_watch_core::pipeline::pipeline_logger::SummaryPipelineLogger;
use motion_watch_core::presentation::infrastructure::highgui_presenter::HighGuiPresenter;
use motion_watch_core::shared::constants::{
    DEFAULT_BOX_COLOR, DEFAULT_DEVICE_INDEX, DEFAULT_KEY_WAIT_MS, DEFAULT_MIN_AREA,
    DEFAULT_STROKE_THICKNESS,
};

/// Exit status when the capture device cannot be opened.
const EXIT_CAPTURE_UNAVAILABLE: i32 = -1;
const EXIT_FAILURE: i32 = 1;

/// Highlights moving regions in a live camera feed.
#[derive(Parser, Debug)]
#[command(name = "motion-watch")]
struct Cli {
    /// Capture device index.
    #[arg(long, default_value_t = DEFAULT_DEVICE_INDEX)]
    device: i32,

    /// Minimum contour area in pixels; smaller regions are ignored.
    #[arg(long, default_value_t = DEFAULT_MIN_AREA, allow_negative_numbers = true)]
    min_area: f64,

    /// Milliseconds to wait for a key press after each frame.
    #[arg(long, default_value_t = DEFAULT_KEY_WAIT_MS)]
    wait_ms: u64,

    /// Use the CPU background subtractor even when CUDA is available.
    #[arg(long)]
    force_cpu: bool,

    /// Bounding box stroke width in pixels.
    #[arg(long, default_value_t = DEFAULT_STROKE_THICKNESS)]
    thickness: u32,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(exit_code(e.as_ref()));
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut source = OpenCvCameraSource::new();
    source.open(cli.device)?;

    let preference = if cli.force_cpu {
        BackendPreference::StandardOnly
    } else {
        BackendPreference::Auto
    };
    let detector = create_detector(preference)?;

    let annotator = OpenCvRectangleAnnotator::new(AnnotationStyle {
        color: DEFAULT_BOX_COLOR,
        thickness: cli.thickness,
    });
    let config = LoopConfig {
        min_area: cli.min_area,
        key_wait: Duration::from_millis(cli.wait_ms),
    };

    let mut use_case = MotionDetectionUseCase::new(
        Box::new(source),
        detector,
        Box::new(OpenCvContourExtractor),
        Box::new(annotator),
        Box::new(HighGuiPresenter::new()),
        config,
        Box::new(SummaryPipelineLogger::default()),
    );
    let report = use_case.execute()?;
    log::info!(
        "Done: {} frames, {} boxes drawn ({:?}, {} backend)",
        report.frames_processed,
        report.boxes_drawn,
        report.stop_reason,
        report.backend
    );
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.min_area.is_finite() || cli.min_area < 0.0 {
        return Err(format!(
            "Minimum area must be a non-negative number, got {}",
            cli.min_area
        )
        .into());
    }
    if cli.wait_ms == 0 {
        return Err("Key wait must be at least 1 ms".into());
    }
    if cli.thickness == 0 {
        return Err("Stroke thickness must be at least 1 px".into());
    }
    Ok(())
}

fn exit_code(error: &(dyn std::error::Error + 'static)) -> i32 {
    match error.downcast_ref::<CaptureError>() {
        Some(CaptureError::OpenFailed { .. }) => EXIT_CAPTURE_UNAVAILABLE,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_watch_core::detection::domain::detection_error::DetectionError;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["motion-watch"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.device, 0);
        assert_eq!(cli.min_area, 500.0);
        assert_eq!(cli.wait_ms, 30);
        assert_eq!(cli.thickness, 2);
        assert!(!cli.force_cpu);
        assert!(validate(&cli).is_ok());
    }

    #[test]
    fn test_flags_parse() {
        let cli = parse(&[
            "--device", "2", "--min-area", "1200", "--wait-ms", "5", "--force-cpu", "--thickness",
            "3",
        ]);
        assert_eq!(cli.device, 2);
        assert_eq!(cli.min_area, 1200.0);
        assert_eq!(cli.wait_ms, 5);
        assert!(cli.force_cpu);
        assert_eq!(cli.thickness, 3);
    }

    #[test]
    fn test_rejects_negative_area() {
        let cli = parse(&["--min-area", "-1"]);
        let err = validate(&cli).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_zero_area_is_allowed() {
        assert!(validate(&parse(&["--min-area", "0"])).is_ok());
    }

    #[test]
    fn test_rejects_zero_wait() {
        assert!(validate(&parse(&["--wait-ms", "0"])).is_err());
    }

    #[test]
    fn test_rejects_zero_thickness() {
        assert!(validate(&parse(&["--thickness", "0"])).is_err());
    }

    #[test]
    fn test_open_failure_maps_to_minus_one() {
        let err: Box<dyn std::error::Error> = Box::new(CaptureError::OpenFailed { device: 0 });
        assert_eq!(exit_code(err.as_ref()), -1);
    }

    #[test]
    fn test_other_errors_map_to_one() {
        let capture: Box<dyn std::error::Error> = Box::new(CaptureError::NotOpened);
        assert_eq!(exit_code(capture.as_ref()), 1);

        let detection: Box<dyn std::error::Error> =
            Box::new(DetectionError::Library("boom".into()));
        assert_eq!(exit_code(detection.as_ref()), 1);

        let plain: Box<dyn std::error::Error> = "validation".into();
        assert_eq!(exit_code(plain.as_ref()), 1);
    }
}
