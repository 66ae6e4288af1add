use std::collections::HashMap;
use std::time::Instant;

/// Observer for capture-loop events.
///
/// Keeps the loop free of output concerns: the CLI plugs in a logger that
/// reports a summary at shutdown, tests plug in one that drops everything.
pub trait PipelineLogger {
    /// Called once per fully processed (presented) frame.
    fn frame_processed(&mut self, index: usize);

    /// Duration of one named stage for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Point-in-time per-frame value, e.g. contour or box count.
    fn metric(&mut self, name: &str, value: f64);

    fn info(&mut self, message: &str);

    /// End-of-run report. Default: nothing.
    fn summary(&self) {}
}

pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn frame_processed(&mut self, _index: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Running count, sum and maximum of one timing or metric series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aggregate {
    pub count: usize,
    pub sum: f64,
    pub max: f64,
}

impl Aggregate {
    fn record(&mut self, value: f64) {
        self.max = if self.count == 0 { value } else { self.max.max(value) };
        self.count += 1;
        self.sum += value;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Aggregates per-stage timings and metrics and logs a summary at the end.
///
/// Memory stays constant over an unbounded stream: one [`Aggregate`] per
/// named series. Progress is a heartbeat every `heartbeat_frames` frames
/// at `debug` level.
pub struct SummaryPipelineLogger {
    heartbeat_frames: usize,
    frames: usize,
    timings: HashMap<String, Aggregate>,
    metrics: HashMap<String, Aggregate>,
    started: Instant,
}

impl SummaryPipelineLogger {
    pub fn new(heartbeat_frames: usize) -> Self {
        Self {
            heartbeat_frames: heartbeat_frames.max(1),
            frames: 0,
            timings: HashMap::new(),
            metrics: HashMap::new(),
            started: Instant::now(),
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn timing_stats(&self, stage: &str) -> Option<Aggregate> {
        self.timings.get(stage).copied()
    }

    pub fn metric_stats(&self, name: &str) -> Option<Aggregate> {
        self.metrics.get(name).copied()
    }

    /// Number of named series held, independent of how many frames ran.
    pub fn series_count(&self) -> usize {
        self.timings.len() + self.metrics.len()
    }

    /// Formatted report, or `None` when no frame was processed.
    pub fn summary_string(&self) -> Option<String> {
        if self.frames == 0 {
            return None;
        }

        let elapsed_s = self.started.elapsed().as_secs_f64();
        let mut lines = vec![format!(
            "Capture summary: {} frames in {:.1}s",
            self.frames, elapsed_s
        )];

        let mut stages: Vec<_> = self.timings.iter().collect();
        stages.sort_by(|a, b| a.0.cmp(b.0));
        for (stage, agg) in stages {
            lines.push(format!(
                "  {stage:<8} avg {:6.2}ms  max {:6.2}ms",
                agg.mean(),
                agg.max
            ));
        }

        let mut names: Vec<_> = self.metrics.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));
        for (name, agg) in names {
            lines.push(format!(
                "  {name:<8} avg {:.1} per frame, {:.0} total",
                agg.mean(),
                agg.sum
            ));
        }

        if elapsed_s > 0.0 {
            lines.push(format!(
                "  Throughput: {:.1} fps",
                self.frames as f64 / elapsed_s
            ));
        }

        Some(lines.join("\n"))
    }
}

impl Default for SummaryPipelineLogger {
    fn default() -> Self {
        Self::new(300)
    }
}

impl PipelineLogger for SummaryPipelineLogger {
    fn frame_processed(&mut self, index: usize) {
        self.frames += 1;
        if self.frames % self.heartbeat_frames == 0 {
            log::debug!("Processed {} frames (latest index {index})", self.frames);
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        record_into(&mut self.timings, stage, duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        record_into(&mut self.metrics, name, value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}

/// Updates an existing series in place; only a new name allocates a key.
fn record_into(series: &mut HashMap<String, Aggregate>, name: &str, value: f64) {
    match series.get_mut(name) {
        Some(agg) => agg.record(value),
        None => {
            let mut agg = Aggregate::default();
            agg.record(value);
            series.insert(name.to_string(), agg);
        }
    }
}
