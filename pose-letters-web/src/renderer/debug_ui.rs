//! Performance metrics for debug overlay
//!
//! Tracks FPS, frame time and model latency for real-time display.

/// Weight of the newest sample in the moving averages
const SMOOTHING: f32 = 0.1;

/// Frame gaps outside this window (ms) are ignored: first frame or a
/// backgrounded tab
const MIN_FRAME_MS: f32 = 1.0;
const MAX_FRAME_MS: f32 = 200.0;

/// Smoothed frame timing
#[derive(Clone, Debug, Default)]
pub struct FrameMetrics {
    fps: f32,
    frame_time_ms: f32,
    inference_ms: f32,
    inference_samples: u64,
    last_timestamp_ms: Option<f64>,
    frames: u64,
    skipped_frames: u64,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a frame at host timestamp `timestamp_ms`
    pub fn record_frame(&mut self, timestamp_ms: f64) {
        self.frames += 1;

        if let Some(last) = self.last_timestamp_ms.replace(timestamp_ms) {
            let frame_time_ms = (timestamp_ms - last) as f32;
            if !(MIN_FRAME_MS..=MAX_FRAME_MS).contains(&frame_time_ms) {
                return;
            }

            // Exponential moving average for smooth display
            let fps = 1000.0 / frame_time_ms;
            if self.frame_time_ms == 0.0 {
                self.fps = fps;
                self.frame_time_ms = frame_time_ms;
            } else {
                self.fps = self.fps * (1.0 - SMOOTHING) + fps * SMOOTHING;
                self.frame_time_ms = self.frame_time_ms * (1.0 - SMOOTHING) + frame_time_ms * SMOOTHING;
            }
        }
    }

    /// Record pose estimation + classification time
    pub fn record_inference(&mut self, ms: f32) {
        self.inference_ms = match self.inference_samples {
            0 => ms,
            _ => self.inference_ms * (1.0 - SMOOTHING) + ms * SMOOTHING,
        };
        self.inference_samples += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped_frames += 1;
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time_ms
    }

    pub fn inference_ms(&self) -> f32 {
        self.inference_ms
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }

    /// Formatted overlay text
    pub fn overlay_text(&self, last_pose: Option<&str>, letters: usize) -> String {
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\n\
             Model: {:.0}ms | Skipped: {}\n\
             Pose: {} | Letters: {}",
            self.fps,
            self.frame_time_ms,
            self.inference_ms,
            self.skipped_frames,
            last_pose.unwrap_or("-"),
            letters,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_gap_sets_fps() {
        let mut metrics = FrameMetrics::new();
        metrics.record_frame(1000.0);
        metrics.record_frame(1020.0);

        assert_eq!(metrics.frames(), 2);
        assert!((metrics.fps() - 50.0).abs() < 0.01);
        assert!((metrics.frame_time_ms() - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_ignores_backgrounded_gaps() {
        let mut metrics = FrameMetrics::new();
        metrics.record_frame(0.0);
        metrics.record_frame(16.0);
        metrics.record_frame(5000.0);

        assert!((metrics.frame_time_ms() - 16.0).abs() < 0.01);
        assert_eq!(metrics.frames(), 3);
    }

    #[test]
    fn test_first_inference_sample_seeds_average() {
        let mut metrics = FrameMetrics::new();
        metrics.record_inference(40.0);
        assert!((metrics.inference_ms() - 40.0).abs() < 0.01);

        metrics.record_inference(50.0);
        assert!((metrics.inference_ms() - 41.0).abs() < 0.01);
    }

    #[test]
    fn test_overlay_text() {
        let mut metrics = FrameMetrics::new();
        metrics.record_skipped();
        let text = metrics.overlay_text(Some("A"), 5);

        assert!(text.contains("Skipped: 1"));
        assert!(text.contains("Pose: A | Letters: 5"));
    }
}
