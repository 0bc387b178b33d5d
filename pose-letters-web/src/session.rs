//! Session - all per-page state the frame loop mutates
//!
//! Owned by the render loop and touched only from it. Holds the detector's
//! last pose, the live letter swarm, the RNG that seeds new letters and the
//! frame metrics.

use std::cell::Cell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classifier::{ClassificationResult, PoseChangeDetector, PoseEvent};
use crate::config::SessionConfig;
use crate::effects::{ColorTable, LetterSwarm};
use crate::error::{FrameError, SetupError};
use crate::renderer::{draw_pose, DrawSurface, FrameMetrics, Pose};

/// What happened during one processed frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub best_label: String,
    pub best_probability: f32,
    pub event: Option<PoseEvent>,
    /// `label: probability` line per class, registration order
    pub label_lines: Vec<String>,
}

pub struct Session<R: Rng = StdRng> {
    config: SessionConfig,
    colors: ColorTable,
    detector: PoseChangeDetector,
    swarm: LetterSwarm,
    metrics: FrameMetrics,
    rng: R,
    frame: u64,
}

impl Session<StdRng> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        Self {
            detector: PoseChangeDetector::new(config.probability_threshold),
            swarm: LetterSwarm::new(config.letters_per_pose, config.domain_size),
            colors: ColorTable::default(),
            metrics: FrameMetrics::new(),
            rng,
            frame: 0,
            config,
        }
    }

    /// Run detection and draw one frame
    ///
    /// Order: detect (and respawn letters on a new pose), then camera
    /// frame, skeleton overlay, letters.
    pub fn process_frame(
        &mut self,
        result: &ClassificationResult,
        pose: Option<&Pose>,
        surface: &mut impl DrawSurface,
    ) -> FrameReport {
        let (best_label, best_probability) = result.best();
        if self.config.log_predictions {
            console_log!("Best Prediction: {} Probability: {}", best_label, best_probability);
        }

        let event = self.detector.observe(result, self.frame);
        if let Some(event) = &event {
            self.swarm.on_pose_event(&event.label, &self.colors, &mut self.rng);
        }

        surface.draw_camera_frame();
        if let Some(pose) = pose {
            draw_pose(pose, self.config.min_part_confidence, surface);
        }
        self.swarm.draw(surface);

        self.frame += 1;

        FrameReport {
            best_label: best_label.to_string(),
            best_probability,
            event,
            label_lines: result.display_lines(),
        }
    }

    /// Drop a frame whose inference failed; the loop keeps running
    pub fn skip_frame(&mut self, error: &FrameError) {
        self.metrics.record_skipped();
        console_warn!("Skipping frame {}: {}", self.frame, error);
    }

    pub fn last_pose(&self) -> Option<&str> {
        self.detector.last_detected()
    }

    pub fn swarm(&self) -> &LetterSwarm {
        &self.swarm
    }

    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut FrameMetrics {
        &mut self.metrics
    }

    /// Frames processed so far
    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    pub fn debug_overlay_text(&self) -> String {
        self.metrics.overlay_text(self.last_pose(), self.swarm.len())
    }
}

/// Refuses a tick while the previous one is still awaiting the model
#[derive(Debug, Default)]
pub struct FrameGate {
    in_flight: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate; false if a tick is already running
    pub fn try_enter(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    pub fn leave(&mut self) {
        self.in_flight = false;
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
}

/// Claim the page's single render loop
///
/// Fails with [`SetupError::AlreadyStarted`] while another loop holds it.
pub fn claim_start() -> Result<(), SetupError> {
    STARTED.with(|started| {
        if started.replace(true) {
            Err(SetupError::AlreadyStarted)
        } else {
            Ok(())
        }
    })
}

/// Give the claim back after a failed setup so a retry can start
pub fn release_start() {
    STARTED.with(|started| started.set(false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Rgb;
    use crate::renderer::surface::{DrawCall, RecordingSurface};
    use crate::renderer::Keypoint;

    fn session() -> Session<StdRng> {
        let config = SessionConfig::default().with_log_predictions(false);
        Session::with_rng(config, StdRng::seed_from_u64(99))
    }

    fn confident_a() -> ClassificationResult {
        ClassificationResult::from_pairs([("A", 0.9), ("Y", 0.05), ("M", 0.03), ("C", 0.02)])
    }

    #[test]
    fn test_new_pose_spawns_orange_letters() {
        let mut session = session();
        let mut surface = RecordingSurface::default();

        let report = session.process_frame(&confident_a(), None, &mut surface);

        assert_eq!(report.event.map(|e| e.label), Some("A".to_string()));
        assert_eq!(session.swarm().len(), 5);
        assert!(session.swarm().iter().all(|l| l.color() == Rgb::new(255, 140, 0)));
        assert_eq!(surface.texts().len(), 5);
    }

    #[test]
    fn test_repeated_pose_keeps_letters_moving() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        session.process_frame(&confident_a(), None, &mut surface);

        let before: Vec<_> = session.swarm().iter().cloned().collect();
        let report = session.process_frame(&confident_a(), None, &mut surface);

        assert!(report.event.is_none());
        assert_eq!(session.swarm().len(), 5);
        for (old, new) in before.iter().zip(session.swarm().iter()) {
            let mut expected = old.clone();
            expected.update();
            assert_eq!(&expected, new);
        }
    }

    #[test]
    fn test_unsure_frame_leaves_swarm_alone() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let unsure = ClassificationResult::from_pairs([("A", 0.5), ("Y", 0.3), ("M", 0.1), ("C", 0.1)]);

        let report = session.process_frame(&unsure, None, &mut surface);

        assert!(report.event.is_none());
        assert!(session.swarm().is_empty());
        assert_eq!(session.last_pose(), None);
        assert_eq!(report.best_label, "A");
    }

    #[test]
    fn test_unregistered_label_gets_gray() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let z = ClassificationResult::from_pairs([("Z", 0.95), ("A", 0.05)]);

        session.process_frame(&z, None, &mut surface);

        assert!(session.swarm().iter().all(|l| l.color() == Rgb::new(200, 200, 200)));
    }

    #[test]
    fn test_swarm_size_exact_after_every_event() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let poses = ["Y", "M", "C", "A", "Y", "Z"];

        for label in poses {
            let result = ClassificationResult::from_pairs([(label, 0.99)]);
            let report = session.process_frame(&result, None, &mut surface);
            assert!(report.event.is_some());
            assert_eq!(session.swarm().len(), 5);
            assert_eq!(session.swarm().label(), Some(label));
        }
    }

    #[test]
    fn test_draw_order_camera_skeleton_letters() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let pose = Pose::new(vec![
            Keypoint::new("leftShoulder", 0.9, (100.0, 100.0)),
            Keypoint::new("leftElbow", 0.9, (120.0, 150.0)),
        ]);

        session.process_frame(&confident_a(), Some(&pose), &mut surface);

        assert_eq!(surface.calls[0], DrawCall::CameraFrame);
        assert!(matches!(surface.calls[1], DrawCall::Circle { .. }));
        assert!(matches!(surface.calls[2], DrawCall::Circle { .. }));
        assert!(matches!(surface.calls[3], DrawCall::Line { .. }));
        assert!(surface.calls[4..].iter().all(|c| matches!(c, DrawCall::Text { .. })));
        assert_eq!(surface.calls.len(), 9);
    }

    #[test]
    fn test_report_carries_label_lines() {
        let mut session = session();
        let mut surface = RecordingSurface::default();

        let report = session.process_frame(&confident_a(), None, &mut surface);

        assert_eq!(report.label_lines, vec!["A: 0.90", "Y: 0.05", "M: 0.03", "C: 0.02"]);
        assert_eq!(session.frame_index(), 1);
    }

    #[test]
    fn test_event_frame_index() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let unsure = ClassificationResult::from_pairs([("A", 0.5), ("Y", 0.5)]);

        session.process_frame(&unsure, None, &mut surface);
        session.process_frame(&unsure, None, &mut surface);
        let report = session.process_frame(&confident_a(), None, &mut surface);

        assert_eq!(report.event.map(|e| e.triggered_at), Some(2));
    }

    #[test]
    fn test_skipped_frame_keeps_session_state() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        session.process_frame(&confident_a(), None, &mut surface);
        let letters: Vec<_> = session.swarm().iter().cloned().collect();

        session.skip_frame(&FrameError::Estimation("camera busy".to_string()));
        session.skip_frame(&FrameError::MalformedOutput("probability"));

        assert_eq!(session.metrics().skipped_frames(), 2);
        assert_eq!(session.frame_index(), 1);
        assert_eq!(session.last_pose(), Some("A"));
        assert_eq!(session.swarm().iter().cloned().collect::<Vec<_>>(), letters);

        // Next good frame carries on without re-firing
        let report = session.process_frame(&confident_a(), None, &mut surface);
        assert!(report.event.is_none());
        assert_eq!(session.frame_index(), 2);
    }

    #[test]
    fn test_second_start_is_rejected() {
        assert!(claim_start().is_ok());
        assert!(matches!(claim_start(), Err(SetupError::AlreadyStarted)));
        assert!(matches!(claim_start(), Err(SetupError::AlreadyStarted)));
        release_start();
    }

    #[test]
    fn test_failed_setup_can_retry() {
        assert!(claim_start().is_ok());
        release_start();
        assert!(claim_start().is_ok());
        release_start();
    }

    #[test]
    fn test_frame_gate_blocks_overlap() {
        let mut gate = FrameGate::new();
        assert!(gate.try_enter());
        assert!(gate.is_busy());
        assert!(!gate.try_enter());

        gate.leave();
        assert!(gate.try_enter());
    }
}
