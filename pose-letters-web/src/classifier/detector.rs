//! Pose change detection
//!
//! A pose event fires when the best class clears the probability threshold
//! and differs from the last pose that fired. Holding the same pose never
//! re-triggers, however many frames it lasts.

use super::prediction::ClassificationResult;

/// A newly recognized pose
#[derive(Clone, Debug, PartialEq)]
pub struct PoseEvent {
    pub label: String,
    /// Frame index the event fired on
    pub triggered_at: u64,
}

/// Stateless change rule
///
/// Returns the label that should fire, if any, given the label that fired
/// last. Threshold comparison is strict.
pub fn detect_pose_change<'a>(
    result: &'a ClassificationResult,
    previous_label: Option<&str>,
    threshold: f32,
) -> Option<&'a str> {
    let (label, probability) = result.best();

    if probability > threshold && previous_label != Some(label) {
        Some(label)
    } else {
        None
    }
}

/// Remembers the last fired label between frames
pub struct PoseChangeDetector {
    threshold: f32,
    last_detected: Option<String>,
}

impl PoseChangeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last_detected: None,
        }
    }

    /// Feed one frame's result; returns an event when a new pose fires
    pub fn observe(&mut self, result: &ClassificationResult, frame: u64) -> Option<PoseEvent> {
        let label = detect_pose_change(result, self.last_detected.as_deref(), self.threshold)?;
        self.last_detected = Some(label.to_string());

        Some(PoseEvent {
            label: label.to_string(),
            triggered_at: frame,
        })
    }

    /// Last pose that fired
    pub fn last_detected(&self) -> Option<&str> {
        self.last_detected.as_deref()
    }

}

impl Default for PoseChangeDetector {
    fn default() -> Self {
        Self::new(crate::config::PROBABILITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confident_a() -> ClassificationResult {
        ClassificationResult::from_pairs([("A", 0.9), ("Y", 0.05), ("M", 0.03), ("C", 0.02)])
    }

    #[test]
    fn test_fires_on_first_confident_pose() {
        let mut detector = PoseChangeDetector::default();
        let event = detector.observe(&confident_a(), 3);

        assert_eq!(
            event,
            Some(PoseEvent { label: "A".to_string(), triggered_at: 3 })
        );
        assert_eq!(detector.last_detected(), Some("A"));
    }

    #[test]
    fn test_same_pose_never_refires() {
        let mut detector = PoseChangeDetector::default();
        assert!(detector.observe(&confident_a(), 0).is_some());

        for frame in 1..500 {
            assert!(detector.observe(&confident_a(), frame).is_none());
        }
        assert_eq!(detector.last_detected(), Some("A"));
    }

    #[test]
    fn test_below_threshold_does_not_fire() {
        let mut detector = PoseChangeDetector::default();
        let unsure = ClassificationResult::from_pairs([("A", 0.5), ("Y", 0.3), ("M", 0.1), ("C", 0.1)]);

        assert!(detector.observe(&unsure, 0).is_none());
        assert_eq!(detector.last_detected(), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        let at_threshold = ClassificationResult::from_pairs([("A", 0.7), ("Y", 0.3)]);
        assert_eq!(detect_pose_change(&at_threshold, None, 0.7), None);

        let above = ClassificationResult::from_pairs([("A", 0.71), ("Y", 0.29)]);
        assert_eq!(detect_pose_change(&above, None, 0.7), Some("A"));
    }

    #[test]
    fn test_low_confidence_frames_keep_last_pose() {
        let mut detector = PoseChangeDetector::default();
        detector.observe(&confident_a(), 0);

        let unsure_y = ClassificationResult::from_pairs([("A", 0.2), ("Y", 0.6), ("M", 0.1), ("C", 0.1)]);
        assert!(detector.observe(&unsure_y, 1).is_none());
        assert_eq!(detector.last_detected(), Some("A"));

        // Returning to A after an unsure frame is not a change
        assert!(detector.observe(&confident_a(), 2).is_none());
    }

    #[test]
    fn test_alternating_poses_fire_each_change() {
        let mut detector = PoseChangeDetector::default();
        let confident_y = ClassificationResult::from_pairs([("A", 0.05), ("Y", 0.95)]);

        let fired: Vec<String> = [confident_a(), confident_y.clone(), confident_y, confident_a()]
            .iter()
            .enumerate()
            .filter_map(|(frame, result)| detector.observe(result, frame as u64))
            .map(|event| event.label)
            .collect();

        assert_eq!(fired, vec!["A", "Y", "A"]);
    }

    #[test]
    fn test_empty_result_never_fires() {
        let mut detector = PoseChangeDetector::new(0.0);
        assert!(detector.observe(&ClassificationResult::default(), 0).is_none());
    }
}
