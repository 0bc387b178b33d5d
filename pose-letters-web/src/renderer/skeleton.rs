//! Skeleton overlay - draws confident keypoints and the bones between them

use super::surface::DrawSurface;

// ============================================================================
// KEYPOINT NAMES (PoseNet body parts used by the skeleton)
// ============================================================================

pub const LEFT_SHOULDER: &str = "leftShoulder";
pub const RIGHT_SHOULDER: &str = "rightShoulder";
pub const LEFT_ELBOW: &str = "leftElbow";
pub const RIGHT_ELBOW: &str = "rightElbow";
pub const LEFT_WRIST: &str = "leftWrist";
pub const RIGHT_WRIST: &str = "rightWrist";
pub const LEFT_HIP: &str = "leftHip";
pub const RIGHT_HIP: &str = "rightHip";
pub const LEFT_KNEE: &str = "leftKnee";
pub const RIGHT_KNEE: &str = "rightKnee";
pub const LEFT_ANKLE: &str = "leftAnkle";
pub const RIGHT_ANKLE: &str = "rightAnkle";

/// Bone connections (pairs of part names)
pub const SKELETON: [(&str, &str); 12] = [
    (LEFT_HIP, LEFT_SHOULDER),
    (LEFT_ELBOW, LEFT_SHOULDER),
    (LEFT_ELBOW, LEFT_WRIST),
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (RIGHT_HIP, RIGHT_SHOULDER),
    (RIGHT_ELBOW, RIGHT_SHOULDER),
    (RIGHT_ELBOW, RIGHT_WRIST),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_HIP, RIGHT_HIP),
];

/// Colors for the overlay
mod colors {
    use crate::effects::Rgb;

    pub const KEYPOINT: Rgb = Rgb::new(0, 255, 0);
    pub const BONE: Rgb = Rgb::new(0, 255, 0);
}

const KEYPOINT_RADIUS: f32 = 4.0;
const BONE_WIDTH: f32 = 2.0;

// ============================================================================
// POSE DATA STRUCTURE
// ============================================================================

/// A single detected body part (canvas pixel coordinates)
#[derive(Clone, Debug, PartialEq)]
pub struct Keypoint {
    pub part: String,
    pub score: f32,
    pub position: (f32, f32),
}

impl Keypoint {
    pub fn new(part: impl Into<String>, score: f32, position: (f32, f32)) -> Self {
        Self {
            part: part.into(),
            score,
            position,
        }
    }

    /// Build from decoded model fields; `None` if any is missing
    pub fn from_fields(part: Option<String>, score: Option<f64>, x: Option<f64>, y: Option<f64>) -> Option<Self> {
        Some(Self::new(part?, score? as f32, (x? as f32, y? as f32)))
    }
}

/// Keypoints of one estimated pose
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    pub keypoints: Vec<Keypoint>,
}

impl Pose {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints }
    }

    pub fn keypoint(&self, part: &str) -> Option<&Keypoint> {
        self.keypoints.iter().find(|kp| kp.part == part)
    }

    /// Keypoints scoring at least `min_confidence`
    pub fn confident_keypoints(&self, min_confidence: f32) -> impl Iterator<Item = &Keypoint> {
        self.keypoints.iter().filter(move |kp| kp.score >= min_confidence)
    }

    /// Bones whose two ends both score at least `min_confidence`
    pub fn confident_bones(&self, min_confidence: f32) -> Vec<(&Keypoint, &Keypoint)> {
        SKELETON
            .iter()
            .filter_map(|(a, b)| {
                let start = self.keypoint(a)?;
                let end = self.keypoint(b)?;
                if start.score >= min_confidence && end.score >= min_confidence {
                    Some((start, end))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Draw keypoint dots, then the bones between them
pub fn draw_pose(pose: &Pose, min_confidence: f32, surface: &mut impl DrawSurface) {
    for keypoint in pose.confident_keypoints(min_confidence) {
        surface.fill_circle(keypoint.position, KEYPOINT_RADIUS, colors::KEYPOINT);
    }

    for (start, end) in pose.confident_bones(min_confidence) {
        surface.stroke_line(start.position, end.position, BONE_WIDTH, colors::BONE);
    }
}
