//! Session configuration - every tunable constant in one place

/// Teachable Machine export holding `model.json` and `metadata.json`
pub const DEFAULT_MODEL_URL: &str = "https://teachablemachine.withgoogle.com/models/lTFKiqbhQ/";

/// Best class must score strictly above this to fire a pose event
pub const PROBABILITY_THRESHOLD: f32 = 0.7;

/// Letters spawned for every new pose
pub const LETTERS_PER_POSE: usize = 5;

/// Side of the square webcam frame, canvas and letter domain (pixels)
pub const DOMAIN_SIZE: f32 = 400.0;

/// Keypoints below this score are left out of the skeleton overlay
pub const MIN_PART_CONFIDENCE: f32 = 0.5;

/// Runtime configuration for a [`crate::session::Session`]
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub model_url: String,
    pub probability_threshold: f32,
    pub letters_per_pose: usize,
    pub domain_size: f32,
    pub min_part_confidence: f32,
    /// Mirror the webcam horizontally
    pub flip_webcam: bool,
    /// Log the best prediction to the console every frame
    pub log_predictions: bool,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            model_url: DEFAULT_MODEL_URL.to_string(),
            probability_threshold: PROBABILITY_THRESHOLD,
            letters_per_pose: LETTERS_PER_POSE,
            domain_size: DOMAIN_SIZE,
            min_part_confidence: MIN_PART_CONFIDENCE,
            flip_webcam: true,
            log_predictions: true,
        }
    }

    pub fn with_model_url(mut self, url: impl Into<String>) -> Self {
        self.model_url = url.into();
        self
    }

    pub fn with_log_predictions(mut self, enabled: bool) -> Self {
        self.log_predictions = enabled;
        self
    }

    /// URL of the model topology descriptor
    pub fn model_json_url(&self) -> String {
        format!("{}model.json", self.base_url())
    }

    /// URL of the class metadata descriptor
    pub fn metadata_json_url(&self) -> String {
        format!("{}metadata.json", self.base_url())
    }

    /// Canvas and webcam side length in whole pixels
    pub fn frame_size_px(&self) -> u32 {
        self.domain_size.round() as u32
    }

    fn base_url(&self) -> String {
        if self.model_url.ends_with('/') {
            self.model_url.clone()
        } else {
            format!("{}/", self.model_url)
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.probability_threshold, 0.7);
        assert_eq!(config.letters_per_pose, 5);
        assert_eq!(config.frame_size_px(), 400);
        assert!(config.flip_webcam);
    }

    #[test]
    fn test_asset_urls() {
        let config = SessionConfig::default();
        assert_eq!(
            config.model_json_url(),
            "https://teachablemachine.withgoogle.com/models/lTFKiqbhQ/model.json"
        );

        let config = config.with_model_url("http://localhost:8080/my-model");
        assert_eq!(config.metadata_json_url(), "http://localhost:8080/my-model/metadata.json");
    }
}
