//! Per-frame classification output
//!
//! One probability per registered class, kept in the order the model
//! registered them. That order is what breaks ties between equal scores.

use crate::error::FrameError;

/// Label reported when no class scores above zero
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Probability for a single pose class
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub probability: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, probability: f32) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }

    /// Build from decoded model fields; a missing or non-finite field fails
    /// the whole frame
    pub fn from_fields(label: Option<String>, probability: Option<f64>) -> Result<Self, FrameError> {
        let label = label.ok_or(FrameError::MalformedOutput("className"))?;
        let probability = probability
            .filter(|p| p.is_finite())
            .ok_or(FrameError::MalformedOutput("probability"))?;
        Ok(Self::new(label, probability as f32))
    }

    /// Label list line, e.g. `A: 0.90`
    pub fn display_line(&self) -> String {
        format!("{}: {:.2}", self.label, self.probability)
    }
}

/// All class probabilities for one frame, in registration order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassificationResult {
    predictions: Vec<Prediction>,
}

impl ClassificationResult {
    pub fn new(predictions: Vec<Prediction>) -> Self {
        Self { predictions }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f32)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(label, probability)| Prediction::new(label, probability))
                .collect(),
        )
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Highest scoring class as `(label, probability)`
    ///
    /// Scans in registration order and only replaces the current best on a
    /// strictly greater score, so the first registered class wins ties.
    /// Starts from `("Unknown", 0.0)`: an empty result or an all-zero one
    /// reports `Unknown`.
    pub fn best(&self) -> (&str, f32) {
        let mut best_label = UNKNOWN_LABEL;
        let mut best_probability = 0.0;

        for prediction in &self.predictions {
            if prediction.probability > best_probability {
                best_probability = prediction.probability;
                best_label = prediction.label.as_str();
            }
        }

        (best_label, best_probability)
    }

    /// One formatted line per class for the label list
    pub fn display_lines(&self) -> Vec<String> {
        self.predictions.iter().map(Prediction::display_line).collect()
    }
}
