//! Page elements outside the canvas - label list and chorus audio

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlAudioElement};

use super::tm_pose::js_error_message;
use crate::error::SetupError;

/// One `div` per class showing `label: probability`
pub struct LabelList {
    rows: Vec<Element>,
}

impl LabelList {
    /// Append `count` empty rows to the container
    pub fn attach(document: &Document, container_id: &str, count: usize) -> Result<Self, SetupError> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| SetupError::MissingElement(container_id.to_string()))?;

        let mut rows = Vec::with_capacity(count);
        for _ in 0..count {
            let row = document
                .create_element("div")
                .map_err(|e| SetupError::Dom(js_error_message(&e)))?;
            container
                .append_child(&row)
                .map_err(|e| SetupError::Dom(js_error_message(&e)))?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Rows beyond the number of lines are left as they were
    pub fn update(&self, lines: &[String]) {
        for (row, line) in self.rows.iter().zip(lines) {
            row.set_text_content(Some(line));
        }
    }
}

/// Start the chorus track
///
/// A missing element or a rejected `play()` (autoplay policy) only warns.
pub fn start_audio(document: &Document, audio_id: &str) {
    let audio = match document
        .get_element_by_id(audio_id)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
    {
        Some(audio) => audio,
        None => {
            console_warn!("No audio element '{}', playing without music", audio_id);
            return;
        }
    };

    match audio.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                console_warn!("Audio playback blocked: {}", js_error_message(&e));
            }
        }),
        Err(e) => console_warn!("Audio playback failed: {}", js_error_message(&e)),
    }
}
