use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::SceneId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SceneError {
    #[error("scene text cannot be empty")]
    EmptyText,

    #[error("scene speaker cannot be empty")]
    EmptySpeaker,

    #[error("media reference cannot be empty")]
    EmptyMedia,
}

/// Opaque reference to an image or audio asset (usually a URL or asset path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    /// # Errors
    ///
    /// Returns `SceneError::EmptyMedia` for blank references.
    pub fn new(raw: impl Into<String>) -> Result<Self, SceneError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SceneError::EmptyMedia);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One step of a scripted sequence: an image, a line of text and who says it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    id: SceneId,
    media: MediaRef,
    text: String,
    speaker: String,
}

impl Scene {
    /// Creates a validated scene.
    ///
    /// # Errors
    ///
    /// Returns `SceneError` if the text or speaker is blank.
    pub fn new(
        id: SceneId,
        media: MediaRef,
        text: impl Into<String>,
        speaker: impl Into<String>,
    ) -> Result<Self, SceneError> {
        let text = text.into();
        let speaker = speaker.into();
        if text.trim().is_empty() {
            return Err(SceneError::EmptyText);
        }
        if speaker.trim().is_empty() {
            return Err(SceneError::EmptySpeaker);
        }
        Ok(Self {
            id,
            media,
            text,
            speaker,
        })
    }

    #[must_use]
    pub fn id(&self) -> SceneId {
        self.id
    }

    #[must_use]
    pub fn media(&self) -> &MediaRef {
        &self.media
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn speaker(&self) -> &str {
        &self.speaker
    }
}
