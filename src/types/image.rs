//! Image-generation request types.

use serde::{Deserialize, Serialize};

/// A caller-supplied reference image, already base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImage {
    pub base64: String,
    /// Defaults to `image/png` when the caller leaves it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ReferenceImage {
    pub fn new<S: Into<String>>(base64: S) -> Self {
        Self {
            base64: base64.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type<S: Into<String>, M: Into<String>>(base64: S, mime_type: M) -> Self {
        Self {
            base64: base64.into(),
            mime_type: Some(mime_type.into()),
        }
    }
}

/// Supported output aspect ratios.
///
/// Communicated to the model as a prose sentence in the prompt, not as an
/// API parameter, so the set is fixed by what the prompt template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Wide16x9,
    #[serde(rename = "9:16")]
    Tall9x16,
    #[serde(rename = "4:3")]
    Landscape4x3,
    #[serde(rename = "3:4")]
    Portrait3x4,
}

impl AspectRatio {
    /// Parse the `"16:9"`-style tag. Unrecognized values fall back to square.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "16:9" => Self::Wide16x9,
            "9:16" => Self::Tall9x16,
            "4:3" => Self::Landscape4x3,
            "3:4" => Self::Portrait3x4,
            _ => Self::Square,
        }
    }

    /// Prose description embedded into the generation prompt.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Square => "square format",
            Self::Wide16x9 => "wide landscape format (16:9)",
            Self::Tall9x16 => "tall portrait format (9:16)",
            Self::Landscape4x3 => "standard landscape format (4:3)",
            Self::Portrait3x4 => "standard portrait format (3:4)",
        }
    }
}

/// Input contract for the image-generation variant.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    /// At most [`crate::image::MAX_REFERENCE_IMAGES`] entries.
    pub images: Vec<ReferenceImage>,
    pub api_key: String,
}

impl ImageRequest {
    pub fn new<S: Into<String>, K: Into<String>>(prompt: S, api_key: K) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio: AspectRatio::default(),
            images: Vec::new(),
            api_key: api_key.into(),
        }
    }

    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    pub fn with_images(mut self, images: Vec<ReferenceImage>) -> Self {
        self.images = images;
        self
    }
}
