//! Configuration options for file intake

use crate::media::ImageKind;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Upload ceiling advertised on the landing page ("up to 10MB")
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Configuration for the intake controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Image kinds accepted for preview
    pub accepted: Vec<ImageKind>,

    /// Largest file accepted, in bytes
    pub max_bytes: u64,

    /// Enforce the type allow-list and size ceiling before decoding.
    ///
    /// With validation off, any file is handed to the decoder and only decode
    /// failures are reported.
    pub validate: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accepted: ImageKind::iter().collect(),
            max_bytes: DEFAULT_MAX_BYTES,
            validate: true,
        }
    }
}

impl IntakeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size ceiling
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Replace the accepted image kinds
    pub fn with_accepted<I: IntoIterator<Item = ImageKind>>(mut self, kinds: I) -> Self {
        self.accepted = kinds.into_iter().collect();
        self
    }

    /// Enable or disable type and size enforcement
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn accepts(&self, kind: ImageKind) -> bool {
        self.accepted.contains(&kind)
    }

    /// Accepted MIME types joined for display, e.g. in error messages
    pub fn accepted_mime_types(&self) -> String {
        self.accepted
            .iter()
            .map(ImageKind::mime_type)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Value for the `accept` attribute of a file input
    pub fn accept_attribute(&self) -> String {
        self.accepted
            .iter()
            .flat_map(|kind| {
                std::iter::once(kind.mime_type().to_string())
                    .chain(kind.extensions().iter().map(|ext| format!(".{}", ext)))
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
