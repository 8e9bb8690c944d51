//! Error types for the nanobanana-core library

use thiserror::Error;

/// Reasons a file can be turned away by the intake controller
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The drop event carried no files. Never shown to the user.
    #[error("Drop contained no files")]
    EmptyDrop,

    #[error("Unsupported file type: {media_type} (accepted: {accepted})")]
    UnsupportedType { media_type: String, accepted: String },

    #[error("File too large: {size} (max: {max})")]
    Oversize { size: String, max: String },

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

impl IntakeError {
    /// Whether the rendering layer should show an inline message for this error
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, IntakeError::EmptyDrop)
    }
}

impl From<image::ImageError> for IntakeError {
    fn from(err: image::ImageError) -> Self {
        IntakeError::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for IntakeError {
    fn from(err: base64::DecodeError) -> Self {
        IntakeError::Decode(err.to_string())
    }
}

impl PartialEq for IntakeError {
    fn eq(&self, other: &Self) -> bool {
        match self {
            IntakeError::EmptyDrop => matches!(other, IntakeError::EmptyDrop),
            IntakeError::UnsupportedType { media_type, .. } => {
                matches!(other, IntakeError::UnsupportedType { media_type: o, .. } if media_type == o)
            }
            IntakeError::Oversize { size, max } => {
                matches!(other, IntakeError::Oversize { size: s, max: m } if size == s && max == m)
            }
            IntakeError::Decode(msg) => {
                matches!(other, IntakeError::Decode(o) if msg == o)
            }
            IntakeError::Io(err) => {
                matches!(other, IntakeError::Io(e) if err.to_string() == e.to_string())
            }
        }
    }
}
