//! NanoBanana Core Library
//!
//! Client-side image intake for the NanoBanana landing page: validation of
//! selected files, decoding into displayable previews, and the state machine
//! the upload widget renders from. Also carries the page's static copy.

pub mod config;
pub mod content;
pub mod error;
pub mod intake;
pub mod media;
pub mod page;
pub mod preview;

pub use config::{IntakeConfig, DEFAULT_MAX_BYTES};
pub use error::{IntakeError, Result};
pub use intake::{validate_size, Completion, IntakeController, IntakeState, Phase, RequestId};
pub use media::{format_file_size, ImageKind, SelectedFile};
pub use page::{FaqAccordion, MenuState};
pub use preview::{DataUriDecoder, Preview, PreviewDecoder};
use tracing::info;

/// High-level preview function: load a file from disk and run it through a
/// fresh controller
pub async fn preview_image_file<P: AsRef<std::path::Path>>(
    path: P,
    config: Option<IntakeConfig>,
) -> Result<Preview> {
    let config = config.unwrap_or_default();
    let controller = IntakeController::new(config);

    info!("Loading image file: {:?}", path.as_ref());
    let file = SelectedFile::from_path(path).await?;

    controller.select_file(file).await?;

    controller
        .snapshot()
        .preview()
        .cloned()
        .ok_or_else(|| IntakeError::Decode("no preview was produced".to_string()))
}
