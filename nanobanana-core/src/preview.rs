//! Turning selected files into displayable previews

use crate::{
    error::{IntakeError, Result},
    media::{ImageKind, SelectedFile},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Displayable form of a selected file
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Name the file was selected under
    pub file_name: String,

    /// Kind detected from the file content
    pub kind: ImageKind,

    /// Pixel width
    pub width: u32,

    /// Pixel height
    pub height: u32,

    /// Size of the original file in bytes
    pub byte_len: u64,

    /// `data:<mime>;base64,...` URI suitable for an `<img src>`
    pub data_uri: String,
}

impl Preview {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Decode the data URI back into pixels
    pub fn decode_image(&self) -> Result<DynamicImage> {
        let (kind, bytes) = parse_data_uri(&self.data_uri)?;
        Ok(image::load_from_memory_with_format(
            &bytes,
            kind.image_format(),
        )?)
    }
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("file_name", &self.file_name)
            .field("kind", &self.kind)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("byte_len", &self.byte_len)
            .field("data_uri_len", &self.data_uri.len())
            .finish()
    }
}

/// Something that can turn a file into a preview.
///
/// Decoding is CPU bound and runs on a blocking worker, so implementations are
/// synchronous.
pub trait PreviewDecoder: Send + Sync + 'static {
    fn decode(&self, file: &SelectedFile) -> Result<Preview>;
}

impl<D: PreviewDecoder> PreviewDecoder for Arc<D> {
    fn decode(&self, file: &SelectedFile) -> Result<Preview> {
        (**self).decode(file)
    }
}

/// Decoder producing base64 data URIs, after checking that the content really
/// is an image of an accepted kind
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriDecoder;

impl PreviewDecoder for DataUriDecoder {
    fn decode(&self, file: &SelectedFile) -> Result<Preview> {
        decode_preview(file)
    }
}

/// Decode a file into a [`Preview`] on the current thread
pub fn decode_preview(file: &SelectedFile) -> Result<Preview> {
    if file.is_empty() {
        return Err(IntakeError::Decode(format!("{} is empty", file.name())));
    }

    let format = image::guess_format(file.bytes())?;
    let kind = ImageKind::from_image_format(format).ok_or_else(|| {
        IntakeError::Decode(format!("{:?} images cannot be previewed", format))
    })?;

    if file.kind() != Some(kind) {
        warn!(
            "{} was declared as {} but contains {}",
            file.name(),
            file.media_type(),
            kind.mime_type()
        );
    }

    // Full decode so truncated or corrupt files fail here rather than in the view
    let image = image::load_from_memory_with_format(file.bytes(), kind.image_format())?;
    let (width, height) = image.dimensions();
    debug!("Decoded {} ({}x{})", file.name(), width, height);

    Ok(Preview {
        file_name: file.name().to_string(),
        kind,
        width,
        height,
        byte_len: file.len(),
        data_uri: encode_data_uri(kind, file.bytes()),
    })
}

/// Run a decoder on a blocking worker so the caller stays responsive.
///
/// Without a tokio runtime (the browser build) the decode runs inline.
pub async fn decode_off_thread(
    decoder: Arc<dyn PreviewDecoder>,
    file: SelectedFile,
) -> Result<Preview> {
    let Ok(handle) = Handle::try_current() else {
        debug!("No runtime available, decoding {} inline", file.name());
        return decoder.decode(&file);
    };

    handle
        .spawn_blocking(move || decoder.decode(&file))
        .await
        .map_err(|e| IntakeError::Decode(format!("Decode task failed: {}", e)))?
}

pub fn encode_data_uri(kind: ImageKind, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", kind.mime_type(), STANDARD.encode(bytes))
}

/// Split a base64 data URI into its image kind and payload
pub fn parse_data_uri(uri: &str) -> Result<(ImageKind, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| IntakeError::Decode("not a data URI".to_string()))?;
    let (media_type, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| IntakeError::Decode("data URI is not base64 encoded".to_string()))?;
    let kind = ImageKind::from_mime(media_type).ok_or_else(|| {
        IntakeError::Decode(format!("unsupported data URI media type: {}", media_type))
    })?;

    Ok((kind, STANDARD.decode(payload)?))
}
