//! Accepted image kinds and the user's selected file

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString};
use tokio::fs;
use tracing::debug;

/// Media type used when nothing better can be guessed from a file name
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Image kinds the preview widget knows how to show
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageKind {
    Png,
    #[strum(to_string = "jpeg", serialize = "jpg")]
    Jpeg,
    Webp,
    Gif,
}

impl ImageKind {
    /// Canonical MIME type
    pub const fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Webp => "image/webp",
            ImageKind::Gif => "image/gif",
        }
    }

    /// File extensions commonly used for this kind, lowercase, without the dot
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            ImageKind::Png => &["png"],
            ImageKind::Jpeg => &["jpg", "jpeg"],
            ImageKind::Webp => &["webp"],
            ImageKind::Gif => &["gif"],
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            ImageKind::Png => "Portable Network Graphics",
            ImageKind::Jpeg => "JPEG photo",
            ImageKind::Webp => "WebP image",
            ImageKind::Gif => "Graphics Interchange Format",
        }
    }

    /// Parse a declared media type such as `image/png` or `IMAGE/JPEG; q=0.9`
    pub fn from_mime(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/png" => Some(ImageKind::Png),
            // image/jpg is not registered but browsers and phones still send it
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageKind::Jpeg),
            "image/webp" => Some(ImageKind::Webp),
            "image/gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        extension.parse().ok()
    }

    /// Format handed to the `image` crate when decoding
    pub const fn image_format(&self) -> image::ImageFormat {
        match self {
            ImageKind::Png => image::ImageFormat::Png,
            ImageKind::Jpeg => image::ImageFormat::Jpeg,
            ImageKind::Webp => image::ImageFormat::WebP,
            ImageKind::Gif => image::ImageFormat::Gif,
        }
    }

    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(ImageKind::Png),
            image::ImageFormat::Jpeg => Some(ImageKind::Jpeg),
            image::ImageFormat::WebP => Some(ImageKind::Webp),
            image::ImageFormat::Gif => Some(ImageKind::Gif),
            _ => None,
        }
    }
}

/// A file chosen by the user through the picker or a drop.
///
/// The bytes are shared, so cloning a `SelectedFile` to hand it to a decode
/// worker does not copy the payload.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl SelectedFile {
    /// Create a file with an explicitly declared media type
    pub fn new<N, M, B>(name: N, media_type: M, bytes: B) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        B: Into<Arc<[u8]>>,
    {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Create a file whose media type is guessed from its name.
    ///
    /// Drop targets and file engines only hand out names and bytes, so this is
    /// how the UI builds its files.
    pub fn from_named_bytes<N, B>(name: N, bytes: B) -> Self
    where
        N: Into<String>,
        B: Into<Arc<[u8]>>,
    {
        let name = name.into();
        let media_type = mime_guess::from_path(&name)
            .first_raw()
            .unwrap_or(OCTET_STREAM)
            .to_string();
        debug!("Guessed media type {} for {}", media_type, name);
        Self::new(name, media_type, bytes)
    }

    /// Read a file from disk
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_named_bytes(name, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The media type the file was declared with, not necessarily its content
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Accepted kind matching the declared media type, if any
    pub fn kind(&self) -> Option<ImageKind> {
        ImageKind::from_mime(&self.media_type)
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Format file size in human readable format
pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
