//! Asset embedding and loading utilities.

use overlay_fit::Overlay;
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use thiserror::Error;

/// Embeds the default overlay (manifest + image) into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Key of the embedded default manifest.
pub const DEFAULT_MANIFEST: &str = "overlay.ron";

/// Errors that can occur when loading an overlay manifest.
#[derive(Error, Debug)]
pub enum OverlayLoadError {
    #[error("{0} not found in embedded assets")]
    EmbeddedMissing(&'static str),
    #[error("invalid UTF-8 in embedded manifest: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to read manifest '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] ron::de::SpannedError),
}

/// Errors that can occur when loading and decoding the overlay image.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),
    #[error("failed to read image '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
}

/// Where the overlay image comes from: the embedded bundle for the default
/// overlay, the manifest's directory for overlays loaded from disk.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Embedded(String),
    Disk(PathBuf),
}

/// Decoded image data ready for texture creation.
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// State of the overlay image being loaded in the background.
pub enum AssetLoadState {
    /// Image is being decoded in a background thread.
    Loading(mpsc::Receiver<Result<DecodedImage, ImageLoadError>>),
    /// Image has been decoded and is ready for texture creation.
    Ready(DecodedImage),
    /// Loading failed; stores the error message (already shown via toast).
    Error(String),
}

/// Loads an overlay manifest from disk, or the embedded default when no path
/// is given.
pub fn load_overlay(path: Option<&Path>) -> Result<Overlay, OverlayLoadError> {
    let source = match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|source| OverlayLoadError::Read {
                path: path.display().to_string(),
                source,
            })?
        }
        None => {
            let file = Assets::get(DEFAULT_MANIFEST)
                .ok_or(OverlayLoadError::EmbeddedMissing(DEFAULT_MANIFEST))?;
            std::str::from_utf8(&file.data)?.to_owned()
        }
    };
    Ok(ron::from_str(&source)?)
}

/// Loads and decodes the overlay image from its source.
pub fn load_and_decode_image(source: &ImageSource) -> Result<DecodedImage, ImageLoadError> {
    let (bytes, path) = match source {
        ImageSource::Embedded(key) => {
            let file =
                Assets::get(key).ok_or_else(|| ImageLoadError::AssetNotFound(key.clone()))?;
            (file.data.into_owned(), key.clone())
        }
        ImageSource::Disk(path) => {
            let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Read {
                path: path.display().to_string(),
                source,
            })?;
            (bytes, path.display().to_string())
        }
    };

    let img = image::load_from_memory(&bytes)
        .map_err(|source| ImageLoadError::Decode { path, source })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_manifest_parses() {
        let overlay = load_overlay(None).unwrap();
        assert_eq!(overlay.design_size, Some([400.0, 300.0]));
        assert!(overlay.regions.iter().any(|region| region.name == "body"));
    }

    #[test]
    fn embedded_default_image_decodes() {
        let overlay = load_overlay(None).unwrap();
        let decoded =
            load_and_decode_image(&ImageSource::Embedded(overlay.image_path)).unwrap();
        assert_eq!((decoded.width, decoded.height), (400, 300));
        assert_eq!(decoded.pixels.len(), 400 * 300 * 4);
    }

    #[test]
    fn missing_disk_manifest_reports_the_path() {
        let err = load_overlay(Some(Path::new("/nonexistent/overlay.ron"))).unwrap_err();
        assert!(matches!(err, OverlayLoadError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/overlay.ron"));
    }
}
