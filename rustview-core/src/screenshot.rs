//! Screenshot export
//!
//! Encodes a captured [`Frame`] to the file the user picked. The encoder
//! is chosen by matching the filename extension against the formats we can
//! write; anything unmatched falls back to PNG, appending `.png` to the
//! filename when missing and tagging the file with a generator text chunk.

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};
use thiserror::Error;

use crate::display::Frame;

/// tEXt keyword used to tag fallback PNG screenshots.
pub const GENERATOR_KEYWORD: &str = "Generator App";

/// Value written for [`GENERATOR_KEYWORD`].
const GENERATOR_APP: &str = "RustView";

/// Errors that can occur while exporting a screenshot.
#[derive(Debug, Error)]
pub enum ScreenshotError {
    /// No display surface is attached to the window.
    #[error("no display attached")]
    NoDisplay,

    /// The display surface has no frame to capture yet.
    #[error("display has no frame to capture")]
    NoFrame,

    /// The frame's pixel buffer does not match its dimensions.
    #[error("frame dimensions do not match pixel data")]
    InvalidFrame,

    /// The image encoder failed.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// Writing the output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// The path being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for screenshot operations.
pub type ScreenshotResult<T> = Result<T, ScreenshotError>;

/// Writes `frame` to `path`, choosing the encoder from the extension.
///
/// Returns the path actually written, which differs from `path` only in
/// the PNG-fallback case where `.png` was appended.
pub fn save_screenshot(frame: &Frame, path: &Path) -> ScreenshotResult<PathBuf> {
    let image = RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or(ScreenshotError::InvalidFrame)?;

    if let Some(format) = writable_format(path) {
        tracing::debug!(?format, path = %path.display(), "saving screenshot");
        encode(&image, path, format)?;
        return Ok(path.to_path_buf());
    }

    tracing::debug!(
        path = %path.display(),
        "unknown screenshot extension, falling back to png"
    );
    let mut target = path.to_path_buf();
    if !has_png_extension(&target) {
        let mut name = target
            .file_name()
            .map_or_else(|| OsStr::new("Screenshot").to_os_string(), OsStr::to_os_string);
        name.push(".png");
        target.set_file_name(name);
    }
    write_tagged_png(&image, &target)?;
    Ok(target)
}

/// The writable encoder matching the file's extension, if any.
fn writable_format(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?;
    let format = ImageFormat::from_extension(ext)?;
    format.writing_enabled().then_some(format)
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

fn encode(image: &RgbaImage, path: &Path, format: ImageFormat) -> ScreenshotResult<()> {
    let result = if format == ImageFormat::Jpeg {
        // The JPEG encoder rejects alpha channels.
        DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format)
    } else {
        image.save_with_format(path, format)
    };
    result.map_err(|err| match err {
        image::ImageError::IoError(source) => ScreenshotError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => ScreenshotError::Encode(other.to_string()),
    })
}

/// Encodes a PNG with the generator tEXt chunk.
///
/// Goes through the `png` crate directly; the `image` facade cannot emit
/// ancillary chunks.
fn write_tagged_png(image: &RgbaImage, path: &Path) -> ScreenshotResult<()> {
    let file = File::create(path).map_err(|source| ScreenshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder
        .add_text_chunk(GENERATOR_KEYWORD.to_string(), GENERATOR_APP.to_string())
        .map_err(|err| ScreenshotError::Encode(err.to_string()))?;
    let mut writer = encoder
        .write_header()
        .map_err(|err| ScreenshotError::Encode(err.to_string()))?;
    writer
        .write_image_data(image.as_raw())
        .map_err(|err| ScreenshotError::Encode(err.to_string()))?;
    writer
        .finish()
        .map_err(|err| ScreenshotError::Encode(err.to_string()))?;
    Ok(())
}
