//! Decode input files into pixel buffers and encode buffers into output files.
//!
//! Output is encoded fully in memory first and then written through a
//! temporary sibling file, so a failed run never leaves a partial output.

use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};
use tempfile::NamedTempFile;

use crate::debug;
use crate::error::ToolError;

/// JPEG quality used when none is given.
pub const DEFAULT_QUALITY: u8 = 90;

/// Encodable output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    #[value(alias = "jpg")]
    Jpeg,
    Webp,
}

impl OutputFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match ImageFormat::from_path(path).ok()? {
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::WebP => Some(Self::Webp),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        }
    }
}

/// Read and decode an image, sniffing the format from its content.
pub fn decode(path: &Path) -> Result<DynamicImage, ToolError> {
    let bytes = fs::read(path).map_err(|e| ToolError::FileNotReadable(path.to_path_buf(), e))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| ToolError::DecodeFailed(path.to_path_buf(), e))?;
    debug!("codec"; "decoded {} ({}x{}, {:?})",
        path.display(), img.width(), img.height(), img.color());
    Ok(img)
}

/// Decode straight into an 8-bit RGBA buffer.
pub fn decode_rgba(path: &Path) -> Result<RgbaImage, ToolError> {
    decode(path).map(DynamicImage::into_rgba8)
}

/// Encode into memory. `quality` only affects JPEG.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn encode(img: &DynamicImage, format: OutputFormat, quality: u8) -> Result<Vec<u8>, ToolError> {
    let mut buf = Vec::new();
    let result = match format {
        OutputFormat::Png => img.write_with_encoder(PngEncoder::new(&mut buf)),
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality)),
        OutputFormat::Webp => DynamicImage::ImageRgba8(img.to_rgba8())
            .write_with_encoder(WebPEncoder::new_lossless(&mut buf)),
    };
    result.map_err(|e| ToolError::EncodeFailed(format.name(), e))?;
    Ok(buf)
}

/// Encode as PNG and write to `path`.
pub fn save_png(img: RgbaImage, path: &Path) -> Result<(), ToolError> {
    let bytes = encode(&DynamicImage::ImageRgba8(img), OutputFormat::Png, DEFAULT_QUALITY)?;
    write_output(path, &bytes)
}

/// Write bytes to `path`, replacing it only once every byte is on disk.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), ToolError> {
    let not_writable = |e| ToolError::FileNotWritable(path.to_path_buf(), e);

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(not_writable)?;

    let mut file = NamedTempFile::new_in(parent).map_err(not_writable)?;
    file.write_all(bytes).map_err(not_writable)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(not_writable)?;
    }
    file.persist(path).map_err(|e| not_writable(e.error))?;

    debug!("codec"; "wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
