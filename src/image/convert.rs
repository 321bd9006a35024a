//! Raster format conversion without any pixel transform.

use std::path::Path;

use crate::debug;
use crate::error::ToolError;
use crate::image::codec::{self, OutputFormat};

/// Target of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Explicit format; inferred from the output extension when `None`.
    pub format: Option<OutputFormat>,
    /// JPEG quality (1-100).
    pub quality: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            format: None,
            quality: codec::DEFAULT_QUALITY,
        }
    }
}

impl ConvertOptions {
    /// Resolve the output format, falling back to PNG for unknown extensions.
    pub fn resolve(&self, output: &Path) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(output))
            .unwrap_or(OutputFormat::Png)
    }
}

/// Decode `input` and re-encode it into `output`.
pub fn convert_format(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<OutputFormat, ToolError> {
    let format = options.resolve(output);
    let img = codec::decode(input)?;
    let bytes = codec::encode(&img, format, options.quality)?;
    debug!("convert"; "{} -> {} ({} bytes)", input.display(), format.name(), bytes.len());

    codec::write_output(output, &bytes)?;
    Ok(format)
}
