//! Pad an image with a transparent border.

use std::path::Path;

use image::{RgbaImage, imageops};

use crate::debug;
use crate::error::ToolError;
use crate::image::codec;
use crate::image::color::CLEAR;

/// Largest padded canvas, in pixels (1 GiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Parse a margin argument. Non-numeric and negative margins are rejected.
pub fn parse_margin(arg: &str) -> Result<u32, ToolError> {
    let value: i64 = arg
        .trim()
        .parse()
        .map_err(|_| ToolError::InvalidDimension(format!("margin `{arg}` is not an integer")))?;
    u32::try_from(value)
        .map_err(|_| ToolError::InvalidDimension(format!("margin {value} is out of range")))
}

/// Pad an image file by `margin` pixels on every side and write PNG output.
pub fn add_margins(input: &Path, output: &Path, margin: u32) -> Result<(), ToolError> {
    let img = codec::decode_rgba(input)?;
    let padded = pad(&img, margin)?;
    debug!("margin"; "{}x{} -> {}x{}", img.width(), img.height(), padded.width(), padded.height());

    codec::save_png(padded, output)
}

/// Copy `img` onto a transparent canvas `2 * margin` larger in each axis.
pub fn pad(img: &RgbaImage, margin: u32) -> Result<RgbaImage, ToolError> {
    let grow = |side: u32, axis: &str| {
        margin
            .checked_mul(2)
            .and_then(|m| side.checked_add(m))
            .ok_or_else(|| {
                ToolError::InvalidDimension(format!("{axis} {side} + 2 * {margin} overflows"))
            })
    };
    let width = grow(img.width(), "width")?;
    let height = grow(img.height(), "height")?;
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_CANVAS_PIXELS {
        return Err(ToolError::InvalidDimension(format!(
            "padded canvas {width}x{height} exceeds {MAX_CANVAS_PIXELS} pixels"
        )));
    }

    let mut canvas = RgbaImage::from_pixel(width, height, CLEAR);
    imageops::replace(&mut canvas, img, i64::from(margin), i64::from(margin));
    Ok(canvas)
}
