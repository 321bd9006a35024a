use std::path::Path;

use image::RgbaImage;

use crate::debug;
use crate::error::ToolError;
use crate::image::codec;
use crate::image::recolor::rule::{Coverage, Position, RecolorRule};

/// Recolor an image file pixel by pixel and write PNG output.
///
/// Returns the number of pixels whose color changed.
pub fn recolor_file(
    input: &Path,
    output: &Path,
    rule: &RecolorRule,
    threshold: u8,
) -> Result<u64, ToolError> {
    let mut img = codec::decode_rgba(input)?;
    let changed = recolor_image(&mut img, rule, threshold);
    debug!("recolor"; "{} of {} pixels changed",
        changed, img.width() as u64 * img.height() as u64);

    codec::save_png(img, output)?;
    Ok(changed)
}

/// Classify every pixel by `threshold` and rewrite it with `rule`.
pub fn recolor_image(img: &mut RgbaImage, rule: &RecolorRule, threshold: u8) -> u64 {
    let (width, height) = img.dimensions();
    let mut changed = 0;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let coverage = Coverage::classify(*pixel, threshold);
        let at = Position { x, y, width, height };
        let recolored = rule.apply(*pixel, coverage, at);
        if recolored != *pixel {
            *pixel = recolored;
            changed += 1;
        }
    }

    changed
}
