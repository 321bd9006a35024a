use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::debug;
use crate::error::ToolError;
use crate::image::background::span::foreground_span;
use crate::image::codec;
use crate::image::color::{CLEAR, ColorMatch, WHITE};

/// Default per-channel tolerance around the background color.
pub const DEFAULT_TOLERANCE: u8 = 89;

/// Background reference for a trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimOptions {
    pub background: Rgba<u8>,
    pub tolerance: u8,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            background: WHITE,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// What a trim cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimStats {
    /// Rows without any foreground, cleared entirely.
    pub rows_cleared: u32,
    /// Pixels made transparent, over all rows.
    pub pixels_cleared: u64,
}

/// Trim the background margins of an image file and write PNG output.
pub fn trim_background(
    input: &Path,
    output: &Path,
    options: &TrimOptions,
) -> Result<TrimStats, ToolError> {
    let mut img = codec::decode_rgba(input)?;
    let stats = trim_rows(&mut img, options);
    debug!("trim"; "{} rows cleared, {} pixels cleared", stats.rows_cleared, stats.pixels_cleared);

    codec::save_png(img, output)?;
    Ok(stats)
}

/// Clear everything left of the first and right of the last foreground
/// pixel on each row. Background pixels between foreground pixels stay.
pub fn trim_rows(img: &mut RgbaImage, options: &TrimOptions) -> TrimStats {
    let background = ColorMatch::new(options.background, options.tolerance);
    let width = img.width() as usize;
    let mut stats = TrimStats::default();
    if width == 0 {
        return stats;
    }

    for row in img.chunks_exact_mut(width * 4) {
        let (head, tail) = match foreground_span(row, &background) {
            Some(span) => (span.first, width - 1 - span.last),
            None => {
                stats.rows_cleared += 1;
                (width, 0)
            }
        };

        row[..head * 4].chunks_exact_mut(4).for_each(clear);
        row[(width - tail) * 4..].chunks_exact_mut(4).for_each(clear);
        stats.pixels_cleared += (head + tail) as u64;
    }

    stats
}

#[inline]
fn clear(pixel: &mut [u8]) {
    pixel.copy_from_slice(&CLEAR.0);
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    const W: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const FG: Rgba<u8> = Rgba([10, 20, 30, 255]);

    fn image_from_rows(rows: &[&[Rgba<u8>]]) -> RgbaImage {
        let width = rows[0].len() as u32;
        RgbaImage::from_fn(width, rows.len() as u32, |x, y| rows[y as usize][x as usize])
    }

    #[test]
    fn clears_all_background_row() {
        let mut img = image_from_rows(&[&[W, W, W, W]]);
        let stats = trim_rows(&mut img, &TrimOptions::default());

        assert!(img.pixels().all(|p| p[3] == 0));
        assert_eq!(stats, TrimStats { rows_cleared: 1, pixels_cleared: 4 });
    }

    #[test]
    fn keeps_span_including_inner_gaps() {
        let source = image_from_rows(&[&[W, W, FG, W, W, FG, W]]);
        let mut img = source.clone();
        let stats = trim_rows(&mut img, &TrimOptions::default());

        for x in [0, 1, 6] {
            assert_eq!(img.get_pixel(x, 0)[3], 0, "x={x}");
        }
        for x in 2..=5 {
            assert_eq!(img.get_pixel(x, 0), source.get_pixel(x, 0), "x={x}");
        }
        // The white gap between the two foreground pixels survives
        assert_eq!(*img.get_pixel(3, 0), W);
        assert_eq!(stats.pixels_cleared, 3);
        assert_eq!(stats.rows_cleared, 0);
    }

    #[test]
    fn rows_are_trimmed_independently() {
        let source = image_from_rows(&[
            &[FG, W, W, W],
            &[W, W, W, W],
            &[W, W, W, FG],
            &[FG, W, W, FG],
        ]);
        let mut img = source.clone();
        trim_rows(&mut img, &TrimOptions::default());

        assert_eq!(*img.get_pixel(0, 0), FG);
        assert!((1..4).all(|x| img.get_pixel(x, 0)[3] == 0));
        assert!((0..4).all(|x| img.get_pixel(x, 1)[3] == 0));
        assert!((0..3).all(|x| img.get_pixel(x, 2)[3] == 0));
        assert_eq!(*img.get_pixel(3, 2), FG);
        assert!((0..4).all(|x| img.get_pixel(x, 3) == source.get_pixel(x, 3)));
    }

    #[test]
    fn cleared_pixels_are_zeroed() {
        let mut img = image_from_rows(&[&[W, FG]]);
        trim_rows(&mut img, &TrimOptions::default());
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn tolerance_bounds_background() {
        let near = Rgba([170, 250, 200, 255]);
        let far = Rgba([165, 250, 200, 255]);
        let mut img = image_from_rows(&[&[near, far, near]]);
        trim_rows(&mut img, &TrimOptions::default());

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(*img.get_pixel(1, 0), far);
        assert_eq!(img.get_pixel(2, 0)[3], 0);
    }

    #[test]
    fn custom_background_and_tolerance() {
        let black = Rgba([0, 0, 0, 255]);
        let options = TrimOptions {
            background: black,
            tolerance: 0,
        };
        let mut img = image_from_rows(&[&[black, W, Rgba([1, 0, 0, 255]), black]]);
        trim_rows(&mut img, &options);

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(*img.get_pixel(1, 0), W);
        assert_eq!(*img.get_pixel(2, 0), Rgba([1, 0, 0, 255]));
        assert_eq!(img.get_pixel(3, 0)[3], 0);
    }

    #[test]
    fn second_pass_with_opaque_background_is_noop() {
        // Cleared pixels have alpha 0, far outside the tolerance of an opaque
        // reference, so they read as foreground on a second pass.
        let mut once = image_from_rows(&[&[W, FG, W, FG, W], &[W, W, W, W, W]]);
        trim_rows(&mut once, &TrimOptions::default());

        let mut twice = once.clone();
        let stats = trim_rows(&mut twice, &TrimOptions::default());
        assert_eq!(twice, once);
        assert_eq!(stats, TrimStats::default());
    }

    #[test]
    fn trims_file_to_png() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        image_from_rows(&[&[W, FG, W], &[W, W, W]]).save(&input).unwrap();

        let stats = trim_background(&input, &output, &TrimOptions::default()).unwrap();
        assert_eq!(stats, TrimStats { rows_cleared: 1, pixels_cleared: 5 });

        let out = image::open(&output).unwrap().to_rgba8();
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(*out.get_pixel(1, 0), FG);
        assert_eq!(out.pixels().filter(|p| p[3] == 0).count(), 5);
    }

    #[test]
    fn missing_input_leaves_no_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out.png");

        let err = trim_background(&dir.path().join("nope.png"), &output, &TrimOptions::default())
            .unwrap_err();
        assert!(matches!(err, ToolError::FileNotReadable(..)));
        assert!(!output.exists());
    }

    #[test]
    fn handles_empty_image() {
        let mut img = RgbaImage::new(0, 0);
        assert_eq!(trim_rows(&mut img, &TrimOptions::default()), TrimStats::default());
    }

    #[test]
    fn handles_single_column_image() {
        let mut img = image_from_rows(&[&[W], &[FG], &[W]]);
        trim_rows(&mut img, &TrimOptions::default());

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(*img.get_pixel(0, 1), FG);
        assert_eq!(img.get_pixel(0, 2)[3], 0);
    }
}
