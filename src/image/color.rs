//! Color samples: hex parsing and per-channel tolerance matching.

use image::Rgba;

/// Opaque white, the default backdrop and fill color.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fully transparent black, written wherever a pixel is cleared.
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional).
///
/// Six-digit colors are opaque.
pub fn parse_hex_color(hex: &str) -> Option<Rgba<u8>> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let a = if hex.len() == 8 { channel(6)? } else { 255 };
    Some(Rgba([channel(0)?, channel(2)?, channel(4)?, a]))
}

/// clap value parser for color flags.
pub fn parse_color_arg(s: &str) -> Result<Rgba<u8>, String> {
    parse_hex_color(s).ok_or_else(|| format!("`{s}` is not a #rrggbb or #rrggbbaa color"))
}

/// Per-channel match against a reference color.
///
/// A channel `v` matches reference `t` when `v` lies in
/// `[t - tolerance, t + tolerance]`, with both bounds clamped to `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatch {
    lo: [u8; 4],
    hi: [u8; 4],
}

impl ColorMatch {
    pub fn new(reference: Rgba<u8>, tolerance: u8) -> Self {
        let Rgba(t) = reference;
        Self {
            lo: t.map(|c| c.saturating_sub(tolerance)),
            hi: t.map(|c| c.saturating_add(tolerance)),
        }
    }

    /// All four channels within tolerance.
    #[inline]
    pub fn matches(&self, pixel: &[u8]) -> bool {
        pixel
            .iter()
            .zip(self.lo.iter().zip(self.hi.iter()))
            .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }
}
