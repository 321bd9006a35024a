use image::Rgba;

/// Pixels with alpha below this are treated as transparent.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 50;

/// Purple, the gradient color at the bottom-left corner.
pub const GRADIENT_START: Rgba<u8> = Rgba([128, 0, 128, 255]);
/// Magenta, the gradient color at the top-right corner.
pub const GRADIENT_END: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Alpha classification of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    Transparent,
    Opaque,
}

impl Coverage {
    #[inline]
    pub fn classify(pixel: Rgba<u8>, threshold: u8) -> Self {
        if pixel[3] < threshold {
            Self::Transparent
        } else {
            Self::Opaque
        }
    }
}

/// Position of a pixel inside its image.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// How a classified pixel is rewritten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecolorRule {
    /// Transparent pixels become `fill`, opaque pixels stay.
    Flatten { fill: Rgba<u8> },
    /// Opaque pixels take the gradient color, transparent pixels stay.
    Gradient(Gradient),
}

impl RecolorRule {
    pub fn apply(&self, pixel: Rgba<u8>, coverage: Coverage, at: Position) -> Rgba<u8> {
        match (self, coverage) {
            (Self::Flatten { fill }, Coverage::Transparent) => *fill,
            (Self::Gradient(gradient), Coverage::Opaque) => gradient.color_at(at),
            _ => pixel,
        }
    }
}

/// Diagonal linear gradient from the bottom-left to the top-right corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Rgba<u8>,
    pub end: Rgba<u8>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            start: GRADIENT_START,
            end: GRADIENT_END,
        }
    }
}

impl Gradient {
    /// Blend factor in `[0, 1]`: 0 at the bottom-left pixel, 1 at the top-right.
    ///
    /// Coordinates are normalized by the last pixel index so both corners
    /// are hit exactly. A one-pixel axis contributes 0 horizontally and 1
    /// vertically.
    pub fn t(at: Position) -> f32 {
        let tx = at.x as f32 / at.width.saturating_sub(1).max(1) as f32;
        let ty = 1.0 - at.y as f32 / at.height.saturating_sub(1).max(1) as f32;
        ((tx + ty) / 2.0).clamp(0.0, 1.0)
    }

    /// Interpolated opaque color; channels are truncated, not rounded.
    pub fn color_at(&self, at: Position) -> Rgba<u8> {
        let t = Self::t(at);
        let lerp = |i: usize| {
            let (s, e) = (self.start[i] as f32, self.end[i] as f32);
            (s + (e - s) * t) as u8
        };
        Rgba([lerp(0), lerp(1), lerp(2), 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: u32, y: u32, width: u32, height: u32) -> Position {
        Position { x, y, width, height }
    }

    #[test]
    fn classify_by_threshold() {
        assert_eq!(Coverage::classify(Rgba([0, 0, 0, 49]), 50), Coverage::Transparent);
        assert_eq!(Coverage::classify(Rgba([0, 0, 0, 50]), 50), Coverage::Opaque);
        assert_eq!(Coverage::classify(Rgba([0, 0, 0, 0]), 0), Coverage::Opaque);
    }

    #[test]
    fn gradient_corners_are_exact() {
        let g = Gradient::default();
        assert_eq!(Gradient::t(at(0, 9, 16, 10)), 0.0);
        assert_eq!(Gradient::t(at(15, 0, 16, 10)), 1.0);
        assert_eq!(g.color_at(at(0, 9, 16, 10)), GRADIENT_START);
        assert_eq!(g.color_at(at(15, 0, 16, 10)), GRADIENT_END);
    }

    #[test]
    fn gradient_midpoint_truncates() {
        let g = Gradient {
            start: Rgba([0, 100, 255, 255]),
            end: Rgba([255, 0, 0, 255]),
        };
        // Top-left: tx = 0, ty = 1, t = 0.5
        assert_eq!(Gradient::t(at(0, 0, 3, 3)), 0.5);
        assert_eq!(g.color_at(at(0, 0, 3, 3)), Rgba([127, 50, 127, 255]));
    }

    #[test]
    fn gradient_degenerate_axes() {
        assert_eq!(Gradient::t(at(0, 0, 1, 1)), 0.5);
        assert_eq!(Gradient::t(at(4, 0, 5, 1)), 1.0);
        assert_eq!(Gradient::t(at(0, 4, 1, 5)), 0.0);
    }

    #[test]
    fn gradient_ignores_start_alpha() {
        let g = Gradient {
            start: Rgba([10, 10, 10, 0]),
            end: Rgba([10, 10, 10, 0]),
        };
        assert_eq!(g.color_at(at(1, 1, 3, 3))[3], 255);
    }

    #[test]
    fn rules_act_on_opposite_classes() {
        let px = Rgba([1, 2, 3, 4]);
        let pos = at(0, 0, 2, 2);
        let flatten = RecolorRule::Flatten { fill: Rgba([255, 255, 255, 255]) };
        let gradient = RecolorRule::Gradient(Gradient::default());

        assert_eq!(flatten.apply(px, Coverage::Transparent, pos), Rgba([255, 255, 255, 255]));
        assert_eq!(flatten.apply(px, Coverage::Opaque, pos), px);
        assert_eq!(gradient.apply(px, Coverage::Transparent, pos), px);
        assert_ne!(gradient.apply(px, Coverage::Opaque, pos), px);
    }
}
