//! Image processing utilities.
//!
//! # Modules
//!
//! - [`codec`]: decoding, encoding, atomic output
//! - [`color`]: hex colors and tolerance matching
//! - [`convert`]: raster format conversion
//! - [`margin`]: transparent padding
//! - [`background`]: row-wise background trimming
//! - [`recolor`]: alpha-driven flatten / gradient recoloring
//! - [`svg`]: SVG viewport squaring

pub mod background;
pub mod codec;
pub mod color;
pub mod convert;
pub mod margin;
pub mod recolor;
pub mod svg;
