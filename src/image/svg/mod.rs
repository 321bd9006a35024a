//! SVG viewport squaring.
//!
//! Reads the root element's `width` and `height`, and re-emits the document
//! with `width`, `height` and `viewBox` set to the smaller of the two. The
//! root's inner markup passes through untouched.

mod dimension;
mod square;

pub use square::square_svg;
