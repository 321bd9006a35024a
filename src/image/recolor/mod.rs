//! Alpha-driven recoloring.
//!
//! Every pixel is classified as transparent or opaque by an alpha threshold,
//! then rewritten by a [`RecolorRule`]:
//! - [`RecolorRule::Flatten`] fills transparent pixels with a solid color
//! - [`RecolorRule::Gradient`] paints opaque pixels with a diagonal gradient

mod process;
mod rule;

pub use process::recolor_file;
pub use rule::{DEFAULT_ALPHA_THRESHOLD, GRADIENT_END, GRADIENT_START, Gradient, RecolorRule};
