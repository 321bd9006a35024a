//! Trim background margins row by row.
//!
//! Each scanline keeps the span between its outermost non-background pixels
//! and turns everything outside that span fully transparent. Background
//! gaps inside the span are kept, so only the outer margins disappear.

mod process;
mod span;

pub use process::{DEFAULT_TOLERANCE, TrimOptions, TrimStats, trim_background};
