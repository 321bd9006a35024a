//! Logging utilities with colored output.
//!
//! This module provides:
//! - `debug!` macro for output only shown with `--verbose`
//! - [`success`] / [`error`] for the final one-line report of a run
//!
//! Colors go through `if_supports_color`, so `--color` overrides apply.
//!
//! # Example
//!
//! ```ignore
//! debug!("codec"; "decoded {}x{}", width, height);
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Debug Macro
// ============================================================================

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, Stream::Stdout);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Report a finished run (✓ prefix, green).
pub fn success(message: &str) {
    let mut stdout = stdout().lock();
    let symbol = "✓".if_supports_color(Stream::Stdout, |s| s.green());
    writeln!(stdout, "{} {symbol} {message}", colorize_prefix("done", Stream::Stdout)).ok();
    stdout.flush().ok();
}

/// Report a failed run on stderr (✗ prefix, red) with optional detail.
pub fn error(summary: &str, detail: &str) {
    let mut stderr = stderr().lock();
    let prefix = colorize_prefix("error", Stream::Stderr);
    let symbol = "✗".if_supports_color(Stream::Stderr, |s| s.red());
    if detail.is_empty() {
        writeln!(stderr, "{prefix} {symbol} {summary}").ok();
    } else {
        writeln!(stderr, "{prefix} {symbol} {summary}\n{detail}").ok();
    }
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, stream: Stream) -> String {
    let style = match module.to_ascii_lowercase().as_str() {
        "svg" => Style::new().bright_blue().bold(),
        "done" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    let prefix = format!("[{module}]");
    prefix.if_supports_color(stream, |p| p.style(style)).to_string()
}

// ============================================================================
// Tests
// ============================================================================
