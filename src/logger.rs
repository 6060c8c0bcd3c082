//! Logging utilities with colored module prefixes.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only active with `--verbose`
//!
//! `error` and `warning` prefixes are written to stderr, everything else to
//! stdout.
//!
//! # Example
//!
//! ```ignore
//! log!("css"; "concatenated {} files", count);
//! log!("warning"; "HTML file not found at {}", path.display());
//! ```

use owo_colors::{OwoColorize, Style};
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
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

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

/// Where a module's messages go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn for_module(module_lower: &str) -> Self {
        match module_lower {
            "error" | "warning" => Self::Stderr,
            _ => Self::Stdout,
        }
    }

    /// The stream owo-colors checks for color support.
    const fn color_stream(self) -> owo_colors::Stream {
        match self {
            Self::Stdout => owo_colors::Stream::Stdout,
            Self::Stderr => owo_colors::Stream::Stderr,
        }
    }
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let stream = Stream::for_module(&module_lower);
    let prefix = colorize_prefix(module, &module_lower, stream);

    // Write errors are ignored: a closed pipe must not abort a build.
    match stream {
        Stream::Stdout => {
            let mut out = stdout().lock();
            writeln!(out, "{prefix} {message}").ok();
            out.flush().ok();
        }
        Stream::Stderr => {
            let mut err = stderr().lock();
            writeln!(err, "{prefix} {message}").ok();
            err.flush().ok();
        }
    }
}

/// Apply color to a module prefix based on module type
///
/// Honors `owo_colors::set_override` and terminal detection for `stream`.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "css" => Style::new().bright_blue(),
        "js" => Style::new().bright_yellow(),
        "pd" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        "warning" => Style::new().yellow(),
        _ => Style::new().bright_cyan(),
    }
    .bold();
    prefix
        .if_supports_color(stream.color_stream(), |p| p.style(style))
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================
