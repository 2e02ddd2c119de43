//! Global output configuration and result delivery.
//!
//! ## Routing
//!
//! - Results go to stdout (for piping) or to the clipboard
//! - Status and failure notifications go to stderr
//! - Quiet mode suppresses success notifications, never failures
//! - Colors can be disabled via flag or NO_COLOR environment variable

use anyhow::Result;
use std::io::{self, Write};
use std::sync::OnceLock;

use crate::input::{ClipboardAccess, InputOrigin};

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Initialize the global output configuration.
///
/// Call once at startup with the CLI flags. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a message to stderr, even in quiet mode.
#[macro_export]
macro_rules! alert {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

/// How a result reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Replace the selection: the result is written where the input came from.
    Paste,
    /// Put the result on the clipboard.
    Copy,
}

impl Delivery {
    /// Selections are pasted over, clipboard input is copied back.
    pub const fn for_origin(origin: InputOrigin, force_copy: bool) -> Self {
        match origin {
            _ if force_copy => Self::Copy,
            InputOrigin::Selection => Self::Paste,
            InputOrigin::Clipboard => Self::Copy,
        }
    }
}

/// Destination for command results.
pub trait OutputSink {
    fn paste(&mut self, text: &str) -> Result<()>;

    fn copy(&mut self, text: &str) -> Result<()>;

    fn deliver(&mut self, text: &str, delivery: Delivery) -> Result<()> {
        match delivery {
            Delivery::Paste => self.paste(text),
            Delivery::Copy => self.copy(text),
        }
    }
}

/// Pastes to stdout and copies to a clipboard.
pub struct TerminalOutput<'a, C> {
    clipboard: &'a mut C,
}

impl<'a, C: ClipboardAccess> TerminalOutput<'a, C> {
    pub const fn new(clipboard: &'a mut C) -> Self {
        Self { clipboard }
    }
}

impl<C: ClipboardAccess> OutputSink for TerminalOutput<'_, C> {
    fn paste(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        self.clipboard.write_text(text)
    }
}
