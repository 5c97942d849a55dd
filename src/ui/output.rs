//! Output abstraction layer
//!
//! This module provides a backend-agnostic interface for status output,
//! used by the non-interactive commands. The terminal browser keeps its own
//! message list and renders it in the status bar.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use storefront::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.info("20 of 20 product(s)");
/// output.warning("Unknown category 'toys'");
/// output.error("Failed to load products");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only errors are printed.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StdoutWriter {
    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_writer_creation() {
        assert!(!StdoutWriter::default().is_quiet());
        assert!(StdoutWriter::new(true).is_quiet());
    }

    #[test]
    fn test_message_level_equality() {
        assert_eq!(MessageLevel::Warning, MessageLevel::Warning);
        assert_ne!(MessageLevel::Error, MessageLevel::Success);
    }
}
