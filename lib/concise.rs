//! Human and concise output formatting.
//!
//! Concise mode is meant for scripts: no colors or glyphs, a `#`-prefixed
//! header line, then tab-separated values. Fields that contain whitespace or
//! quotes are double-quoted.

use colored::Colorize;
use serde::Serialize;

use crate::error::StackResult;
use crate::output::ServiceSummary;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Output formatter that handles both normal and concise modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub concise: bool,
    pub no_header: bool,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Output {
    /// Create a new Output formatter.
    pub fn new(concise: bool, no_header: bool) -> Self {
        Self { concise, no_header }
    }

    /// Print JSON, minified in concise mode and pretty otherwise.
    pub fn json<T: Serialize>(&self, value: &T) -> StackResult<()> {
        let rendered = if self.concise {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        println!("{}", rendered);
        Ok(())
    }

    /// Print a success message (only in normal mode).
    pub fn success(&self, message: &str) {
        if !self.concise {
            println!("  {} {}", "✓".bright_green(), message);
        }
    }

    /// Print a progress message (only in normal mode).
    pub fn progress(&self, message: &str) {
        if !self.concise {
            println!("  {} {}", "→".bright_blue(), message);
        }
    }

    /// Print a warning. Concise mode sends it to stderr without decoration.
    pub fn warn(&self, message: &str) {
        if self.concise {
            eprintln!("warning: {}", message);
        } else {
            println!("  {} {}", "!".bright_yellow().bold(), message);
        }
    }

    /// Print a blank line (only in normal mode).
    pub fn blank(&self) {
        if !self.concise {
            println!();
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Quote a string if it contains spaces, tabs, quotes, or newlines.
pub fn quote(s: &str) -> String {
    if s.contains([' ', '\t', '"', '\n', '\\']) {
        let escaped = s
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n");
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}

/// Format the service catalog for concise output (Header + TSV).
/// Columns: id, image, port, description
pub fn format_service_list(entries: &[ServiceSummary], no_header: bool) -> String {
    let mut lines = Vec::new();
    if !no_header {
        lines.push("#id\timage\tport\tdescription".to_string());
    }
    for e in entries {
        lines.push(format!(
            "{}\t{}\t{}\t{}",
            e.id,
            e.image,
            e.port,
            quote(&e.description)
        ));
    }
    lines.join("\n")
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
