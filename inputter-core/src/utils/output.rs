//! # Diagnostic Output
//!
//! Badged, optionally colorized diagnostic lines for the prompt loop and
//! the constraint registry. Every diagnostic is a single line of the form
//! `<badge> - <message>`, where the badge is one of `[WARNING]`, `[ERROR]`
//! or `[INFO]`.
//!
//! Formatting is controlled by an [`OutputConfig`] held by the sink, not by
//! process-global state, so two prompters with different configurations can
//! coexist and tests stay deterministic.

use std::io::{self, Write};

use colored::Colorize;

/// Flags controlling prompt decoration and diagnostic verbosity.
///
/// All flags default to `false` (decorate nothing, print everything).
/// - `format_prompt`: render the prompt text in bold.
/// - `silent`: suppress all diagnostics. Prompts are still written.
/// - `disable_colors`: keep badges but strip ANSI escape codes.
/// - `disable_badges`: print only the bare message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub format_prompt: bool,
    pub silent: bool,
    pub disable_colors: bool,
    pub disable_badges: bool,
}

/// Severity badge prefixed to each diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Warning,
    Error,
    Info,
}

impl Badge {
    fn label(self) -> &'static str {
        match self {
            Badge::Warning => "[WARNING]",
            Badge::Error => "[ERROR]",
            Badge::Info => "[INFO]",
        }
    }

    fn paint(self, disable_colors: bool) -> String {
        if disable_colors {
            return self.label().to_string();
        }
        match self {
            Badge::Warning => self.label().yellow().to_string(),
            Badge::Error => self.label().red().to_string(),
            Badge::Info => self.label().cyan().to_string(),
        }
    }
}

/// Destination for prompts and diagnostics.
///
/// Writes to stdout by default; tests inject a capture buffer instead.
/// Write failures are swallowed: diagnostics must never change the value a
/// prompt loop returns.
pub struct OutputSink {
    config: OutputConfig,
    writer: Box<dyn Write>,
}

impl OutputSink {
    /// A sink writing to stdout with the given configuration.
    pub fn stdout(config: OutputConfig) -> Self {
        Self::with_writer(config, Box::new(io::stdout()))
    }

    /// A sink writing to an arbitrary writer (capture buffers in tests).
    pub fn with_writer(config: OutputConfig, writer: Box<dyn Write>) -> Self {
        Self { config, writer }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Replaces the configuration for subsequent writes.
    pub fn set_config(&mut self, config: OutputConfig) {
        self.config = config;
    }

    pub fn warn(&mut self, message: &str) {
        self.emit(Badge::Warning, message);
    }

    pub fn error(&mut self, message: &str) {
        self.emit(Badge::Error, message);
    }

    pub fn info(&mut self, message: &str) {
        self.emit(Badge::Info, message);
    }

    fn emit(&mut self, badge: Badge, message: &str) {
        if self.config.silent {
            return;
        }
        let line = if self.config.disable_badges {
            message.to_string()
        } else {
            format!("{} - {}", badge.paint(self.config.disable_colors), message)
        };
        let _ = writeln!(self.writer, "{}", line);
        let _ = self.writer.flush();
    }

    /// Writes the prompt text without a trailing newline, so the cursor
    /// stays on the prompt line while the user types.
    pub fn prompt(&mut self, text: &str) {
        let rendered = if self.config.format_prompt && !self.config.disable_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        };
        let _ = write!(self.writer, "{}", rendered);
        let _ = self.writer.flush();
    }
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
