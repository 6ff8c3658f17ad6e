//! # Terminal Input Helper
//!
//! This module provides the retry-prompt loop: it repeatedly writes a
//! prompt, reads one line from an injected [`LineSource`], applies a
//! [`Constraint`], and returns the first accepted [`Value`]. Rejected input
//! produces a warning and another prompt cycle, until an optional retry
//! budget runs out.
//!
//! ## Features
//! - Prompts until the input satisfies the configured constraint.
//! - Bounded retries via [`RetryLimit::Max`], or loop forever with
//!   [`RetryLimit::Unlimited`].
//! - Console reads come from a [`LineSource`], so tests can script input.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use inputter_core::utils::{Constraint, OutputConfig, Prompter, RetryLimit};
//!
//! let mut prompter = Prompter::stdin(OutputConfig::default());
//! let age = prompter.ask(
//!     "How old are you? ",
//!     Some(&Constraint::IsIntegerInRange(0, 130)),
//!     RetryLimit::Max(3),
//! );
//!
//! match age {
//!     Ok(value) => println!("You are {}", value),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use std::io;

use crate::utils::constraint::{Constraint, Value};
use crate::utils::error::AskError;
use crate::utils::output::{OutputConfig, OutputSink};
use crate::utils::registry::Registry;

const EXCEEDED_RETRIES: &str = "Too many bad inputs!";

/// The injected console-read capability.
///
/// One call yields one raw line, trailing newline included. Returning
/// `Err` (including on end of input) terminates the surrounding prompt
/// loop instead of spinning on a source that can never produce a line.
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<String>;
}

/// Reads lines from standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }
        Ok(line)
    }
}

/// Reads lines from any buffered reader. Useful for piped input.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: io::BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: io::BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input source exhausted",
            ));
        }
        Ok(line)
    }
}

/// Retry budget for one prompt loop invocation.
///
/// `Unlimited` is its own variant rather than a magic count, so it can
/// never be confused with `Max(0)` (which allows zero attempts and fails
/// immediately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryLimit {
    Unlimited,
    Max(u32),
}

impl RetryLimit {
    fn exhausted(self, attempts: u32) -> bool {
        match self {
            RetryLimit::Unlimited => false,
            RetryLimit::Max(max) => attempts >= max,
        }
    }
}

/// A helper for repeatedly asking the user for input until it passes a
/// [`Constraint`] or the retry budget runs out.
///
/// The prompter owns its [`LineSource`] and [`OutputSink`]; all prompts and
/// diagnostics go through the sink, governed by its [`OutputConfig`].
#[derive(Debug)]
pub struct Prompter<S> {
    source: S,
    output: OutputSink,
}

impl Prompter<StdinSource> {
    /// A prompter over standard input and standard output.
    pub fn stdin(config: OutputConfig) -> Self {
        Self::new(StdinSource, OutputSink::stdout(config))
    }
}

impl<S: LineSource> Prompter<S> {
    pub fn new(source: S, output: OutputSink) -> Self {
        Self { source, output }
    }

    /// Prompts until `constraint` accepts a line or `limit` is exhausted.
    ///
    /// With `constraint == None` the first raw line is returned unvalidated
    /// as [`Value::Str`]. Every returned value was produced by the
    /// constraint itself; the loop never substitutes one of its own.
    ///
    /// Fails with [`AskError::RetriesExhausted`] once `limit` attempts have
    /// been rejected, and with [`AskError::Read`] if the source cannot
    /// yield a line.
    pub fn ask(
        &mut self,
        prompt: &str,
        constraint: Option<&Constraint>,
        limit: RetryLimit,
    ) -> Result<Value, AskError> {
        let mut attempts: u32 = 0;
        loop {
            if limit.exhausted(attempts) {
                self.output.error(EXCEEDED_RETRIES);
                return Err(AskError::RetriesExhausted { attempts });
            }

            self.output.prompt(prompt);
            let line = self.source.read_line()?;
            let raw = strip_newline(&line);

            let Some(constraint) = constraint else {
                return Ok(Value::Str(raw.to_string()));
            };

            match constraint.check(raw) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    self.output.warn(&rejection.to_string());
                    attempts += 1;
                }
            }
        }
    }

    /// [`ask`](Self::ask) with the original defaults: reject empty input,
    /// retry forever.
    pub fn ask_default(&mut self, prompt: &str) -> Result<Value, AskError> {
        self.ask(prompt, Some(&Constraint::NotEmpty), RetryLimit::Unlimited)
    }

    /// Resolves a constraint by name through the built-in [`Registry`]
    /// before prompting. Resolution failures return without reading any
    /// input; `name == None` prompts unvalidated (after a warning).
    pub fn ask_named(
        &mut self,
        prompt: &str,
        name: Option<&str>,
        extra_args: &[&str],
        limit: RetryLimit,
    ) -> Result<Value, AskError> {
        let registry = Registry::builtin();
        let constraint = registry.resolve(name, extra_args, &mut self.output)?;
        self.ask(prompt, constraint.as_ref(), limit)
    }

    pub fn output_mut(&mut self) -> &mut OutputSink {
        &mut self.output
    }
}

/// Strips one trailing newline (`\n` or `\r\n`). Nothing else: leading and
/// interior whitespace is real input.
fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const PROMPT: &str = "Input: ";
    const MAX_TRIES: RetryLimit = RetryLimit::Max(5);

    /// Yields scripted lines and counts how many reads were served.
    /// Once the script is empty, the last line repeats forever.
    struct ScriptSource {
        lines: VecDeque<String>,
        last: String,
        reads: Arc<AtomicUsize>,
    }

    impl ScriptSource {
        fn repeating(line: &str) -> (Self, Arc<AtomicUsize>) {
            Self::script(&[line])
        }

        fn script(lines: &[&str]) -> (Self, Arc<AtomicUsize>) {
            let reads = Arc::new(AtomicUsize::new(0));
            let source = Self {
                lines: lines.iter().map(|l| format!("{}\n", l)).collect(),
                last: format!("{}\n", lines.last().expect("script needs a line")),
                reads: Arc::clone(&reads),
            };
            (source, reads)
        }
    }

    impl LineSource for ScriptSource {
        fn read_line(&mut self) -> io::Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.lines.pop_front().unwrap_or_else(|| self.last.clone()))
        }
    }

    /// A source that is already at end of input.
    struct ClosedSource;

    impl LineSource for ClosedSource {
        fn read_line(&mut self) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"))
        }
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn prompter(
        source: ScriptSource,
        config: OutputConfig,
    ) -> (Prompter<ScriptSource>, Capture) {
        let capture = Capture::default();
        let sink = OutputSink::with_writer(config, Box::new(capture.clone()));
        (Prompter::new(source, sink), capture)
    }

    fn plain_config() -> OutputConfig {
        OutputConfig {
            disable_colors: true,
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_accepts_valid_integer_after_one_read() {
        let (source, reads) = ScriptSource::repeating("2");
        let (mut p, _) = prompter(source, plain_config());
        let value = p.ask(PROMPT, Some(&Constraint::IsInt), MAX_TRIES).unwrap();
        assert_eq!(value, Value::Int(2));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_retries_until_valid_input() {
        let (source, reads) = ScriptSource::script(&["a", "b", "42"]);
        let (mut p, capture) = prompter(source, plain_config());
        let value = p.ask(PROMPT, Some(&Constraint::IsInt), MAX_TRIES).unwrap();
        assert_eq!(value, Value::Int(42));
        assert_eq!(reads.load(Ordering::SeqCst), 3);
        assert_eq!(
            capture.contents().matches("Input is not an integer").count(),
            2
        );
    }

    #[test]
    fn test_max_tries_bounds_reads() {
        let (source, reads) = ScriptSource::repeating("a");
        let (mut p, capture) = prompter(source, plain_config());
        let res = p.ask(PROMPT, Some(&Constraint::IsInt), MAX_TRIES);
        assert!(matches!(res, Err(AskError::RetriesExhausted { attempts: 5 })));
        assert_eq!(reads.load(Ordering::SeqCst), 5);
        assert!(capture.contents().contains("Too many bad inputs!"));
    }

    #[test]
    fn test_zero_budget_fails_without_reading() {
        let (source, reads) = ScriptSource::repeating("42");
        let (mut p, _) = prompter(source, plain_config());
        let res = p.ask(PROMPT, Some(&Constraint::IsInt), RetryLimit::Max(0));
        assert!(matches!(res, Err(AskError::RetriesExhausted { attempts: 0 })));
        assert_eq!(reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_out_of_range_warns_on_every_attempt() {
        let (source, reads) = ScriptSource::repeating("1203469875211");
        let (mut p, capture) = prompter(source, plain_config());
        let res = p.ask(PROMPT, Some(&Constraint::IsIntegerInRange(0, 100)), MAX_TRIES);
        assert!(matches!(res, Err(AskError::RetriesExhausted { .. })));
        assert_eq!(reads.load(Ordering::SeqCst), 5);
        assert_eq!(
            capture
                .contents()
                .matches("Value should be in range 0 - 100")
                .count(),
            5
        );
    }

    #[test]
    fn test_existing_file_accepted_after_one_read() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("test.txt");
        std::fs::write(&file_path, "hello").unwrap();

        let input = file_path.to_str().unwrap();
        let (source, reads) = ScriptSource::repeating(input);
        let (mut p, _) = prompter(source, plain_config());
        let value = p.ask(PROMPT, Some(&Constraint::IsFile), MAX_TRIES).unwrap();
        assert_eq!(value, Value::Path(file_path));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_constraint_accepts_raw_line() {
        let (source, reads) = ScriptSource::repeating("");
        let (mut p, _) = prompter(source, plain_config());
        let value = p.ask(PROMPT, None, MAX_TRIES).unwrap();
        assert_eq!(value, Value::Str(String::new()));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_silent_suppresses_diagnostics_not_values() {
        let config = OutputConfig {
            silent: true,
            disable_colors: true,
            ..OutputConfig::default()
        };
        let (source, _) = ScriptSource::script(&["a", "7"]);
        let (mut p, capture) = prompter(source, config);
        let value = p.ask(PROMPT, Some(&Constraint::IsInt), MAX_TRIES).unwrap();
        assert_eq!(value, Value::Int(7));
        // Prompts still appear; no warning text does.
        assert!(!capture.contents().contains("WARNING"));
        assert!(!capture.contents().contains("Input is not an integer"));
    }

    #[test]
    fn test_whitespace_line_survives_unmodified() {
        let (source, _) = ScriptSource::repeating("  spaced  ");
        let (mut p, _) = prompter(source, plain_config());
        let value = p.ask(PROMPT, Some(&Constraint::NotEmpty), MAX_TRIES).unwrap();
        assert_eq!(value, Value::Str("  spaced  ".to_string()));
    }

    #[test]
    fn test_crlf_is_stripped() {
        assert_eq!(strip_newline("42\r\n"), "42");
        assert_eq!(strip_newline("42\n"), "42");
        assert_eq!(strip_newline("42"), "42");
        assert_eq!(strip_newline("\n"), "");
    }

    #[test]
    fn test_closed_source_surfaces_read_error() {
        let capture = Capture::default();
        let sink = OutputSink::with_writer(plain_config(), Box::new(capture.clone()));
        let mut p = Prompter::new(ClosedSource, sink);
        let res = p.ask(PROMPT, Some(&Constraint::NotEmpty), RetryLimit::Unlimited);
        assert!(matches!(res, Err(AskError::Read(_))));
    }

    #[test]
    fn test_ask_named_resolves_and_prompts() {
        let (source, reads) = ScriptSource::repeating("17");
        let (mut p, _) = prompter(source, plain_config());
        let value = p
            .ask_named(PROMPT, Some("is_integer_in_range"), &["0", "100"], MAX_TRIES)
            .unwrap();
        assert_eq!(value, Value::Int(17));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ask_named_arity_mismatch_fails_before_reading() {
        let (source, reads) = ScriptSource::repeating("17");
        let (mut p, capture) = prompter(source, plain_config());
        let res = p.ask_named(PROMPT, Some("is_integer_in_range"), &["0"], MAX_TRIES);
        assert!(matches!(res, Err(AskError::InvalidConstraint(_))));
        assert_eq!(reads.load(Ordering::SeqCst), 0);
        assert!(capture.contents().contains("[ERROR]"));
    }

    #[test]
    fn test_ask_named_without_name_warns_and_accepts_raw() {
        let (source, reads) = ScriptSource::repeating("anything");
        let (mut p, capture) = prompter(source, plain_config());
        let value = p.ask_named(PROMPT, None, &[], MAX_TRIES).unwrap();
        assert_eq!(value, Value::Str("anything".to_string()));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
        assert!(capture.contents().contains("No input constraint specified!"));
    }

    #[test]
    fn test_reader_source_reads_lines() {
        let mut source = ReaderSource::new(io::Cursor::new("first\nsecond\n"));
        assert_eq!(source.read_line().unwrap(), "first\n");
        assert_eq!(source.read_line().unwrap(), "second\n");
        assert!(source.read_line().is_err());
    }
}
