//! # Input Constraints
//!
//! This module provides the validation/coercion constraints applied to raw
//! console input. A [`Constraint`] maps one line of user input to either a
//! typed [`Value`] or a [`Rejection`] carrying a human-readable message
//! describing what went wrong. Constraints never panic on malformed input.
//!
//! ## Features
//! - Filesystem checks with [`Constraint::IsDirectory`] and [`Constraint::IsFile`]
//! - Integer and decimal coercion with [`Constraint::IsInt`] and [`Constraint::IsFloat`]
//! - Inclusive range validation with [`Constraint::IsIntegerInRange`]
//! - Non-empty check with [`Constraint::NotEmpty`]
//!
//! ## When to use
//! Use this module whenever you collect raw user input (e.g. via
//! [`crate::utils::Prompter::ask`]) and need a typed value rather than a
//! bare string.
//!
//! ## Examples
//!
//! ### Coerce to an integer
//! ```rust
//! use inputter_core::utils::{Constraint, Value};
//!
//! assert_eq!(Constraint::IsInt.check("-42"), Ok(Value::Int(-42)));
//! assert!(Constraint::IsInt.check("forty-two").is_err());
//! ```
//!
//! ### Validate a numeric range
//! ```rust
//! use inputter_core::utils::{Constraint, Value};
//!
//! let percent = Constraint::IsIntegerInRange(0, 100);
//! assert_eq!(percent.check("100"), Ok(Value::Int(100)));
//! assert!(percent.check("101").is_err());
//! ```

use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// A validation/coercion constraint applied to one raw input line.
///
/// - `IsDirectory`: accepts only if the input names an existing directory.
/// - `IsFile`: accepts only if the input names an existing regular file.
/// - `IsInt`: accepts base-10 integers, including a leading sign.
/// - `IsFloat`: accepts decimal numbers.
/// - `IsIntegerInRange`: accepts integers within an inclusive `[min, max]` range.
/// - `NotEmpty`: rejects only the empty string; whitespace-only input passes.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    IsDirectory,
    IsFile,
    IsInt,
    IsFloat,
    IsIntegerInRange(i128, i128),
    NotEmpty,
}

/// A value produced by a [`Constraint`] from accepted input.
///
/// The variant depends on the constraint: filesystem checks yield `Path`,
/// numeric checks yield `Int` or `Float`, everything else passes the raw
/// string through as `Str`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i128),
    Float(f64),
    Path(PathBuf),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Why an input line was rejected.
///
/// Each variant describes the failed constraint:
/// - `NotADirectory` / `NotAFile`: the named path does not exist (or is the
///   wrong kind of entry); carries the offending input.
/// - `NotAnInteger` / `NotANumber`: the input could not be parsed.
/// - `OutOfRange`: parsed fine but fell outside the inclusive bounds.
/// - `Empty`: the input was the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NotADirectory(String),
    NotAFile(String),
    NotAnInteger,
    NotANumber,
    OutOfRange(i128, i128),
    Empty,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotADirectory(s) => write!(f, "\"{}\" is not an existing directory", s),
            Self::NotAFile(s) => write!(f, "\"{}\" is not an existing file", s),
            Self::NotAnInteger => write!(f, "Input is not an integer"),
            Self::NotANumber => write!(f, "Input is not a number"),
            Self::OutOfRange(min, max) => write!(f, "Value should be in range {} - {}", min, max),
            Self::Empty => write!(f, "Input can not be empty!"),
        }
    }
}

impl Error for Rejection {}

impl Constraint {
    /// Applies the constraint to one raw input line.
    ///
    /// Returns the coerced [`Value`] on acceptance, or a [`Rejection`]
    /// describing the failure. Filesystem variants consult the filesystem at
    /// call time; everything else is pure.
    pub fn check(&self, input: &str) -> Result<Value, Rejection> {
        match self {
            Constraint::IsDirectory => {
                let path = Path::new(input);
                if path.is_dir() {
                    Ok(Value::Path(path.to_path_buf()))
                } else {
                    Err(Rejection::NotADirectory(input.to_string()))
                }
            }
            Constraint::IsFile => {
                let path = Path::new(input);
                if path.is_file() {
                    Ok(Value::Path(path.to_path_buf()))
                } else {
                    Err(Rejection::NotAFile(input.to_string()))
                }
            }
            Constraint::IsInt => input
                .parse::<i128>()
                .map(Value::Int)
                .map_err(|_| Rejection::NotAnInteger),
            Constraint::IsFloat => input
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Rejection::NotANumber),
            Constraint::IsIntegerInRange(min, max) => {
                let value: i128 = input.parse().map_err(|_| Rejection::NotAnInteger)?;
                if value < *min || value > *max {
                    Err(Rejection::OutOfRange(*min, *max))
                } else {
                    Ok(Value::Int(value))
                }
            }
            Constraint::NotEmpty => {
                if input.is_empty() {
                    Err(Rejection::Empty)
                } else {
                    Ok(Value::Str(input.to_string()))
                }
            }
        }
    }
}
