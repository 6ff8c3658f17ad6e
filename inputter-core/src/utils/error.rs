//! Failure kinds for the prompt loop.

use std::io;

use thiserror::Error;

/// Why a prompt loop gave up without an accepted value.
///
/// Retry exhaustion and configuration mistakes are distinct variants, so
/// callers never have to tell them apart by diagnostic text. Per-attempt
/// rejections are not errors; the loop recovers from those by re-prompting.
#[derive(Debug, Error)]
pub enum AskError {
    /// The retry budget ran out before any input was accepted.
    #[error("too many bad inputs after {attempts} attempt(s)")]
    RetriesExhausted { attempts: u32 },

    /// The requested constraint could not be resolved or constructed.
    /// Returned before any console read happens.
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),

    /// The console read failed or the input source reached end of input.
    #[error("could not read input: {0}")]
    Read(#[from] io::Error),
}
