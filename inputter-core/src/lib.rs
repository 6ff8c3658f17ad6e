//! # Inputter Core
//!
//! This crate provides a small input validation framework for interactive
//! CLI applications.
//!
//! The main idea is that you attach a **constraint** ([`utils::Constraint`])
//! to a prompt, and the prompt loop re-asks until the user's input satisfies
//! it (or an optional retry budget runs out). Accepted input comes back
//! already coerced to a typed [`utils::Value`].
//!
//! ## Features
//! - Coercion to integers, decimals, and filesystem paths.
//! - Inclusive range validation and a non-empty check.
//! - Bounded or unlimited retries per prompt.
//! - Badged, colorized diagnostics with per-prompter configuration
//!   (silent mode, plain colors, bare messages).
//! - Name-based constraint lookup for dynamically configured hosts.
//!
//! ## Example
//! ```rust,no_run
//! use inputter_core::utils::{Constraint, OutputConfig, Prompter, RetryLimit};
//!
//! let mut prompter = Prompter::stdin(OutputConfig::default());
//! let picked = prompter.ask(
//!     "Pick a number between 1 and 10: ",
//!     Some(&Constraint::IsIntegerInRange(1, 10)),
//!     RetryLimit::Max(5),
//! );
//! match picked {
//!     Ok(value) => println!("You picked: {}", value),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod utils;
