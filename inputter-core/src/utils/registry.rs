//! # Constraint Registry
//!
//! Name-based constraint lookup for hosts that configure their prompts
//! dynamically (command lines, config files, scripting). The registry
//! checks a requested constraint before any prompting happens, so a typo'd
//! name or a missing range bound fails fast instead of at first read.
//!
//! Code that can name its [`Constraint`](crate::utils::Constraint) at
//! compile time should construct it directly and skip this module; the
//! type system already guarantees everything checked here.

use crate::utils::constraint::Constraint;
use crate::utils::error::AskError;
use crate::utils::output::OutputSink;

type BuildFn = fn(&[&str]) -> Result<Constraint, String>;

/// One registered constraint: its name, how many extra arguments it takes
/// beyond the raw input line, and how to build it from those arguments.
struct ConstraintSpec {
    name: &'static str,
    arity: usize,
    build: BuildFn,
}

/// Lookup table from constraint names to buildable constraints.
pub struct Registry {
    specs: Vec<ConstraintSpec>,
}

impl Registry {
    /// The registry of built-in constraints:
    /// `is_directory`, `is_file`, `is_int`, `is_float`,
    /// `is_integer_in_range` (two integer bounds), `not_empty`.
    pub fn builtin() -> Self {
        Self {
            specs: vec![
                ConstraintSpec {
                    name: "is_directory",
                    arity: 0,
                    build: |_| Ok(Constraint::IsDirectory),
                },
                ConstraintSpec {
                    name: "is_file",
                    arity: 0,
                    build: |_| Ok(Constraint::IsFile),
                },
                ConstraintSpec {
                    name: "is_int",
                    arity: 0,
                    build: |_| Ok(Constraint::IsInt),
                },
                ConstraintSpec {
                    name: "is_float",
                    arity: 0,
                    build: |_| Ok(Constraint::IsFloat),
                },
                ConstraintSpec {
                    name: "is_integer_in_range",
                    arity: 2,
                    build: |args| {
                        let min = parse_bound(args[0])?;
                        let max = parse_bound(args[1])?;
                        Ok(Constraint::IsIntegerInRange(min, max))
                    },
                },
                ConstraintSpec {
                    name: "not_empty",
                    arity: 0,
                    build: |_| Ok(Constraint::NotEmpty),
                },
            ],
        }
    }

    /// Names of every registered constraint, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.name)
    }

    /// Resolves `name` and `extra_args` into a ready [`Constraint`].
    ///
    /// - `None` name: warns "No input constraint specified!" and resolves
    ///   to `Ok(None)`; the caller prompts unvalidated.
    /// - Unknown name, wrong extra-argument count, or an unparseable bound:
    ///   emits an error diagnostic and fails with
    ///   [`AskError::InvalidConstraint`]. No input is ever read first.
    pub fn resolve(
        &self,
        name: Option<&str>,
        extra_args: &[&str],
        output: &mut OutputSink,
    ) -> Result<Option<Constraint>, AskError> {
        let Some(name) = name else {
            output.warn("No input constraint specified!");
            return Ok(None);
        };

        let Some(spec) = self.specs.iter().find(|spec| spec.name == name) else {
            return Err(reject(format!("Unknown constraint \"{}\"", name), output));
        };

        if extra_args.len() != spec.arity {
            return Err(reject(
                format!(
                    "Constraint \"{}\" expects {} extra argument(s), got {}",
                    name,
                    spec.arity,
                    extra_args.len()
                ),
                output,
            ));
        }

        match (spec.build)(extra_args) {
            Ok(constraint) => Ok(Some(constraint)),
            Err(message) => Err(reject(message, output)),
        }
    }
}

fn reject(message: String, output: &mut OutputSink) -> AskError {
    output.error(&message);
    AskError::InvalidConstraint(message)
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn parse_bound(arg: &str) -> Result<i128, String> {
    arg.parse::<i128>()
        .map_err(|_| format!("Range bound \"{}\" is not an integer", arg))
}
