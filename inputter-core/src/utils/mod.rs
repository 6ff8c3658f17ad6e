pub mod constraint;
pub use constraint::{Constraint, Rejection, Value};

pub mod terminal;
pub use terminal::{LineSource, Prompter, ReaderSource, RetryLimit, StdinSource};

pub mod output;
pub use output::{Badge, OutputConfig, OutputSink};

pub mod registry;
pub use registry::Registry;

pub mod error;
pub use error::AskError;
