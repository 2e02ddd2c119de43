//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

/// Failure classification at the command boundary.
pub mod failure;

pub use args::{Args, Command, GlossaryCommand};
pub use failure::{Failure, FailureKind};
