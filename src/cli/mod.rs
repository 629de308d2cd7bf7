//! Command Line Interface (CLI) layer for FACECROP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the batch orchestration logic (`runner`). It wires user-provided
//! options to the underlying library functionality exposed via
//! `facecrop::api`.
//!
//! If you are embedding FACECROP into another application, prefer using
//! the high-level `facecrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
