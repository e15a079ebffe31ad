//! docsig - Reflows function-signature lines in markdown documentation
//!
//! Lines starting with `function ` are rewritten so that every parameter sits
//! on its own indented line.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod directive;
pub mod discover;
pub mod error;
pub mod format;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use format::DeclarationFormatter;
pub use error::Result;
