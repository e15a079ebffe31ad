//! Markdown signature formatting.
//!
//! - [`declaration`]: Rewrites `function ...(...)` lines into one parameter per line

pub mod declaration;

pub use declaration::DeclarationFormatter;
