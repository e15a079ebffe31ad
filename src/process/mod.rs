//! File processing pipeline.
//!
//! Every document goes through the same three steps:
//!
//! - Read the whole file as lines, each keeping its own terminator
//! - Map every line through the declaration formatter (skipping
//!   `<!-- docsig: off -->` regions only when directives are enabled)
//! - Overwrite the file (or print it) with the mapped lines, in order
//!
//! The main entry points are [`format_document`] for a single stream and
//! [`run`] for a discovered file set.

pub mod pipeline;

pub use pipeline::{
    format_document, rewrite_file, run, DocumentStats, OutputMode, RunSummary,
};
