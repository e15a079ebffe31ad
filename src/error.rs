//! Error types and result aliases for docsig.
//!
//! Every fallible operation in the crate is file or config I/O, so errors are
//! carried as [`anyhow::Error`] with the offending path attached as context:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
