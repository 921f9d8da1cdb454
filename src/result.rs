//! Top-level result type for release-scout.
//!
//! Commands and the binary entry point use `color_eyre` for enhanced error
//! reporting. Pipeline and forge code uses the narrower
//! [`crate::error::Result`] so callers can match on the error taxonomy;
//! those errors convert into eyre reports automatically via `?`.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by commands and `main`.
pub type Result<T> = EyreResult<T>;
