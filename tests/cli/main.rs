//! CLI integration tests for a11ymate.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (lint, parse, lsp)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations

mod common;
mod lint;
mod parse;

#[cfg(feature = "lsp")]
mod lsp;
