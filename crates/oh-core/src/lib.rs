//! # oh-core
//!
//! Error definitions and shared macros for openinghours-rs.
//!
//! This crate provides the foundational pieces shared across the other
//! crates in the workspace – the error enum, the `Result` alias, and the
//! `ensure!` convenience macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
