//! # eom-core
//!
//! Core types and error definitions for the month-end business day
//! workspace.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates: primitive type aliases and the error hierarchy with its
//! `ensure!` convenience macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed integer used for day offsets and day counts.
pub type Integer = i32;

/// Non-negative integer type (minutes, counts).
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
