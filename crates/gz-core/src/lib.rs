//! # gz-core
//!
//! Error types and shared aliases for the gazette workspace.
//!
//! This crate provides the foundational pieces shared across the other
//! crates: the error enum, the `ensure!` / `fail!` macros, and a few
//! domain type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Domain type aliases ───────────────────────────────────────────────────────

/// A Gregorian calendar year.
pub type Year = u16;

/// The ordinal number of a bulletin within its year.
pub type BulletinNumber = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
