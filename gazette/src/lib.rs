//! # gazette
//!
//! Bulletin numbering and publication-calendar calculations for an official
//! gazette.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `gz-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! gazette = "0.1"
//! ```
//!
//! ```rust
//! use gazette::bulletin::bulletin_number;
//! use gazette::time::Date;
//!
//! let d = Date::from_ymd(2021, 1, 7).unwrap();
//! assert_eq!(bulletin_number(d, 0).unwrap(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared aliases.
pub use gz_core as core;

/// `Date`, `Weekday`, and the publication-calendar rules.
pub use gz_time as time;

/// Holidays, extraordinary editions, numbering, and streaks.
pub use gz_bulletin as bulletin;
